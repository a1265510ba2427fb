use core::fmt;
use serde::{Deserialize, Serialize};

/// Suit order is a display/sort tie-breaker only; legality never consults it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    Hearts = 1,
    Diamonds = 2,
    Clubs = 3,
    Spades = 4,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'H' | 'h' => Some(Suit::Hearts),
            'D' | 'd' => Some(Suit::Diamonds),
            'C' | 'c' => Some(Suit::Clubs),
            'S' | 's' => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        };
        f.write_str(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::Suit;

    #[test]
    fn display_returns_pips() {
        assert_eq!(Suit::Clubs.to_string(), "♣");
        assert_eq!(Suit::Hearts.to_string(), "♥");
    }

    #[test]
    fn from_symbol_accepts_either_case() {
        assert_eq!(Suit::from_symbol('S'), Some(Suit::Spades));
        assert_eq!(Suit::from_symbol('d'), Some(Suit::Diamonds));
        assert_eq!(Suit::from_symbol('x'), None);
    }
}
