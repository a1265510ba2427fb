use crate::model::rank::Rank;
use crate::model::suit::Suit;
use core::fmt;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

/// Whoever is dealt this card must open the game with a group containing it.
pub const OPENING_CARD: Card = Card::new(Rank::Three, Suit::Clubs);

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CardParseError {
    #[error("empty card token")]
    Empty,
    #[error("unknown rank symbol '{0}'")]
    UnknownRank(String),
    #[error("unknown suit symbol '{0}'")]
    UnknownSuit(char),
}

impl FromStr for Card {
    type Err = CardParseError;

    /// Parses a rank-then-suit token such as `3C`, `10d` or `JS`.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut chars = token.trim().chars();
        let suit_symbol = chars.next_back().ok_or(CardParseError::Empty)?;
        let suit =
            Suit::from_symbol(suit_symbol).ok_or(CardParseError::UnknownSuit(suit_symbol))?;
        let rank_part = chars.as_str();
        let rank = Rank::from_symbol(&rank_part.to_ascii_uppercase())
            .ok_or_else(|| CardParseError::UnknownRank(rank_part.to_string()))?;
        Ok(Card::new(rank, suit))
    }
}
