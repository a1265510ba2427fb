use crate::model::card::Card;
use crate::model::rank::Rank;
use std::vec::Vec;

/// A player's cards, kept sorted by rank then suit so that equal ranks sit
/// adjacently. The legal-move window sweep relies on that adjacency.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn with_cards(cards: Vec<Card>) -> Self {
        let mut hand = Self { cards };
        hand.sort();
        hand
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
        self.sort();
    }

    pub fn remove(&mut self, card: Card) -> bool {
        if let Some(index) = self.cards.iter().position(|&c| c == card) {
            self.cards.remove(index);
            true
        } else {
            false
        }
    }

    pub(crate) fn remove_at(&mut self, index: usize) -> Card {
        self.cards.remove(index)
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn rank_count(&self, rank: Rank) -> usize {
        self.cards.iter().filter(|c| c.rank == rank).count()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    fn sort(&mut self) {
        self.cards
            .sort_by(|a, b| a.rank.cmp(&b.rank).then(a.suit.cmp(&b.suit)));
    }
}

#[cfg(test)]
mod tests {
    use super::Hand;
    use crate::model::card::Card;
    use crate::model::rank::Rank;
    use crate::model::suit::Suit;

    #[test]
    fn add_and_remove_cards() {
        let mut hand = Hand::new();
        let card = Card::new(Rank::Three, Suit::Clubs);
        hand.add(card);
        assert!(hand.contains(card));
        assert!(hand.remove(card));
        assert!(!hand.contains(card));
        assert!(!hand.remove(card));
    }

    #[test]
    fn cards_sort_by_rank_with_two_high() {
        let mut hand = Hand::new();
        hand.add(Card::new(Rank::Two, Suit::Clubs));
        hand.add(Card::new(Rank::Ace, Suit::Spades));
        hand.add(Card::new(Rank::Three, Suit::Hearts));
        let ordered: Vec<_> = hand.iter().copied().collect();
        assert_eq!(ordered[0], Card::new(Rank::Three, Suit::Hearts));
        assert_eq!(ordered[1], Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(ordered[2], Card::new(Rank::Two, Suit::Clubs));
    }

    #[test]
    fn equal_ranks_are_adjacent() {
        let hand = Hand::with_cards(vec![
            Card::new(Rank::Five, Suit::Spades),
            Card::new(Rank::Four, Suit::Hearts),
            Card::new(Rank::Five, Suit::Clubs),
        ]);
        let ranks: Vec<_> = hand.iter().map(|c| c.rank).collect();
        assert_eq!(ranks, vec![Rank::Four, Rank::Five, Rank::Five]);
        assert_eq!(hand.rank_count(Rank::Five), 2);
        assert_eq!(hand.rank_count(Rank::Nine), 0);
    }
}
