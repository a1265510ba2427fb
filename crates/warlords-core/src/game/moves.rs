use crate::model::card::{Card, OPENING_CARD};
use crate::model::hand::Hand;
use crate::model::rank::Rank;
use std::collections::HashSet;
use std::fmt;

/// A proposed play: a same-rank card group against the table context `on`.
/// An empty group is a pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    cards: Vec<Card>,
    on: Vec<Card>,
}

impl Move {
    pub fn new(cards: Vec<Card>, on: Vec<Card>) -> Self {
        Self { cards, on }
    }

    pub fn pass(on: Vec<Card>) -> Self {
        Self::new(Vec::new(), on)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The table context this move was proposed against.
    pub fn context(&self) -> &[Card] {
        &self.on
    }

    pub fn count(&self) -> usize {
        self.cards.len()
    }

    pub fn is_pass(&self) -> bool {
        self.cards.is_empty()
    }

    /// The shared rank of the group, or None for a pass or a mixed-rank group.
    pub fn cardinality(&self) -> Option<Rank> {
        let first = self.cards.first()?;
        if self.cards.iter().all(|c| c.rank == first.rank) {
            Some(first.rank)
        } else {
            None
        }
    }

    /// Pure legality predicate. Rule order: a pass is legal except on the
    /// game's forced opening move; the opening move must contain the opening
    /// card; the group must hold exactly one rank; an empty context accepts
    /// any group; a non-empty context demands an equal count and a strictly
    /// higher rank. Suit never participates.
    pub fn is_legal(&self, is_first_move: bool) -> bool {
        if self.is_pass() {
            return !is_first_move;
        }
        if is_first_move && !self.cards.contains(&OPENING_CARD) {
            return false;
        }
        let Some(rank) = self.cardinality() else {
            return false;
        };
        if self.on.is_empty() {
            return true;
        }
        if self.cards.len() != self.on.len() {
            return false;
        }
        match self.on.iter().map(|c| c.rank).max() {
            Some(on_rank) => rank > on_rank,
            None => true,
        }
    }

    /// A move is partial when it spends fewer cards of its rank than the
    /// hand holds, e.g. two jacks out of three.
    pub fn is_partial_for(&self, hand: &Hand) -> bool {
        match self.cardinality() {
            Some(rank) => self.count() < hand.rank_count(rank),
            None => false,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cards.is_empty() {
            return f.write_str("pass");
        }
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

/// Enumerates every distinct legal move for `hand` against `on`, without
/// mutating the hand. With a context only windows of the context's width are
/// swept and the pass fallback comes first; when opening a trick the widths
/// run 4 down to 1 and the pass (if legal) comes last. Moves that repeat an
/// already-seen `(count, rank)` key are suppressed as strategically
/// indistinguishable, and partial moves are deferred behind all full moves.
pub fn legal_moves(hand: &Hand, on: &[Card], is_first_move: bool) -> Vec<Move> {
    let mut moves = Vec::new();
    let mut partials = Vec::new();
    let mut seen: HashSet<(usize, Rank)> = HashSet::new();

    let widths: Vec<usize> = if on.is_empty() {
        vec![4, 3, 2, 1]
    } else {
        vec![on.len()]
    };

    if !on.is_empty() {
        // The unconditional fallback when there is a stack to beat.
        moves.push(Move::pass(on.to_vec()));
    }

    for &width in &widths {
        if width > hand.len() {
            continue;
        }
        for window in hand.cards().windows(width) {
            let mv = Move::new(window.to_vec(), on.to_vec());
            if !mv.is_legal(is_first_move) {
                continue;
            }
            let Some(rank) = mv.cardinality() else {
                continue;
            };
            if !seen.insert((mv.count(), rank)) {
                continue;
            }
            if mv.is_partial_for(hand) {
                partials.push(mv);
            } else {
                moves.push(mv);
            }
        }
    }

    moves.extend(partials);

    if on.is_empty() && !is_first_move {
        moves.push(Move::pass(Vec::new()));
    }

    moves
}

/// A generated move list regrouped for external display and selection:
/// full moves first, then partials, then the pass, with stable indexing.
#[derive(Debug, Clone)]
pub struct MoveMenu {
    full: Vec<Move>,
    partial: Vec<Move>,
    pass: Option<Move>,
}

impl MoveMenu {
    pub fn build(hand: &Hand, moves: Vec<Move>) -> Self {
        let mut full = Vec::new();
        let mut partial = Vec::new();
        let mut pass = None;
        for mv in moves {
            if mv.is_pass() {
                pass = Some(mv);
            } else if mv.is_partial_for(hand) {
                partial.push(mv);
            } else {
                full.push(mv);
            }
        }
        Self {
            full,
            partial,
            pass,
        }
    }

    pub fn full(&self) -> &[Move] {
        &self.full
    }

    pub fn partial(&self) -> &[Move] {
        &self.partial
    }

    pub fn pass(&self) -> Option<&Move> {
        self.pass.as_ref()
    }

    pub fn len(&self) -> usize {
        self.full.len() + self.partial.len() + usize::from(self.pass.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All moves in display order: full, partial, pass.
    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.full
            .iter()
            .chain(self.partial.iter())
            .chain(self.pass.iter())
    }

    /// Non-pass moves in generator order, as tactics consume them.
    pub fn non_pass(&self) -> impl Iterator<Item = &Move> {
        self.full.iter().chain(self.partial.iter())
    }

    pub fn get(&self, index: usize) -> Option<&Move> {
        self.iter().nth(index)
    }

    /// Display index of the first partial move, for a visual separator.
    pub fn first_partial_index(&self) -> Option<usize> {
        if self.partial.is_empty() {
            None
        } else {
            Some(self.full.len())
        }
    }
}
