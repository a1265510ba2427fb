use crate::model::hand::Hand;
use core::fmt;

#[derive(Debug, Clone)]
pub struct Player {
    id: usize,
    hand: Hand,
    must_open: bool,
}

impl Player {
    pub(crate) fn new(id: usize) -> Self {
        Self {
            id,
            hand: Hand::new(),
            must_open: false,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub(crate) fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// True only for the opening-card holder, and only until their first play.
    pub fn must_open(&self) -> bool {
        self.must_open
    }

    pub(crate) fn set_must_open(&mut self) {
        self.must_open = true;
    }

    pub(crate) fn clear_must_open(&mut self) {
        self.must_open = false;
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {} ({})", self.id, self.hand.len())
    }
}
