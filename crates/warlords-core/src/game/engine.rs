use crate::game::moves::{Move, legal_moves};
use crate::model::card::{Card, OPENING_CARD};
use crate::model::deck::Deck;
use crate::model::hand::Hand;
use crate::model::player::Player;
use thiserror::Error;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 52;

/// The turn state machine. Callers alternate `begin_turn` (which applies the
/// clear-the-stack rule and enumerates legal moves) and `play` (which
/// re-validates and applies exactly one move).
#[derive(Debug, Clone)]
pub struct GameState {
    players: Vec<Player>,
    active: usize,
    table: Vec<Card>,
    last_to_play: Option<usize>,
    winner: Option<usize>,
}

/// Everything the active seat needs to choose a move.
#[derive(Debug, Clone)]
pub struct TurnStart {
    pub seat: usize,
    pub table: Vec<Card>,
    pub moves: Vec<Move>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    Played { seat: usize },
    Passed { seat: usize },
    Won { seat: usize },
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("player count {0} is outside the supported range ({MIN_PLAYERS}-{MAX_PLAYERS})")]
    InvalidPlayerCount(usize),
    #[error("illegal move: {0}")]
    IllegalMove(Move),
    #[error("seat {seat} does not hold {card}")]
    CardNotInHand { seat: usize, card: Card },
    #[error("seat {seat} has no legal moves; move generation is inconsistent")]
    NoLegalMoves { seat: usize },
    #[error("the game is already over")]
    GameFinished,
}

impl GameState {
    /// Deals the whole deck round-robin (hands may be uneven when the player
    /// count does not divide 52) and hands the opening turn to the holder of
    /// the opening card.
    pub fn new(deck: Deck, num_players: usize) -> Result<Self, EngineError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players) {
            return Err(EngineError::InvalidPlayerCount(num_players));
        }

        let mut players: Vec<Player> = (1..=num_players).map(Player::new).collect();
        for (index, card) in deck.into_cards().into_iter().enumerate() {
            players[index % num_players].hand_mut().add(card);
        }

        let opener = players
            .iter()
            .position(|p| p.hand().contains(OPENING_CARD))
            .unwrap_or(0);
        players[opener].set_must_open();

        Ok(Self {
            players,
            active: opener,
            table: Vec::new(),
            last_to_play: None,
            winner: None,
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn hand(&self, seat: usize) -> &Hand {
        self.players[seat].hand()
    }

    pub fn active_seat(&self) -> usize {
        self.active
    }

    pub fn table(&self) -> &[Card] {
        &self.table
    }

    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    /// Opens the active seat's turn. When play has come back around to the
    /// last non-passing player the stack clears before moves are computed.
    /// An empty legal-move list is a generator defect, not a game state.
    pub fn begin_turn(&mut self) -> Result<TurnStart, EngineError> {
        if self.winner.is_some() {
            return Err(EngineError::GameFinished);
        }

        let seat = self.active;
        if self.last_to_play == Some(seat) {
            self.table.clear();
        }

        let player = &self.players[seat];
        let moves = legal_moves(player.hand(), &self.table, player.must_open());
        if moves.is_empty() {
            return Err(EngineError::NoLegalMoves { seat });
        }

        Ok(TurnStart {
            seat,
            table: self.table.clone(),
            moves,
        })
    }

    /// Applies a move for the active seat. The move is re-validated even if
    /// it came from the generator: tactics are never trusted blindly.
    pub fn play(&mut self, mv: Move) -> Result<TurnOutcome, EngineError> {
        if self.winner.is_some() {
            return Err(EngineError::GameFinished);
        }

        let seat = self.active;
        if mv.context() != self.table.as_slice() || !mv.is_legal(self.players[seat].must_open()) {
            return Err(EngineError::IllegalMove(mv));
        }

        // Match every card to a distinct hand position so a duplicated token
        // cannot remove the wrong physical card.
        let hand = self.players[seat].hand();
        let mut indices: Vec<usize> = Vec::with_capacity(mv.count());
        for &card in mv.cards() {
            let slot = hand
                .cards()
                .iter()
                .enumerate()
                .find(|&(i, &c)| c == card && !indices.contains(&i))
                .map(|(i, _)| i);
            match slot {
                Some(i) => indices.push(i),
                None => return Err(EngineError::CardNotInHand { seat, card }),
            }
        }

        indices.sort_unstable();
        let hand = self.players[seat].hand_mut();
        for &index in indices.iter().rev() {
            hand.remove_at(index);
        }

        let passed = mv.is_pass();
        if !passed {
            self.table = mv.cards().to_vec();
            self.last_to_play = Some(seat);
            self.players[seat].clear_must_open();
        }

        if self.players[seat].hand().is_empty() {
            self.winner = Some(seat);
            return Ok(TurnOutcome::Won { seat });
        }

        self.active = (self.active + 1) % self.players.len();
        Ok(if passed {
            TurnOutcome::Passed { seat }
        } else {
            TurnOutcome::Played { seat }
        })
    }
}
