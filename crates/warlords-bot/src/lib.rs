pub mod strategy;
pub mod tactic;

pub use strategy::Strategy;
pub use tactic::{MoveChooser, Tactic, TurnView};
