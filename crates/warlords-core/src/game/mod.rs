pub mod engine;
pub mod moves;
