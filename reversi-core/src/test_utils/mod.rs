//! Utilities used for testing and benchmarking.

pub mod perft;
pub use perft::run_perft;

mod playout;
pub use playout::{random_game, random_positions};
