//! `reversi-core` implements the rules of Othello (Reversi) over a pair of bitboards.
//!
//! This package implements three levels of abstraction:
//!
//!  - [`bitboard`] contains the raw [`Bitboard`] set type and its cell accessors.
//!  - [`Board`] implements the core rules: legality, disc flipping and move generation.
//!    [`Board::apply`] is unchecked and may leave an inconsistent board if its
//!    precondition is not met, which keeps it cheap enough for search.
//!  - [`Game`] tracks the side to move and passes, and checks every move it applies.
//!
//! Rule functions are also exported through a C FFI in [`ffi`].

pub mod bitboard;
pub mod ffi;
pub mod test_utils;

mod board;
mod game;
mod location;
mod utils;

pub use bitboard::Bitboard;
pub use board::*;
pub use game::*;
pub use location::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;
