//! Board-level Othello rules: legality, disc flipping and move generation.
//!
//! A [`Board`] is a plain value. Every rule function takes it by copy and
//! returns a new board, so callers never need to undo a move.

use crate::bitboard::{Bitboard, BLACK_START, WHITE_START};
use crate::game::Player;
use crate::location::{Direction, MoveList, Position};
use crate::{utils, NUM_SPACES};
use derive_more::{Display, Error};
use std::fmt;

/// A pair of bitboards storing the complete disc layout, one per color.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Board {
    pub white: Bitboard,
    pub black: Bitboard,
}

/// Both colors claim at least one location.
#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
#[display(fmt = "white and black masks overlap")]
pub struct OverlapError;

#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
pub enum ParseBoardError {
    #[display(fmt = "board strings may only contain W, B, '.' or '-'")]
    InvalidCharacter,
    #[display(fmt = "a board needs exactly 64 cells")]
    WrongLength,
}

impl Default for Board {
    /// Gets the starting board.
    fn default() -> Self {
        Self::initial_position()
    }
}

impl Board {
    /// The four centre discs of a new game.
    pub const fn initial_position() -> Self {
        Self {
            white: WHITE_START,
            black: BLACK_START,
        }
    }

    /// Build a board from color masks, rejecting masks that overlap.
    pub fn from_masks(white: Bitboard, black: Bitboard) -> Result<Self, OverlapError> {
        if !(white & black).is_empty() {
            return Err(OverlapError);
        }
        Ok(Self { white, black })
    }

    /// The discs belonging to `player`.
    #[inline]
    pub fn pieces(self, player: Player) -> Bitboard {
        match player {
            Player::White => self.white,
            Player::Black => self.black,
        }
    }

    /// Split into (`player`'s discs, opponent's discs).
    #[inline]
    fn split(self, player: Player) -> (Bitboard, Bitboard) {
        (self.pieces(player), self.pieces(!player))
    }

    /// Inverse of [`Board::split`].
    #[inline]
    fn join(player: Player, active: Bitboard, opponent: Bitboard) -> Self {
        match player {
            Player::White => Self {
                white: active,
                black: opponent,
            },
            Player::Black => Self {
                white: opponent,
                black: active,
            },
        }
    }

    /// Get a mask indicating where the occupied spaces are.
    #[inline]
    pub fn occupied_mask(self) -> Bitboard {
        self.white | self.black
    }

    /// Get a mask indicating where the empty spaces are.
    #[inline]
    pub fn empty_mask(self) -> Bitboard {
        !self.occupied_mask()
    }

    #[inline]
    pub fn count_empty(self) -> u8 {
        self.occupied_mask().count_empty()
    }

    /// Disc counts as (white, black).
    #[inline]
    pub fn score(self) -> (u8, u8) {
        (self.white.count_occupied(), self.black.count_occupied())
    }

    /// Returns whether `player` may place a disc at `pos`.
    ///
    /// The location must be empty, and at least one direction must hold a run of
    /// opponent discs closed off by one of `player`'s discs.
    pub fn is_legal(self, pos: Position, player: Player) -> bool {
        if !self.empty_mask().contains(pos) {
            return false;
        }

        let (active, opponent) = self.split(player);
        Direction::ALL
            .iter()
            .any(|&direction| capture_run(active, opponent, pos, direction).is_some())
    }

    /// The opponent discs that placing at `pos` would turn over.
    pub fn flips(self, pos: Position, player: Player) -> Bitboard {
        let (active, opponent) = self.split(player);
        Direction::ALL
            .iter()
            .filter_map(|&direction| capture_run(active, opponent, pos, direction))
            .fold(Bitboard::EMPTY, |flipped, run| flipped | run)
    }

    /// Place a disc for `player` at `pos` and flip every captured run.
    ///
    /// The move is not re-validated: `pos` must satisfy [`Board::is_legal`].
    /// Otherwise the disc is still placed, and the board may become inconsistent
    /// if the location was already occupied.
    #[inline]
    pub fn apply(self, pos: Position, player: Player) -> Self {
        let (active, opponent) = self.split(player);
        let flipped = self.flips(pos, player);

        Self::join(
            player,
            active | flipped | Bitboard::from(pos),
            opponent & !flipped,
        )
    }

    /// All legal placements for `player`, in row-major order.
    pub fn possible_moves(self, player: Player) -> MoveList {
        Position::all()
            .filter(|&pos| self.is_legal(pos, player))
            .collect()
    }

    /// Returns whether `player` has any legal placement. Stops at the first one found.
    pub fn has_any_move(self, player: Player) -> bool {
        Position::all().any(|pos| self.is_legal(pos, player))
    }
}

/// Scan outward from `origin` and return the opponent run that `direction` captures, if any.
/// The run must be non-empty and end on one of the active player's discs.
fn capture_run(
    active: Bitboard,
    opponent: Bitboard,
    origin: Position,
    direction: Direction,
) -> Option<Bitboard> {
    let mut run = Bitboard::EMPTY;

    for pos in origin.ray(direction) {
        if opponent.contains(pos) {
            run |= Bitboard::from(pos);
        } else if active.contains(pos) {
            return if run.is_empty() { None } else { Some(run) };
        } else {
            return None;
        }
    }

    // Walked off the board.
    None
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let white_bits = self.white.into_iter();
        let black_bits = self.black.into_iter();

        utils::format_grid(
            white_bits.zip(black_bits).map(|bits| match bits {
                (false, false) => '.',
                (true, false) => 'W',
                (false, true) => 'B',
                (true, true) => '!',
            }),
            f,
        )
    }
}

/// Parse a board from 64 cells in row-major order.
/// `W`/`w` is white, `B`/`b` is black, and `.` or `-` is empty. Whitespace is ignored.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut white = Bitboard::EMPTY;
        let mut black = Bitboard::EMPTY;
        let mut index = 0;

        for c in s.chars().filter(|c| !c.is_whitespace()) {
            if index >= NUM_SPACES {
                return Err(ParseBoardError::WrongLength);
            }

            let pos = Position::from_index(index as u8);
            match c {
                'W' | 'w' => white = white.with(pos, true),
                'B' | 'b' => black = black.with(pos, true),
                '.' | '-' => {}
                _ => return Err(ParseBoardError::InvalidCharacter),
            }
            index += 1;
        }

        if index != NUM_SPACES {
            return Err(ParseBoardError::WrongLength);
        }

        Ok(Self { white, black })
    }
}
