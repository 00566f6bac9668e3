//! Code for working with [`Position`]s and [`Direction`]s on the Othello board.

use crate::bitboard::Bitboard;
use crate::{EDGE_LENGTH, NUM_SPACES};
use arrayvec::ArrayVec;
use derive_more::{Display, Error};
use std::fmt::{self, Formatter, Write};
use std::ops::Deref;

/// A location on the Othello board, addressed by row and column.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Position {
    row: u8,
    col: u8,
}

/// One of the 8 compass directions a line of discs can run in.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    NorthWest,
    North,
    NorthEast,
    West,
    East,
    SouthWest,
    South,
    SouthEast,
}

/// Row or column outside of `[0, 7]`.
#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
#[display(fmt = "({}, {}) is outside the board", row, col)]
pub struct OutOfRangeError {
    pub row: usize,
    pub col: usize,
}

#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
#[display(fmt = "invalid position string")]
pub struct ParsePositionError;

impl Direction {
    /// All directions, in scan order.
    pub const ALL: [Direction; 8] = [
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
        Direction::West,
        Direction::East,
        Direction::SouthWest,
        Direction::South,
        Direction::SouthEast,
    ];

    /// The (row, column) unit step of this direction.
    #[inline]
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::NorthWest => (-1, -1),
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::West => (0, -1),
            Direction::East => (0, 1),
            Direction::SouthWest => (1, -1),
            Direction::South => (1, 0),
            Direction::SouthEast => (1, 1),
        }
    }
}

impl Position {
    /// Convert from row and column coordinates.
    pub fn from_coords(row: usize, col: usize) -> Result<Self, OutOfRangeError> {
        if row >= EDGE_LENGTH || col >= EDGE_LENGTH {
            return Err(OutOfRangeError { row, col });
        }

        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Convert from a row-major square index (`row * 8 + col`).
    /// Results in an off-board position if `index` is 64 or more.
    #[inline]
    pub fn from_index(index: u8) -> Self {
        debug_assert!((index as usize) < NUM_SPACES);
        Self {
            row: index / EDGE_LENGTH as u8,
            col: index % EDGE_LENGTH as u8,
        }
    }

    /// Convert into a row-major square index.
    #[inline]
    pub fn to_index(self) -> u8 {
        self.row * EDGE_LENGTH as u8 + self.col
    }

    #[inline]
    pub fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Get the row and column coordinates.
    #[inline]
    pub fn to_coords(self) -> (usize, usize) {
        (self.row(), self.col())
    }

    /// Every position on the board in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..NUM_SPACES as u8).map(Self::from_index)
    }

    /// The neighbouring position in `direction`, or None off the edge.
    #[inline]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (d_row, d_col) = direction.delta();
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        let edge = EDGE_LENGTH as i8;

        if (0..edge).contains(&row) && (0..edge).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Walk outward from this position in `direction`, excluding the position itself.
    /// Stops at the edge of the board without wrapping around.
    #[inline]
    pub fn ray(self, direction: Direction) -> Ray {
        Ray {
            next: self.step(direction),
            direction,
        }
    }
}

/// Iterator over the positions along one direction. See [`Position::ray`].
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    next: Option<Position>,
    direction: Direction,
}

impl Iterator for Ray {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        let current = self.next?;
        self.next = current.step(self.direction);
        Some(current)
    }
}

/// Convert this [`Position`] into string notation ("d3").
impl fmt::Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let col_str = "abcdefgh".chars().nth(self.col()).ok_or(fmt::Error)?;
        let row_str = "12345678".chars().nth(self.row()).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

/// Build a [`Position`] from a 1-indexed string notation ("d3").
/// The column letter comes first and must be lowercase.
impl std::str::FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let col_str = chars.next().ok_or(ParsePositionError)?;
        let row_str = chars.next().ok_or(ParsePositionError)?;

        if chars.next().is_some() {
            return Err(ParsePositionError);
        }

        let col = "abcdefgh".find(col_str).ok_or(ParsePositionError)?;
        let row = "12345678".find(row_str).ok_or(ParsePositionError)?;

        Self::from_coords(row, col).map_err(|_| ParsePositionError)
    }
}

/// The legal moves out of a position, in row-major order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MoveList(ArrayVec<Position, NUM_SPACES>);

impl MoveList {
    /// Returns whether `pos` is in this list.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    /// The same locations packed into a [`Bitboard`].
    pub fn to_bitboard(&self) -> Bitboard {
        self.0
            .iter()
            .fold(Bitboard::EMPTY, |mask, &pos| mask | Bitboard::from(pos))
    }
}

impl Deref for MoveList {
    type Target = [Position];

    fn deref(&self) -> &[Position] {
        &self.0
    }
}

impl FromIterator<Position> for MoveList {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for MoveList {
    type Item = Position;
    type IntoIter = arrayvec::IntoIter<Position, NUM_SPACES>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = self
            .iter()
            .map(|mv| mv.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        f.write_fmt(format_args!("[{}]", string))
    }
}
