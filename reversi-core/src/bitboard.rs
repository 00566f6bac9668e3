//! Low-level bitboard operations.
//!
//! A [`Bitboard`] stores one bit per location on the board. Bit `row * 8 + col`
//! holds the location at `(row, col)`, so the LSB is the upper-left corner ("a1")
//! and bits proceed in row-major order.

use crate::location::{OutOfRangeError, Position};
use crate::{utils, NUM_SPACES};
use derive_more::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, From, Into, Not,
};
use std::fmt::{self, Display, Formatter};

/// Holds a single bit per location on an Othello board.
/// Wraps [`u64`] for efficient bit-twiddling, but avoids mixing with numerics.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    Default,
    From,
    Into,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    BitXor,
    BitXorAssign,
    Not,
)]
pub struct Bitboard(u64);

/// Starting bitboard for White: (3, 3) and (4, 4).
pub const WHITE_START: Bitboard = Bitboard(0x0000_0010_0800_0000);

/// Starting bitboard for Black: (3, 4) and (4, 3).
pub const BLACK_START: Bitboard = Bitboard(0x0000_0008_1000_0000);

impl Display for Bitboard {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        utils::format_grid(
            self.into_iter().map(|bit| match bit {
                false => '.',
                true => '#',
            }),
            f,
        )
    }
}

impl From<Position> for Bitboard {
    #[inline]
    fn from(pos: Position) -> Self {
        Self(1 << pos.to_index())
    }
}

impl Bitboard {
    /// A bitboard with no locations set.
    pub const EMPTY: Self = Self(0);

    /// Wrap raw bits.
    #[inline]
    pub const fn new(bits: u64) -> Self {
        Self(bits)
    }

    /// Get the raw bits.
    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Set or clear the bit at `(row, col)`.
    /// Fails if either coordinate is outside `[0, 7]`.
    pub fn set_cell(self, row: usize, col: usize, value: bool) -> Result<Self, OutOfRangeError> {
        let pos = Position::from_coords(row, col)?;
        Ok(self.with(pos, value))
    }

    /// Set or clear the bit at an already-validated [`Position`].
    #[inline]
    pub fn with(self, pos: Position, value: bool) -> Self {
        let mask = Self::from(pos);
        if value {
            self | mask
        } else {
            self & !mask
        }
    }

    /// Returns whether `pos` is set in this bitboard.
    #[inline]
    pub fn contains(self, pos: Position) -> bool {
        !(self & Self::from(pos)).is_empty()
    }

    /// Count the number of occupied spaces in the bitboard.
    #[inline]
    pub fn count_occupied(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Count the number of empty spaces in the bitboard.
    #[inline]
    pub fn count_empty(self) -> u8 {
        self.0.count_zeros() as u8
    }

    /// Return true if this bitboard is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate the set locations in row-major order.
    pub fn positions(self) -> impl Iterator<Item = Position> {
        Position::all().filter(move |&pos| self.contains(pos))
    }
}

/// Iterator for the bits in a [`Bitboard`].
#[derive(Clone, Copy, Debug)]
pub struct Bits {
    index: usize,
    bitboard: Bitboard,
}

impl Iterator for Bits {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= NUM_SPACES {
            return None;
        }

        let bit = self.bitboard.0 & (1u64 << self.index) != 0;
        self.index += 1;

        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = NUM_SPACES - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Bits {}

/// Iterate over the bits in row-major order.
impl IntoIterator for Bitboard {
    type Item = bool;
    type IntoIter = Bits;

    fn into_iter(self) -> Self::IntoIter {
        Bits {
            index: 0,
            bitboard: self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_cell_sets_and_clears() {
        let bitboard = Bitboard::EMPTY.set_cell(0, 0, true).unwrap();
        assert_eq!(bitboard, Bitboard(1));

        let bitboard = bitboard.set_cell(7, 7, true).unwrap();
        assert_eq!(bitboard, Bitboard(1 | 1 << 63));

        let bitboard = bitboard.set_cell(0, 0, false).unwrap();
        assert_eq!(bitboard, Bitboard(1 << 63));
    }

    #[test]
    fn set_cell_uses_row_major_index() {
        let bitboard = Bitboard::EMPTY.set_cell(2, 5, true).unwrap();
        assert_eq!(bitboard.bits(), 1 << (2 * 8 + 5));
    }

    #[test]
    fn set_cell_out_of_range() {
        assert_eq!(
            Bitboard::EMPTY.set_cell(8, 0, true),
            Err(OutOfRangeError { row: 8, col: 0 })
        );
        assert_eq!(
            Bitboard::EMPTY.set_cell(0, 8, false),
            Err(OutOfRangeError { row: 0, col: 8 })
        );
    }

    #[test]
    fn starting_bitboards() {
        let white = Bitboard::EMPTY
            .set_cell(3, 3, true)
            .and_then(|b| b.set_cell(4, 4, true))
            .unwrap();
        let black = Bitboard::EMPTY
            .set_cell(3, 4, true)
            .and_then(|b| b.set_cell(4, 3, true))
            .unwrap();

        assert_eq!(white, WHITE_START);
        assert_eq!(black, BLACK_START);
        assert!((WHITE_START & BLACK_START).is_empty());
    }

    #[test]
    fn counts() {
        assert_eq!(WHITE_START.count_occupied(), 2);
        assert_eq!(WHITE_START.count_empty(), 62);
        assert!(Bitboard::EMPTY.is_empty());
    }

    #[test]
    fn bits_are_row_major() {
        let bits: Vec<bool> = Bitboard(0b101).into_iter().collect();
        assert_eq!(bits.len(), 64);
        assert_eq!(&bits[..4], &[true, false, true, false]);
    }

    #[test]
    fn positions_iterates_set_cells() {
        let coords: Vec<(usize, usize)> = (WHITE_START | BLACK_START)
            .positions()
            .map(Position::to_coords)
            .collect();
        assert_eq!(coords, vec![(3, 3), (3, 4), (4, 3), (4, 4)]);
    }
}
