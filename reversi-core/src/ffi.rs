//! C bindings for the board rules.
//!
//! Boards cross the boundary as raw `(white, black)` masks and players as
//! `0` (black) or `1` (white). Out-of-range coordinates and unknown player
//! codes never panic: they are reported as illegal, [`ffi_move_mask`] returns
//! an empty mask, and [`ffi_apply_move`] hands the masks back unchanged.

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::game::Player;
use crate::location::Position;

#[repr(C)]
pub struct ApplyMoveResult {
    pub new_white_mask: u64,
    pub new_black_mask: u64,
}

fn player_from_code(code: u8) -> Option<Player> {
    match code {
        0 => Some(Player::Black),
        1 => Some(Player::White),
        _ => None,
    }
}

fn decode_move(row: u8, col: u8, player: u8) -> Option<(Position, Player)> {
    let pos = Position::from_coords(row as usize, col as usize).ok()?;
    Some((pos, player_from_code(player)?))
}

fn board_from_masks(white_mask: u64, black_mask: u64) -> Board {
    Board {
        white: Bitboard::from(white_mask),
        black: Bitboard::from(black_mask),
    }
}

#[no_mangle]
pub extern "C" fn ffi_move_mask(white_mask: u64, black_mask: u64, player: u8) -> u64 {
    match player_from_code(player) {
        Some(player) => board_from_masks(white_mask, black_mask)
            .possible_moves(player)
            .to_bitboard()
            .bits(),
        None => 0,
    }
}

#[no_mangle]
pub extern "C" fn ffi_is_legal(
    white_mask: u64,
    black_mask: u64,
    row: u8,
    col: u8,
    player: u8,
) -> bool {
    match decode_move(row, col, player) {
        Some((pos, player)) => board_from_masks(white_mask, black_mask).is_legal(pos, player),
        None => false,
    }
}

/// Apply a move, which must already be known to be legal.
#[no_mangle]
pub extern "C" fn ffi_apply_move(
    white_mask: u64,
    black_mask: u64,
    row: u8,
    col: u8,
    player: u8,
) -> ApplyMoveResult {
    let board = board_from_masks(white_mask, black_mask);
    let board = match decode_move(row, col, player) {
        Some((pos, player)) => board.apply(pos, player),
        None => board,
    };

    ApplyMoveResult {
        new_white_mask: board.white.bits(),
        new_black_mask: board.black.bits(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitboard::{BLACK_START, WHITE_START};

    #[test]
    fn move_mask_matches_generator() {
        let mask = ffi_move_mask(WHITE_START.bits(), BLACK_START.bits(), 0);
        let expected = Board::initial_position()
            .possible_moves(Player::Black)
            .to_bitboard();
        assert_eq!(mask, expected.bits());
        assert_eq!(mask.count_ones(), 4);
    }

    #[test]
    fn is_legal_out_of_range() {
        assert!(ffi_is_legal(WHITE_START.bits(), BLACK_START.bits(), 2, 3, 0));
        assert!(!ffi_is_legal(WHITE_START.bits(), BLACK_START.bits(), 9, 3, 0));
    }

    #[test]
    fn apply_move_flips() {
        let result = ffi_apply_move(WHITE_START.bits(), BLACK_START.bits(), 2, 4, 1);
        assert_eq!(result.new_white_mask.count_ones(), 4);
        assert_eq!(result.new_black_mask.count_ones(), 1);

        let unchanged = ffi_apply_move(WHITE_START.bits(), BLACK_START.bits(), 8, 8, 1);
        assert_eq!(unchanged.new_white_mask, WHITE_START.bits());
        assert_eq!(unchanged.new_black_mask, BLACK_START.bits());
    }

    #[test]
    fn unknown_player_code_is_rejected() {
        for code in [2, 7, 255] {
            assert_eq!(ffi_move_mask(WHITE_START.bits(), BLACK_START.bits(), code), 0);
            assert!(!ffi_is_legal(WHITE_START.bits(), BLACK_START.bits(), 2, 3, code));

            let unchanged = ffi_apply_move(WHITE_START.bits(), BLACK_START.bits(), 2, 3, code);
            assert_eq!(unchanged.new_white_mask, WHITE_START.bits());
            assert_eq!(unchanged.new_black_mask, BLACK_START.bits());
        }
    }
}
