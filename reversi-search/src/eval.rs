//! Static evaluation of a board from one player's point of view.
//!
//! The score is the sum of four terms: disc material, corner control, edge
//! control and mobility. All of them are zero on a symmetric board.

use reversi_core::{Bitboard, Board, Player, EDGE_LENGTH};

/// Bonus for each corner held (penalty for each corner the opponent holds).
pub const CORNER_WEIGHT: i32 = 10;

/// Bonus per edge offset held, see [`side_control`].
pub const SIDE_WEIGHT: i32 = 5;

/// The move-count difference is divided by this, truncating toward zero.
pub const MOBILITY_DIVISOR: i32 = 5;

const LAST: usize = EDGE_LENGTH - 1;

/// (0,0), (0,7), (7,0), (7,7).
const CORNERS: [Bitboard; 4] = [
    Bitboard::new(1 << 0),
    Bitboard::new(1 << LAST),
    Bitboard::new(1 << (LAST * EDGE_LENGTH)),
    Bitboard::new(1 << (LAST * EDGE_LENGTH + LAST)),
];

/// For edge offset `i` in 1..=6: the top, left, bottom and right border cells at that offset.
const fn side_mask(i: usize) -> Bitboard {
    let top = 1u64 << i;
    let left = 1u64 << (i * EDGE_LENGTH);
    let bottom = 1u64 << (LAST * EDGE_LENGTH + i);
    let right = 1u64 << (i * EDGE_LENGTH + LAST);
    Bitboard::new(top | left | bottom | right)
}

const SIDES: [Bitboard; 6] = [
    side_mask(1),
    side_mask(2),
    side_mask(3),
    side_mask(4),
    side_mask(5),
    side_mask(6),
];

/// Score `board` for `player`: higher is better for `player`.
pub fn evaluate(board: Board, player: Player) -> i32 {
    material(board, player)
        + corner_control(board, player)
        + side_control(board, player)
        + mobility(board, player)
}

/// # player discs - # opponent discs.
pub fn material(board: Board, player: Player) -> i32 {
    board.pieces(player).count_occupied() as i32 - board.pieces(!player).count_occupied() as i32
}

pub fn corner_control(board: Board, player: Player) -> i32 {
    let active = board.pieces(player);
    let opponent = board.pieces(!player);

    CORNERS
        .iter()
        .map(|&corner| {
            if !(active & corner).is_empty() {
                CORNER_WEIGHT
            } else if !(opponent & corner).is_empty() {
                -CORNER_WEIGHT
            } else {
                0
            }
        })
        .sum()
}

/// Scored once per edge offset, not per cell: an offset counts for `player` if
/// `player` holds any of its four border cells, otherwise against `player` if
/// the opponent holds any of them.
pub fn side_control(board: Board, player: Player) -> i32 {
    let active = board.pieces(player);
    let opponent = board.pieces(!player);

    SIDES
        .iter()
        .map(|&side| {
            if !(active & side).is_empty() {
                SIDE_WEIGHT
            } else if !(opponent & side).is_empty() {
                -SIDE_WEIGHT
            } else {
                0
            }
        })
        .sum()
}

pub fn mobility(board: Board, player: Player) -> i32 {
    let active_moves = board.possible_moves(player).len() as i32;
    let opponent_moves = board.possible_moves(!player).len() as i32;
    (active_moves - opponent_moves) / MOBILITY_DIVISOR
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn opening_is_balanced() {
        let board = Board::initial_position();
        assert_eq!(material(board, Player::White), 0);
        assert_eq!(corner_control(board, Player::White), 0);
        assert_eq!(side_control(board, Player::White), 0);
        assert_eq!(mobility(board, Player::White), 0);
        assert_eq!(evaluate(board, Player::White), 0);
        assert_eq!(evaluate(board, Player::Black), 0);
    }

    #[test]
    fn corners() {
        let b = board(
            "W......B
             ........
             ........
             ........
             ........
             ........
             ........
             W.......",
        );
        assert_eq!(corner_control(b, Player::White), 2 * CORNER_WEIGHT - CORNER_WEIGHT);
        assert_eq!(corner_control(b, Player::Black), CORNER_WEIGHT - 2 * CORNER_WEIGHT);
    }

    #[test]
    fn sides_score_once_per_offset() {
        // Offset 1 has white on the top and left edges: one bonus, not two.
        let b = board(
            ".W......
             W.......
             ........
             ........
             ........
             ........
             ........
             ........",
        );
        assert_eq!(side_control(b, Player::White), SIDE_WEIGHT);
        assert_eq!(side_control(b, Player::Black), -SIDE_WEIGHT);
    }

    #[test]
    fn sides_favor_player_when_shared() {
        // Offset 2: white at top, black at bottom. The player's own hold wins.
        let b = board(
            "..W.....
             ........
             ........
             ........
             ........
             ........
             ........
             ..B.....",
        );
        assert_eq!(side_control(b, Player::White), SIDE_WEIGHT);
        assert_eq!(side_control(b, Player::Black), SIDE_WEIGHT);
    }

    #[test]
    fn corners_are_not_sides() {
        let b = board(
            "W......W
             ........
             ........
             ........
             ........
             ........
             ........
             W......W",
        );
        assert_eq!(side_control(b, Player::White), 0);
        assert_eq!(corner_control(b, Player::White), 4 * CORNER_WEIGHT);
    }

    #[test]
    fn mobility_after_first_move() {
        // Black d3: White can reply at c3, e3, c5 and Black can follow at f5, f6, e6.
        let b = Board::initial_position().apply("d3".parse().unwrap(), Player::Black);
        assert_eq!(b.possible_moves(Player::White).len(), 3);
        assert_eq!(b.possible_moves(Player::Black).len(), 3);
        assert_eq!(mobility(b, Player::White), 0);
    }

    #[test]
    fn mobility_truncates_toward_zero() {
        // White corners with black arms: six white captures, none for black.
        let b = board(
            "WBB.....
             BB......
             B.B.....
             ........
             ........
             .....B.B
             ......BB
             .....BBW",
        );
        assert_eq!(b.possible_moves(Player::White).len(), 6);
        assert_eq!(b.possible_moves(Player::Black).len(), 0);
        assert_eq!(mobility(b, Player::White), 1);
        assert_eq!(mobility(b, Player::Black), -1);
    }

    #[test]
    fn evaluate_is_sum_of_terms() {
        let b = board(
            "WBB.....
             BB......
             B.B.....
             ........
             ........
             ........
             ........
             .......B",
        );
        for player in [Player::White, Player::Black] {
            assert_eq!(
                evaluate(b, player),
                material(b, player)
                    + corner_control(b, player)
                    + side_control(b, player)
                    + mobility(b, player)
            );
        }
        assert_eq!(material(b, Player::White), 1 - 7);
    }
}
