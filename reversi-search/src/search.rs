//! Minimax search with alpha-beta pruning.

use crate::eval::evaluate;
use reversi_core::{Board, Player, Position};

/// The outcome of a search from one node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    /// None at a leaf: the depth ran out or the side to move had no legal move.
    pub best_move: Option<Position>,
    /// Nodes visited, this one included.
    pub nodes: u64,
}

impl SearchResult {
    fn leaf(score: i32) -> Self {
        Self {
            score,
            best_move: None,
            nodes: 1,
        }
    }
}

/// Search `depth` plies ahead with `player` to move.
///
/// Leaves are scored with [`evaluate`] from the point of view of the side to
/// move at that leaf. Candidates are tried in generator order and the best move
/// only changes on a strict improvement, so ties go to the first move found.
/// Call with `alpha = i32::MIN` and `beta = i32::MAX` for a full window.
pub fn search(
    board: Board,
    player: Player,
    depth: u8,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
) -> SearchResult {
    if depth == 0 || !board.has_any_move(player) {
        return SearchResult::leaf(evaluate(board, player));
    }

    let mut best = SearchResult {
        score: if maximizing { i32::MIN } else { i32::MAX },
        best_move: None,
        nodes: 1,
    };

    for pos in board.possible_moves(player) {
        let child = search(
            board.apply(pos, player),
            !player,
            depth - 1,
            !maximizing,
            alpha,
            beta,
        );
        best.nodes += child.nodes;

        if maximizing {
            if child.score > best.score {
                best.score = child.score;
                best.best_move = Some(pos);
            }
            alpha = alpha.max(child.score);
        } else {
            if child.score < best.score {
                best.score = child.score;
                best.best_move = Some(pos);
            }
            beta = beta.min(child.score);
        }

        // Cut-off: the other side will never let play reach this node.
        if beta <= alpha {
            break;
        }
    }

    best
}

/// The same tree as [`search`], visited in full without pruning.
/// Much slower; used to check that pruning never changes the result.
pub fn minimax(board: Board, player: Player, depth: u8, maximizing: bool) -> SearchResult {
    if depth == 0 || !board.has_any_move(player) {
        return SearchResult::leaf(evaluate(board, player));
    }

    let mut best = SearchResult {
        score: if maximizing { i32::MIN } else { i32::MAX },
        best_move: None,
        nodes: 1,
    };

    for pos in board.possible_moves(player) {
        let child = minimax(board.apply(pos, player), !player, depth - 1, !maximizing);
        best.nodes += child.nodes;

        let improved = if maximizing {
            child.score > best.score
        } else {
            child.score < best.score
        };
        if improved {
            best.score = child.score;
            best.best_move = Some(pos);
        }
    }

    best
}
