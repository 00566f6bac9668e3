//! Move selection for the computer player.
//!
//! [`search`] is a plain minimax with alpha-beta cutoffs, cut off at a fixed
//! depth and scored with the static heuristic in [`eval`].

pub mod eval;
pub mod search;

pub use eval::evaluate;
pub use search::{minimax, search, SearchResult};

use reversi_core::{Board, Player, Position};
use tracing::debug;

/// Default ply limit for the computer player.
pub const MAX_DEPTH: u8 = 10;

/// Choose a move for `player` by searching `depth` plies ahead.
/// Returns None when `player` has no legal move (or `depth` is 0).
pub fn choose_move(board: Board, player: Player, depth: u8) -> Option<Position> {
    let result = search(board, player, depth, true, i32::MIN, i32::MAX);

    debug!(
        %player,
        depth,
        score = result.score,
        nodes = result.nodes,
        best_move = ?result.best_move.map(|pos| pos.to_string()),
        "search finished"
    );

    result.best_move
}
