//! Seeded random games, used to reach varied positions in property tests.

use crate::board::Board;
use crate::game::{Game, Move, Player};
use rand::seq::SliceRandom;
use rand::Rng;

/// Play uniformly random legal moves from the start until the game ends.
/// Returns every state visited, starting position included.
pub fn random_game<R: Rng>(rng: &mut R) -> Vec<Game> {
    let mut game = Game::default();
    let mut states = vec![game];

    while !game.is_finished() {
        let mv = match game.legal_moves().choose(rng) {
            Some(&pos) => Move::Piece(pos),
            None => Move::Pass,
        };

        // Only legal moves are chosen above.
        game = match mv {
            Move::Piece(pos) => game.make_move(pos),
            Move::Pass => game.pass(),
        };
        states.push(game);
    }

    states
}

/// Sample up to `count` (board, side to move) pairs from random games.
/// Every board is reachable from the starting position.
pub fn random_positions<R: Rng>(rng: &mut R, count: usize) -> Vec<(Board, Player)> {
    let mut positions = Vec::with_capacity(count);

    while positions.len() < count {
        let states = random_game(rng);
        let game = states[rng.gen_range(0..states.len())];
        positions.push((game.board, game.active_player));
    }

    positions
}
