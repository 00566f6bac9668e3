//! "Perft" performance test: count the number of leaves at a given depth.
//! Useful for checking the move generator against known counts.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::game::Game;

pub fn run_perft(depth: u64) -> u64 {
    leaves_below(Game::default(), depth)
}

fn leaves_below(game: Game, depth: u64) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let all_moves = game.legal_moves();
    if all_moves.is_empty() {
        // Both players passed: game is over
        if game.just_passed {
            return 1;
        }

        return leaves_below(game.pass(), depth - 1);
    }

    all_moves
        .into_iter()
        .map(|pos| leaves_below(game.make_move(pos), depth - 1))
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3), 56);
}

#[test]
fn perft_04() {
    assert_eq!(run_perft(4), 244);
}
