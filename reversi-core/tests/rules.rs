//! Rule invariants checked over many random games.

use indicatif::ProgressIterator;
use rand::rngs::StdRng;
use rand::SeedableRng;
use reversi_core::test_utils::{random_game, random_positions};
use reversi_core::{Board, Game, Player, Position};

const SEEDS: [u64; 8] = [1, 2, 3, 5, 8, 13, 21, 34];

#[test]
fn colors_never_overlap() {
    for seed in SEEDS.iter().progress() {
        let mut rng = StdRng::seed_from_u64(*seed);
        for game in random_game(&mut rng) {
            assert!((game.board.white & game.board.black).is_empty());
        }
    }
}

#[test]
fn flip_counts_add_up() {
    for seed in SEEDS.iter().progress() {
        let mut rng = StdRng::seed_from_u64(*seed);
        let states = random_game(&mut rng);

        for pair in states.windows(2) {
            let (before, after) = (pair[0], pair[1]);
            if after.just_passed {
                assert_eq!(before.board, after.board);
                continue;
            }

            let mover = before.active_player;
            let placed = (after.board.occupied_mask() & before.board.empty_mask())
                .positions()
                .collect::<Vec<Position>>();
            assert_eq!(placed.len(), 1);

            let flipped = before.board.flips(placed[0], mover).count_occupied();
            assert!(flipped >= 1);

            let mover_before = before.board.pieces(mover).count_occupied();
            let mover_after = after.board.pieces(mover).count_occupied();
            let opponent_before = before.board.pieces(!mover).count_occupied();
            let opponent_after = after.board.pieces(!mover).count_occupied();

            assert_eq!(mover_after, mover_before + 1 + flipped);
            assert_eq!(opponent_after, opponent_before - flipped);
            assert_eq!(after.board.count_empty(), before.board.count_empty() - 1);
        }
    }
}

#[test]
fn has_any_move_agrees_with_generator() {
    let mut rng = StdRng::seed_from_u64(99);
    for (board, _) in random_positions(&mut rng, 200).iter().progress() {
        for player in [Player::Black, Player::White] {
            assert_eq!(
                board.has_any_move(player),
                !board.possible_moves(player).is_empty()
            );
        }
    }
}

#[test]
fn generated_moves_are_legal_and_ordered() {
    let mut rng = StdRng::seed_from_u64(4);
    for (board, player) in random_positions(&mut rng, 100) {
        let moves = board.possible_moves(player);
        for pos in moves.iter() {
            assert!(board.is_legal(*pos, player));
            assert!(!board.flips(*pos, player).is_empty());
        }
        assert!(moves.windows(2).all(|w| w[0].to_index() < w[1].to_index()));

        let expected = Position::all()
            .filter(|&pos| board.is_legal(pos, player))
            .count();
        assert_eq!(moves.len(), expected);
    }
}

#[test]
fn finished_games_have_no_moves() {
    for seed in SEEDS.iter() {
        let mut rng = StdRng::seed_from_u64(*seed);
        let last: Game = *random_game(&mut rng).last().unwrap();
        let board: Board = last.board;

        assert!(last.is_finished());
        assert!(!board.has_any_move(Player::Black));
        assert!(!board.has_any_move(Player::White));
    }
}
