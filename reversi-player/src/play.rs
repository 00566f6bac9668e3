//! The turn loop: ask the seated player for a move, check it, tell everyone.

use crate::connectors::Connector;
use anyhow::Result;
use itertools::Itertools;
use reversi_core::{Game, Move, Player};
use tracing::{debug, info};

/// How a finished game came out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchResult {
    pub game: Game,
    pub white: u8,
    pub black: u8,
    /// None for a tie.
    pub winner: Option<Player>,
    pub history: Vec<(Player, Move)>,
}

impl MatchResult {
    /// Every move in order, space separated ("d3 c5 pass ...").
    pub fn transcript(&self) -> String {
        self.history.iter().map(|(_, mv)| mv).join(" ")
    }
}

/// Play `start` out to the end.
///
/// A side with no legal placement passes without being asked. Moves returned
/// by a connector are checked against the rules, and an illegal one ends the
/// match with an error.
pub async fn play_match<'a>(
    start: Game,
    black: &'a mut dyn Connector,
    white: &'a mut dyn Connector,
) -> Result<MatchResult> {
    let mut game = start;
    let mut history = Vec::new();

    info!(
        black = black.name(),
        white = white.name(),
        first = %game.active_player,
        "starting match"
    );

    while !game.is_finished() {
        let player = game.active_player;

        let mv = if game.is_legal(Move::Pass) {
            Move::Pass
        } else {
            let seat = match player {
                Player::Black => &mut *black,
                Player::White => &mut *white,
            };
            seat.get_move(game).await?
        };

        game = game.apply_move(mv)?;
        history.push((player, mv));

        match mv {
            Move::Pass => info!(%player, "no legal moves, passing"),
            Move::Piece(pos) => debug!(%player, %pos, "move applied"),
        }

        black.observe_move(player, mv);
        white.observe_move(player, mv);
    }

    let (white_count, black_count) = game.board.score();
    let winner = game.winner();
    info!(
        white = white_count,
        black = black_count,
        winner = ?winner,
        moves = history.len(),
        "match finished"
    );

    Ok(MatchResult {
        game,
        white: white_count,
        black: black_count,
        winner,
        history,
    })
}
