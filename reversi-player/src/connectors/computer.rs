//! [`Connector`] backed by the minimax search.

use super::Connector;
use anyhow::Result;
use async_trait::async_trait;
use reversi_core::{Game, Move};
use reversi_search::choose_move;

pub struct ComputerConnector {
    depth: u8,
}

impl ComputerConnector {
    pub fn new(depth: u8) -> Self {
        Self { depth }
    }
}

#[async_trait]
impl Connector for ComputerConnector {
    fn name(&self) -> &str {
        "computer"
    }

    async fn get_move(&mut self, game: Game) -> Result<Move> {
        let mv = choose_move(game.board, game.active_player, self.depth)
            .map(Move::Piece)
            .unwrap_or(Move::Pass);
        Ok(mv)
    }
}
