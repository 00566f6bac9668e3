use anyhow::Result;
use async_trait::async_trait;
use reversi_core::{Game, Move, Player};

/// A player-facing abstract interface to one side of the board.
#[async_trait]
pub trait Connector: Send {
    /// Short description used in logs.
    fn name(&self) -> &str;

    /// Choose a move for the active player of `game`.
    /// Only called when the active player has a legal placement.
    async fn get_move(&mut self, game: Game) -> Result<Move>;

    /// Handle a move that was just applied by either side.
    fn observe_move(&mut self, _player: Player, _mv: Move) {}
}
