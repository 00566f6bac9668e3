//! [`Connector`] for a person typing moves at the terminal.

use super::Connector;
use anyhow::{bail, Result};
use async_std::io::prelude::BufReadExt;
use async_std::io::BufRead;
use async_std::sync::Mutex;
use async_trait::async_trait;
use reversi_core::{Game, Move, Player};
use std::io::Write;
use std::sync::Arc;

/// Reads moves as text ("d3") and re-prompts until one is legal.
/// The input is shared so that two people can take turns on one terminal.
pub struct TerminalConnector<R, W> {
    color: Player,
    input: Arc<Mutex<R>>,
    output: W,
}

impl<R, W> TerminalConnector<R, W>
where
    R: BufRead + Unpin + Send,
    W: Write + Send,
{
    pub fn new(color: Player, input: Arc<Mutex<R>>, output: W) -> Self {
        Self {
            color,
            input,
            output,
        }
    }

    /// Everything written to the player so far.
    pub fn output(&self) -> &W {
        &self.output
    }
}

async fn read_line<R: BufRead + Unpin + Send>(input: &Mutex<R>, color: Player) -> Result<String> {
    let mut input = input.lock().await;
    let mut line = String::new();

    if input.read_line(&mut line).await? == 0 {
        bail!("input closed while waiting for {}'s move", color);
    }
    Ok(line)
}

#[async_trait]
impl<R, W> Connector for TerminalConnector<R, W>
where
    R: BufRead + Unpin + Send + 'static,
    W: Write + Send + 'static,
{
    fn name(&self) -> &str {
        "terminal"
    }

    async fn get_move(&mut self, game: Game) -> Result<Move> {
        let legal_moves = game.legal_moves();
        writeln!(self.output, "\n{}\n", game)?;

        loop {
            write!(self.output, "{}'s move: ", game.active_player)?;
            self.output.flush()?;

            let line = read_line(&self.input, self.color).await?;
            let mv: Move = match line.trim().parse() {
                Ok(mv) => mv,
                Err(_) => {
                    writeln!(
                        self.output,
                        "Cannot parse move. Enter a column a-h then a row 1-8, like d3."
                    )?;
                    continue;
                }
            };

            if game.is_legal(mv) {
                return Ok(mv);
            }
            writeln!(self.output, "Invalid move. Legal moves: {}", legal_moves)?;
        }
    }

    fn observe_move(&mut self, player: Player, mv: Move) {
        if player == self.color {
            return;
        }

        // Nothing useful to do if the terminal is gone; the next read will fail.
        let _ = match mv {
            Move::Pass => writeln!(self.output, "{} has no legal moves and passes.", player),
            Move::Piece(pos) => writeln!(self.output, "{} plays {}.", player, pos),
        };
    }
}
