//! Command-line configuration for the `reversi` binary.
//!
//! Every flag can also be set through a `REVERSI_*` environment variable;
//! flags take priority.

use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};
use rand::Rng;
use reversi_core::{Board, Game, Player};
use reversi_search::MAX_DEPTH;
use tracing::level_filters::LevelFilter;

/// Deepest search the binary will accept. Depth 10 already takes seconds per
/// move in the middle game.
pub const DEPTH_LIMIT: u8 = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Two people share the terminal.
    Human,
    /// One person against the engine.
    Computer,
    /// The engine plays both sides.
    Auto,
}

impl Mode {
    /// Interpret an answer to the game mode menu: a menu number or a mode name.
    pub fn from_choice(choice: &str) -> Option<Mode> {
        match choice.trim().to_ascii_lowercase().as_str() {
            "1" | "human" => Some(Mode::Human),
            "2" | "computer" => Some(Mode::Computer),
            "3" | "auto" => Some(Mode::Auto),
            _ => None,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "reversi")]
#[command(about = "Play Reversi at the terminal, against a friend or a minimax engine")]
pub struct Config {
    /// Game mode. Asked for interactively when not given
    #[arg(long, env = "REVERSI_MODE", value_enum)]
    pub mode: Option<Mode>,

    /// Search depth in plies for the computer player
    #[arg(long, env = "REVERSI_DEPTH", default_value_t = MAX_DEPTH)]
    pub depth: u8,

    /// Color of the human player against the computer (black or white).
    /// Drawn at random when not given
    #[arg(long, env = "REVERSI_HUMAN_COLOR")]
    pub human_color: Option<Player>,

    /// Seed for the color draw
    #[arg(long, env = "REVERSI_SEED")]
    pub seed: Option<u64>,

    /// Starting board as 64 cells of W, B or '.', row by row
    #[arg(long)]
    pub board: Option<Board>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "REVERSI_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.depth == 0 {
            return Err(anyhow!("depth must be greater than 0"));
        }

        if self.depth > DEPTH_LIMIT {
            return Err(anyhow!(
                "depth {} is too deep, the limit is {}",
                self.depth,
                DEPTH_LIMIT
            ));
        }

        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(anyhow!(
                "invalid log level '{}', expected one of trace, debug, info, warn, error",
                self.log_level
            ));
        }

        Ok(())
    }

    /// The configured human color, or a fair coin flip.
    pub fn pick_human_color<R: Rng>(&self, rng: &mut R) -> Player {
        match self.human_color {
            Some(color) => color,
            None if rng.gen() => Player::Black,
            None => Player::White,
        }
    }

    /// The position play starts from. Black always moves first.
    pub fn start(&self) -> Game {
        Game::new(self.board.unwrap_or_default(), Player::Black)
    }
}
