use anyhow::Result;
use async_std::io::BufReader;
use async_std::sync::Mutex;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use reversi_core::Player;
use reversi_player::config::{Config, Mode};
use reversi_player::connectors::{ComputerConnector, Connector, TerminalConnector};
use reversi_player::play::play_match;
use reversi_player::prompt::prompt_mode;
use std::io;
use std::sync::Arc;
use tracing::info;

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .try_init()?;

    Ok(())
}

#[async_std::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;
    init_tracing(&config.log_level)?;

    let stdin = Arc::new(Mutex::new(BufReader::new(async_std::io::stdin())));
    let mode = match config.mode {
        Some(mode) => mode,
        None => prompt_mode(&*stdin, &mut io::stdout()).await?,
    };

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let human = |color| -> Box<dyn Connector> {
        Box::new(TerminalConnector::new(color, Arc::clone(&stdin), io::stdout()))
    };
    let computer = || -> Box<dyn Connector> { Box::new(ComputerConnector::new(config.depth)) };

    let (mut black, mut white) = match mode {
        Mode::Human => (human(Player::Black), human(Player::White)),
        Mode::Auto => (computer(), computer()),
        Mode::Computer => match config.pick_human_color(&mut rng) {
            Player::Black => (human(Player::Black), computer()),
            Player::White => (computer(), human(Player::White)),
        },
    };

    info!(?mode, depth = config.depth, "seating players");
    let result = play_match(config.start(), black.as_mut(), white.as_mut()).await?;

    println!("\n{}\n", result.game.board);
    println!("Game over");
    println!("White: {} Black: {}", result.white, result.black);
    match result.winner {
        Some(player) => println!("{} wins", player),
        None => println!("It's a tie"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_tracing_init_is_an_error() {
        assert!(init_tracing("warn").is_ok());
        assert!(init_tracing("debug").is_err());
    }
}
