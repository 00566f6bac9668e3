//! Interactive game setup.

use crate::config::Mode;
use anyhow::{bail, Result};
use async_std::io::prelude::BufReadExt;
use async_std::io::BufRead;
use async_std::sync::Mutex;
use std::io::Write;

const MENU: &str = "Choose a game mode:
  1) Human vs human
  2) Human vs computer
  3) Computer vs computer";

/// Ask for a game mode until a valid one is given.
pub async fn prompt_mode<R, W>(input: &Mutex<R>, output: &mut W) -> Result<Mode>
where
    R: BufRead + Unpin + Send,
    W: Write,
{
    writeln!(output, "{}", MENU)?;

    let mut input = input.lock().await;
    loop {
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line).await? == 0 {
            bail!("input closed before a game mode was chosen");
        }

        match Mode::from_choice(&line) {
            Some(mode) => return Ok(mode),
            None => writeln!(output, "Please enter 1, 2 or 3.")?,
        }
    }
}
