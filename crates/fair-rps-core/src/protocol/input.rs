//! Grammar of the single line a human types at the prompt.

use crate::error::{GameError, Result};

/// What the human asked for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// '0'
    Exit,
    /// '?'
    Help,
    /// '1'..='N', stored 0-based
    Play(usize),
}

impl Command {
    /// Parse one line of input against a move set of `moves` entries.
    ///
    /// Surrounding whitespace is ignored. Only plain decimal digits without a
    /// leading zero are accepted, so "03", signs, fractions and anything out
    /// of range are rejected.
    pub fn parse(line: &str, moves: usize) -> Result<Self> {
        let line = line.trim();
        match line {
            "?" => return Ok(Command::Help),
            "0" => return Ok(Command::Exit),
            _ => {}
        }

        let invalid = || GameError::InvalidInput(line.to_string());
        if line.is_empty()
            || line.starts_with('0')
            || !line.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }
        let choice: usize = line.parse().map_err(|_| invalid())?;
        if (1..=moves).contains(&choice) {
            Ok(Command::Play(choice - 1))
        } else {
            Err(invalid())
        }
    }
}
