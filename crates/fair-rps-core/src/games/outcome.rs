//! Win/lose/draw resolution on a cycle of moves.

use super::MoveSet;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of a round, always from the human's point of view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Draw,
    Win,
    Lose,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Draw => "Draw",
            Outcome::Win => "Win",
            Outcome::Lose => "Lose",
        }
    }

    /// The same round seen from the other side
    pub fn flip(&self) -> Outcome {
        match self {
            Outcome::Draw => Outcome::Draw,
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Does the move at `attacker` beat the move at `defender` on a cycle of `n` moves?
///
/// A move beats the `n / 2` moves directly before it (floor division).
pub fn beats(n: usize, attacker: usize, defender: usize) -> bool {
    let distance = (attacker + n - defender) % n;
    (1..=n / 2).contains(&distance)
}

/// Resolve a round given 0-based positions in `moves`
pub fn resolve_positions(moves: &MoveSet, human: usize, computer: usize) -> Outcome {
    let n = moves.len();
    if human == computer {
        Outcome::Draw
    } else if beats(n, human, computer) {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}

/// Resolve a round from the labels both sides played.
///
/// Fails with `InvalidMove` if either label is not part of `moves`.
pub fn resolve(moves: &MoveSet, human: &str, computer: &str) -> Result<Outcome> {
    let human = moves.position(human)?;
    let computer = moves.position(computer)?;
    Ok(resolve_positions(moves, human, computer))
}
