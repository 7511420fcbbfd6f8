//! The ordered, cyclic set of moves a game is played with.

use crate::error::{GameError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Ordered list of distinct move labels.
///
/// The order is the cycle outcomes are resolved on, so it matters: each move
/// beats the `len / 2` moves directly before it and loses to the `len / 2`
/// moves directly after it, wrapping around at the ends.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct MoveSet {
    labels: Vec<String>,
}

impl MoveSet {
    /// Validate and build a move set: at least 3 labels, an odd count, no duplicates.
    pub fn new<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();

        if labels.len() < 3 {
            return Err(GameError::Configuration(format!(
                "need at least 3 moves, got {}",
                labels.len()
            )));
        }
        if labels.len() % 2 == 0 {
            return Err(GameError::Configuration(format!(
                "need an odd number of moves, got {}",
                labels.len()
            )));
        }
        let mut seen = HashSet::with_capacity(labels.len());
        for label in &labels {
            if !seen.insert(label.as_str()) {
                return Err(GameError::Configuration(format!(
                    "duplicate move {:?}",
                    label
                )));
            }
        }

        Ok(Self { labels })
    }

    /// Classic three-move game
    pub fn classic() -> Self {
        Self {
            labels: ["Rock", "Paper", "Scissors"].map(String::from).to_vec(),
        }
    }

    /// Number of moves
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always false; a valid move set holds at least three moves
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label at a 0-based position
    pub fn label(&self, position: usize) -> Option<&str> {
        self.labels.get(position).map(String::as_str)
    }

    /// 0-based position of a label, matched exactly
    pub fn position(&self, label: &str) -> Result<usize> {
        self.labels
            .iter()
            .position(|l| l == label)
            .ok_or_else(|| GameError::InvalidMove(label.to_string()))
    }

    /// Labels in cycle order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}

impl TryFrom<Vec<String>> for MoveSet {
    type Error = GameError;

    fn try_from(labels: Vec<String>) -> Result<Self> {
        Self::new(labels)
    }
}

impl From<MoveSet> for Vec<String> {
    fn from(moves: MoveSet) -> Self {
        moves.labels
    }
}

impl fmt::Display for MoveSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.labels.join(", "))
    }
}
