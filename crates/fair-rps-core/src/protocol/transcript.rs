//! Shareable record of a finished game, enough to check the commitment offline.

use super::SessionId;
use crate::crypto::{Commitment, SecretKey, ALGORITHM};
use crate::error::Result;
use crate::games::{MoveSet, Outcome};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    pub session_id: SessionId,
    pub moves: MoveSet,
    pub human_move: String,
    pub computer_move: String,
    pub outcome: Outcome,
    pub algorithm: String,
    pub digest: Commitment,
    /// Hex key, published only after the round was resolved
    pub key: String,
}

impl Transcript {
    pub(crate) fn new(
        session_id: SessionId,
        moves: &MoveSet,
        human_move: &str,
        computer_move: &str,
        outcome: Outcome,
        digest: &Commitment,
        key: &SecretKey,
    ) -> Self {
        Self {
            session_id,
            moves: moves.clone(),
            human_move: human_move.to_string(),
            computer_move: computer_move.to_string(),
            outcome,
            algorithm: ALGORITHM.to_string(),
            digest: *digest,
            key: key.reveal(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Check the published digest against the revealed key and computer move
    pub fn verify(&self) -> Result<bool> {
        let key = SecretKey::from_hex(&self.key)?;
        self.digest.verify(&self.computer_move, &key)
    }
}

/// Check a published digest against a revealed key and move label, all as the
/// human would copy them from the terminal.
pub fn verify_reveal(label: &str, key_hex: &str, digest_hex: &str) -> Result<bool> {
    let key = SecretKey::from_hex(key_hex)?;
    let digest = Commitment::from_hex(digest_hex)?;
    digest.verify(label, &key)
}
