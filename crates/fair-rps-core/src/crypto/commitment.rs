//! SecretKey and Commitment for the HMAC commit-reveal scheme.

use super::SecureRandom;
use crate::error::{GameError, Result};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;

type HmacSha256 = Hmac<Sha256>;

/// Name of the pinned keyed-hash algorithm, shown next to every digest
pub const ALGORITHM: &str = "HMAC-SHA256";

/// 32-byte HMAC key the computer commits with
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey([u8; 32]);

impl SecretKey {
    /// Draw a fresh key from a secure source
    pub fn generate<R: SecureRandom + ?Sized>(rng: &mut R) -> Result<Self> {
        let mut bytes = [0u8; 32];
        rng.fill(&mut bytes)?;
        Ok(Self(bytes))
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Parse a revealed key
    pub fn from_hex(s: &str) -> Result<Self> {
        Ok(Self(decode_32("key", s)?))
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Hex form handed to the human once their move is locked in
    pub fn reveal(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never leak key material through logs before the reveal.
        write!(f, "SecretKey(..)")
    }
}

/// Commitment = HMAC-SHA256(key, move label)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Commitment(#[serde(with = "digest_serde")] [u8; 32]);

impl Commitment {
    /// Commit to a move label under the given key
    pub fn new(label: &str, key: &SecretKey) -> Result<Self> {
        let mac = keyed(label, key)?;
        Ok(Self(mac.finalize().into_bytes().into()))
    }

    /// Parse a published digest
    pub fn from_hex(s: &str) -> Result<Self> {
        Ok(Self(decode_32("digest", s)?))
    }

    /// Verify that the given label and key produce this commitment
    pub fn verify(&self, label: &str, key: &SecretKey) -> Result<bool> {
        Ok(keyed(label, key)?.verify_slice(&self.0).is_ok())
    }
}

fn keyed(label: &str, key: &SecretKey) -> Result<HmacSha256> {
    let mut mac = HmacSha256::new_from_slice(key.as_bytes())
        .map_err(|e| GameError::CryptoUnavailable(e.to_string()))?;
    mac.update(label.as_bytes());
    Ok(mac)
}

fn decode_32(field: &'static str, s: &str) -> Result<[u8; 32]> {
    let bytes = hex::decode(s.trim()).map_err(|e| GameError::InvalidHex {
        field,
        reason: e.to_string(),
    })?;
    bytes.try_into().map_err(|b: Vec<u8>| GameError::InvalidHex {
        field,
        reason: format!("expected 32 bytes, got {}", b.len()),
    })
}

mod digest_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8; 32], s: S) -> Result<S::Ok, S::Error> {
        hex::encode(bytes).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<[u8; 32], D::Error> {
        let hex_str = String::deserialize(d)?;
        super::decode_32("digest", &hex_str).map_err(serde::de::Error::custom)
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commitment({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}
