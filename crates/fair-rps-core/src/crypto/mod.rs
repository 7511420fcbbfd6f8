//! Cryptographic primitives for the fair game protocol.
//!
//! This module provides:
//! - SecretKey and Commitment for the HMAC commit-reveal scheme
//! - SecureRandom, the narrow randomness interface the protocol draws from

mod commitment;
mod random;

pub use commitment::{Commitment, SecretKey, ALGORITHM};
pub use random::SecureRandom;

#[cfg(test)]
pub(crate) use random::tests::BrokenRng;
