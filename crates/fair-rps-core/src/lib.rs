//! Fair RPS Core Library
//!
//! This crate provides the commit-reveal protocol, cryptographic primitives,
//! and cyclic outcome resolution for rock-paper-scissors played against a
//! computer that commits to its move with an HMAC before the human chooses.

pub mod crypto;
pub mod error;
pub mod games;
pub mod protocol;

pub use crypto::{Commitment, SecretKey, SecureRandom, ALGORITHM};
pub use error::{GameError, Result};
pub use games::{resolve, HelpTable, MoveSet, Outcome};
pub use protocol::{verify_reveal, Command, Reveal, Session, SessionId, Step, Transcript};
