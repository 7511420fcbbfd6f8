//! Session protocol: commitment first, human input second, reveal last.

mod input;
mod session;
mod transcript;
mod types;

pub use input::Command;
pub use session::{Reveal, Session, Step};
pub use transcript::{verify_reveal, Transcript};
pub use types::{SessionId, SessionState};
