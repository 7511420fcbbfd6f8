//! Top-level commands and the exit status each one ends with.

use crate::game::{self, AppError, Finish};
use fair_rps_core::{verify_reveal, GameError, MoveSet, SecureRandom};
use std::future::Future;
use std::io::Write;
use std::process::ExitCode;
use tokio::io::AsyncBufRead;
use tracing::debug;

/// How the process ends
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// Round finished, player exited, or digest verified
    Success,
    /// Any error, or a digest that does not match
    Failure,
    /// Input closed or interrupted before a move was chosen
    Abandoned,
}

impl Status {
    pub fn code(self) -> u8 {
        match self {
            Status::Success => 0,
            Status::Failure => 1,
            Status::Abandoned => 130,
        }
    }
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        ExitCode::from(status.code())
    }
}

/// Validate the move set, then play one session.
///
/// Game output goes to `out`, error messages to `err`.
pub async fn run<I, W, E, R, F>(
    labels: Vec<String>,
    json: bool,
    rng: &mut R,
    input: &mut I,
    out: &mut W,
    err: &mut E,
    interrupt: F,
) -> Status
where
    I: AsyncBufRead + Unpin,
    W: Write,
    E: Write,
    R: SecureRandom + ?Sized,
    F: Future<Output = ()>,
{
    let moves = match MoveSet::new(labels) {
        Ok(moves) => moves,
        Err(e) => {
            report(err, &e.to_string());
            report(err, "usage: fair-rps <MOVE> <MOVE> <MOVE> [MOVE ...]  (odd count, no repeats)");
            report(err, "example: fair-rps Rock Paper Scissors Lizard Spock");
            return Status::Failure;
        }
    };
    debug!(moves = %moves, "starting session");

    match game::play(moves, rng, input, out, json, interrupt).await {
        Ok(Finish::Resolved(_)) | Ok(Finish::Exited) => Status::Success,
        Ok(Finish::Abandoned) => Status::Abandoned,
        Err(AppError::Game(e @ GameError::InvalidInput(_))) => {
            report(err, &e.to_string());
            report(err, "Session ended; the key stays secret.");
            Status::Failure
        }
        Err(e) => {
            report(err, &e.to_string());
            Status::Failure
        }
    }
}

/// Check a revealed key and move against a published digest
pub fn verify<W: Write, E: Write>(
    label: &str,
    key: &str,
    digest: &str,
    out: &mut W,
    err: &mut E,
) -> Status {
    let written = match verify_reveal(label, key, digest) {
        Ok(true) => writeln!(
            out,
            "MATCH: {:?} under this key produces the published digest",
            label
        )
        .map(|_| Status::Success),
        Ok(false) => writeln!(
            out,
            "MISMATCH: {:?} under this key does not produce the published digest",
            label
        )
        .map(|_| Status::Failure),
        Err(e) => {
            report(err, &e.to_string());
            return Status::Failure;
        }
    };
    written.unwrap_or_else(|e| {
        report(err, &AppError::from(e).to_string());
        Status::Failure
    })
}

// Nowhere left to send a failure to write an error message.
fn report<E: Write>(err: &mut E, message: &str) {
    let _ = writeln!(err, "error: {}", message);
}
