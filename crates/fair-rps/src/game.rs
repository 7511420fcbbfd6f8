//! Terminal front end for one session.
//!
//! Output order is part of the protocol: the digest is written before the
//! first prompt, and the key only after the round is resolved.

use fair_rps_core::{
    GameError, MoveSet, Outcome, Reveal, SecureRandom, Session, Step, ALGORITHM,
};
use std::future::Future;
use std::io::Write;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Game(#[from] GameError),

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot encode transcript: {0}")]
    Json(#[from] serde_json::Error),
}

/// How a session ended without an error
#[derive(Debug)]
pub enum Finish {
    Resolved(Box<Reveal>),
    Exited,
    /// Input closed or interrupted before a move was chosen
    Abandoned,
}

/// Play one session, reading lines from `input` and writing to `out`.
///
/// `interrupt` resolving while the prompt is waiting abandons the session.
pub async fn play<I, W, R, F>(
    moves: MoveSet,
    rng: &mut R,
    input: &mut I,
    out: &mut W,
    json: bool,
    interrupt: F,
) -> Result<Finish, AppError>
where
    I: AsyncBufRead + Unpin,
    W: Write,
    R: SecureRandom + ?Sized,
    F: Future<Output = ()>,
{
    let mut session = Session::start(moves, rng)?;
    tokio::pin!(interrupt);

    writeln!(out, "HMAC ({}): {}", ALGORITHM, session.commitment())?;

    loop {
        write_menu(out, session.moves())?;
        write!(out, "Enter your move: ")?;
        out.flush()?;

        let mut line = String::new();
        let read = tokio::select! {
            read = input.read_line(&mut line) => read?,
            _ = &mut interrupt => {
                info!(session = %session.id(), "interrupted while waiting for input");
                writeln!(out)?;
                return Ok(Finish::Abandoned);
            }
        };
        if read == 0 {
            info!(session = %session.id(), "input closed before a move was chosen");
            writeln!(out)?;
            return Ok(Finish::Abandoned);
        }

        match session.submit(&line)? {
            Step::Help {
                session: same,
                table,
            } => {
                writeln!(out, "{}", table)?;
                session = same;
            }
            Step::Exit => {
                writeln!(out, "Bye.")?;
                return Ok(Finish::Exited);
            }
            Step::Resolved(reveal) => {
                write_reveal(out, &reveal, json)?;
                return Ok(Finish::Resolved(Box::new(reveal)));
            }
        }
    }
}

fn write_menu<W: Write>(out: &mut W, moves: &MoveSet) -> std::io::Result<()> {
    writeln!(out, "Available moves:")?;
    for (i, label) in moves.iter().enumerate() {
        writeln!(out, "{} - {}", i + 1, label)?;
    }
    writeln!(out, "0 - exit")?;
    writeln!(out, "? - help")
}

fn write_reveal<W: Write>(out: &mut W, reveal: &Reveal, json: bool) -> Result<(), AppError> {
    writeln!(out, "Your move: {}", reveal.human_move())?;
    writeln!(out, "Computer move: {}", reveal.computer_move())?;
    match reveal.outcome() {
        Outcome::Win => writeln!(out, "You win!")?,
        Outcome::Lose => writeln!(out, "You lose!")?,
        Outcome::Draw => writeln!(out, "Draw!")?,
    }
    writeln!(out, "HMAC key: {}", reveal.key().reveal())?;
    if json {
        writeln!(out, "{}", reveal.transcript().to_json()?)?;
    }
    debug!(session = %reveal.session_id(), "key revealed");
    Ok(())
}
