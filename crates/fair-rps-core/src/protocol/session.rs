//! One game against the computer.
//!
//! The session owns the secret key and the computer's move. Its only public
//! view before the human moves is the commitment digest; the key becomes
//! reachable only through a [`Reveal`], which exists only once a move has been
//! resolved. Help requests hand the same session back untouched, and every
//! other path drops it without exposing the key.

use super::{Command, SessionId, SessionState, Transcript};
use crate::crypto::{Commitment, SecretKey, SecureRandom};
use crate::error::{GameError, Result};
use crate::games::{resolve_positions, HelpTable, MoveSet, Outcome};
use tracing::{debug, info};

/// A game waiting for the human's move, with the computer already committed
pub struct Session {
    id: SessionId,
    moves: MoveSet,
    key: SecretKey,
    computer: usize,
    commitment: Commitment,
}

/// What happened after the human answered the prompt
pub enum Step {
    /// Same session, same commitment, plus the table to show
    Help { session: Session, table: HelpTable },
    /// Abandoned; nothing is revealed
    Exit,
    /// Move locked in, outcome decided, key revealed
    Resolved(Reveal),
}

impl Session {
    /// Draw a key and a computer move, then commit to that move.
    pub fn start<R: SecureRandom + ?Sized>(moves: MoveSet, rng: &mut R) -> Result<Self> {
        let id = SessionId::new();
        let key = SecretKey::generate(rng)?;
        let computer = rng.index(moves.len())?;
        let label = moves
            .label(computer)
            .ok_or_else(|| GameError::InvalidMove(format!("position {}", computer)))?;
        let commitment = Commitment::new(label, &key)?;

        transition(id, SessionState::Init, SessionState::CommitmentIssued);
        info!(session = %id, moves = moves.len(), digest = %commitment, "commitment issued");

        Ok(Self {
            id,
            moves,
            key,
            computer,
            commitment,
        })
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    /// Digest to publish before asking for the human's move
    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }

    /// Handle one line of human input.
    ///
    /// Invalid input consumes the session, so the key stays hidden for good.
    pub fn submit(self, line: &str) -> Result<Step> {
        let command = match Command::parse(line, self.moves.len()) {
            Ok(command) => command,
            Err(e) => {
                debug!(session = %self.id, "rejected input, abandoning session");
                transition(self.id, SessionState::CommitmentIssued, SessionState::Terminated);
                return Err(e);
            }
        };

        match command {
            Command::Help => {
                transition(self.id, SessionState::CommitmentIssued, SessionState::HelpRequested);
                let table = HelpTable::build(&self.moves);
                transition(self.id, SessionState::HelpRequested, SessionState::CommitmentIssued);
                Ok(Step::Help {
                    session: self,
                    table,
                })
            }
            Command::Exit => {
                transition(self.id, SessionState::CommitmentIssued, SessionState::ExitRequested);
                info!(session = %self.id, "session abandoned by player");
                transition(self.id, SessionState::ExitRequested, SessionState::Terminated);
                Ok(Step::Exit)
            }
            Command::Play(human) => self.play(human).map(Step::Resolved),
        }
    }

    /// Lock in the human's move (0-based) and resolve the round.
    pub fn play(self, human: usize) -> Result<Reveal> {
        let human_label = self
            .moves
            .label(human)
            .ok_or_else(|| GameError::InvalidMove(format!("position {}", human)))?
            .to_string();
        transition(self.id, SessionState::CommitmentIssued, SessionState::MoveChosen);

        let outcome = resolve_positions(&self.moves, human, self.computer);
        let computer_label = self
            .moves
            .label(self.computer)
            .ok_or_else(|| GameError::InvalidMove(format!("position {}", self.computer)))?
            .to_string();

        transition(self.id, SessionState::MoveChosen, SessionState::Resolved);
        info!(
            session = %self.id,
            human = %human_label,
            computer = %computer_label,
            outcome = %outcome,
            "round resolved"
        );
        transition(self.id, SessionState::Resolved, SessionState::Terminated);

        Ok(Reveal {
            session_id: self.id,
            moves: self.moves,
            human_move: human_label,
            computer_move: computer_label,
            outcome,
            commitment: self.commitment,
            key: self.key,
        })
    }
}

fn transition(id: SessionId, from: SessionState, to: SessionState) {
    debug!(session = %id, ?from, ?to, "session transition");
}

/// Everything the human needs once the round is over
#[derive(Debug)]
pub struct Reveal {
    session_id: SessionId,
    moves: MoveSet,
    human_move: String,
    computer_move: String,
    outcome: Outcome,
    commitment: Commitment,
    key: SecretKey,
}

impl Reveal {
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn human_move(&self) -> &str {
        &self.human_move
    }

    pub fn computer_move(&self) -> &str {
        &self.computer_move
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }

    pub fn key(&self) -> &SecretKey {
        &self.key
    }

    /// Recompute the digest from the revealed key and move
    pub fn verify(&self) -> Result<bool> {
        self.commitment.verify(&self.computer_move, &self.key)
    }

    pub fn transcript(&self) -> Transcript {
        Transcript::new(
            self.session_id,
            &self.moves,
            &self.human_move,
            &self.computer_move,
            self.outcome,
            &self.commitment,
            &self.key,
        )
    }
}
