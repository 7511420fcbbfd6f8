//! Integration tests for the full game flow.
//!
//! These tests simulate complete sessions from commitment to verification.

use fair_rps_core::{
    crypto::{Commitment, SecretKey},
    games::{resolve, HelpTable, MoveSet, Outcome},
    protocol::{verify_reveal, Session, Step, Transcript},
    GameError,
};
use rand::rngs::{OsRng, StdRng};
use rand::{CryptoRng, RngCore, SeedableRng};

fn rpsls() -> MoveSet {
    MoveSet::new(["Rock", "Paper", "Scissors", "Lizard", "Spock"]).unwrap()
}

/// Counts every byte drawn so tests can prove nothing was drawn.
struct CountingRng {
    inner: StdRng,
    drawn: usize,
}

impl RngCore for CountingRng {
    fn next_u32(&mut self) -> u32 {
        self.drawn += 4;
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.drawn += 8;
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.drawn += dest.len();
        self.inner.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.drawn += dest.len();
        self.inner.try_fill_bytes(dest)
    }
}

impl CryptoRng for CountingRng {}

/// Play a complete game: commit, ask for help, choose, verify
#[test]
fn test_full_game_with_help() {
    let moves = rpsls();
    let mut rng = StdRng::seed_from_u64(2024);

    // Phase 1: computer commits before anything else happens
    let session = Session::start(moves.clone(), &mut rng).unwrap();
    let published = session.commitment().to_string();

    // Phase 2: human consults the table, commitment is unchanged
    let session = match session.submit("?").unwrap() {
        Step::Help { session, table } => {
            assert_eq!(table, HelpTable::build(&moves));
            session
        }
        _ => panic!("expected help table"),
    };
    assert_eq!(session.commitment().to_string(), published);

    // Phase 3: human locks in Scissors
    let reveal = match session.submit("3").unwrap() {
        Step::Resolved(reveal) => reveal,
        _ => panic!("expected resolution"),
    };
    assert_eq!(reveal.human_move(), "Scissors");
    assert_eq!(
        reveal.outcome(),
        resolve(&moves, "Scissors", reveal.computer_move()).unwrap()
    );

    // Phase 4: human verifies the digest published in phase 1
    let key = reveal.key().reveal();
    assert!(verify_reveal(reveal.computer_move(), &key, &published).unwrap());

    // Any other move fails against the same digest
    for other in moves.iter().filter(|m| *m != reveal.computer_move()) {
        assert!(!verify_reveal(other, &key, &published).unwrap());
    }
}

/// Same seed gives the same key, computer move and digest
#[test]
fn test_deterministic_source_pins_digest() {
    let first = Session::start(rpsls(), &mut StdRng::seed_from_u64(7))
        .unwrap()
        .play(0)
        .unwrap();
    let second = Session::start(rpsls(), &mut StdRng::seed_from_u64(7))
        .unwrap()
        .play(0)
        .unwrap();

    assert_eq!(first.commitment(), second.commitment());
    assert_eq!(first.key(), second.key());
    assert_eq!(first.computer_move(), second.computer_move());
    assert_eq!(first.outcome(), second.outcome());

    let expected = Commitment::new(first.computer_move(), first.key()).unwrap();
    assert_eq!(first.commitment(), &expected);
}

/// Real OS randomness drives a full game too
#[test]
fn test_os_random_game() {
    let session = Session::start(MoveSet::classic(), &mut OsRng).unwrap();
    match session.submit("1").unwrap() {
        Step::Resolved(reveal) => assert!(reveal.verify().unwrap()),
        _ => panic!("expected resolution"),
    }
}

/// Invalid move sets are rejected before any randomness is drawn
#[test]
fn test_configuration_rejected_before_randomness() {
    let mut rng = CountingRng {
        inner: StdRng::seed_from_u64(1),
        drawn: 0,
    };

    let bad: [&[&str]; 4] = [
        &["Rock", "Paper"],
        &["Rock"],
        &["Rock", "Paper", "Rock"],
        &["a", "b", "c", "d", "e", "f"],
    ];
    for labels in bad {
        let result = MoveSet::new(labels.iter().copied())
            .and_then(|moves| Session::start(moves, &mut rng));
        assert!(matches!(result, Err(GameError::Configuration(_))));
    }
    assert_eq!(rng.drawn, 0);

    Session::start(rpsls(), &mut rng).unwrap();
    assert!(rng.drawn >= 32);
}

/// Bad input ends the session and the key is never revealed
#[test]
fn test_invalid_input_keeps_key_hidden() {
    for line in ["abc", "-1", "99"] {
        let session = Session::start(rpsls(), &mut StdRng::seed_from_u64(3)).unwrap();
        assert!(matches!(
            session.submit(line),
            Err(GameError::InvalidInput(_))
        ));
    }
}

/// The classic table reproduces the rules everyone knows
#[test]
fn test_classic_rules() {
    let moves = MoveSet::classic();
    assert_eq!(resolve(&moves, "Rock", "Paper").unwrap(), Outcome::Lose);
    assert_eq!(resolve(&moves, "Rock", "Scissors").unwrap(), Outcome::Win);
    assert_eq!(resolve(&moves, "Paper", "Rock").unwrap(), Outcome::Win);
    assert_eq!(
        resolve(&rpsls(), "Scissors", "Paper").unwrap(),
        Outcome::Win
    );
}

/// A transcript survives JSON and still verifies
#[test]
fn test_transcript_round_trip() {
    let reveal = Session::start(rpsls(), &mut StdRng::seed_from_u64(99))
        .unwrap()
        .play(4)
        .unwrap();
    let json = reveal.transcript().to_json().unwrap();
    let transcript: Transcript = serde_json::from_str(&json).unwrap();

    assert_eq!(transcript.human_move, "Spock");
    assert_eq!(transcript.moves, rpsls());
    assert!(transcript.verify().unwrap());
    assert_eq!(SecretKey::from_hex(&transcript.key).unwrap(), *reveal.key());
}
