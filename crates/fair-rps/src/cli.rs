//! Command line interface.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "fair-rps",
    version,
    about = "Rock-paper-scissors for any odd number of moves, against a computer that commits to its move first",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Move labels in cycle order: each move beats the half of the list before it
    #[arg(value_name = "MOVE")]
    pub moves: Vec<String>,

    /// Print a JSON transcript after the round
    #[arg(long)]
    pub json: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, env = "FAIR_RPS_LOG", default_value = "warn")]
    pub log_level: String,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check a revealed key against the digest published before the round
    Verify {
        /// Move the computer said it played
        #[arg(long = "move", value_name = "MOVE")]
        label: String,

        /// Revealed HMAC key, hex
        #[arg(long)]
        key: String,

        /// Digest shown before the round, hex
        #[arg(long)]
        digest: String,
    },
}
