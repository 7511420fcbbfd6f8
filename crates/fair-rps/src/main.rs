//! Fair RPS
//!
//! Terminal game: the computer publishes an HMAC of its move, the human picks
//! a move, then the key is revealed so the human can check the computer did
//! not change its mind.

mod app;
mod cli;
mod game;

use clap::Parser;
use cli::{Cli, Commands};
use rand::rngs::OsRng;
use std::process::ExitCode;
use tokio::io::BufReader;
use tracing::warn;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("warning: logging disabled: {}", e);
    }

    match cli.command {
        Some(Commands::Verify { label, key, digest }) => app::verify(
            &label,
            &key,
            &digest,
            &mut std::io::stdout(),
            &mut std::io::stderr(),
        )
        .into(),
        None => {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    eprintln!("error: cannot start runtime: {}", e);
                    return ExitCode::FAILURE;
                }
            };
            let status = runtime.block_on(async {
                let mut stdin = BufReader::new(tokio::io::stdin());
                let interrupt = async {
                    if let Err(e) = tokio::signal::ctrl_c().await {
                        warn!(error = %e, "cannot listen for Ctrl-C");
                        std::future::pending::<()>().await;
                    }
                };
                app::run(
                    cli.moves,
                    cli.json,
                    &mut OsRng,
                    &mut stdin,
                    &mut std::io::stdout(),
                    &mut std::io::stderr(),
                    interrupt,
                )
                .await
            });
            // A stdin read may still be parked on a blocking thread after Ctrl-C.
            runtime.shutdown_background();
            status.into()
        }
    }
}
