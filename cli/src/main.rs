//! quiver - drive the usage tracker from a recorded session script.
//!
//! The replay harness stands in for the host game client: it feeds scripted
//! ticks and experience notifications through the same event processor a
//! live binding would use, then prints the resulting statistics.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::filter::EnvFilter;

mod replay;
mod script;

#[derive(Parser)]
#[command(version, about = "Ammo and experience usage tracker")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a session script and print the final statistics
    Replay {
        #[arg(short, long)]
        path: PathBuf,

        /// Emit the summary as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
    /// Show the resolved configuration
    Config,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Replay { path, json } => replay::run(&path, json),
        Commands::Config => replay::show_config(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
