//! Officewars CLI - Inspect and check office wars game files.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Officewars - decoder for office wars game text
#[derive(Parser, Debug)]
#[command(name = "officewars")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode a game file and print it
    Show {
        /// Game text file
        #[arg(required = true)]
        game: PathBuf,

        /// Turn to show ownership for (default: last recorded turn)
        #[arg(short, long)]
        turn: Option<usize>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        #[command(flatten)]
        text: cli::FormatArgs,
    },

    /// Decode a list-of-games file and print the entries
    List {
        /// Game list text file
        #[arg(required = true)]
        games: PathBuf,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        #[command(flatten)]
        text: cli::FormatArgs,
    },

    /// Decode a game file and cross-check it through the inspector and encoder
    Verify {
        /// Game text file
        #[arg(required = true)]
        game: PathBuf,

        /// Connectivity scan used when rebuilding through the inspector
        #[arg(long, default_value = "all-pairs")]
        scan: officewars::ConnectivityScan,

        #[command(flatten)]
        text: cli::FormatArgs,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let result = match args.command {
        Commands::Show {
            game,
            turn,
            format,
            text,
        } => cli::show::execute(&game, turn, format, text),

        Commands::List {
            games,
            format,
            text,
        } => cli::list::execute(&games, format, text),

        Commands::Verify { game, scan, text } => cli::verify::execute(&game, scan, text),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
