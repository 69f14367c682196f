//! Command-line interface for trigrid.

use clap::{Parser, Subcommand};

/// Board side lengths the front-end offers.
///
/// The engine itself accepts any size ≥ 3; this fixed menu is a
/// front-end concern.
pub const OFFERED_SIZES: [usize; 5] = [3, 4, 5, 6, 10];

/// Trigrid - grid tic-tac-toe where any three in a row wins
#[derive(Parser, Debug)]
#[command(name = "trigrid")]
#[command(about = "Grid tic-tac-toe engine with a terminal front-end", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Board side length (offered: 3, 4, 5, 6, 10)
        #[arg(short, long)]
        size: Option<usize>,

        /// Start against the computer instead of a second human
        #[arg(long)]
        computer: bool,

        /// Seed for the computer's random moves
        #[arg(long)]
        seed: Option<u64>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },

    /// Print a JSON snapshot of a fresh engine (for front-end development)
    Snapshot {
        /// Board side length
        #[arg(short, long, default_value = "3")]
        size: usize,
    },
}
