//! CLI argument definitions for points.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use points_core::Side;

#[derive(Parser)]
#[command(name = "points")]
#[command(about = "Two-team points counter", version)]
pub struct Args {
    /// Config file (defaults to <config dir>/points/config.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Saved game file (overrides the config)
    #[arg(long, value_name = "FILE", env = "POINTS_STATE_FILE")]
    pub state_file: Option<PathBuf>,

    /// Key the game is saved under (overrides the config)
    #[arg(long)]
    pub key: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Log at info level unless RUST_LOG is set
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the score sheet and totals
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Enter a round score; the other team gets the rest of 11
    Set {
        /// Round number, starting at 1
        round: usize,
        /// Team (team1, team2, 1 or 2)
        team: Side,
        /// Points; empty, non-numeric or above 11 clears the round
        #[arg(default_value = "", allow_hyphen_values = true)]
        value: String,
    },
    /// Enter extra points for a team in a round
    Extra {
        /// Round number, starting at 1
        round: usize,
        /// Team (team1, team2, 1 or 2)
        team: Side,
        /// Extra points; empty or non-numeric sets zero
        #[arg(default_value = "", allow_hyphen_values = true)]
        value: String,
    },
    /// Append a blank round
    AddRound,
    /// Remove the last round (never below 6 rounds)
    RemoveRound,
    /// Zero every round and erase the saved game
    Clear,
    /// Export the score sheet
    Export {
        /// Output format
        #[arg(long, short, value_enum, default_value = "tsv")]
        format: ExportFormat,
        /// Output file path (defaults to stdout)
        #[arg(long, short, conflicts_with = "dir")]
        output: Option<PathBuf>,
        /// Write a timestamped file into this directory
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Interactive mode reading commands from stdin (default)
    Play,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Tsv,
    Json,
}

impl From<ExportFormat> for points_core::ExportFormat {
    fn from(format: ExportFormat) -> Self {
        match format {
            ExportFormat::Tsv => Self::Tsv,
            ExportFormat::Json => Self::Json,
        }
    }
}
