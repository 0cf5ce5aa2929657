//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use types::PlayerId;

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Build a player's full profile from a match export file.
    ///
    /// Reads a JSON export (base profile + raw `spectre_match_player`
    /// rows), normalizes the match history, and computes career stats by
    /// season, map, and sponsor.
    FullProfile {
        /// Path to the player export JSON file.
        #[clap(long, short)]
        input: PathBuf,

        /// Subject player id (defaults to the export's own profile id).
        #[clap(long, short)]
        player_id: Option<PlayerId>,

        /// Output the full profile as JSON instead of a text summary.
        #[clap(long)]
        json: bool,

        /// Pretty-print JSON output.
        #[clap(long)]
        pretty: bool,

        /// Print progress details while building the profile.
        #[clap(long)]
        verbose: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "spectre-stats", about = "Spectre Divide match history and career stats CLI")]
pub struct SpectreStats {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute data from a player export
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },
}
