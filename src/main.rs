//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use spectre_stats::{
    cli::{Commands, GetCmd, SpectreStats},
    commands::full_profile::{handle_full_profile, FullProfileParams},
    Result,
};

fn main() -> Result<()> {
    let app = SpectreStats::parse();

    match app.command {
        Commands::Get { cmd } => match cmd {
            GetCmd::FullProfile {
                input,
                player_id,
                json,
                pretty,
                verbose,
            } => handle_full_profile(FullProfileParams {
                input,
                player_id,
                as_json: json,
                pretty,
                verbose,
            })?,
        },
    }

    Ok(())
}
