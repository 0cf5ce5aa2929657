//! Handler for `get full-profile`.

use std::path::PathBuf;

use crate::cli::types::PlayerId;
use crate::profile::build_full_profile;
use crate::profile::types::PlayerFullProfile;
use crate::spectre::export::load_player_export;
use crate::Result;

/// Parameters for the full-profile command.
pub struct FullProfileParams {
    pub input: PathBuf,
    /// Subject override; defaults to the export's own profile id.
    pub player_id: Option<PlayerId>,
    pub as_json: bool,
    pub pretty: bool,
    pub verbose: bool,
}

pub fn handle_full_profile(params: FullProfileParams) -> Result<()> {
    let export = load_player_export(&params.input)?;

    let subject = params
        .player_id
        .unwrap_or_else(|| PlayerId::new(export.profile.id.clone()));

    if params.verbose {
        println!(
            "Loaded {} match rows for {}",
            export.spectre_match_player.len(),
            subject
        );
    }

    let full_profile = build_full_profile(export.profile, &export.spectre_match_player, &subject);

    if params.as_json {
        let out = if params.pretty {
            serde_json::to_string_pretty(&full_profile)?
        } else {
            serde_json::to_string(&full_profile)?
        };
        println!("{out}");
    } else {
        print_summary(&full_profile);
    }

    Ok(())
}

/// One-line-per-bucket career summary.
fn print_summary(full_profile: &PlayerFullProfile) {
    let profile = &full_profile.profile;
    match &profile.discriminator {
        Some(discriminator) => println!("{}#{} ({})", profile.name, discriminator, profile.id),
        None => println!("{} ({})", profile.name, profile.id),
    }
    println!("  {} matches on record", full_profile.matches.len());

    let Some(stats) = &full_profile.extended_stats else {
        println!("  no match data");
        return;
    };

    if !stats.season_stats.is_empty() {
        println!("Seasons:");
        for (label, season) in &stats.season_stats {
            let s = &season.stats;
            print!(
                "  {label}: {}W-{}L-{}D ({:.1}% win)",
                s.total_wins, s.total_losses, s.total_draws, s.average_win_percentage
            );
            if season.top_rank_rating > 0 {
                print!("  peak rating {}", season.top_rank_rating);
            }
            println!();
        }
    }

    if !stats.map_stats.is_empty() {
        println!("Maps:");
        for (map, bucket) in &stats.map_stats {
            let s = &bucket.stats;
            println!(
                "  {map}: {}W-{}L-{}D  {:.1} dmg/round",
                s.total_wins, s.total_losses, s.total_draws, s.average_damage_per_round
            );
        }
    }

    if !stats.sponsor_stats.is_empty() {
        println!("Sponsors:");
        for bucket in stats.sponsor_stats.values() {
            let s = &bucket.stats;
            println!(
                "  {}: {}W-{}L-{}D",
                bucket.sponsor_name, s.total_wins, s.total_losses, s.total_draws
            );
        }
    }

    let recent = &stats.last_20_matches_avg_stats;
    println!(
        "Last 20: {}W-{}L-{}D  {:.1} kills/round",
        recent.total_wins, recent.total_losses, recent.total_draws, recent.average_kills_per_round
    );
}
