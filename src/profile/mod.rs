//! The profile pipeline: normalize raw rows, sort, aggregate career stats.

pub mod matches;
pub mod season;
pub mod stats;
pub mod types;

use crate::cli::types::PlayerId;
use crate::spectre::types::{PlayerProfile, RawMatchPlayer};
use matches::process_match;
use stats::calculate_extended_stats;
use types::{PlayerFullProfile, PlayerMatch};

/// Build a player's full profile from their raw participation rows.
///
/// Malformed rows are dropped silently; the surviving matches are sorted
/// by descending match date before aggregation. An export carrying no
/// rows at all yields an empty history and no stats report.
pub fn build_full_profile(
    profile: PlayerProfile,
    rows: &[RawMatchPlayer],
    player_id: &PlayerId,
) -> PlayerFullProfile {
    if rows.is_empty() {
        return PlayerFullProfile {
            profile,
            matches: Vec::new(),
            extended_stats: None,
        };
    }

    let mut matches: Vec<PlayerMatch> = rows.iter().filter_map(process_match).collect();
    matches.sort_by(|a, b| b.match_date.cmp(&a.match_date));

    let extended_stats = calculate_extended_stats(&matches, player_id);

    PlayerFullProfile {
        profile,
        matches,
        extended_stats: Some(extended_stats),
    }
}
