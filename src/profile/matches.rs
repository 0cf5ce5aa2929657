//! Match normalization: raw participation rows into [`PlayerMatch`] records.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use super::types::{MatchOutcome, MatchPlayer, MatchTeam, PlayerMatch};
use crate::spectre::types::{RawMatch, RawMatchPlayer, RawMatchTeam};


/// Normalize one raw participation row.
///
/// Returns `None` when the nested match reference is missing, the match's
/// team list is empty, or the match date is absent or unparseable; such
/// rows are dropped from the history rather than surfaced as errors.
pub fn process_match(row: &RawMatchPlayer) -> Option<PlayerMatch> {
    let spectre_match = row.spectre_match_team.as_ref()?.spectre_match.as_ref()?;
    let teams = &spectre_match.spectre_match_team;

    // The subject's own team is assumed to occupy index 0 of the embedded
    // list; membership is not re-checked against the row's player id.
    let player_team = teams.first()?;
    let opponent_team = teams.get(1);

    let match_date = spectre_match
        .match_date
        .as_deref()
        .and_then(parse_match_date)?;

    let player_rounds = player_team.rounds_won.unwrap_or(0);
    let rounds = match opponent_team {
        Some(opponent) => player_rounds.max(opponent.rounds_won.unwrap_or(0)),
        None => player_rounds,
    };

    let winner = calculate_winner(spectre_match, player_team, opponent_team);

    Some(PlayerMatch {
        id: spectre_match.id.clone().unwrap_or_default(),
        region: spectre_match.region.clone().unwrap_or_default(),
        is_ranked: spectre_match.is_ranked.unwrap_or(false),
        queue_name: spectre_match.queue_name.clone().unwrap_or_default(),
        map: spectre_match.queue_game_map.clone().unwrap_or_default(),
        game_mode: spectre_match.queue_game_mode.clone().unwrap_or_default(),
        surrendered_team: spectre_match.surrendered_team,
        is_abandoned: spectre_match.is_abandoned_match.unwrap_or(false),
        match_date,
        rounds,
        winner,
        player_team: process_team(player_team),
        opponent_team: opponent_team.map(process_team),
    })
}

/// Determine the match outcome for the subject's team.
///
/// A surrender indicator other than -1 settles the match outright and
/// overrides the round comparison; an absent indicator reads as a win.
fn calculate_winner(
    spectre_match: &RawMatch,
    player_team: &RawMatchTeam,
    opponent_team: Option<&RawMatchTeam>,
) -> MatchOutcome {
    match spectre_match.surrendered_team {
        None => MatchOutcome::Win,
        Some(indicator) if indicator != -1 => MatchOutcome::from_surrender(indicator),
        _ => match opponent_team {
            None => MatchOutcome::Win,
            Some(opponent) => {
                let ours = player_team.rounds_won.unwrap_or(0);
                let theirs = opponent.rounds_won.unwrap_or(0);
                match ours.cmp(&theirs) {
                    Ordering::Greater => MatchOutcome::Win,
                    Ordering::Less => MatchOutcome::Loss,
                    Ordering::Equal => MatchOutcome::Draw,
                }
            }
        },
    }
}

/// Project a raw team row into a [`MatchTeam`] snapshot.
pub fn process_team(team: &RawMatchTeam) -> MatchTeam {
    MatchTeam {
        id: team.id.clone().unwrap_or_default(),
        team_id: team.team.clone().unwrap_or_default(),
        team_index: team.team_index.unwrap_or(0),
        rounds_won: team.rounds_won.unwrap_or(0),
        rounds_played: team.rounds_played.unwrap_or(0),
        xp_earned: xp_earned(team),
        fans_earned: fans_earned(team),
        used_team_rank: team.used_team_rank.unwrap_or(false),
        team_rank: team.current_rank_id.unwrap_or(0),
        previous_team_rank: team.previous_rank_id.unwrap_or(0),
        num_ranked_matches: team.num_ranked_matches.unwrap_or(0),
        ranked_rating: team.current_ranked_rating.unwrap_or(0),
        ranked_rating_delta: team.ranked_rating_delta.unwrap_or(0),
        previous_ranked_rating: team.previous_ranked_rating.unwrap_or(0),
        is_full_party: team.is_full_team_in_party.unwrap_or(false),
        players: team
            .spectre_match_player
            .iter()
            .filter_map(process_player)
            .collect(),
    }
}

/// Project a raw player row into a [`MatchPlayer`] snapshot.
///
/// Returns `None` for rows without a player id; the rating delta is
/// recomputed from the two ratings, never read from the row.
pub fn process_player(player: &RawMatchPlayer) -> Option<MatchPlayer> {
    let id = player.player.as_deref().filter(|id| !id.is_empty())?;

    let ranked_rating = player.current_ranked_rating.unwrap_or(0);
    let previous_ranked_rating = player.previous_ranked_rating.unwrap_or(0);

    Some(MatchPlayer {
        id: id.to_string(),
        name: player
            .saved_player_name
            .clone()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "Unknown".to_string()),
        kills: player.num_kills.unwrap_or(0),
        assists: player.num_assists.unwrap_or(0),
        deaths: player.num_deaths.unwrap_or(0),
        damage_dealt: player.total_damage_done.unwrap_or(0),
        teammate_index: player.teammate_index.unwrap_or(0),
        sponsor_id: player.selected_sponsor.clone().unwrap_or_default(),
        sponsor_name: player.saved_sponsor_name.clone().unwrap_or_default(),
        ranked_rating,
        previous_ranked_rating,
        ranked_rating_delta: ranked_rating - previous_ranked_rating,
        rank_id: player.current_rank_id.unwrap_or(0),
        previous_rank_id: player.previous_rank_id.unwrap_or(0),
        banner_id: player.selected_banner_catalog_id.clone().unwrap_or_default(),
        crew_score: player.crew_score.unwrap_or(0),
        crew_id: player.crew.clone().unwrap_or_default(),
        team_id: player.team.clone().unwrap_or_default(),
        division_id: player.division.clone().unwrap_or_default(),
        num_ranked_matches: player.num_ranked_matches.unwrap_or(0),
        is_anonymous: player.is_anonymous_player.unwrap_or(false),
    })
}

/// XP is derivable only when all four contributing fields are present and
/// non-zero; a zero rate yields zero earned.
fn xp_earned(team: &RawMatchTeam) -> i64 {
    match (
        team.xp_per_round,
        team.rounds_played,
        team.xp_per_round_won,
        team.rounds_won,
    ) {
        (Some(per_round), Some(played), Some(per_round_won), Some(won))
            if per_round != 0 && played != 0 && per_round_won != 0 && won != 0 =>
        {
            per_round * played + per_round_won * won
        }
        _ => 0,
    }
}

/// Same derivation rule as [`xp_earned`], over the fan-rate fields.
fn fans_earned(team: &RawMatchTeam) -> i64 {
    match (
        team.fans_per_round,
        team.rounds_played,
        team.fans_per_round_won,
        team.rounds_won,
    ) {
        (Some(per_round), Some(played), Some(per_round_won), Some(won))
            if per_round != 0 && played != 0 && per_round_won != 0 && won != 0 =>
        {
            per_round * played + per_round_won * won
        }
        _ => 0,
    }
}

/// Parse a stored match timestamp into a UTC datetime.
///
/// Accepts RFC 3339 (with offset or `Z`), offset-less datetimes taken as
/// UTC, and bare dates.
pub(crate) fn parse_match_date(s: &str) -> Option<DateTime<Utc>> {
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    const FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
    for fmt in FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?));
    }

    None
}
