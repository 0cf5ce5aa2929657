//! Normalized match history and career stats shapes.

use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

use crate::spectre::types::PlayerProfile;

/// Outcome of a match from the subject's perspective.
///
/// Serialized as `-1` (draw), `0` (loss), or `1` (win).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Draw,
    Loss,
    Win,
}

impl MatchOutcome {
    pub fn as_i8(self) -> i8 {
        match self {
            MatchOutcome::Draw => -1,
            MatchOutcome::Loss => 0,
            MatchOutcome::Win => 1,
        }
    }

    pub fn from_i8(value: i8) -> Option<Self> {
        match value {
            -1 => Some(MatchOutcome::Draw),
            0 => Some(MatchOutcome::Loss),
            1 => Some(MatchOutcome::Win),
            _ => None,
        }
    }

    /// Coerce a surrender indicator into the winner domain: a surrendering
    /// side of 0 or below reads as a loss, anything else as a win.
    pub fn from_surrender(indicator: i64) -> Self {
        if indicator <= 0 {
            MatchOutcome::Loss
        } else {
            MatchOutcome::Win
        }
    }
}

impl Serialize for MatchOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i8(self.as_i8())
    }
}

impl<'de> Deserialize<'de> for MatchOutcome {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = i8::deserialize(deserializer)?;
        MatchOutcome::from_i8(value)
            .ok_or_else(|| de::Error::custom(format!("invalid match outcome: {value}")))
    }
}

/// One player's stat line within a match team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchPlayer {
    pub id: String,
    pub name: String,
    pub kills: i64,
    pub assists: i64,
    pub deaths: i64,
    pub damage_dealt: i64,
    pub teammate_index: i64,
    pub sponsor_id: String,
    pub sponsor_name: String,
    pub ranked_rating: i64,
    pub previous_ranked_rating: i64,
    /// Always `ranked_rating - previous_ranked_rating`, never the stored value.
    pub ranked_rating_delta: i64,
    pub rank_id: i64,
    pub previous_rank_id: i64,
    pub banner_id: String,
    pub crew_score: i64,
    pub crew_id: String,
    pub team_id: String,
    pub division_id: String,
    pub num_ranked_matches: i64,
    pub is_anonymous: bool,
}

/// One side of a match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchTeam {
    pub id: String,
    pub team_id: String,
    pub team_index: i64,
    pub rounds_won: i64,
    pub rounds_played: i64,
    pub xp_earned: i64,
    pub fans_earned: i64,
    pub used_team_rank: bool,
    pub team_rank: i64,
    pub previous_team_rank: i64,
    pub num_ranked_matches: i64,
    pub ranked_rating: i64,
    pub ranked_rating_delta: i64,
    pub previous_ranked_rating: i64,
    pub is_full_party: bool,
    /// Order is preserved as received, one entry per raw player row that
    /// carried a player id.
    pub players: Vec<MatchPlayer>,
}

/// A normalized match from the subject's perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerMatch {
    pub id: String,
    pub region: String,
    pub is_ranked: bool,
    pub queue_name: String,
    pub map: String,
    pub game_mode: String,
    pub surrendered_team: Option<i64>,
    pub is_abandoned: bool,
    pub match_date: DateTime<Utc>,
    pub rounds: i64,
    pub winner: MatchOutcome,
    pub player_team: MatchTeam,
    /// Absent when the raw payload carried only one team.
    pub opponent_team: Option<MatchTeam>,
}

/// Running totals for one classification bucket.
///
/// The `average_*` fields stay zero until the finalize pass derives them
/// from the totals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtendedStats {
    pub total_kills: i64,
    pub total_assists: i64,
    pub total_deaths: i64,
    pub total_damage_dealt: i64,
    pub total_wins: i64,
    pub total_losses: i64,
    pub total_draws: i64,
    pub total_rounds_played: i64,
    pub top_damage_dealt: i64,
    pub top_kills: i64,
    pub top_assists: i64,
    pub top_deaths: i64,
    pub average_win_percentage: f64,
    pub average_damage_per_round: f64,
    pub average_kills_per_round: f64,
    pub average_assists_per_round: f64,
    pub average_deaths_per_round: f64,
}

/// Per-season bucket with peak rating tracking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonStats {
    #[serde(flatten)]
    pub stats: ExtendedStats,
    pub season: String,
    /// `"Beta"` for the pre-release season, `""` until a peak is recorded,
    /// then the rank id at the peak rating.
    pub top_rank_id: String,
    pub top_rank_rating: i64,
}

/// Per-map bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapStats {
    #[serde(flatten)]
    pub stats: ExtendedStats,
    pub map: String,
}

/// Per-sponsor bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SponsorStats {
    #[serde(flatten)]
    pub stats: ExtendedStats,
    pub sponsor_id: String,
    pub sponsor_name: String,
}

/// Career stats across every classification dimension.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtendedStatsReport {
    pub season_stats: BTreeMap<String, SeasonStats>,
    pub last_20_matches_avg_stats: ExtendedStats,
    pub map_stats: BTreeMap<String, MapStats>,
    pub sponsor_stats: BTreeMap<String, SponsorStats>,
}

/// Base profile plus normalized match history and career stats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerFullProfile {
    #[serde(flatten)]
    pub profile: PlayerProfile,
    /// Sorted by descending match date.
    pub matches: Vec<PlayerMatch>,
    /// Absent when the export carried no match rows at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended_stats: Option<ExtendedStatsReport>,
}
