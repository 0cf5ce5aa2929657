use serde::{Deserialize, Serialize};


/// One `spectre_match_player` row.
///
/// The same table backs two positions in the export: the subject's own
/// participation rows (which carry the nested `spectre_match_team` chain)
/// and the per-team player lists embedded inside a match payload (which
/// don't). Every scalar is optional; the projector applies the default
/// rules, not serde.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawMatchPlayer {
    pub player: Option<String>,
    pub saved_player_name: Option<String>,
    pub num_kills: Option<i64>,
    pub num_assists: Option<i64>,
    pub num_deaths: Option<i64>,
    pub total_damage_done: Option<i64>,
    pub teammate_index: Option<i64>,
    pub selected_sponsor: Option<String>,
    pub saved_sponsor_name: Option<String>,
    pub current_ranked_rating: Option<i64>,
    pub previous_ranked_rating: Option<i64>,
    /// Stored delta; the projector recomputes it from the two ratings.
    pub ranked_rating_delta: Option<i64>,
    pub current_rank_id: Option<i64>,
    pub previous_rank_id: Option<i64>,
    pub selected_banner_catalog_id: Option<String>,
    pub crew: Option<String>,
    pub crew_score: Option<i64>,
    pub team: Option<String>,
    pub division: Option<String>,
    pub num_ranked_matches: Option<i64>,
    pub is_anonymous_player: Option<bool>,
    /// Present only on the subject's participation rows.
    pub spectre_match_team: Option<Box<RawMatchTeam>>,
}

/// One `spectre_match_team` row.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawMatchTeam {
    pub id: Option<String>,
    pub team: Option<String>,
    pub team_index: Option<i64>,
    pub rounds_won: Option<i64>,
    pub rounds_played: Option<i64>,
    pub xp_per_round: Option<i64>,
    pub xp_per_round_won: Option<i64>,
    pub fans_per_round: Option<i64>,
    pub fans_per_round_won: Option<i64>,
    pub used_team_rank: Option<bool>,
    pub current_rank_id: Option<i64>,
    pub previous_rank_id: Option<i64>,
    pub current_ranked_rating: Option<i64>,
    pub previous_ranked_rating: Option<i64>,
    pub ranked_rating_delta: Option<i64>,
    pub num_ranked_matches: Option<i64>,
    pub is_full_team_in_party: Option<bool>,
    #[serde(default)]
    pub spectre_match_player: Vec<RawMatchPlayer>,
    /// Present only on the participation path, pointing back at the match.
    pub spectre_match: Option<Box<RawMatch>>,
}

/// One `spectre_match` row, with the complete team list embedded.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawMatch {
    pub id: Option<String>,
    pub region: Option<String>,
    pub is_ranked: Option<bool>,
    pub queue_name: Option<String>,
    pub queue_game_map: Option<String>,
    pub queue_game_mode: Option<String>,
    /// -1 when nobody surrendered; otherwise the winning side.
    pub surrendered_team: Option<i64>,
    pub is_abandoned_match: Option<bool>,
    pub match_date: Option<String>,
    #[serde(default)]
    pub spectre_match_team: Vec<RawMatchTeam>,
}

/// Steam avatar URLs as stored on the base profile.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SteamAvatar {
    pub small: Option<String>,
    pub medium: Option<String>,
    pub large: Option<String>,
    pub hash: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SteamProfile {
    pub id: Option<String>,
    pub avatar: Option<SteamAvatar>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProfileStats {
    #[serde(default)]
    pub rank_rating: i64,
    #[serde(default)]
    pub current_solo_rank: i64,
    #[serde(default)]
    pub highest_team_rank: i64,
    pub rank_rating_last_updated: Option<String>,
}

/// Base player profile, passed through to the full profile unchanged.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlayerProfile {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub discriminator: Option<String>,
    #[serde(default)]
    pub steam_profile: SteamProfile,
    #[serde(default)]
    pub stats: ProfileStats,
}

/// On-disk envelope consumed by the CLI: the base profile plus every
/// `spectre_match_player` row the data service holds for that player.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerExport {
    pub profile: PlayerProfile,
    #[serde(default)]
    pub spectre_match_player: Vec<RawMatchPlayer>,
}
