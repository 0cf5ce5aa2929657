//! Career stats aggregation over a normalized match history.

use super::season::{season_label, BETA_SEASON};
use super::types::{
    ExtendedStats, ExtendedStatsReport, MapStats, MatchOutcome, MatchPlayer, PlayerMatch,
    SeasonStats, SponsorStats,
};
use crate::cli::types::PlayerId;

#[cfg(test)]
mod tests;

/// How many of the most recent matches feed the rolling-average bucket.
const RECENT_MATCHES_WINDOW: usize = 20;

/// Fold a match history into season, map, and sponsor buckets plus the
/// most-recent-window bucket.
///
/// `matches` must already be sorted by descending match date; the window
/// bucket takes the first entries of that ordering. A match where the
/// subject cannot be found in the projected team contributes to no
/// bucket. Buckets never touched stay absent from their maps.
pub fn calculate_extended_stats(
    matches: &[PlayerMatch],
    player_id: &PlayerId,
) -> ExtendedStatsReport {
    let mut report = ExtendedStatsReport::default();

    for (index, m) in matches.iter().enumerate() {
        let Some(player) = m
            .player_team
            .players
            .iter()
            .find(|p| p.id == player_id.as_str())
        else {
            continue;
        };

        let season = season_label(m.match_date);
        report
            .season_stats
            .entry(season.clone())
            .or_insert_with(|| SeasonStats::new(season))
            .record(player, m);

        report
            .map_stats
            .entry(m.map.clone())
            .or_insert_with(|| MapStats::new(m.map.clone()))
            .record(player, m);

        if !player.sponsor_id.is_empty() {
            report
                .sponsor_stats
                .entry(player.sponsor_id.clone())
                .or_insert_with(|| {
                    SponsorStats::new(player.sponsor_id.clone(), player.sponsor_name.clone())
                })
                .record(player, m);
        }

        if index < RECENT_MATCHES_WINDOW {
            report.last_20_matches_avg_stats.record(player, m);
        }
    }

    report.finalize();
    report
}

impl ExtendedStats {
    /// Fold one match's stat line into the running totals.
    pub(crate) fn record(&mut self, player: &MatchPlayer, m: &PlayerMatch) {
        self.total_kills += player.kills;
        self.total_assists += player.assists;
        self.total_deaths += player.deaths;
        self.total_damage_dealt += player.damage_dealt;
        self.total_rounds_played += m.rounds;

        match m.winner {
            MatchOutcome::Win => self.total_wins += 1,
            MatchOutcome::Loss => self.total_losses += 1,
            MatchOutcome::Draw => self.total_draws += 1,
        }

        self.top_damage_dealt = self.top_damage_dealt.max(player.damage_dealt);
        self.top_kills = self.top_kills.max(player.kills);
        self.top_assists = self.top_assists.max(player.assists);
        self.top_deaths = self.top_deaths.max(player.deaths);
    }

    /// Derive rates and percentages from the totals.
    ///
    /// No zero-denominator guard: degenerate inputs produce non-finite
    /// values, which are kept as-is.
    pub(crate) fn finalize(&mut self) {
        let total_matches = (self.total_wins + self.total_losses + self.total_draws) as f64;
        self.average_win_percentage = self.total_wins as f64 / total_matches * 100.0;

        let rounds = self.total_rounds_played as f64;
        self.average_damage_per_round = self.total_damage_dealt as f64 / rounds;
        self.average_kills_per_round = self.total_kills as f64 / rounds;
        self.average_assists_per_round = self.total_assists as f64 / rounds;
        self.average_deaths_per_round = self.total_deaths as f64 / rounds;
    }
}

impl SeasonStats {
    pub(crate) fn new(season: String) -> Self {
        let top_rank_id = if season == BETA_SEASON {
            BETA_SEASON.to_string()
        } else {
            String::new()
        };
        Self {
            stats: ExtendedStats::default(),
            season,
            top_rank_id,
            top_rank_rating: 0,
        }
    }

    /// Record the stat line and track the season's peak rating; the
    /// pre-release season keeps no peak.
    pub(crate) fn record(&mut self, player: &MatchPlayer, m: &PlayerMatch) {
        self.stats.record(player, m);

        if self.season != BETA_SEASON && player.ranked_rating > self.top_rank_rating {
            self.top_rank_rating = player.ranked_rating;
            self.top_rank_id = player.rank_id.to_string();
        }
    }
}

impl MapStats {
    pub(crate) fn new(map: String) -> Self {
        Self {
            stats: ExtendedStats::default(),
            map,
        }
    }

    pub(crate) fn record(&mut self, player: &MatchPlayer, m: &PlayerMatch) {
        self.stats.record(player, m);
    }
}

impl SponsorStats {
    pub(crate) fn new(sponsor_id: String, sponsor_name: String) -> Self {
        Self {
            stats: ExtendedStats::default(),
            sponsor_id,
            sponsor_name,
        }
    }

    pub(crate) fn record(&mut self, player: &MatchPlayer, m: &PlayerMatch) {
        self.stats.record(player, m);
    }
}

impl ExtendedStatsReport {
    pub(crate) fn finalize(&mut self) {
        for season in self.season_stats.values_mut() {
            season.stats.finalize();
        }
        for map in self.map_stats.values_mut() {
            map.stats.finalize();
        }
        for sponsor in self.sponsor_stats.values_mut() {
            sponsor.stats.finalize();
        }
        self.last_20_matches_avg_stats.finalize();
    }
}
