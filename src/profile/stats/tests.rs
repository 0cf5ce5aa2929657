//! Unit tests for stats aggregation and finalization

use super::*;
use crate::profile::types::MatchTeam;
use chrono::{DateTime, TimeZone, Utc};

const SUBJECT: &str = "8d02f2c0-69b8-4cee-9656-2d0866b44e9b";

fn subject_id() -> PlayerId {
    PlayerId::new(SUBJECT)
}

fn stat_line(kills: i64, assists: i64, deaths: i64, damage: i64) -> MatchPlayer {
    MatchPlayer {
        id: SUBJECT.to_string(),
        name: "truo".to_string(),
        kills,
        assists,
        deaths,
        damage_dealt: damage,
        teammate_index: 0,
        sponsor_id: String::new(),
        sponsor_name: String::new(),
        ranked_rating: 0,
        previous_ranked_rating: 0,
        ranked_rating_delta: 0,
        rank_id: 0,
        previous_rank_id: 0,
        banner_id: String::new(),
        crew_score: 0,
        crew_id: String::new(),
        team_id: String::new(),
        division_id: String::new(),
        num_ranked_matches: 0,
        is_anonymous: false,
    }
}

fn team_of(players: Vec<MatchPlayer>) -> MatchTeam {
    MatchTeam {
        id: String::new(),
        team_id: String::new(),
        team_index: 0,
        rounds_won: 0,
        rounds_played: 0,
        xp_earned: 0,
        fans_earned: 0,
        used_team_rank: false,
        team_rank: 0,
        previous_team_rank: 0,
        num_ranked_matches: 0,
        ranked_rating: 0,
        ranked_rating_delta: 0,
        previous_ranked_rating: 0,
        is_full_party: false,
        players,
    }
}

fn match_on(
    date: DateTime<Utc>,
    map: &str,
    winner: MatchOutcome,
    rounds: i64,
    players: Vec<MatchPlayer>,
) -> PlayerMatch {
    PlayerMatch {
        id: String::new(),
        region: "NA".to_string(),
        is_ranked: true,
        queue_name: "ranked".to_string(),
        map: map.to_string(),
        game_mode: "default".to_string(),
        surrendered_team: Some(-1),
        is_abandoned: false,
        match_date: date,
        rounds,
        winner,
        player_team: team_of(players),
        opponent_team: None,
    }
}

fn day(n: u32) -> DateTime<Utc> {
    // All in 2025-S1.
    Utc.with_ymd_and_hms(2025, 2, n, 12, 0, 0).unwrap()
}

#[test]
fn test_totals_and_peaks_per_map() {
    let matches = vec![
        match_on(day(2), "Commons", MatchOutcome::Win, 10, vec![stat_line(7, 1, 4, 2100)]),
        match_on(day(1), "Commons", MatchOutcome::Loss, 12, vec![stat_line(5, 3, 6, 1800)]),
    ];
    let report = calculate_extended_stats(&matches, &subject_id());

    let commons = &report.map_stats["Commons"];
    assert_eq!(commons.map, "Commons");
    assert_eq!(commons.stats.total_kills, 12);
    assert_eq!(commons.stats.total_assists, 4);
    assert_eq!(commons.stats.total_deaths, 10);
    assert_eq!(commons.stats.total_damage_dealt, 3900);
    assert_eq!(commons.stats.total_rounds_played, 22);
    assert_eq!(commons.stats.top_kills, 7);
    assert_eq!(commons.stats.top_damage_dealt, 2100);
    assert_eq!(commons.stats.total_wins, 1);
    assert_eq!(commons.stats.total_losses, 1);
    assert_eq!(commons.stats.total_draws, 0);
}

#[test]
fn test_untouched_buckets_stay_absent() {
    let matches = vec![match_on(
        day(1),
        "Commons",
        MatchOutcome::Win,
        9,
        vec![stat_line(4, 2, 3, 900)],
    )];
    let report = calculate_extended_stats(&matches, &subject_id());

    assert_eq!(report.map_stats.len(), 1);
    assert_eq!(report.season_stats.len(), 1);
    assert!(report.sponsor_stats.is_empty());
}

#[test]
fn test_missing_subject_contributes_nothing() {
    let mut other = stat_line(9, 9, 9, 9000);
    other.id = "someone-else".to_string();
    let matches = vec![match_on(day(1), "Commons", MatchOutcome::Win, 9, vec![other])];

    let report = calculate_extended_stats(&matches, &subject_id());
    assert!(report.map_stats.is_empty());
    assert!(report.season_stats.is_empty());
    assert_eq!(report.last_20_matches_avg_stats.total_rounds_played, 0);
}

#[test]
fn test_sponsor_bucket_requires_sponsor_id() {
    let mut sponsored = stat_line(3, 0, 2, 500);
    sponsored.sponsor_id = "sp-umbra".to_string();
    sponsored.sponsor_name = "Umbra Reconnaissance".to_string();

    let matches = vec![
        match_on(day(2), "Metro", MatchOutcome::Win, 8, vec![sponsored]),
        match_on(day(1), "Metro", MatchOutcome::Loss, 8, vec![stat_line(1, 1, 1, 100)]),
    ];
    let report = calculate_extended_stats(&matches, &subject_id());

    assert_eq!(report.sponsor_stats.len(), 1);
    let bucket = &report.sponsor_stats["sp-umbra"];
    assert_eq!(bucket.sponsor_name, "Umbra Reconnaissance");
    assert_eq!(bucket.stats.total_kills, 3);
    // The unsponsored match still lands in the map bucket.
    assert_eq!(report.map_stats["Metro"].stats.total_kills, 4);
}

#[test]
fn test_season_peak_rating_tracked_with_rank_id() {
    let mut first = stat_line(2, 0, 1, 300);
    first.ranked_rating = 1250;
    first.rank_id = 17;
    let mut second = stat_line(3, 0, 2, 400);
    second.ranked_rating = 1100;
    second.rank_id = 15;

    let matches = vec![
        match_on(day(2), "Commons", MatchOutcome::Win, 9, vec![first]),
        match_on(day(1), "Commons", MatchOutcome::Win, 9, vec![second]),
    ];
    let report = calculate_extended_stats(&matches, &subject_id());

    let season = &report.season_stats["2025-S1"];
    assert_eq!(season.season, "2025-S1");
    assert_eq!(season.top_rank_rating, 1250);
    assert_eq!(season.top_rank_id, "17");
}

#[test]
fn test_equal_rating_keeps_first_peak() {
    let mut first = stat_line(0, 0, 0, 0);
    first.ranked_rating = 1200;
    first.rank_id = 16;
    let mut second = stat_line(0, 0, 0, 0);
    second.ranked_rating = 1200;
    second.rank_id = 14;

    let matches = vec![
        match_on(day(2), "Commons", MatchOutcome::Win, 9, vec![first]),
        match_on(day(1), "Commons", MatchOutcome::Win, 9, vec![second]),
    ];
    let report = calculate_extended_stats(&matches, &subject_id());
    assert_eq!(report.season_stats["2025-S1"].top_rank_id, "16");
}

#[test]
fn test_beta_season_skips_peak_rating() {
    let mut line = stat_line(2, 0, 1, 300);
    line.ranked_rating = 1400;
    line.rank_id = 20;

    let beta_day = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let matches = vec![match_on(beta_day, "Commons", MatchOutcome::Win, 9, vec![line])];
    let report = calculate_extended_stats(&matches, &subject_id());

    let beta = &report.season_stats["Beta"];
    assert_eq!(beta.top_rank_rating, 0);
    assert_eq!(beta.top_rank_id, "Beta");
}

#[test]
fn test_recent_window_folds_first_twenty() {
    let matches: Vec<PlayerMatch> = (0..25)
        .map(|i| {
            match_on(
                day(28 - i),
                "Commons",
                MatchOutcome::Win,
                10,
                vec![stat_line(1, 0, 0, 100)],
            )
        })
        .collect();
    let report = calculate_extended_stats(&matches, &subject_id());

    let recent = &report.last_20_matches_avg_stats;
    assert_eq!(recent.total_wins, 20);
    assert_eq!(recent.total_rounds_played, 200);
    assert_eq!(recent.total_kills, 20);
    // The full-history buckets still see all 25.
    assert_eq!(report.map_stats["Commons"].stats.total_wins, 25);
}

#[test]
fn test_finalize_win_percentage_and_rates() {
    let matches = vec![
        match_on(day(4), "Commons", MatchOutcome::Win, 10, vec![stat_line(5, 2, 3, 1000)]),
        match_on(day(3), "Commons", MatchOutcome::Win, 10, vec![stat_line(5, 2, 3, 1000)]),
        match_on(day(2), "Commons", MatchOutcome::Win, 10, vec![stat_line(5, 2, 3, 1000)]),
        match_on(day(1), "Commons", MatchOutcome::Loss, 10, vec![stat_line(5, 2, 3, 1000)]),
    ];
    let report = calculate_extended_stats(&matches, &subject_id());

    let stats = &report.map_stats["Commons"].stats;
    assert_eq!(stats.average_win_percentage, 75.0);
    assert_eq!(stats.average_damage_per_round, 100.0);
    assert_eq!(stats.average_kills_per_round, 0.5);
    assert_eq!(stats.average_assists_per_round, 0.2);
    assert_eq!(stats.average_deaths_per_round, 0.3);
}

#[test]
fn test_finalize_zero_rounds_propagates_non_finite() {
    let matches = vec![match_on(
        day(1),
        "Commons",
        MatchOutcome::Win,
        0,
        vec![stat_line(5, 0, 0, 1000)],
    )];
    let report = calculate_extended_stats(&matches, &subject_id());

    let stats = &report.map_stats["Commons"].stats;
    assert!(stats.average_damage_per_round.is_infinite());
    assert!(stats.average_assists_per_round.is_nan());
    // The win percentage denominator is fine here.
    assert_eq!(stats.average_win_percentage, 100.0);
}

#[test]
fn test_draws_count_toward_total_matches() {
    let matches = vec![
        match_on(day(2), "Commons", MatchOutcome::Win, 10, vec![stat_line(1, 0, 0, 100)]),
        match_on(day(1), "Commons", MatchOutcome::Draw, 10, vec![stat_line(1, 0, 0, 100)]),
    ];
    let report = calculate_extended_stats(&matches, &subject_id());

    let stats = &report.map_stats["Commons"].stats;
    assert_eq!(stats.total_draws, 1);
    assert_eq!(stats.average_win_percentage, 50.0);
}
