//! Season classification from match timestamps.
//!
//! Seasons are four calendar months wide, counted from the game's release
//! date. Anything earlier than release is the `"Beta"` season.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use once_cell::sync::Lazy;

/// Label of the pre-release season.
pub const BETA_SEASON: &str = "Beta";

const RELEASE_YEAR: i32 = 2024;
/// September, zero-based.
const RELEASE_MONTH0: i32 = 8;
const RELEASE_DAY: u32 = 3;
const SEASON_MONTHS: i32 = 4;

static RELEASE_EPOCH: Lazy<DateTime<Utc>> = Lazy::new(|| {
    Utc.with_ymd_and_hms(RELEASE_YEAR, 9, RELEASE_DAY, 0, 0, 0)
        .single()
        .expect("valid release date")
});

/// Label the season a match belongs to, e.g. `"Beta"` or `"2025-S1"`.
///
/// Calendar fields are compared as stored; no timezone conversion.
pub fn season_label(match_date: DateTime<Utc>) -> String {
    if match_date < *RELEASE_EPOCH {
        return BETA_SEASON.to_string();
    }

    let year = match_date.year();
    let month0 = match_date.month0() as i32;
    let day = match_date.day();

    let months_since_release = (year - RELEASE_YEAR) * 12 + month0 - RELEASE_MONTH0;
    let season_number = months_since_release / SEASON_MONTHS;

    // The launch month itself always reads as S0.
    if year == RELEASE_YEAR && month0 == RELEASE_MONTH0 && day >= RELEASE_DAY {
        return format!("{RELEASE_YEAR}-S0");
    }

    format!("{year}-S{season_number}")
}
