//! Spectre Divide Player Stats Library
//!
//! A Rust library and CLI for turning a player's raw match-participation
//! export into a normalized match history and multi-dimensional career
//! statistics.
//!
//! ## Features
//!
//! - **Match Normalization**: Deeply nested relational match rows become
//!   clean, typed match records with a computed winner
//! - **Season Classification**: Match timestamps map onto four-month
//!   seasons counted from release, with a distinct pre-release "Beta"
//! - **Career Aggregation**: Running totals and peaks by season, map,
//!   and sponsor, plus a rolling window over the most recent 20 matches
//! - **Tolerant Input**: Absent or null fields never abort a build;
//!   malformed rows are dropped, not surfaced
//!
//! ## Quick Start
//!
//! ```rust
//! use spectre_stats::{build_full_profile, PlayerId};
//! use spectre_stats::spectre::types::{PlayerProfile, RawMatchPlayer};
//!
//! let profile = PlayerProfile {
//!     id: "8d02f2c0-69b8-4cee-9656-2d0866b44e9b".to_string(),
//!     ..Default::default()
//! };
//! let subject = PlayerId::new(profile.id.clone());
//! let rows: Vec<RawMatchPlayer> = Vec::new();
//!
//! let full_profile = build_full_profile(profile, &rows, &subject);
//! assert!(full_profile.matches.is_empty());
//! assert!(full_profile.extended_stats.is_none());
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod profile;
pub mod spectre;

// Re-export commonly used types
pub use cli::types::PlayerId;
pub use error::{Result, StatsError};
pub use profile::build_full_profile;
pub use profile::types::{ExtendedStatsReport, MatchOutcome, PlayerFullProfile, PlayerMatch};
