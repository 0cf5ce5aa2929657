//! Type-safe wrappers for Spectre player data identifiers.

use crate::error::{Result, StatsError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Player ids are version-4 UUIDs, stored lowercase.
static UUID_V4_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-f0-9]{8}-[a-f0-9]{4}-4[a-f0-9]{3}-[89ab][a-f0-9]{3}-[a-f0-9]{12}$")
        .expect("uuid regex")
});

/// Type-safe wrapper for Spectre player IDs.
///
/// Player ids coming in from the CLI are validated as version-4 UUIDs and
/// lowercased; ids read out of an export are taken as stored.
///
/// # Examples
///
/// ```rust
/// use spectre_stats::PlayerId;
/// use std::str::FromStr;
///
/// let id = PlayerId::from_str("8d02f2c0-69b8-4cee-9656-2d0866b44e9b").unwrap();
/// assert_eq!(id.as_str(), "8d02f2c0-69b8-4cee-9656-2d0866b44e9b");
/// assert!(PlayerId::from_str("not-a-uuid").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    /// Wrap an id already known to be valid (e.g. the export's own profile id).
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_lowercase();
        if UUID_V4_RE.is_match(&lower) {
            Ok(Self(lower))
        } else {
            Err(StatsError::InvalidPlayerId { id: s.to_string() })
        }
    }
}
