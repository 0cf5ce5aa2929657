//! Loading a player export file from disk.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::types::PlayerExport;

/// Read and parse a player export JSON file.
pub fn load_player_export(path: &Path) -> Result<PlayerExport> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read export file {}", path.display()))?;
    let export: PlayerExport = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse export file {}", path.display()))?;
    Ok(export)
}
