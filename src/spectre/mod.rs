//! Raw data-service shapes: relational match rows and the player export.

pub mod export;
pub mod types;
