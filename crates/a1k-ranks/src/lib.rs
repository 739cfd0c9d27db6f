//! Rank tiers and entity categories for A1K.
//!
//! A rank is a tier (E through SS) plus a category (boss, minion, ...).
//! Tiers map to a fixed attribute bundle used to scale spawned enemies.

pub mod config;
pub mod system;

pub use a1k_core as core;
pub use config::{category_config, tier_config, CategoryConfig, TierConfig};
pub use system::*;

use thiserror::Error;

/// Errors raised when parsing rank identifiers from data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    #[error("unknown rank tier: {0}")]
    UnknownTier(String),
    #[error("unknown entity category: {0}")]
    UnknownCategory(String),
}

#[cfg(test)]
mod tests;
