//! Rank-specific movement profiles.
//!
//! Consolidates per-tier parameters for the brain FSM.

use a1k_core::constants::*;
use a1k_core::enums::RankTier;
use a1k_ranks::tier_config;

/// Movement and timing profile for an enemy of a given tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrainProfile {
    /// Seek speed toward the player (pixels per tick).
    pub chase_speed: f64,
    /// Seek speed back home (pixels per tick).
    pub patrol_speed: f64,
    /// Ticks between strikes.
    pub attack_cooldown_ticks: u32,
}

impl Default for BrainProfile {
    fn default() -> Self {
        Self {
            chase_speed: BRAIN_CHASE_SPEED,
            patrol_speed: BRAIN_PATROL_SPEED,
            attack_cooldown_ticks: BRAIN_ATTACK_COOLDOWN_TICKS,
        }
    }
}

/// Get the movement profile for a tier. Speeds scale with the tier's
/// speed multiplier; the strike cadence is shared by all tiers.
pub fn get_profile(tier: RankTier) -> BrainProfile {
    let speed = tier_config(tier).speed_multiplier;
    BrainProfile {
        chase_speed: BRAIN_CHASE_SPEED * speed,
        patrol_speed: BRAIN_PATROL_SPEED * speed,
        attack_cooldown_ticks: BRAIN_ATTACK_COOLDOWN_TICKS,
    }
}
