//! Difficulty presets and a single-number rating of skill power.

use std::f64::consts::PI;

use thiserror::Error;

use a1k_core::constants::DEFAULT_SKILL_RANGE;
use a1k_core::enums::Difficulty;
use a1k_core::types::SkillStats;

use crate::catalog::{Delivery, SkillDef};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BalanceError {
    #[error("unknown difficulty preset `{0}`")]
    UnknownPreset(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalanceMultipliers {
    pub damage: f64,
    pub cooldown: f64,
}

pub fn multipliers(difficulty: Difficulty) -> BalanceMultipliers {
    let (damage, cooldown) = match difficulty {
        Difficulty::Normal => (1.0, 1.0),
        Difficulty::Easy => (1.5, 0.8),
        Difficulty::Hard => (0.7, 1.3),
    };
    BalanceMultipliers { damage, cooldown }
}

pub fn parse_difficulty(name: &str) -> Result<Difficulty, BalanceError> {
    Difficulty::ALL
        .into_iter()
        .find(|d| d.as_str().eq_ignore_ascii_case(name))
        .ok_or_else(|| BalanceError::UnknownPreset(name.to_string()))
}

/// Scale `stats` by the preset. Damage is floored.
pub fn apply(stats: SkillStats, difficulty: Difficulty) -> SkillStats {
    let m = multipliers(difficulty);
    SkillStats {
        damage: (stats.damage * m.damage).floor(),
        cooldown: stats.cooldown * m.cooldown,
        ..stats
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Effectiveness {
    pub dps: f64,
    pub range: f64,
    /// Area covered, zero for single-target skills.
    pub aoe: f64,
    pub total_score: f64,
}

pub fn effectiveness(stats: &SkillStats, radius: Option<f64>) -> Effectiveness {
    let cooldown = if stats.cooldown > 0.0 { stats.cooldown } else { 1.0 };
    let dps = stats.damage / cooldown;
    let range = stats.range.unwrap_or(DEFAULT_SKILL_RANGE);
    let aoe = radius.map_or(0.0, |r| PI * r * r);
    Effectiveness {
        dps,
        range,
        aoe,
        total_score: dps * (1.0 + range / 100.0) * (1.0 + aoe / 1000.0),
    }
}

/// Rate a catalog skill; bursts count their radius as area.
pub fn skill_effectiveness(def: &SkillDef) -> Effectiveness {
    let radius = match def.delivery {
        Delivery::Burst { radius } => Some(radius),
        _ => None,
    };
    effectiveness(&def.stats(), radius)
}
