//! Per-skill mastery.
//!
//! Every use of a skill grants experience; levels follow an exponential
//! curve and each level buffs the skill's damage, cooldown and range.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use a1k_core::constants::*;
use a1k_core::events::CombatEvent;

use crate::keys;
use crate::persist;
use crate::storage::{Storage, StorageError};

/// Mastery progress of one skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasteryRecord {
    pub level: u32,
    /// Experience toward the next level.
    pub exp: f64,
    pub total_uses: u32,
}

impl Default for MasteryRecord {
    fn default() -> Self {
        Self {
            level: 1,
            exp: 0.0,
            total_uses: 0,
        }
    }
}

/// Multipliers granted by a skill's mastery level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MasteryBonuses {
    pub damage: f64,
    pub cooldown: f64,
    pub range: f64,
}

impl Default for MasteryBonuses {
    fn default() -> Self {
        Self {
            damage: 1.0,
            cooldown: 1.0,
            range: 1.0,
        }
    }
}

/// Experience needed to advance from `level`: `100 * 1.5^(level - 1)`.
pub fn exp_for_level(level: u32) -> f64 {
    MASTERY_BASE_EXP * MASTERY_EXP_GROWTH.powi(level.saturating_sub(1) as i32)
}

pub struct SkillMasterySystem<S: Storage> {
    records: HashMap<String, MasteryRecord>,
    storage: S,
    events: Vec<CombatEvent>,
}

impl<S: Storage> SkillMasterySystem<S> {
    /// Restore mastery from `storage`.
    pub fn load(storage: S) -> Self {
        let records = persist::load_or_default(&storage, keys::SKILL_MASTERY);
        Self {
            records,
            storage,
            events: Vec::new(),
        }
    }

    /// Count a use of `skill_id` and grant the per-use experience.
    pub fn record_use(&mut self, skill_id: &str) {
        self.records
            .entry(skill_id.to_string())
            .or_default()
            .total_uses += 1;
        self.add_exp(skill_id, MASTERY_EXP_PER_USE);
    }

    /// Grant experience. At most one level is gained per call and the
    /// surplus is discarded.
    pub fn add_exp(&mut self, skill_id: &str, amount: f64) {
        let record = self.records.entry(skill_id.to_string()).or_default();
        record.exp += amount;

        if record.exp >= exp_for_level(record.level) {
            record.level += 1;
            record.exp = 0.0;
            info!(skill_id, level = record.level, "skill mastery level up");
            self.events.push(CombatEvent::SkillLevelUp {
                skill_id: skill_id.to_string(),
                level: record.level,
            });
        }

        persist::save_or_warn(&self.storage, keys::SKILL_MASTERY, &self.records);
    }

    pub fn bonuses(&self, skill_id: &str) -> MasteryBonuses {
        let Some(record) = self.records.get(skill_id) else {
            return MasteryBonuses::default();
        };
        let steps = record.level.saturating_sub(1) as f64;
        MasteryBonuses {
            damage: 1.0 + steps * MASTERY_DAMAGE_PER_LEVEL,
            cooldown: (1.0 - steps * MASTERY_COOLDOWN_PER_LEVEL).max(MASTERY_COOLDOWN_FLOOR),
            range: 1.0 + steps * MASTERY_RANGE_PER_LEVEL,
        }
    }

    /// Progress of a skill; untouched skills report level 1.
    pub fn info(&self, skill_id: &str) -> MasteryRecord {
        self.records.get(skill_id).cloned().unwrap_or_default()
    }

    /// Write current state, surfacing any storage failure.
    pub fn flush(&self) -> Result<(), StorageError> {
        persist::write_json(&self.storage, keys::SKILL_MASTERY, &self.records)
    }

    pub fn drain_events(&mut self) -> Vec<CombatEvent> {
        std::mem::take(&mut self.events)
    }
}
