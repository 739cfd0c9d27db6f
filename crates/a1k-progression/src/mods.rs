//! Skill mods: stacking per-skill modifiers applied on top of base stats.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use a1k_core::constants::DEFAULT_SKILL_RANGE;
use a1k_core::enums::ModKind;
use a1k_core::types::SkillStats;

use crate::keys;
use crate::persist;
use crate::storage::{Storage, StorageError};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkillMod {
    #[serde(rename = "type")]
    pub kind: ModKind,
    /// Fractional strength, e.g. `0.1` for ten percent.
    pub value: f64,
}

impl SkillMod {
    pub fn new(kind: ModKind, value: f64) -> Self {
        Self { kind, value }
    }

    fn apply(&self, stats: &mut SkillStats) {
        match self.kind {
            ModKind::Damage => stats.damage = (stats.damage * (1.0 + self.value)).floor(),
            ModKind::Cooldown => stats.cooldown *= 1.0 - self.value,
            ModKind::Range => {
                let base = stats.range.unwrap_or(DEFAULT_SKILL_RANGE);
                stats.range = Some(base * (1.0 + self.value));
            }
        }
    }
}

pub struct SkillModSystem<S: Storage> {
    mods: HashMap<String, Vec<SkillMod>>,
    storage: S,
}

impl<S: Storage> SkillModSystem<S> {
    pub fn load(storage: S) -> Self {
        let mods = persist::load_or_default(&storage, keys::SKILL_MODS);
        Self { mods, storage }
    }

    pub fn apply_mod(&mut self, skill_id: &str, skill_mod: SkillMod) {
        debug!(skill_id, kind = ?skill_mod.kind, value = skill_mod.value, "mod applied");
        self.mods.entry(skill_id.to_string()).or_default().push(skill_mod);
        self.save();
    }

    /// Remove the mod at `index`. `None` when there is none.
    pub fn remove_mod(&mut self, skill_id: &str, index: usize) -> Option<SkillMod> {
        let list = self.mods.get_mut(skill_id)?;
        if index >= list.len() {
            return None;
        }
        let removed = list.remove(index);
        self.save();
        Some(removed)
    }

    pub fn mods(&self, skill_id: &str) -> &[SkillMod] {
        self.mods.get(skill_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Fold every mod of `skill_id` over `base`, in the order applied.
    pub fn apply_bonuses(&self, skill_id: &str, base: SkillStats) -> SkillStats {
        let mut stats = base;
        for skill_mod in self.mods(skill_id) {
            skill_mod.apply(&mut stats);
        }
        stats
    }

    pub fn flush(&self) -> Result<(), StorageError> {
        persist::write_json(&self.storage, keys::SKILL_MODS, &self.mods)
    }

    fn save(&self) {
        persist::save_or_warn(&self.storage, keys::SKILL_MODS, &self.mods);
    }
}
