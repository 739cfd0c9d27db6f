//! Named skill loadouts.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use a1k_core::enums::CharacterId;
use a1k_core::events::CombatEvent;

use crate::keys;
use crate::persist;
use crate::storage::{Storage, StorageError};

/// Slot name to equipped skill id.
pub type Loadout = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillPreset {
    pub name: String,
    pub character_id: CharacterId,
    pub skills: Loadout,
    /// Save time in milliseconds.
    pub timestamp: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresetError {
    #[error("preset `{0}` not found")]
    NotFound(String),
}

pub struct SkillPresetSystem<S: Storage> {
    presets: HashMap<String, SkillPreset>,
    storage: S,
    events: Vec<CombatEvent>,
}

impl<S: Storage> SkillPresetSystem<S> {
    pub fn load(storage: S) -> Self {
        let presets = persist::load_or_default(&storage, keys::SKILL_PRESETS);
        Self {
            presets,
            storage,
            events: Vec::new(),
        }
    }

    /// Store `loadout` under `name`, replacing any preset of that name.
    pub fn save_preset(&mut self, name: &str, character_id: CharacterId, loadout: &Loadout, now_ms: u64) {
        let preset = SkillPreset {
            name: name.to_string(),
            character_id,
            skills: loadout.clone(),
            timestamp: now_ms,
        };
        self.presets.insert(name.to_string(), preset);
        info!(name, character = ?character_id, "preset saved");
        self.save();
    }

    /// Loadout stored under `name`.
    pub fn load_preset(&mut self, name: &str) -> Result<Loadout, PresetError> {
        let preset = self
            .presets
            .get(name)
            .ok_or_else(|| PresetError::NotFound(name.to_string()))?;
        let skills = preset.skills.clone();
        self.events.push(CombatEvent::PresetLoaded {
            name: name.to_string(),
        });
        Ok(skills)
    }

    pub fn delete_preset(&mut self, name: &str) -> bool {
        if self.presets.remove(name).is_none() {
            return false;
        }
        self.save();
        true
    }

    pub fn get(&self, name: &str) -> Option<&SkillPreset> {
        self.presets.get(name)
    }

    /// Every preset, oldest first.
    pub fn all(&self) -> Vec<&SkillPreset> {
        let mut presets: Vec<_> = self.presets.values().collect();
        presets.sort_by(|a, b| a.timestamp.cmp(&b.timestamp).then_with(|| a.name.cmp(&b.name)));
        presets
    }

    pub fn flush(&self) -> Result<(), StorageError> {
        persist::write_json(&self.storage, keys::SKILL_PRESETS, &self.presets)
    }

    pub fn drain_events(&mut self) -> Vec<CombatEvent> {
        std::mem::take(&mut self.events)
    }

    fn save(&self) {
        persist::save_or_warn(&self.storage, keys::SKILL_PRESETS, &self.presets);
    }
}
