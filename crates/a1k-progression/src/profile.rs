//! Per-player progression the arena carries between runs: skill tree,
//! loadout presets and accessibility settings.

use a1k_core::events::CombatEvent;

use crate::accessibility::AccessibilitySystem;
use crate::presets::SkillPresetSystem;
use crate::skill_tree::SkillTree;
use crate::storage::{Storage, StorageError};

pub struct PlayerProfile<S: Storage> {
    pub skill_tree: SkillTree<S>,
    pub presets: SkillPresetSystem<S>,
    pub accessibility: AccessibilitySystem<S>,
}

impl<S: Storage + Clone> PlayerProfile<S> {
    /// Restore every part from the same store.
    pub fn load(storage: S) -> Self {
        Self {
            skill_tree: SkillTree::load(storage.clone()),
            presets: SkillPresetSystem::load(storage.clone()),
            accessibility: AccessibilitySystem::load(storage),
        }
    }
}

impl<S: Storage> PlayerProfile<S> {
    /// Write every part, stopping at the first storage failure.
    pub fn flush(&self) -> Result<(), StorageError> {
        self.skill_tree.flush()?;
        self.presets.flush()?;
        self.accessibility.flush()
    }

    pub fn drain_events(&mut self) -> Vec<CombatEvent> {
        let mut events = self.skill_tree.drain_events();
        events.extend(self.presets.drain_events());
        events
    }
}
