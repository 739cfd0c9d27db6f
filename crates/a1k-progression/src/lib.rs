//! Persistent player progression for A1K.
//!
//! Every feature here owns one JSON blob under its own storage key:
//! skill mastery, the skill tree, skill mods, loadout presets and
//! accessibility settings. `PlayerProfile` bundles the last three.
//! Storage failures are logged and never abort gameplay; callers that
//! need the error can `flush()` explicitly.

pub mod accessibility;
pub mod mastery;
pub mod mods;
pub mod persist;
pub mod presets;
pub mod profile;
pub mod skill_tree;
pub mod storage;

pub use a1k_core as core;
pub use profile::PlayerProfile;
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};

/// Storage key for each persisted feature.
pub mod keys {
    pub const SKILL_MASTERY: &str = "skillMastery";
    pub const SKILL_TREE: &str = "skillTree";
    pub const SKILL_MODS: &str = "skillMods";
    pub const SKILL_PRESETS: &str = "skillPresets";
    pub const ACCESSIBILITY: &str = "accessibilitySettings";
}

#[cfg(test)]
mod tests;
