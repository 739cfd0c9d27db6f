use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use a1k_core::enums::{CharacterId, ModKind};
use a1k_core::events::CombatEvent;
use a1k_core::types::SkillStats;

use crate::accessibility::{AccessibilitySettings, AccessibilitySystem};
use crate::keys;
use crate::mastery::{exp_for_level, SkillMasterySystem};
use crate::mods::{SkillMod, SkillModSystem};
use crate::presets::{PresetError, SkillPresetSystem};
use crate::profile::PlayerProfile;
use crate::skill_tree::{SkillNode, SkillTree, UnlockError};
use crate::storage::{FileStorage, MemoryStorage, Storage, StorageError};

const EPS: f64 = 1e-9;

/// Reads succeed with nothing stored; every write fails.
#[derive(Clone)]
struct ReadOnlyStorage;

impl Storage for ReadOnlyStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }
    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Poisoned)
    }
    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Poisoned)
    }
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("a1k_progression_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

fn sample_tree(storage: MemoryStorage) -> SkillTree<MemoryStorage> {
    let mut tree = SkillTree::load(storage);
    tree.add_node(SkillNode::new("root", "Root", "Entry node").with_bonus("damage", 0.05));
    tree.add_node(
        SkillNode::new("power", "Power", "More damage")
            .with_cost(2)
            .requires("root")
            .at(1.0, 0.0)
            .with_bonus("damage", 0.1),
    );
    tree
}

// --- Storage ---

#[test]
fn test_memory_storage_clones_share_contents() {
    let a = MemoryStorage::new();
    let b = a.clone();
    a.set("k", "v").unwrap();
    assert_eq!(b.get("k").unwrap().as_deref(), Some("v"));
    b.remove("k").unwrap();
    assert!(a.is_empty());
}

#[test]
fn test_file_storage_roundtrip_and_missing_key() {
    let dir = scratch_dir("file_storage");
    let storage = FileStorage::new(&dir);

    assert_eq!(storage.get("skillTree").unwrap(), None);
    storage.set("skillTree", "{\"skillPoints\":3}").unwrap();
    assert!(dir.join("game_skillTree.json").exists());
    assert_eq!(
        storage.get("skillTree").unwrap().as_deref(),
        Some("{\"skillPoints\":3}")
    );

    storage.remove("skillTree").unwrap();
    storage.remove("skillTree").unwrap();
    assert_eq!(storage.get("skillTree").unwrap(), None);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_corrupt_blob_falls_back_to_defaults() {
    let storage = MemoryStorage::new();
    storage.set(keys::SKILL_MASTERY, "not json").unwrap();
    let mastery = SkillMasterySystem::load(storage);
    assert_eq!(mastery.info("A1_S1").level, 1);
}

// --- Mastery ---

#[test]
fn test_exp_curve() {
    assert!((exp_for_level(1) - 100.0).abs() < EPS);
    assert!((exp_for_level(2) - 150.0).abs() < EPS);
    assert!((exp_for_level(3) - 225.0).abs() < EPS);
}

#[test]
fn test_ten_uses_reach_level_two() {
    let mut mastery = SkillMasterySystem::load(MemoryStorage::new());
    for _ in 0..9 {
        mastery.record_use("A1_S1");
    }
    assert_eq!(mastery.info("A1_S1").level, 1);
    assert!(mastery.drain_events().is_empty());

    mastery.record_use("A1_S1");
    let info = mastery.info("A1_S1");
    assert_eq!(info.level, 2);
    assert_eq!(info.exp, 0.0);
    assert_eq!(info.total_uses, 10);
    assert_eq!(
        mastery.drain_events(),
        vec![CombatEvent::SkillLevelUp {
            skill_id: "A1_S1".into(),
            level: 2
        }]
    );
}

#[test]
fn test_large_grant_gains_single_level() {
    let mut mastery = SkillMasterySystem::load(MemoryStorage::new());
    mastery.add_exp("A1_S3", 10_000.0);
    let info = mastery.info("A1_S3");
    assert_eq!(info.level, 2);
    assert_eq!(info.exp, 0.0);
}

#[test]
fn test_mastery_bonuses() {
    let mut mastery = SkillMasterySystem::load(MemoryStorage::new());
    let neutral = mastery.bonuses("A1_S1");
    assert_eq!(neutral.damage, 1.0);
    assert_eq!(neutral.cooldown, 1.0);

    mastery.add_exp("A1_S1", 100.0);
    let b = mastery.bonuses("A1_S1");
    assert!((b.damage - 1.05).abs() < EPS);
    assert!((b.cooldown - 0.98).abs() < EPS);
    assert!((b.range - 1.03).abs() < EPS);
}

#[test]
fn test_cooldown_bonus_floor() {
    let mut mastery = SkillMasterySystem::load(MemoryStorage::new());
    for _ in 0..29 {
        mastery.add_exp("A1_X1", 1e12);
    }
    assert_eq!(mastery.info("A1_X1").level, 30);
    assert!((mastery.bonuses("A1_X1").cooldown - 0.5).abs() < EPS);
}

#[test]
fn test_mastery_persists_across_loads() {
    let storage = MemoryStorage::new();
    {
        let mut mastery = SkillMasterySystem::load(storage.clone());
        mastery.add_exp("MISSY_S1", 100.0);
        mastery.record_use("MISSY_S1");
    }
    let reloaded = SkillMasterySystem::load(storage.clone());
    let info = reloaded.info("MISSY_S1");
    assert_eq!(info.level, 2);
    assert_eq!(info.total_uses, 1);

    let raw = storage.get(keys::SKILL_MASTERY).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["MISSY_S1"]["totalUses"], 1);
}

#[test]
fn test_write_failure_is_logged_not_fatal() {
    let mut mastery = SkillMasterySystem::load(ReadOnlyStorage);
    mastery.record_use("A1_S1");
    assert_eq!(mastery.info("A1_S1").total_uses, 1);
    assert!(mastery.flush().is_err());
}

// --- Skill tree ---

#[test]
fn test_unlock_errors() {
    let mut tree = sample_tree(MemoryStorage::new());

    assert_eq!(
        tree.unlock("nope"),
        Err(UnlockError::UnknownNode("nope".into()))
    );
    assert_eq!(
        tree.unlock("root"),
        Err(UnlockError::InsufficientPoints {
            needed: 1,
            available: 0
        })
    );

    tree.add_points(1);
    assert_eq!(
        tree.unlock("power"),
        Err(UnlockError::MissingPrerequisite {
            node: "power".into(),
            prerequisite: "root".into()
        })
    );

    tree.unlock("root").unwrap();
    assert_eq!(
        tree.unlock("root"),
        Err(UnlockError::AlreadyUnlocked("root".into()))
    );
    assert_eq!(tree.points(), 0);
}

#[test]
fn test_unlock_spends_points_and_emits_event() {
    let mut tree = sample_tree(MemoryStorage::new());
    tree.add_points(3);
    tree.unlock("root").unwrap();
    tree.unlock("power").unwrap();

    assert_eq!(tree.points(), 0);
    assert_eq!(tree.unlocked(), ["root".to_string(), "power".to_string()]);
    let events = tree.drain_events();
    assert_eq!(events.len(), 2);
    assert_eq!(
        events[1],
        CombatEvent::NodeUnlocked {
            node_id: "power".into()
        }
    );

    let bonuses = tree.total_bonuses();
    assert!((bonuses["damage"] - 0.15).abs() < EPS);
}

#[test]
fn test_tree_persisted_shape() {
    let storage = MemoryStorage::new();
    let mut tree = sample_tree(storage.clone());
    tree.add_points(2);
    tree.unlock("root").unwrap();

    let raw = storage.get(keys::SKILL_TREE).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["unlockedNodes"], serde_json::json!(["root"]));
    assert_eq!(json["skillPoints"], 1);

    let reloaded = sample_tree(storage);
    assert!(reloaded.is_unlocked("root"));
    assert_eq!(reloaded.points(), 1);
}

// --- Mods ---

#[test]
fn test_mods_apply_in_order() {
    let mut mods = SkillModSystem::load(MemoryStorage::new());
    mods.apply_mod("A1_S1", SkillMod::new(ModKind::Damage, 0.1));
    mods.apply_mod("A1_S1", SkillMod::new(ModKind::Damage, 0.1));
    mods.apply_mod("A1_S1", SkillMod::new(ModKind::Cooldown, 0.2));
    mods.apply_mod("A1_S1", SkillMod::new(ModKind::Range, 0.5));

    let base = SkillStats {
        damage: 150.0,
        cooldown: 2.5,
        range: None,
    };
    let stats = mods.apply_bonuses("A1_S1", base);
    // 150 -> 165 -> 181.5 floored to 181
    assert_eq!(stats.damage, 181.0);
    assert!((stats.cooldown - 2.0).abs() < EPS);
    assert!((stats.range.unwrap() - 300.0).abs() < EPS);

    let untouched = mods.apply_bonuses("A1_S3", base);
    assert_eq!(untouched, base);
}

#[test]
fn test_remove_mod_by_index() {
    let storage = MemoryStorage::new();
    let mut mods = SkillModSystem::load(storage.clone());
    mods.apply_mod("A1_S1", SkillMod::new(ModKind::Damage, 0.1));
    mods.apply_mod("A1_S1", SkillMod::new(ModKind::Range, 0.2));

    assert_eq!(mods.remove_mod("A1_S1", 5), None);
    assert_eq!(mods.remove_mod("A1_S9", 0), None);
    assert_eq!(
        mods.remove_mod("A1_S1", 0),
        Some(SkillMod::new(ModKind::Damage, 0.1))
    );

    let reloaded = SkillModSystem::load(storage.clone());
    assert_eq!(reloaded.mods("A1_S1"), [SkillMod::new(ModKind::Range, 0.2)]);

    let raw = storage.get(keys::SKILL_MODS).unwrap().unwrap();
    assert!(raw.contains("\"type\":\"range\""));
}

// --- Presets ---

#[test]
fn test_preset_save_load_delete() {
    let storage = MemoryStorage::new();
    let mut presets = SkillPresetSystem::load(storage.clone());

    let mut loadout = BTreeMap::new();
    loadout.insert("slot1".to_string(), "A1_S1".to_string());
    loadout.insert("ultimate".to_string(), "A1_X1".to_string());
    presets.save_preset("boss", CharacterId::A1, &loadout, 1_000);
    presets.save_preset("farm", CharacterId::Missy, &BTreeMap::new(), 500);

    assert_eq!(presets.load_preset("boss").unwrap(), loadout);
    assert_eq!(
        presets.drain_events(),
        vec![CombatEvent::PresetLoaded {
            name: "boss".into()
        }]
    );
    assert_eq!(
        presets.load_preset("missing"),
        Err(PresetError::NotFound("missing".into()))
    );

    let names: Vec<_> = presets.all().iter().map(|p| p.name.clone()).collect();
    assert_eq!(names, ["farm", "boss"]);

    let reloaded = SkillPresetSystem::load(storage.clone());
    assert_eq!(reloaded.get("boss").unwrap().character_id, CharacterId::A1);

    assert!(presets.delete_preset("boss"));
    assert!(!presets.delete_preset("boss"));
    let raw = storage.get(keys::SKILL_PRESETS).unwrap().unwrap();
    assert!(!raw.contains("boss"));
    assert!(raw.contains("\"characterId\":\"MISSY\""));
}

// --- Accessibility ---

#[test]
fn test_accessibility_merges_partial_save() {
    let storage = MemoryStorage::new();
    storage
        .set(keys::ACCESSIBILITY, "{\"largeText\":true}")
        .unwrap();
    let system = AccessibilitySystem::load(storage);
    assert_eq!(
        system.settings(),
        AccessibilitySettings {
            large_text: true,
            ..Default::default()
        }
    );
    assert_eq!(system.theme_overrides(), vec![("--font-size-base", "18px")]);
}

#[test]
fn test_accessibility_toggles_persist() {
    let storage = MemoryStorage::new();
    let mut system = AccessibilitySystem::load(storage.clone());
    assert!(system.theme_overrides().is_empty());

    assert!(system.toggle_colorblind_mode());
    assert!(system.toggle_high_contrast());
    assert!(system.toggle_keyboard_only());
    assert!(!system.toggle_keyboard_only());

    let reloaded = AccessibilitySystem::load(storage);
    let settings = reloaded.settings();
    assert!(settings.colorblind_mode);
    assert!(settings.high_contrast);
    assert!(!settings.keyboard_only);

    let vars = reloaded.theme_overrides();
    assert_eq!(vars.len(), 5);
    assert!(vars.contains(&("--skill-color-ice", "#0088ff")));
    assert!(vars.contains(&("--text-color", "#ffffff")));
}

// --- Profile ---

#[test]
fn test_profile_flush_writes_every_part() {
    let storage = MemoryStorage::new();
    let mut profile = PlayerProfile::load(storage.clone());
    profile.skill_tree.add_points(2);
    profile.accessibility.toggle_large_text();
    profile.flush().unwrap();

    assert!(storage.get(keys::SKILL_TREE).unwrap().is_some());
    assert!(storage.get(keys::SKILL_PRESETS).unwrap().is_some());
    assert!(storage.get(keys::ACCESSIBILITY).unwrap().is_some());

    let reloaded = PlayerProfile::load(storage);
    assert_eq!(reloaded.skill_tree.points(), 2);
    assert!(reloaded.accessibility.settings().large_text);
}

#[test]
fn test_profile_flush_reports_storage_failure() {
    let profile = PlayerProfile::load(ReadOnlyStorage);
    assert!(matches!(profile.flush(), Err(StorageError::Poisoned)));
}
