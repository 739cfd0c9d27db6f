//! Skill activation pipeline.
//!
//! Base stats pass through mods, then mastery, the difficulty preset,
//! transformation, synergy, combo, rage and charge in that order. Each
//! damage step is floored.

use std::collections::HashMap;

use thiserror::Error;
use tracing::{debug, warn};

use a1k_core::constants::*;
use a1k_core::enums::{Difficulty, StatusKind};
use a1k_core::events::CombatEvent;
use a1k_core::types::SkillStats;
use a1k_progression::mastery::SkillMasterySystem;
use a1k_progression::mods::SkillModSystem;
use a1k_progression::storage::{Storage, StorageError};

use crate::cancel::CancelSystem;
use crate::balance;
use crate::catalog::{self, Delivery, SkillDef};
use crate::combo::ComboSystem;
use crate::fighter::Fighter;
use crate::synergy::SynergySystem;
use crate::transform::TransformationSystem;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SkillError {
    #[error("unknown skill `{0}`")]
    UnknownSkill(String),
    #[error("skill `{skill_id}` is on cooldown for {remaining_ms} ms")]
    OnCooldown { skill_id: String, remaining_ms: u64 },
}

/// Final numbers of one activation.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSkill {
    pub skill_id: &'static str,
    pub damage: f64,
    /// Seconds until the skill is ready again.
    pub cooldown: f64,
    pub range: f64,
    pub combo_multiplier: f64,
    pub synergy: Option<&'static str>,
    /// The cast put the caster into its ultimate form.
    pub transformed: bool,
    pub delivery: Delivery,
    pub status: Option<StatusKind>,
}

pub struct SkillPipeline<S: Storage> {
    pub mastery: SkillMasterySystem<S>,
    pub mods: SkillModSystem<S>,
    pub combo: ComboSystem,
    pub synergy: SynergySystem,
    pub cancel: CancelSystem,
    pub transforms: TransformationSystem,
    pub difficulty: Difficulty,
    /// Clock time at which each skill is ready again.
    ready_at_ms: HashMap<&'static str, u64>,
}

impl<S: Storage + Clone> SkillPipeline<S> {
    /// Build the pipeline with mastery and mods sharing `storage`.
    pub fn load(storage: S) -> Self {
        Self {
            mastery: SkillMasterySystem::load(storage.clone()),
            mods: SkillModSystem::load(storage),
            combo: ComboSystem::new(),
            synergy: SynergySystem::new(),
            cancel: CancelSystem::new(),
            transforms: TransformationSystem::new(),
            difficulty: Difficulty::default(),
            ready_at_ms: HashMap::new(),
        }
    }
}

impl<S: Storage> SkillPipeline<S> {
    pub fn cooldown_remaining_ms(&self, skill_id: &str, now_ms: u64) -> u64 {
        self.ready_at_ms
            .get(skill_id)
            .map_or(0, |ready| ready.saturating_sub(now_ms))
    }

    /// Resolve a cast of `skill_id` by `fighter`. `charge` in `[0, 1]` only
    /// matters for chargeable skills.
    pub fn activate(
        &mut self,
        skill_id: &str,
        fighter: &Fighter,
        charge: f64,
        now_ms: u64,
    ) -> Result<ResolvedSkill, SkillError> {
        let def = catalog::skill_by_id(skill_id)
            .ok_or_else(|| SkillError::UnknownSkill(skill_id.to_string()))?;

        let remaining_ms = self.cooldown_remaining_ms(def.id, now_ms);
        if remaining_ms > 0 {
            return Err(SkillError::OnCooldown {
                skill_id: def.id.to_string(),
                remaining_ms,
            });
        }

        let resolved = self.resolve(def, fighter, charge, now_ms);

        self.cancel.register(def.id, now_ms);
        self.mastery.record_use(def.id);
        self.ready_at_ms
            .insert(def.id, now_ms + (resolved.cooldown * 1000.0).round() as u64);

        debug!(
            skill_id = def.id,
            damage = resolved.damage,
            combo = resolved.combo_multiplier,
            "skill resolved"
        );
        Ok(resolved)
    }

    fn resolve(
        &mut self,
        def: &'static SkillDef,
        fighter: &Fighter,
        charge: f64,
        now_ms: u64,
    ) -> ResolvedSkill {
        let character = fighter.character();
        if def.character != character {
            warn!(skill_id = def.id, ?character, "casting another character's skill");
        }

        let stats = self.mods.apply_bonuses(def.id, def.stats());
        let mastery = self.mastery.bonuses(def.id);
        let stats = balance::apply(
            SkillStats {
                damage: (stats.damage * mastery.damage).floor(),
                cooldown: stats.cooldown * mastery.cooldown,
                range: stats.range,
            },
            self.difficulty,
        );
        let mut damage = stats.damage;
        let mut cooldown = stats.cooldown;
        let range = stats.range.unwrap_or(DEFAULT_SKILL_RANGE) * mastery.range;

        if self.transforms.is_transformed(character, now_ms) {
            let bonuses = self.transforms.bonuses(character, now_ms);
            damage = (damage * bonuses.damage).floor();
            cooldown *= bonuses.cooldown;
        }

        let synergy = self.synergy.check(def.id);
        if let Some(found) = &synergy {
            damage = self.synergy.apply(damage, found, def.id);
        }

        let combo_multiplier = self.combo.add_skill(def.id, now_ms);
        damage = (damage * combo_multiplier).floor();

        damage = (damage * fighter.rage_multiplier()).floor();

        if def.chargeable && charge > 0.0 {
            let charge = charge.clamp(0.0, 1.0);
            damage = (damage * (CHARGE_BASE + charge * CHARGE_SCALE)).floor();
        }

        let transformed = def.transforms();
        if transformed {
            self.transforms.activate(character, def.id, None, now_ms);
        }

        ResolvedSkill {
            skill_id: def.id,
            damage,
            cooldown,
            range,
            combo_multiplier,
            synergy: synergy.map(|s| s.name),
            transformed,
            delivery: def.delivery,
            status: def.status,
        }
    }

    /// Housekeeping once per frame.
    pub fn update(&mut self, now_ms: u64) {
        self.cancel.clear_completed(now_ms);
        self.combo.current(now_ms);
    }

    /// Write mastery and mods, surfacing the first storage failure.
    pub fn flush(&self) -> Result<(), StorageError> {
        self.mastery.flush()?;
        self.mods.flush()
    }

    /// Events from every subsystem.
    pub fn drain_events(&mut self) -> Vec<CombatEvent> {
        let mut events = self.mastery.drain_events();
        events.extend(self.transforms.drain_events());
        events.extend(self.synergy.drain_events());
        events.extend(self.combo.drain_events());
        events.extend(self.cancel.drain_events());
        events
    }
}
