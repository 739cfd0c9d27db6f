//! Events emitted by combat and progression systems for UI and audio feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Everything a frontend may want to react to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CombatEvent {
    /// A hit connected.
    Damage {
        target: u32,
        amount: u32,
        crit: bool,
    },
    /// An entity's health reached zero.
    Death { id: u32 },
    /// A combo chain ended (expired or hit max length).
    ComboComplete { length: usize, multiplier: f64 },
    /// A skill gained a mastery level.
    SkillLevelUp { skill_id: String, level: u32 },
    /// A skill tree node was purchased.
    NodeUnlocked { node_id: String },
    /// Two consecutive skills formed a synergy.
    SynergyActivated { name: String, skill_id: String },
    /// An active skill was canceled inside its window.
    SkillCanceled { skill_id: String },
    /// A character entered its ultimate form.
    TransformationActivated {
        character: CharacterId,
        skill_id: String,
        duration_ms: u64,
    },
    /// Rage mode started.
    RageActivated { duration_ms: u64 },
    /// Rage mode ran out.
    RageEnded,
    /// A revive charge was consumed on death.
    PlayerRevived { hp: f64 },
    /// The player died with no revive left.
    PlayerDied { character: CharacterId },
    /// The player took damage.
    PlayerDamaged { amount: f64, hp: f64, max_hp: f64 },
    /// The player was healed.
    PlayerHealed { amount: f64, hp: f64, max_hp: f64 },
    /// Active character changed.
    CharacterSwitched { character: CharacterId },
    /// Hit streak reached a milestone length.
    ComboMilestone { hits: u32 },
    /// Hit streak broke after idling.
    StreakBroken { hits: u32 },
    /// An enemy brain changed state.
    StateChanged { id: u32, from: AiState, to: AiState },
    /// A skill loadout preset was applied.
    PresetLoaded { name: String },
}
