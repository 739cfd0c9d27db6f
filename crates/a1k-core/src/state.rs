//! Arena state snapshot: the complete visible state sent to the frontend each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::CombatEvent;
use crate::types::{Position, SimTime};

/// Complete arena state broadcast after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArenaSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub feedback: FeedbackView,
    pub events: Vec<CombatEvent>,
    pub score: ScoreView,
    #[serde(default)]
    pub projectiles: Vec<ProjectileView>,
}

/// Player fighter as displayed on the HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub character: CharacterId,
    pub position: Position,
    pub hp: f64,
    pub max_hp: f64,
    /// Rage meter (0 - 100).
    pub rage: f64,
    pub rage_active: bool,
    /// Current hit streak length.
    pub streak: u32,
    /// Multiplier of the combo chain in progress (1.0 when none).
    pub combo_multiplier: f64,
    pub transformed: bool,
}

/// A visible enemy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub name: String,
    pub tier: RankTier,
    pub category: EntityCategory,
    pub position: Position,
    pub hp: f64,
    pub max_hp: f64,
    pub state: AiState,
    #[serde(default)]
    pub statuses: Vec<StatusKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectileShape {
    Bolt,
    Beam,
    Burst,
}

/// A skill effect in flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u32,
    pub skill_id: String,
    pub shape: ProjectileShape,
    /// Bolt head, beam origin or burst centre.
    pub position: Position,
    /// Far end of a beam.
    pub end: Option<Position>,
    /// Hit radius of a bolt or burst, half-width of a beam.
    pub radius: f64,
}

/// Floating damage number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageNumberView {
    pub position: Position,
    pub text: String,
    /// Remaining life (1.0 at spawn, removed at 0).
    pub life: f64,
    pub crit: bool,
    pub color: String,
    pub scale: f64,
}

/// Hit feedback a renderer applies on top of the scene.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedbackView {
    pub damage_numbers: Vec<DamageNumberView>,
    pub screen_shake: f64,
    pub hit_stopped: bool,
}

/// Running score for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub enemies_defeated: u32,
    pub enemies_total: u32,
    pub damage_dealt: u64,
    pub damage_taken: u64,
    pub best_streak: u32,
}
