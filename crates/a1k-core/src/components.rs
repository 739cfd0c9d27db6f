//! ECS components for hecs entities.
//!
//! Components are plain data structs with at most small constructors.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::*;
use crate::types::Position;

/// Marker for the player-controlled fighter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Hostile entity with its rank.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    pub tier: RankTier,
    pub category: EntityCategory,
}

/// Stable identifier exposed in events and snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// Display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Name(pub String);

/// Hit points. `hp` never drops below zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub hp: f64,
    pub max_hp: f64,
}

/// Enemy brain state consumed and produced by the FSM each tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brain {
    pub state: AiState,
    /// Ticks until the next strike while attacking.
    pub attack_cooldown: i32,
    pub detection_range: f64,
    pub attack_range: f64,
    /// Where the enemy spawned; patrol returns here.
    pub patrol_home: Position,
}

/// Marks an entity whose death has already been reported.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Dead;

impl Health {
    pub fn full(max_hp: f64) -> Self {
        Self { hp: max_hp, max_hp }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0.0
    }
}

impl Brain {
    /// Brain with default ranges, idle at `home`.
    pub fn at_home(home: Position) -> Self {
        Self {
            state: AiState::Idle,
            attack_cooldown: 0,
            detection_range: BRAIN_DETECTION_RANGE,
            attack_range: BRAIN_ATTACK_RANGE,
            patrol_home: home,
        }
    }
}

/// Clock time each condition wears off. Zero means never applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub burn_until_ms: u64,
    pub freeze_until_ms: u64,
    pub stun_until_ms: u64,
}

impl Status {
    /// Start or refresh `kind`; a refresh never shortens a running timer.
    pub fn apply(&mut self, kind: StatusKind, now_ms: u64) {
        let (slot, duration) = match kind {
            StatusKind::Burn => (&mut self.burn_until_ms, BURN_DURATION_MS),
            StatusKind::Freeze => (&mut self.freeze_until_ms, FREEZE_DURATION_MS),
            StatusKind::Stun => (&mut self.stun_until_ms, STUN_DURATION_MS),
        };
        *slot = (*slot).max(now_ms + duration);
    }

    pub fn is_active(&self, kind: StatusKind, now_ms: u64) -> bool {
        let until = match kind {
            StatusKind::Burn => self.burn_until_ms,
            StatusKind::Freeze => self.freeze_until_ms,
            StatusKind::Stun => self.stun_until_ms,
        };
        now_ms < until
    }

    /// Frozen or stunned enemies neither move nor strike.
    pub fn is_disabled(&self, now_ms: u64) -> bool {
        self.is_active(StatusKind::Freeze, now_ms) || self.is_active(StatusKind::Stun, now_ms)
    }

    pub fn active(&self, now_ms: u64) -> Vec<StatusKind> {
        [StatusKind::Burn, StatusKind::Freeze, StatusKind::Stun]
            .into_iter()
            .filter(|&kind| self.is_active(kind, now_ms))
            .collect()
    }
}
