//! Player commands sent from the frontend to the arena.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::CharacterId;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Arena lifecycle ---
    /// Spawn the player and a wave of ranked enemies.
    StartArena,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
    /// Clear the arena and go back to the lobby.
    ReturnToLobby,

    // --- Fighter control ---
    /// Move the player by a delta in pixels.
    MovePlayer { dx: f64, dy: f64 },
    /// Basic attack against the nearest enemy in reach.
    Attack,
    /// Cast a skill at the nearest enemy in its range.
    CastSkill { skill_id: String, charge: f64 },
    /// Enter rage mode if the meter is full.
    ActivateRage,
    /// Swap the active character.
    SwitchCharacter { character: CharacterId },
}
