//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position in arena space (pixels, Cartesian).
/// x = right, y = down, matching canvas coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Combat attributes carried by anything that can hit or be hit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    /// Base attack.
    pub atk: f64,
    /// Defense; mitigates half its value from every incoming hit.
    pub def: f64,
    /// Critical hit chance (0.0 - 1.0).
    pub crt: f64,
}

/// Tunable numbers of a skill as they flow through the modifier pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillStats {
    pub damage: f64,
    /// Cooldown in seconds.
    pub cooldown: f64,
    /// Reach in pixels; `None` when the skill declares none.
    pub range: Option<f64>,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in milliseconds.
    pub elapsed_ms: u64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Angle to another position in radians (atan2 of dy, dx).
    pub fn angle_to(&self, other: &Position) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            atk: crate::constants::DEFAULT_ATK,
            def: crate::constants::DEFAULT_DEF,
            crt: crate::constants::DEFAULT_CRIT_CHANCE,
        }
    }
}

impl Stats {
    pub fn new(atk: f64, def: f64, crt: f64) -> Self {
        Self { atk, def, crt }
    }
}

impl SimTime {
    /// Seconds per tick.
    pub fn dt_secs(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_ms = self.tick * 1000 / crate::constants::TICK_RATE as u64;
    }
}
