//! Time-windowed skill combos.
//!
//! Consecutive skill uses less than `COMBO_WINDOW_MS` apart form a chain
//! whose multiplier grows by `COMBO_STEP_BONUS` per link. A chain ends when
//! it reaches `COMBO_MAX_LENGTH` or the window lapses.

use a1k_core::constants::*;
use a1k_core::events::CombatEvent;

#[derive(Debug, Clone, PartialEq)]
struct ActiveCombo {
    skills: Vec<String>,
    start_ms: u64,
    last_skill_ms: u64,
    multiplier: f64,
}

impl ActiveCombo {
    fn start(skill_id: &str, now_ms: u64) -> Self {
        Self {
            skills: vec![skill_id.to_string()],
            start_ms: now_ms,
            last_skill_ms: now_ms,
            multiplier: 1.0,
        }
    }

    fn expired(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.last_skill_ms) > COMBO_WINDOW_MS
    }
}

/// A finished chain.
#[derive(Debug, Clone, PartialEq)]
pub struct ComboRecord {
    pub skills: Vec<String>,
    pub start_ms: u64,
    pub end_ms: u64,
    pub multiplier: f64,
}

/// Live view of the chain in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComboInfo {
    pub length: usize,
    pub multiplier: f64,
    pub time_remaining_ms: u64,
}

#[derive(Debug, Default)]
pub struct ComboSystem {
    active: Option<ActiveCombo>,
    history: Vec<ComboRecord>,
    events: Vec<CombatEvent>,
}

/// Multiplier of a chain `length` skills long.
pub fn combo_multiplier(length: usize) -> f64 {
    1.0 + length.saturating_sub(1) as f64 * COMBO_STEP_BONUS
}

impl ComboSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a skill use and return the multiplier it earns.
    pub fn add_skill(&mut self, skill_id: &str, now_ms: u64) -> f64 {
        let Some(combo) = self.active.as_mut() else {
            self.active = Some(ActiveCombo::start(skill_id, now_ms));
            return 1.0;
        };

        if combo.expired(now_ms) {
            self.complete(now_ms);
            self.active = Some(ActiveCombo::start(skill_id, now_ms));
            return 1.0;
        }

        combo.skills.push(skill_id.to_string());
        combo.last_skill_ms = now_ms;
        combo.multiplier = combo_multiplier(combo.skills.len());
        let multiplier = combo.multiplier;

        if combo.skills.len() >= COMBO_MAX_LENGTH {
            self.complete(now_ms);
        }
        multiplier
    }

    /// Multiplier of the chain in progress, 1.0 when there is none.
    pub fn multiplier(&mut self, now_ms: u64) -> f64 {
        self.current(now_ms).map_or(1.0, |c| c.multiplier)
    }

    pub fn current(&mut self, now_ms: u64) -> Option<ComboInfo> {
        let combo = self.active.as_ref()?;
        if combo.expired(now_ms) {
            self.complete(now_ms);
            return None;
        }
        Some(ComboInfo {
            length: combo.skills.len(),
            multiplier: combo.multiplier,
            time_remaining_ms: COMBO_WINDOW_MS - now_ms.saturating_sub(combo.last_skill_ms),
        })
    }

    /// Multiplier without expiring anything, for read-only views.
    pub fn peek_multiplier(&self, now_ms: u64) -> f64 {
        match &self.active {
            Some(combo) if !combo.expired(now_ms) => combo.multiplier,
            _ => 1.0,
        }
    }

    pub fn history(&self) -> &[ComboRecord] {
        &self.history
    }

    pub fn drain_events(&mut self) -> Vec<CombatEvent> {
        std::mem::take(&mut self.events)
    }

    fn complete(&mut self, now_ms: u64) {
        let Some(combo) = self.active.take() else {
            return;
        };
        self.events.push(CombatEvent::ComboComplete {
            length: combo.skills.len(),
            multiplier: combo.multiplier,
        });
        self.history.push(ComboRecord {
            skills: combo.skills,
            start_ms: combo.start_ms,
            end_ms: now_ms,
            multiplier: combo.multiplier,
        });
    }
}
