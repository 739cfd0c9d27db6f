//! Skill canceling: an in-flight skill may be interrupted during a short
//! window after it starts.

use std::collections::HashMap;

use a1k_core::constants::*;
use a1k_core::events::CombatEvent;

#[derive(Debug, Clone, PartialEq)]
struct ActiveSkill {
    skill_id: String,
    start_ms: u64,
}

#[derive(Debug, Default)]
pub struct CancelSystem {
    active: Vec<ActiveSkill>,
    /// Per-skill window start overrides in ms.
    windows: HashMap<String, u64>,
    events: Vec<CombatEvent>,
}

impl CancelSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, skill_id: &str, now_ms: u64) {
        self.active.push(ActiveSkill {
            skill_id: skill_id.to_string(),
            start_ms: now_ms,
        });
    }

    pub fn set_window(&mut self, skill_id: &str, window_ms: u64) {
        self.windows.insert(skill_id.to_string(), window_ms);
    }

    fn window(&self, skill_id: &str) -> u64 {
        self.windows
            .get(skill_id)
            .copied()
            .unwrap_or(CANCEL_WINDOW_DEFAULT_MS)
    }

    /// Cancel is open for `CANCEL_WINDOW_LENGTH_MS` starting at the window.
    pub fn can_cancel(&self, skill_id: &str, now_ms: u64) -> bool {
        let Some(active) = self.active.iter().find(|s| s.skill_id == skill_id) else {
            return false;
        };
        let elapsed = now_ms.saturating_sub(active.start_ms);
        let window = self.window(skill_id);
        elapsed >= window && elapsed < window + CANCEL_WINDOW_LENGTH_MS
    }

    /// Interrupt `skill_id` if its cancel window is open.
    pub fn cancel(&mut self, skill_id: &str, now_ms: u64) -> bool {
        if !self.can_cancel(skill_id, now_ms) {
            return false;
        }
        if let Some(index) = self.active.iter().position(|s| s.skill_id == skill_id) {
            self.active.remove(index);
        }
        self.events.push(CombatEvent::SkillCanceled {
            skill_id: skill_id.to_string(),
        });
        true
    }

    /// Forget skills started `CANCEL_RETENTION_MS` or more ago.
    pub fn clear_completed(&mut self, now_ms: u64) {
        self.active
            .retain(|s| now_ms.saturating_sub(s.start_ms) < CANCEL_RETENTION_MS);
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn drain_events(&mut self) -> Vec<CombatEvent> {
        std::mem::take(&mut self.events)
    }
}
