//! Skill synergies: two distinct skills of a pair used back to back.

use std::collections::VecDeque;

use tracing::debug;

use a1k_core::events::CombatEvent;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Synergy {
    pub name: &'static str,
    pub skills: [&'static str; 2],
    pub damage: f64,
    pub effect: &'static str,
}

impl Synergy {
    fn matches(&self, first: &str, second: &str) -> bool {
        first != second && self.skills.contains(&first) && self.skills.contains(&second)
    }
}

pub const DEFAULT_SYNERGIES: [Synergy; 4] = [
    Synergy {
        name: "Crimson Power",
        skills: ["A1_S1", "A1_S3"],
        damage: 1.25,
        effect: "Combined wave deals extra damage",
    },
    Synergy {
        name: "Shadow Crimson",
        skills: ["A1_S1", "A1_S4"],
        damage: 1.3,
        effect: "Teleport combo with crimson energy",
    },
    Synergy {
        name: "Plasma Beam",
        skills: ["UNIQUE_S1", "UNIQUE_S3"],
        damage: 1.2,
        effect: "Beam charges with plasma energy",
    },
    Synergy {
        name: "Blade Barrage",
        skills: ["MISSY_S1", "MISSY_S3"],
        damage: 1.25,
        effect: "Rapid slashes with enhanced speed",
    },
];

#[derive(Debug)]
pub struct SynergySystem {
    table: Vec<Synergy>,
    /// The last two skills used, oldest first.
    recent: VecDeque<String>,
    events: Vec<CombatEvent>,
}

impl Default for SynergySystem {
    fn default() -> Self {
        Self::with_table(DEFAULT_SYNERGIES.to_vec())
    }
}

impl SynergySystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(table: Vec<Synergy>) -> Self {
        Self {
            table,
            recent: VecDeque::with_capacity(2),
            events: Vec::new(),
        }
    }

    /// Record `skill_id` and report the synergy it completes, if any.
    pub fn check(&mut self, skill_id: &str) -> Option<Synergy> {
        self.recent.push_back(skill_id.to_string());
        if self.recent.len() > 2 {
            self.recent.pop_front();
        }
        let (first, second) = match (self.recent.front(), self.recent.back()) {
            (Some(a), Some(b)) if self.recent.len() == 2 => (a, b),
            _ => return None,
        };
        self.table.iter().find(|s| s.matches(first, second)).copied()
    }

    /// Scale `damage` by the synergy bonus, floored.
    pub fn apply(&mut self, damage: f64, synergy: &Synergy, skill_id: &str) -> f64 {
        debug!(synergy = synergy.name, skill_id, "synergy activated");
        self.events.push(CombatEvent::SynergyActivated {
            name: synergy.name.to_string(),
            skill_id: skill_id.to_string(),
        });
        (damage * synergy.damage).floor()
    }

    pub fn synergies_for(&self, skill_id: &str) -> Vec<Synergy> {
        self.table
            .iter()
            .filter(|s| s.skills.contains(&skill_id))
            .copied()
            .collect()
    }

    pub fn drain_events(&mut self) -> Vec<CombatEvent> {
        std::mem::take(&mut self.events)
    }
}
