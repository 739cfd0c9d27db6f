//! The player's fighter: active character, hit points, rage and hit streak.

use tracing::{debug, info};

use a1k_core::constants::*;
use a1k_core::enums::CharacterId;
use a1k_core::events::CombatEvent;

/// Static roster entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterProfile {
    pub id: CharacterId,
    pub name: &'static str,
    pub max_hp: f64,
    /// Multiplier on basic attack damage.
    pub attack_power: f64,
}

pub fn character_profile(id: CharacterId) -> CharacterProfile {
    match id {
        CharacterId::A1 => CharacterProfile {
            id,
            name: "A1",
            max_hp: 1000.0,
            attack_power: 1.0,
        },
        CharacterId::Unique => CharacterProfile {
            id,
            name: "Unique",
            max_hp: 900.0,
            attack_power: 1.2,
        },
        CharacterId::Missy => CharacterProfile {
            id,
            name: "Missy",
            max_hp: 850.0,
            attack_power: 1.3,
        },
    }
}

#[derive(Debug)]
pub struct Fighter {
    character: CharacterId,
    hp: f64,
    max_hp: f64,
    rage: f64,
    /// Set while rage mode runs; holds its end time.
    rage_until_ms: Option<u64>,
    streak: u32,
    best_streak: u32,
    last_hit_ms: u64,
    revives: u32,
    events: Vec<CombatEvent>,
}

impl Default for Fighter {
    fn default() -> Self {
        Self::new(CharacterId::default())
    }
}

impl Fighter {
    pub fn new(character: CharacterId) -> Self {
        let profile = character_profile(character);
        Self {
            character,
            hp: profile.max_hp,
            max_hp: profile.max_hp,
            rage: 0.0,
            rage_until_ms: None,
            streak: 0,
            best_streak: 0,
            last_hit_ms: 0,
            revives: 0,
            events: Vec::new(),
        }
    }

    pub fn character(&self) -> CharacterId {
        self.character
    }

    pub fn profile(&self) -> CharacterProfile {
        character_profile(self.character)
    }

    pub fn hp(&self) -> f64 {
        self.hp
    }

    pub fn max_hp(&self) -> f64 {
        self.max_hp
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0.0
    }

    pub fn rage(&self) -> f64 {
        self.rage
    }

    pub fn rage_active(&self) -> bool {
        self.rage_until_ms.is_some()
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn best_streak(&self) -> u32 {
        self.best_streak
    }

    pub fn revives(&self) -> u32 {
        self.revives
    }

    /// Swap to another character at full health.
    pub fn switch_character(&mut self, character: CharacterId) {
        let profile = character_profile(character);
        self.character = character;
        self.hp = profile.max_hp;
        self.max_hp = profile.max_hp;
        info!(character = profile.name, "character switched");
        self.events.push(CombatEvent::CharacterSwitched { character });
    }

    pub fn add_rage(&mut self, amount: f64) {
        self.rage = (self.rage + amount).min(RAGE_MAX);
    }

    /// Record a hit the fighter landed.
    pub fn register_hit(&mut self, now_ms: u64) {
        self.add_rage(RAGE_PER_HIT);
        self.streak += 1;
        self.best_streak = self.best_streak.max(self.streak);
        self.last_hit_ms = now_ms;
        if HIT_STREAK_MILESTONES.contains(&self.streak) {
            info!(hits = self.streak, "hit streak milestone");
            self.events.push(CombatEvent::ComboMilestone { hits: self.streak });
        }
    }

    /// Start rage mode. Needs a full meter.
    pub fn activate_rage(&mut self, now_ms: u64) -> bool {
        if self.rage < RAGE_MAX || self.rage_active() {
            debug!(rage = self.rage, "not enough rage");
            return false;
        }
        self.rage = RAGE_MAX;
        self.rage_until_ms = Some(now_ms + RAGE_DURATION_MS);
        info!(duration_ms = RAGE_DURATION_MS, "rage activated");
        self.events.push(CombatEvent::RageActivated {
            duration_ms: RAGE_DURATION_MS,
        });
        true
    }

    /// Outgoing damage multiplier from rage.
    pub fn rage_multiplier(&self) -> f64 {
        if self.rage_active() {
            RAGE_DAMAGE_MULTIPLIER
        } else {
            1.0
        }
    }

    /// Expire rage and break an idle hit streak.
    pub fn update(&mut self, now_ms: u64) {
        if self.rage_until_ms.is_some_and(|until| now_ms >= until) {
            self.rage_until_ms = None;
            self.rage = 0.0;
            self.events.push(CombatEvent::RageEnded);
        }

        if self.streak > 0 && now_ms.saturating_sub(self.last_hit_ms) > HIT_STREAK_BREAK_MS {
            debug!(hits = self.streak, "hit streak broken");
            self.events.push(CombatEvent::StreakBroken { hits: self.streak });
            self.streak = 0;
        }
    }

    pub fn grant_revives(&mut self, count: u32) {
        self.revives += count;
    }

    /// Ignored once the fighter is down, so a death resolves once.
    pub fn take_damage(&mut self, amount: f64) {
        if !self.is_alive() {
            return;
        }
        self.hp -= amount;
        if self.hp <= 0.0 {
            self.hp = 0.0;
            self.on_death();
        }
        self.events.push(CombatEvent::PlayerDamaged {
            amount,
            hp: self.hp,
            max_hp: self.max_hp,
        });
    }

    pub fn heal(&mut self, amount: f64) {
        self.hp = (self.hp + amount).min(self.max_hp);
        self.events.push(CombatEvent::PlayerHealed {
            amount,
            hp: self.hp,
            max_hp: self.max_hp,
        });
    }

    fn on_death(&mut self) {
        if self.revives > 0 {
            self.revives -= 1;
            self.hp = self.max_hp * REVIVE_HP_FRACTION;
            info!(hp = self.hp, revives_left = self.revives, "player revived");
            self.events.push(CombatEvent::PlayerRevived { hp: self.hp });
        } else {
            info!(character = ?self.character, "player died");
            self.events.push(CombatEvent::PlayerDied {
                character: self.character,
            });
        }
    }

    /// Back to a fresh fight with the same character.
    pub fn reset(&mut self) {
        let character = self.character;
        let events = std::mem::take(&mut self.events);
        *self = Self::new(character);
        self.events = events;
    }

    pub fn drain_events(&mut self) -> Vec<CombatEvent> {
        std::mem::take(&mut self.events)
    }
}
