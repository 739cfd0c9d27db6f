//! Ultimate transformations.
//!
//! Casting a chargeable ultimate puts its character into a timed form
//! with boosted damage, speed and cooldowns. Expiry is checked lazily
//! against the supplied clock.

use std::collections::HashMap;

use tracing::info;

use a1k_core::constants::*;
use a1k_core::enums::CharacterId;
use a1k_core::events::CombatEvent;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformBonuses {
    pub damage: f64,
    pub speed: f64,
    pub cooldown: f64,
}

impl TransformBonuses {
    pub const NEUTRAL: TransformBonuses = TransformBonuses {
        damage: 1.0,
        speed: 1.0,
        cooldown: 1.0,
    };

    pub const ULTIMATE: TransformBonuses = TransformBonuses {
        damage: TRANSFORM_DAMAGE_BONUS,
        speed: TRANSFORM_SPEED_BONUS,
        cooldown: TRANSFORM_COOLDOWN_BONUS,
    };
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transformation {
    pub skill_id: String,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub bonuses: TransformBonuses,
}

impl Transformation {
    fn expired(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }
}

#[derive(Debug, Default)]
pub struct TransformationSystem {
    active: HashMap<CharacterId, Transformation>,
    events: Vec<CombatEvent>,
}

impl TransformationSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the ultimate form. `duration_ms` defaults to `TRANSFORM_DURATION_MS`.
    pub fn activate(
        &mut self,
        character: CharacterId,
        skill_id: &str,
        duration_ms: Option<u64>,
        now_ms: u64,
    ) {
        let duration_ms = duration_ms.unwrap_or(TRANSFORM_DURATION_MS);
        info!(?character, skill_id, duration_ms, "transformation activated");
        self.active.insert(
            character,
            Transformation {
                skill_id: skill_id.to_string(),
                start_ms: now_ms,
                duration_ms,
                bonuses: TransformBonuses::ULTIMATE,
            },
        );
        self.events.push(CombatEvent::TransformationActivated {
            character,
            skill_id: skill_id.to_string(),
            duration_ms,
        });
    }

    /// Whether `character` is transformed, dropping an expired form.
    pub fn is_transformed(&mut self, character: CharacterId, now_ms: u64) -> bool {
        match self.active.get(&character) {
            Some(t) if t.expired(now_ms) => {
                self.active.remove(&character);
                false
            }
            Some(_) => true,
            None => false,
        }
    }

    /// Read-only check that leaves expired forms in place.
    pub fn is_active(&self, character: CharacterId, now_ms: u64) -> bool {
        self.active
            .get(&character)
            .is_some_and(|t| !t.expired(now_ms))
    }

    pub fn bonuses(&mut self, character: CharacterId, now_ms: u64) -> TransformBonuses {
        if !self.is_transformed(character, now_ms) {
            return TransformBonuses::NEUTRAL;
        }
        self.active
            .get(&character)
            .map_or(TransformBonuses::NEUTRAL, |t| t.bonuses)
    }

    pub fn drain_events(&mut self) -> Vec<CombatEvent> {
        std::mem::take(&mut self.events)
    }
}
