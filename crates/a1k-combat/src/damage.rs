//! Hit resolution and hit feedback.

use glam::DVec2;
use rand::Rng;

use a1k_core::components::Health;
use a1k_core::constants::*;
use a1k_core::events::CombatEvent;
use a1k_core::state::{DamageNumberView, FeedbackView};
use a1k_core::types::{Position, Stats};

/// The side of a hit that takes the damage.
pub struct Defender<'a> {
    pub id: u32,
    pub position: Position,
    pub stats: &'a Stats,
    pub health: &'a mut Health,
}

/// Outcome of one hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitResult {
    pub damage: u32,
    pub crit: bool,
    /// The hit took the defender from alive to zero.
    pub killed: bool,
}

#[derive(Debug, Clone, PartialEq)]
struct DamageNumber {
    position: DVec2,
    velocity: DVec2,
    text: String,
    life: f64,
    crit: bool,
}

impl DamageNumber {
    fn view(&self) -> DamageNumberView {
        DamageNumberView {
            position: self.position.into(),
            text: self.text.clone(),
            life: self.life,
            crit: self.crit,
            color: if self.crit { "#ff0000" } else { "#ffffff" }.to_string(),
            scale: if self.crit { CRIT_MULTIPLIER } else { 1.0 },
        }
    }
}

/// Raw damage of a hit before the crit roll: `max(1, atk * mult - def / 2)`.
pub fn base_damage(attacker: &Stats, defender: &Stats, skill_multiplier: f64) -> f64 {
    (attacker.atk * skill_multiplier - defender.def * DEFENSE_MITIGATION).max(MIN_DAMAGE)
}

#[derive(Debug, Default)]
pub struct CombatEngine {
    damage_numbers: Vec<DamageNumber>,
    screen_shake: f64,
    /// Feedback is frozen until this clock time.
    hit_stop_until_ms: u64,
    events: Vec<CombatEvent>,
}

impl CombatEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve one hit of `attacker` against `defender`.
    pub fn apply_damage<R: Rng + ?Sized>(
        &mut self,
        attacker: &Stats,
        defender: Defender<'_>,
        skill_multiplier: f64,
        rng: &mut R,
        now_ms: u64,
    ) -> HitResult {
        let (amount, crit) = self.strike(
            attacker,
            defender.stats,
            defender.position,
            skill_multiplier,
            rng,
            now_ms,
        );

        let was_alive = defender.health.is_alive();
        defender.health.hp = (defender.health.hp - amount as f64).max(0.0);
        let killed = was_alive && !defender.health.is_alive();

        self.events.push(CombatEvent::Damage {
            target: defender.id,
            amount,
            crit,
        });
        if killed {
            self.events.push(CombatEvent::Death { id: defender.id });
        }

        HitResult {
            damage: amount,
            crit,
            killed,
        }
    }

    /// Roll damage and crit for a hit landing at `at` and show its
    /// feedback. Applying the damage is left to the caller.
    pub fn strike<R: Rng + ?Sized>(
        &mut self,
        attacker: &Stats,
        defender: &Stats,
        at: Position,
        skill_multiplier: f64,
        rng: &mut R,
        now_ms: u64,
    ) -> (u32, bool) {
        let crit = rng.gen::<f64>() < attacker.crt;
        let mut damage = base_damage(attacker, defender, skill_multiplier);
        if crit {
            damage *= CRIT_MULTIPLIER;
        }
        let amount = damage.floor() as u32;

        self.spawn_damage_number(at, amount, crit, rng);
        if crit {
            self.hit_stop_until_ms = now_ms + CRIT_HIT_STOP_MS;
            self.screen_shake = CRIT_SCREEN_SHAKE;
        }
        (amount, crit)
    }

    fn spawn_damage_number<R: Rng + ?Sized>(
        &mut self,
        at: Position,
        amount: u32,
        crit: bool,
        rng: &mut R,
    ) {
        let drift = (rng.gen::<f64>() - 0.5) * 2.0;
        self.damage_numbers.push(DamageNumber {
            position: DVec2::new(at.x, at.y - DAMAGE_NUMBER_OFFSET_Y),
            velocity: DVec2::new(drift, DAMAGE_NUMBER_RISE),
            text: amount.to_string(),
            life: 1.0,
            crit,
        });
    }

    pub fn is_hit_stopped(&self, now_ms: u64) -> bool {
        now_ms < self.hit_stop_until_ms
    }

    /// Advance feedback by `dt` seconds. Frozen during hit stop.
    pub fn update(&mut self, dt: f64, now_ms: u64) {
        if self.is_hit_stopped(now_ms) {
            return;
        }

        for number in &mut self.damage_numbers {
            number.position += number.velocity;
            number.velocity.y += DAMAGE_NUMBER_GRAVITY;
            number.life -= dt;
        }
        self.damage_numbers.retain(|n| n.life > 0.0);

        if self.screen_shake > 0.0 {
            self.screen_shake *= SCREEN_SHAKE_DECAY;
            if self.screen_shake < SCREEN_SHAKE_FLOOR {
                self.screen_shake = 0.0;
            }
        }
    }

    pub fn screen_shake(&self) -> f64 {
        self.screen_shake
    }

    /// Random camera offset for the current shake intensity.
    pub fn shake_offset<R: Rng + ?Sized>(&self, rng: &mut R) -> Position {
        if self.screen_shake <= 0.0 {
            return Position::default();
        }
        Position::new(
            (rng.gen::<f64>() - 0.5) * self.screen_shake,
            (rng.gen::<f64>() - 0.5) * self.screen_shake,
        )
    }

    pub fn damage_number_count(&self) -> usize {
        self.damage_numbers.len()
    }

    pub fn feedback_view(&self, now_ms: u64) -> FeedbackView {
        FeedbackView {
            damage_numbers: self.damage_numbers.iter().map(DamageNumber::view).collect(),
            screen_shake: self.screen_shake,
            hit_stopped: self.is_hit_stopped(now_ms),
        }
    }

    pub fn drain_events(&mut self) -> Vec<CombatEvent> {
        std::mem::take(&mut self.events)
    }
}
