//! Player-side combat for A1K.
//!
//! `damage` resolves individual hits and the feedback they produce.
//! `pipeline` turns a skill activation into final damage by running it
//! through mods, mastery, difficulty, transformation, synergy, combo, rage
//! and charge. `projectile` carries a resolved cast to the enemies it
//! reaches. Every system keeps an event outbox drained by the caller.

pub mod balance;
pub mod cancel;
pub mod catalog;
pub mod combo;
pub mod damage;
pub mod fighter;
pub mod pipeline;
pub mod projectile;
pub mod synergy;
pub mod transform;

pub use damage::{CombatEngine, Defender, HitResult};
pub use fighter::Fighter;
pub use pipeline::{ResolvedSkill, SkillError, SkillPipeline};
pub use projectile::{HitTarget, ProjectileHit, ProjectileManager};

#[cfg(test)]
mod tests;
