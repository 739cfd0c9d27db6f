//! ECS systems that operate on the arena world each tick.
//!
//! Systems are plain functions over `&mut World` (or `&World` for
//! read-only). They own no state; everything lives in components or
//! in the engine.

pub mod brain;
pub mod cleanup;
pub mod movement;
pub mod projectiles;
pub mod snapshot;
pub mod targeting;
