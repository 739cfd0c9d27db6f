//! Arena simulation for A1K.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces `ArenaSnapshot`s for the frontend.

pub mod engine;
pub mod score;
pub mod systems;
pub mod world_setup;

pub use a1k_core as core;
pub use engine::{ArenaEngine, SimConfig};
