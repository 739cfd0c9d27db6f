//! Enemy AI for the A1K arena.
//!
//! Implements the enemy brain state machine and rank-driven
//! movement profiles.

pub mod fsm;
pub mod profiles;

pub use a1k_core as core;
