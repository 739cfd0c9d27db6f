//! A1K arena application.
//!
//! Wires the simulation crates to a fixed-rate game loop thread, loads
//! configuration and sets up logging. The `a1k-arena` binary drives the
//! loop headless with the scripted autopilot.

pub mod autopilot;
pub mod config;
pub mod error;
pub mod game_loop;
pub mod logging;
pub mod state;

pub use a1k_core as core;
pub use error::AppError;
