use std::io;

use thiserror::Error;

use a1k_progression::StorageError;

use crate::config::ConfigError;

/// Top-level failure of the arena binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("failed to spawn game loop thread: {0}")]
    Spawn(#[source] io::Error),
    #[error("game loop thread panicked")]
    LoopPanicked,
    #[error("game loop is not running")]
    NotRunning,
    #[error("game loop is already running")]
    AlreadyRunning,
    #[error("shared app state lock poisoned")]
    StatePoisoned,
}
