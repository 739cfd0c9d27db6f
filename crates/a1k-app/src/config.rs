//! Application configuration loaded from a JSON file.
//!
//! Every field has a default, so a partial file or no file at all is fine.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use a1k_combat::balance;
use a1k_core::enums::{Difficulty, RankTier};
use a1k_sim::SimConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("time_scale must be positive, got {0}")]
    TimeScale(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub seed: u64,
    pub enemy_count: usize,
    pub max_tier: RankTier,
    pub revives: u32,
    /// Balance preset: `normal`, `easy` or `hard`.
    #[serde(deserialize_with = "difficulty_preset")]
    pub difficulty: Difficulty,
    /// Ticks to run before the loop stops on its own. 0 runs until shutdown.
    pub max_ticks: u64,
    /// Wall-clock speed multiplier for the loop.
    pub time_scale: f64,
    /// Directory holding the progression save files.
    pub save_dir: PathBuf,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            enemy_count: 5,
            max_tier: RankTier::B,
            revives: 1,
            difficulty: Difficulty::Normal,
            max_ticks: 3_600,
            time_scale: 1.0,
            save_dir: PathBuf::from("saves"),
            log_level: "info".into(),
        }
    }
}

impl AppConfig {
    /// Read `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Self::parse(&raw).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// Parse and validate a JSON document.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        if config.time_scale <= 0.0 || !config.time_scale.is_finite() {
            return Err(ConfigError::TimeScale(config.time_scale));
        }
        Ok(config)
    }

    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            seed: self.seed,
            enemy_count: self.enemy_count,
            max_tier: self.max_tier,
            revives: self.revives,
            difficulty: self.difficulty,
        }
    }
}

fn difficulty_preset<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Difficulty, D::Error> {
    let name = String::deserialize(deserializer)?;
    balance::parse_difficulty(&name).map_err(serde::de::Error::custom)
}
