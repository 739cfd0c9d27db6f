//! Enumeration types used throughout the arena.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Enemy brain state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AiState {
    /// Standing at home, watching for the player.
    #[default]
    Idle,
    /// Closing distance to the player.
    Chase,
    /// In melee reach, striking on a cooldown.
    Attack,
    /// Lost the player, drifting back home.
    Patrol,
}

/// Rank tier, weakest to strongest.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum RankTier {
    E,
    D,
    #[default]
    C,
    B,
    A,
    S,
    SS,
}

impl RankTier {
    /// All tiers in ascending order.
    pub const ALL: [RankTier; 7] = [
        RankTier::E,
        RankTier::D,
        RankTier::C,
        RankTier::B,
        RankTier::A,
        RankTier::S,
        RankTier::SS,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RankTier::E => "E",
            RankTier::D => "D",
            RankTier::C => "C",
            RankTier::B => "B",
            RankTier::A => "A",
            RankTier::S => "S",
            RankTier::SS => "SS",
        }
    }
}

impl fmt::Display for RankTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role category of an entity, orthogonal to its rank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityCategory {
    Hero,
    Villain,
    Npc,
    Slayer,
    Hunter,
    Guardian,
    Mage,
    Assassin,
    Support,
    #[default]
    Minion,
    Elite,
    Boss,
    Pet,
    Merchant,
    Crafter,
}

impl EntityCategory {
    pub const ALL: [EntityCategory; 15] = [
        EntityCategory::Hero,
        EntityCategory::Villain,
        EntityCategory::Npc,
        EntityCategory::Slayer,
        EntityCategory::Hunter,
        EntityCategory::Guardian,
        EntityCategory::Mage,
        EntityCategory::Assassin,
        EntityCategory::Support,
        EntityCategory::Minion,
        EntityCategory::Elite,
        EntityCategory::Boss,
        EntityCategory::Pet,
        EntityCategory::Merchant,
        EntityCategory::Crafter,
    ];
}

/// Stat a skill mod adjusts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModKind {
    Damage,
    Cooldown,
    Range,
}

/// Playable character in the roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CharacterId {
    #[default]
    A1,
    Unique,
    Missy,
}

impl CharacterId {
    pub const ALL: [CharacterId; 3] = [CharacterId::A1, CharacterId::Unique, CharacterId::Missy];
}

/// Arena lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Lobby,
    Active,
    Paused,
    /// Player died with no revives left.
    Defeat,
    /// Every enemy is down.
    Victory,
}

/// Balance preset scaling every skill's damage and cooldown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Normal,
    Easy,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Normal, Difficulty::Easy, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Normal => "normal",
            Difficulty::Easy => "easy",
            Difficulty::Hard => "hard",
        }
    }
}

/// Timed condition a skill hit can leave on an enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Burn,
    Freeze,
    Stun,
}
