//! Static rank tables.
//!
//! Read-only lookups from tier and category to their display and
//! scaling attributes.

use a1k_core::enums::{EntityCategory, RankTier};

/// Attribute bundle for a rank tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierConfig {
    pub tier: RankTier,
    pub label: &'static str,
    /// Hex colour used for badges.
    pub accent_color: &'static str,
    pub speed_multiplier: f64,
    pub power_multiplier: f64,
    pub health_multiplier: f64,
    /// Relative weight when rolling a random tier. Higher tiers weigh more.
    pub rarity_weight: u32,
}

/// Display attributes for an entity category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryConfig {
    pub category: EntityCategory,
    pub label: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
}

/// Look up the attribute bundle for a tier.
pub fn tier_config(tier: RankTier) -> TierConfig {
    let (label, accent_color, speed, power, health, weight) = match tier {
        RankTier::E => ("E Rank", "#cffafe", 0.75, 0.6, 0.7, 1),
        RankTier::D => ("D Rank", "#bae6fd", 0.85, 0.8, 0.85, 2),
        RankTier::C => ("C Rank", "#a5b4fc", 0.95, 1.0, 1.0, 3),
        RankTier::B => ("B Rank", "#fbcfe8", 1.05, 1.3, 1.2, 5),
        RankTier::A => ("A Rank", "#fcd34d", 1.15, 1.6, 1.5, 8),
        RankTier::S => ("S Rank", "#fca5a5", 1.25, 2.0, 1.8, 13),
        RankTier::SS => ("SS Rank", "#f472b6", 1.35, 2.5, 2.2, 21),
    };
    TierConfig {
        tier,
        label,
        accent_color,
        speed_multiplier: speed,
        power_multiplier: power,
        health_multiplier: health,
        rarity_weight: weight,
    }
}

/// Look up display attributes for a category.
pub fn category_config(category: EntityCategory) -> CategoryConfig {
    let (label, color, icon) = match category {
        EntityCategory::Hero => ("Hero", "#60a5fa", "⚔️"),
        EntityCategory::Villain => ("Villain", "#dc2626", "☠️"),
        EntityCategory::Npc => ("NPC", "#10b981", "👤"),
        EntityCategory::Slayer => ("Slayer", "#f59e0b", "🗡️"),
        EntityCategory::Hunter => ("Hunter", "#84cc16", "🏹"),
        EntityCategory::Guardian => ("Guardian", "#0ea5e9", "🛡️"),
        EntityCategory::Mage => ("Mage", "#8b5cf6", "🔮"),
        EntityCategory::Assassin => ("Assassin", "#6b7280", "🗡️"),
        EntityCategory::Support => ("Support", "#06b6d4", "💚"),
        EntityCategory::Minion => ("Minion", "#78716c", "👾"),
        EntityCategory::Elite => ("Elite", "#ea580c", "💀"),
        EntityCategory::Boss => ("Boss", "#dc2626", "👹"),
        EntityCategory::Pet => ("Pet", "#ec4899", "🐾"),
        EntityCategory::Merchant => ("Merchant", "#eab308", "💰"),
        EntityCategory::Crafter => ("Crafter", "#a855f7", "⚒️"),
    };
    CategoryConfig {
        category,
        label,
        color,
        icon,
    }
}
