//! Rank arithmetic: scaling, ordering, stepping and random rolls.

use std::cmp::Ordering;
use std::str::FromStr;

use rand::Rng;

use a1k_core::enums::{EntityCategory, RankTier};

use crate::config::{category_config, tier_config};
use crate::RankError;

/// A tier paired with a category, e.g. "A Rank Boss".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rank {
    pub tier: RankTier,
    pub category: EntityCategory,
}

impl Rank {
    pub fn new(tier: RankTier, category: EntityCategory) -> Self {
        Self { tier, category }
    }

    pub fn display_name(&self) -> String {
        format!(
            "{} {}",
            tier_config(self.tier).label,
            category_config(self.category).label
        )
    }
}

/// `floor(base * power_multiplier)`.
pub fn power_level(tier: RankTier, base: f64) -> f64 {
    (base * tier_config(tier).power_multiplier).floor()
}

/// `floor(base * health_multiplier)`.
pub fn health(tier: RankTier, base: f64) -> f64 {
    (base * tier_config(tier).health_multiplier).floor()
}

/// `floor(base * speed_multiplier)`.
pub fn speed(tier: RankTier, base: f64) -> f64 {
    (base * tier_config(tier).speed_multiplier).floor()
}

/// Signed index distance between two tiers; positive when `a` outranks `b`.
pub fn compare(a: RankTier, b: RankTier) -> i32 {
    tier_index(a) as i32 - tier_index(b) as i32
}

pub fn is_higher(a: RankTier, b: RankTier) -> bool {
    a.cmp(&b) == Ordering::Greater
}

/// Position of a tier in ascending order (E = 0, SS = 6).
pub fn tier_index(tier: RankTier) -> usize {
    RankTier::ALL
        .iter()
        .position(|t| *t == tier)
        .unwrap_or_default()
}

pub fn tier_by_index(index: usize) -> Option<RankTier> {
    RankTier::ALL.get(index).copied()
}

/// The tier above, or None at SS.
pub fn next_tier(tier: RankTier) -> Option<RankTier> {
    tier_by_index(tier_index(tier) + 1)
}

/// The tier below, or None at E.
pub fn previous_tier(tier: RankTier) -> Option<RankTier> {
    tier_index(tier).checked_sub(1).and_then(tier_by_index)
}

/// Roll a tier weighted by rarity weight.
pub fn random_tier<R: Rng + ?Sized>(rng: &mut R) -> RankTier {
    random_tier_up_to(rng, RankTier::SS)
}

/// Roll a tier weighted by rarity weight among tiers no higher than `max`.
pub fn random_tier_up_to<R: Rng + ?Sized>(rng: &mut R, max: RankTier) -> RankTier {
    let candidates = RankTier::ALL.iter().copied().filter(|t| *t <= max);
    let total: u32 = candidates
        .clone()
        .map(|t| tier_config(t).rarity_weight)
        .sum();
    let mut roll = rng.gen::<f64>() * total as f64;
    for tier in candidates {
        roll -= tier_config(tier).rarity_weight as f64;
        if roll <= 0.0 {
            return tier;
        }
    }
    max
}

impl FromStr for Rank {
    type Err = RankError;

    /// Parses "<tier> <category>", e.g. "S boss".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let tier = parse_tier(parts.next().unwrap_or_default())?;
        let category = parse_category(parts.next().unwrap_or("minion"))?;
        Ok(Rank::new(tier, category))
    }
}

/// Parse a tier id such as "A" or "ss" (case-insensitive).
pub fn parse_tier(s: &str) -> Result<RankTier, RankError> {
    RankTier::ALL
        .into_iter()
        .find(|t| t.as_str().eq_ignore_ascii_case(s))
        .ok_or_else(|| RankError::UnknownTier(s.to_string()))
}

/// Parse a category id such as "boss" (case-insensitive).
pub fn parse_category(s: &str) -> Result<EntityCategory, RankError> {
    EntityCategory::ALL
        .into_iter()
        .find(|c| category_config(*c).label.eq_ignore_ascii_case(s))
        .ok_or_else(|| RankError::UnknownCategory(s.to_string()))
}
