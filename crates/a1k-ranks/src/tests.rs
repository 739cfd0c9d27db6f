use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use a1k_core::enums::{EntityCategory, RankTier};

use crate::config::{category_config, tier_config};
use crate::system::*;
use crate::RankError;

#[test]
fn test_tier_table_values() {
    let s = tier_config(RankTier::S);
    assert_eq!(s.label, "S Rank");
    assert_eq!(s.power_multiplier, 2.0);
    assert_eq!(s.health_multiplier, 1.8);
    assert_eq!(s.speed_multiplier, 1.25);
    assert_eq!(s.rarity_weight, 13);

    let c = tier_config(RankTier::C);
    assert_eq!(c.power_multiplier, 1.0);
    assert_eq!(c.health_multiplier, 1.0);
}

#[test]
fn test_display_name() {
    let rank = Rank::new(RankTier::A, EntityCategory::Boss);
    assert_eq!(rank.display_name(), "A Rank Boss");
    let rank = Rank::new(RankTier::E, EntityCategory::Npc);
    assert_eq!(rank.display_name(), "E Rank NPC");
}

#[test]
fn test_scaling_floors() {
    // 100 * 0.6 = 60, 100 * 0.85 = 85, 33 * 1.35 = 44.55 -> 44
    assert_eq!(power_level(RankTier::E, 100.0), 60.0);
    assert_eq!(health(RankTier::D, 100.0), 85.0);
    assert_eq!(speed(RankTier::SS, 33.0), 44.0);
}

#[test]
fn test_compare_and_is_higher() {
    assert_eq!(compare(RankTier::SS, RankTier::E), 6);
    assert_eq!(compare(RankTier::C, RankTier::A), -2);
    assert_eq!(compare(RankTier::B, RankTier::B), 0);
    assert!(is_higher(RankTier::S, RankTier::A));
    assert!(!is_higher(RankTier::A, RankTier::A));
}

#[test]
fn test_tier_stepping_edges() {
    assert_eq!(next_tier(RankTier::E), Some(RankTier::D));
    assert_eq!(next_tier(RankTier::SS), None);
    assert_eq!(previous_tier(RankTier::SS), Some(RankTier::S));
    assert_eq!(previous_tier(RankTier::E), None);
}

#[test]
fn test_tier_index_lookup() {
    assert_eq!(tier_index(RankTier::E), 0);
    assert_eq!(tier_index(RankTier::SS), 6);
    assert_eq!(tier_by_index(4), Some(RankTier::A));
    assert_eq!(tier_by_index(7), None);
}

#[test]
fn test_random_tier_weights() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut counts = [0u32; 7];
    for _ in 0..10_000 {
        counts[tier_index(random_tier(&mut rng))] += 1;
    }
    // Weights are 1:21 between E and SS.
    assert!(counts[6] > counts[0] * 5, "counts = {counts:?}");
    assert!(counts.iter().all(|c| *c > 0), "counts = {counts:?}");
}

#[test]
fn test_random_tier_up_to_respects_cap() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    for _ in 0..1000 {
        let tier = random_tier_up_to(&mut rng, RankTier::C);
        assert!(tier <= RankTier::C);
    }
}

#[test]
fn test_random_tier_deterministic() {
    let mut a = ChaCha8Rng::seed_from_u64(3);
    let mut b = ChaCha8Rng::seed_from_u64(3);
    for _ in 0..50 {
        assert_eq!(random_tier(&mut a), random_tier(&mut b));
    }
}

#[test]
fn test_parse_rank() {
    let rank: Rank = "ss boss".parse().unwrap();
    assert_eq!(rank, Rank::new(RankTier::SS, EntityCategory::Boss));

    let rank: Rank = "B".parse().unwrap();
    assert_eq!(rank.category, EntityCategory::Minion);

    assert_eq!(
        "Z boss".parse::<Rank>(),
        Err(RankError::UnknownTier("Z".to_string()))
    );
    assert_eq!(
        parse_category("dragon"),
        Err(RankError::UnknownCategory("dragon".to_string()))
    );
}

#[test]
fn test_category_table() {
    let boss = category_config(EntityCategory::Boss);
    assert_eq!(boss.label, "Boss");
    assert_eq!(boss.color, "#dc2626");
    for category in EntityCategory::ALL {
        assert!(!category_config(category).label.is_empty());
    }
}
