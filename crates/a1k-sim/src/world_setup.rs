//! Entity spawn factories for setting up the arena world.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use a1k_core::components::*;
use a1k_core::constants::*;
use a1k_core::enums::*;
use a1k_core::types::{Position, Stats};
use a1k_ranks::{health, power_level, random_tier_up_to, Rank};

use crate::systems::movement::clamp_to_arena;

/// Base hit points of an enemy before rank scaling.
pub const ENEMY_BASE_HP: f64 = 100.0;

/// Enemies spawn on a ring around the player spawn.
const SPAWN_RING_MIN: f64 = 120.0;
const SPAWN_RING_MAX: f64 = 260.0;

/// Player entity id in events and snapshots.
pub const PLAYER_ID: u32 = 0;

/// Spawn the player at the arena centre.
pub fn spawn_player(world: &mut World) -> Entity {
    world.spawn((
        Player,
        EntityId(PLAYER_ID),
        Name("Player".to_string()),
        Position::new(PLAYER_SPAWN.0, PLAYER_SPAWN.1),
        Stats::default(),
    ))
}

/// Spawn one ranked enemy. Attack and health scale with its tier.
pub fn spawn_enemy(
    world: &mut World,
    id: u32,
    tier: RankTier,
    category: EntityCategory,
    position: Position,
) -> Entity {
    let rank = Rank::new(tier, category);
    let stats = Stats::new(power_level(tier, DEFAULT_ATK), DEFAULT_DEF, DEFAULT_CRIT_CHANCE);
    world.spawn((
        Enemy { tier, category },
        EntityId(id),
        Name(rank.display_name()),
        position,
        stats,
        Health::full(health(tier, ENEMY_BASE_HP)),
        Brain::at_home(position),
        Status::default(),
    ))
}

/// Spawn a wave of `count` enemies with tiers capped at `max_tier`.
/// The last enemy of a wave of three or more is an elite.
/// Returns the next free entity id.
pub fn spawn_wave(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    count: usize,
    max_tier: RankTier,
    mut next_id: u32,
) -> u32 {
    for i in 0..count {
        let tier = random_tier_up_to(rng, max_tier);
        let category = if count >= 3 && i == count - 1 {
            EntityCategory::Elite
        } else {
            EntityCategory::Minion
        };
        let angle = rng.gen_range(0.0..std::f64::consts::TAU);
        let dist = rng.gen_range(SPAWN_RING_MIN..SPAWN_RING_MAX);
        let position = clamp_to_arena(Position::new(
            PLAYER_SPAWN.0 + dist * angle.cos(),
            PLAYER_SPAWN.1 + dist * angle.sin(),
        ));
        spawn_enemy(world, next_id, tier, category, position);
        next_id += 1;
    }
    next_id
}
