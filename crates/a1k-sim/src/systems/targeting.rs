//! Target selection for player attacks.

use hecs::{Entity, World};

use a1k_core::components::{Enemy, Health};
use a1k_core::types::Position;

/// Nearest living enemy within `range` of `from`.
pub fn nearest_enemy(world: &World, from: Position, range: f64) -> Option<Entity> {
    world
        .query::<(&Enemy, &Position, &Health)>()
        .iter()
        .filter(|(_, (_, _, health))| health.is_alive())
        .map(|(entity, (_, pos, _))| (entity, from.distance_to(pos)))
        .filter(|(_, dist)| *dist <= range)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(entity, _)| entity)
}

pub fn living_enemies(world: &World) -> usize {
    world
        .query::<(&Enemy, &Health)>()
        .iter()
        .filter(|(_, (_, health))| health.is_alive())
        .count()
}
