//! Cleanup system: removes enemies whose health ran out.

use hecs::{Entity, World};

use a1k_core::components::{Enemy, Health};

/// Despawn dead enemies. Uses a pre-allocated buffer to avoid per-tick
/// allocation. Returns how many were removed.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) -> usize {
    despawn_buffer.clear();

    for (entity, (_enemy, health)) in world.query_mut::<(&Enemy, &Health)>() {
        if !health.is_alive() {
            despawn_buffer.push(entity);
        }
    }

    let removed = despawn_buffer.len();
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    removed
}
