//! Player movement inside the arena bounds.

use hecs::World;

use a1k_core::components::Player;
use a1k_core::constants::{ARENA_HEIGHT, ARENA_WIDTH};
use a1k_core::types::Position;

/// Keep a point inside the arena.
pub fn clamp_to_arena(pos: Position) -> Position {
    Position::new(pos.x.clamp(0.0, ARENA_WIDTH), pos.y.clamp(0.0, ARENA_HEIGHT))
}

/// Move the player by `(dx, dy)`, stopping at the walls.
pub fn move_player(world: &mut World, dx: f64, dy: f64) {
    for (_entity, (_player, pos)) in world.query_mut::<(&Player, &mut Position)>() {
        *pos = clamp_to_arena(Position::new(pos.x + dx, pos.y + dy));
    }
}

/// Current player position, or the origin when there is no player.
pub fn player_position(world: &World) -> Position {
    world
        .query::<(&Player, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| *pos)
        .unwrap_or_default()
}
