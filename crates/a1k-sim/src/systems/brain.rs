//! Enemy brain system: runs the FSM for every living enemy.

use hecs::{Entity, World};

use a1k_core::components::{Brain, Enemy, EntityId, Health, Status};
use a1k_core::events::CombatEvent;
use a1k_core::types::Position;

use a1k_ai::fsm::{evaluate, BrainContext, BrainUpdate};
use a1k_ai::profiles::get_profile;

/// Evaluate every brain against `player` and apply the results. Frozen
/// and stunned enemies are skipped. Returns the enemies that strike the
/// player this tick.
pub fn run(
    world: &mut World,
    player: Position,
    now_ms: u64,
    events: &mut Vec<CombatEvent>,
) -> Vec<Entity> {
    // Collect first; hecs queries hold a borrow on the world.
    let mut updates: Vec<(Entity, u32, BrainUpdate)> = Vec::new();

    {
        let mut query =
            world.query::<(&Enemy, &EntityId, &Position, &Health, &Brain, Option<&Status>)>();
        for (entity, (enemy, id, pos, health, brain, status)) in query.iter() {
            if !health.is_alive() || status.is_some_and(|s| s.is_disabled(now_ms)) {
                continue;
            }

            let ctx = BrainContext {
                state: brain.state,
                position: *pos,
                player,
                patrol_home: brain.patrol_home,
                detection_range: brain.detection_range,
                attack_range: brain.attack_range,
                attack_cooldown: brain.attack_cooldown,
                hp: health.hp,
            };
            let update = evaluate(&ctx, &get_profile(enemy.tier));
            updates.push((entity, id.0, update));
        }
    }

    let mut strikers = Vec::new();
    for (entity, id, update) in updates {
        if let Ok(mut brain) = world.get::<&mut Brain>(entity) {
            if update.state_changed {
                events.push(CombatEvent::StateChanged {
                    id,
                    from: brain.state,
                    to: update.new_state,
                });
            }
            brain.state = update.new_state;
            brain.attack_cooldown = update.new_cooldown;
        }
        if let Ok(mut pos) = world.get::<&mut Position>(entity) {
            *pos = update.new_position;
        }
        if update.strike {
            strikers.push(entity);
        }
    }
    strikers
}
