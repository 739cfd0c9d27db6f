//! Projectile system: advances skill effects and applies their hits.

use std::collections::HashMap;

use hecs::{Entity, World};
use rand::Rng;

use a1k_core::components::{Enemy, EntityId, Health, Status};
use a1k_core::types::{Position, Stats};

use a1k_combat::{CombatEngine, Defender, HitResult, HitTarget, ProjectileManager};

/// Move every projectile and apply what it touched. `attacker` supplies
/// crit chance; each hit carries its own damage as attack.
pub fn run<R: Rng + ?Sized>(
    world: &mut World,
    manager: &mut ProjectileManager,
    combat: &mut CombatEngine,
    rng: &mut R,
    attacker: Stats,
    now_ms: u64,
) -> Vec<HitResult> {
    let mut by_id: HashMap<u32, Entity> = HashMap::new();
    let targets: Vec<HitTarget> = world
        .query::<(&Enemy, &EntityId, &Position, &Health)>()
        .iter()
        .filter(|(_, (_, _, _, health))| health.is_alive())
        .map(|(entity, (_, id, pos, _))| {
            by_id.insert(id.0, entity);
            HitTarget {
                id: id.0,
                position: *pos,
            }
        })
        .collect();

    let mut results = Vec::new();
    for hit in manager.update(now_ms, &targets) {
        let Some(&entity) = by_id.get(&hit.target) else {
            continue;
        };
        let Ok((id, position, stats, health, status)) = world
            .query_one_mut::<(&EntityId, &Position, &Stats, &mut Health, Option<&mut Status>)>(entity)
        else {
            continue;
        };
        // Killed earlier this frame by another hit.
        if !health.is_alive() {
            continue;
        }

        let result = combat.apply_damage(
            &Stats {
                atk: hit.damage,
                ..attacker
            },
            Defender {
                id: id.0,
                position: *position,
                stats,
                health,
            },
            1.0,
            rng,
            now_ms,
        );
        if let (Some(kind), Some(status)) = (hit.status, status) {
            status.apply(kind, now_ms);
        }
        results.push(result);
    }
    results
}
