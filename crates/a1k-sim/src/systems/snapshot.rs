//! Snapshot system: queries the world and builds a complete `ArenaSnapshot`.
//!
//! Read-only; never modifies the world.

use hecs::World;

use a1k_core::components::*;
use a1k_core::enums::GamePhase;
use a1k_core::events::CombatEvent;
use a1k_core::state::*;
use a1k_core::types::{Position, SimTime};

use a1k_combat::{CombatEngine, Fighter};

use crate::score::ScoreState;
use crate::systems::movement::player_position;

/// Fighter-side values that live outside the world.
pub struct FighterStatus<'a> {
    pub fighter: &'a Fighter,
    pub combo_multiplier: f64,
    pub transformed: bool,
}

#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    status: FighterStatus<'_>,
    combat: &CombatEngine,
    projectiles: Vec<ProjectileView>,
    events: Vec<CombatEvent>,
    score: &ScoreState,
) -> ArenaSnapshot {
    ArenaSnapshot {
        time: *time,
        phase,
        player: build_player(world, &status),
        enemies: build_enemies(world, time.elapsed_ms),
        feedback: combat.feedback_view(time.elapsed_ms),
        events,
        score: ScoreView {
            enemies_defeated: score.enemies_defeated,
            enemies_total: score.enemies_total,
            damage_dealt: score.damage_dealt,
            damage_taken: score.damage_taken,
            best_streak: status.fighter.best_streak(),
        },
        projectiles,
    }
}

fn build_player(world: &World, status: &FighterStatus<'_>) -> PlayerView {
    let fighter = status.fighter;
    PlayerView {
        character: fighter.character(),
        position: player_position(world),
        hp: fighter.hp(),
        max_hp: fighter.max_hp(),
        rage: fighter.rage(),
        rage_active: fighter.rage_active(),
        streak: fighter.streak(),
        combo_multiplier: status.combo_multiplier,
        transformed: status.transformed,
    }
}

/// Enemies sorted by id for stable output.
fn build_enemies(world: &World, now_ms: u64) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &EntityId, &Name, &Position, &Health, &Brain, Option<&Status>)>()
        .iter()
        .map(|(_, (enemy, id, name, pos, health, brain, status))| EnemyView {
            id: id.0,
            name: name.0.clone(),
            tier: enemy.tier,
            category: enemy.category,
            position: *pos,
            hp: health.hp,
            max_hp: health.max_hp,
            state: brain.state,
            statuses: status.map(|s| s.active(now_ms)).unwrap_or_default(),
        })
        .collect();
    enemies.sort_by_key(|e| e.id);
    enemies
}
