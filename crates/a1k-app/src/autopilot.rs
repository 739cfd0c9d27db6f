//! Scripted player for headless runs.
//!
//! Reads each snapshot and answers with the commands a simple player would
//! send: walk to the nearest enemy, cast starter skills off cooldown,
//! basic-attack in between, pop rage when the meter is full.

use std::collections::HashMap;

use a1k_core::commands::PlayerCommand;
use a1k_core::constants::{DEFAULT_SKILL_RANGE, PLAYER_ATTACK_RANGE, RAGE_MAX, TICK_RATE};
use a1k_core::enums::{CharacterId, GamePhase};
use a1k_core::state::{ArenaSnapshot, EnemyView};
use a1k_combat::catalog::{self, SkillDef};

/// Pixels walked per decision.
const STEP: f64 = 4.0;

/// Stop walking once this close.
const HOLD_DISTANCE: f64 = PLAYER_ATTACK_RANGE * 0.75;

#[derive(Debug, Default)]
pub struct Autopilot {
    /// Tick of each skill's last cast.
    last_cast: HashMap<&'static str, u64>,
    last_tick: Option<u64>,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands for `snapshot`. Each tick is answered once.
    pub fn decide(&mut self, snapshot: &ArenaSnapshot) -> Vec<PlayerCommand> {
        let tick = snapshot.time.tick;
        if snapshot.phase != GamePhase::Active || self.last_tick == Some(tick) {
            return Vec::new();
        }
        self.last_tick = Some(tick);

        let mut commands = Vec::new();
        let player = &snapshot.player;
        if player.rage >= RAGE_MAX && !player.rage_active {
            commands.push(PlayerCommand::ActivateRage);
        }

        let Some((target, dist)) = nearest(snapshot) else {
            return commands;
        };

        if dist > HOLD_DISTANCE {
            let step = STEP.min(dist - HOLD_DISTANCE);
            let angle = player.position.angle_to(&target.position);
            commands.push(PlayerCommand::MovePlayer {
                dx: angle.cos() * step,
                dy: angle.sin() * step,
            });
        }

        if dist <= DEFAULT_SKILL_RANGE {
            if let Some(skill) = self.ready_skill(player.character, tick) {
                self.last_cast.insert(skill.id, tick);
                commands.push(PlayerCommand::CastSkill {
                    skill_id: skill.id.to_string(),
                    charge: 0.0,
                });
                return commands;
            }
        }
        if dist <= PLAYER_ATTACK_RANGE {
            commands.push(PlayerCommand::Attack);
        }
        commands
    }

    /// First damaging starter skill whose cooldown has run out.
    fn ready_skill(&self, character: CharacterId, tick: u64) -> Option<&'static SkillDef> {
        catalog::skills_for(character)
            .filter(|s| s.unlock_level <= 1 && s.damage > 0.0)
            .find(|s| match self.last_cast.get(s.id) {
                Some(&cast) => tick >= cast + cooldown_ticks(s.cooldown),
                None => true,
            })
    }
}

/// Whole ticks covering `seconds`, plus one for the boundary.
fn cooldown_ticks(seconds: f64) -> u64 {
    (seconds * TICK_RATE as f64).ceil() as u64 + 1
}

fn nearest(snapshot: &ArenaSnapshot) -> Option<(&EnemyView, f64)> {
    snapshot
        .enemies
        .iter()
        .filter(|e| e.hp > 0.0)
        .map(|e| (e, snapshot.player.position.distance_to(&e.position)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use a1k_core::enums::{AiState, EntityCategory, RankTier};
    use a1k_core::types::Position;
    use a1k_sim::{ArenaEngine, SimConfig};

    fn enemy_at(x: f64, y: f64) -> EnemyView {
        EnemyView {
            id: 1,
            name: "C Rank Minion".into(),
            tier: RankTier::C,
            category: EntityCategory::Minion,
            position: Position::new(x, y),
            hp: 100.0,
            max_hp: 100.0,
            state: AiState::Idle,
            statuses: Vec::new(),
        }
    }

    fn active_snapshot(tick: u64, enemies: Vec<EnemyView>) -> ArenaSnapshot {
        let mut snap = ArenaSnapshot {
            phase: GamePhase::Active,
            enemies,
            ..Default::default()
        };
        snap.time.tick = tick;
        snap.player.position = Position::new(400.0, 300.0);
        snap
    }

    #[test]
    fn test_idle_outside_active_play() {
        let mut pilot = Autopilot::new();
        let snap = ArenaSnapshot::default();
        assert!(pilot.decide(&snap).is_empty());
    }

    #[test]
    fn test_walks_toward_far_enemy() {
        let mut pilot = Autopilot::new();
        let cmds = pilot.decide(&active_snapshot(1, vec![enemy_at(700.0, 300.0)]));
        assert_eq!(cmds.len(), 1);
        match &cmds[0] {
            PlayerCommand::MovePlayer { dx, dy } => {
                assert!((dx - STEP).abs() < 1e-9);
                assert!(dy.abs() < 1e-9);
            }
            other => panic!("expected a move, got {other:?}"),
        }
    }

    #[test]
    fn test_casts_then_attacks_while_on_cooldown() {
        let mut pilot = Autopilot::new();
        let enemies = vec![enemy_at(420.0, 300.0)];

        let first = pilot.decide(&active_snapshot(1, enemies.clone()));
        assert!(matches!(&first[..], [PlayerCommand::CastSkill { skill_id, .. }] if skill_id == "A1_S1"));

        let second = pilot.decide(&active_snapshot(2, enemies.clone()));
        assert!(matches!(&second[..], [PlayerCommand::CastSkill { skill_id, .. }] if skill_id == "A1_S3"));

        let third = pilot.decide(&active_snapshot(3, enemies.clone()));
        assert!(matches!(&third[..], [PlayerCommand::Attack]));

        // A1_S1 is back after 2.5s.
        let later = pilot.decide(&active_snapshot(1 + cooldown_ticks(2.5), enemies));
        assert!(matches!(&later[..], [PlayerCommand::CastSkill { skill_id, .. }] if skill_id == "A1_S1"));
    }

    #[test]
    fn test_same_tick_answered_once() {
        let mut pilot = Autopilot::new();
        let snap = active_snapshot(5, vec![enemy_at(420.0, 300.0)]);
        assert!(!pilot.decide(&snap).is_empty());
        assert!(pilot.decide(&snap).is_empty());
    }

    #[test]
    fn test_full_rage_is_spent() {
        let mut pilot = Autopilot::new();
        let mut snap = active_snapshot(1, Vec::new());
        snap.player.rage = RAGE_MAX;
        assert!(matches!(&pilot.decide(&snap)[..], [PlayerCommand::ActivateRage]));
    }

    #[test]
    fn test_autopilot_clears_easy_arena() {
        let mut engine = ArenaEngine::new(SimConfig {
            seed: 7,
            enemy_count: 3,
            max_tier: RankTier::E,
            revives: 3,
            ..Default::default()
        });
        let mut pilot = Autopilot::new();
        engine.queue_command(PlayerCommand::StartArena);

        let mut snap = engine.tick();
        for _ in 0..3_600 {
            if snap.phase != GamePhase::Active {
                break;
            }
            engine.queue_commands(pilot.decide(&snap));
            snap = engine.tick();
        }
        assert_eq!(snap.phase, GamePhase::Victory);
        assert_eq!(snap.score.enemies_defeated, 3);
    }
}
