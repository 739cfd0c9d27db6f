//! Arena engine.
//!
//! `ArenaEngine` owns the hecs world, the fighter-side combat state and
//! the player's profile. It processes player commands, runs all systems
//! and produces `ArenaSnapshot`s. Headless and deterministic for a given
//! seed.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use a1k_core::commands::PlayerCommand;
use a1k_core::components::{EntityId, Health, Player};
use a1k_core::constants::*;
use a1k_core::enums::{Difficulty, EntityCategory, GamePhase, RankTier};
use a1k_core::events::CombatEvent;
use a1k_core::state::ArenaSnapshot;
use a1k_core::types::{Position, SimTime, Stats};

use a1k_combat::{CombatEngine, Defender, Fighter, ProjectileManager, SkillPipeline};
use a1k_progression::{MemoryStorage, PlayerProfile, Storage, StorageError};

use crate::score::ScoreState;
use crate::systems;
use crate::systems::snapshot::FighterStatus;
use crate::world_setup;

/// Configuration for starting a new arena.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed. Same seed and commands give the same run.
    pub seed: u64,
    /// Enemies spawned by `StartArena`.
    pub enemy_count: usize,
    /// Highest tier a spawned enemy may roll.
    pub max_tier: RankTier,
    /// Revive charges granted at the start of a run.
    pub revives: u32,
    /// Balance preset applied to every skill cast.
    pub difficulty: Difficulty,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            enemy_count: 5,
            max_tier: RankTier::B,
            revives: 0,
            difficulty: Difficulty::Normal,
        }
    }
}

pub struct ArenaEngine<S: Storage + Clone = MemoryStorage> {
    world: World,
    time: SimTime,
    phase: GamePhase,
    config: SimConfig,
    rng: ChaCha8Rng,
    next_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<CombatEvent>,
    fighter: Fighter,
    combat: CombatEngine,
    skills: SkillPipeline<S>,
    projectiles: ProjectileManager,
    profile: PlayerProfile<S>,
    score: ScoreState,
}

impl ArenaEngine<MemoryStorage> {
    /// Engine whose progression lives only in memory.
    pub fn new(config: SimConfig) -> Self {
        Self::with_storage(config, MemoryStorage::new())
    }
}

impl<S: Storage + Clone> ArenaEngine<S> {
    /// Engine whose progression persists to `storage`.
    pub fn with_storage(config: SimConfig, storage: S) -> Self {
        let mut skills = SkillPipeline::load(storage.clone());
        skills.difficulty = config.difficulty;
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            next_id: world_setup::PLAYER_ID + 1,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            fighter: Fighter::default(),
            combat: CombatEngine::new(),
            skills,
            projectiles: ProjectileManager::new(),
            profile: PlayerProfile::load(storage),
            score: ScoreState::default(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the arena by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> ArenaSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let events = self.collect_events();
        let status = FighterStatus {
            fighter: &self.fighter,
            combo_multiplier: self.skills.combo.peek_multiplier(self.time.elapsed_ms),
            transformed: self
                .skills
                .transforms
                .is_active(self.fighter.character(), self.time.elapsed_ms),
        };
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            status,
            &self.combat,
            self.projectiles.views(),
            events,
            &self.score,
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn fighter(&self) -> &Fighter {
        &self.fighter
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn skills(&self) -> &SkillPipeline<S> {
        &self.skills
    }

    pub fn projectiles(&self) -> &ProjectileManager {
        &self.projectiles
    }

    pub fn profile(&self) -> &PlayerProfile<S> {
        &self.profile
    }

    pub fn profile_mut(&mut self) -> &mut PlayerProfile<S> {
        &mut self.profile
    }

    /// Write all progression, surfacing the first storage failure.
    pub fn flush(&self) -> Result<(), StorageError> {
        self.skills.flush()?;
        self.profile.flush()
    }

    /// Place an extra enemy in the running arena. Returns its id.
    pub fn spawn_enemy(&mut self, tier: RankTier, category: EntityCategory, position: Position) -> u32 {
        let id = self.next_id;
        world_setup::spawn_enemy(&mut self.world, id, tier, category, position);
        self.next_id += 1;
        self.score.enemies_total += 1;
        id
    }

    #[cfg(test)]
    pub fn fighter_mut(&mut self) -> &mut Fighter {
        &mut self.fighter
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        let now_ms = self.time.elapsed_ms;
        match command {
            PlayerCommand::StartArena => {
                if self.phase == GamePhase::Lobby {
                    self.start_arena();
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::ReturnToLobby => {
                self.world.clear();
                self.projectiles.clear();
                self.phase = GamePhase::Lobby;
            }
            _ if self.phase != GamePhase::Active => {
                debug!(?command, phase = ?self.phase, "command ignored outside active play");
            }
            PlayerCommand::MovePlayer { dx, dy } => {
                systems::movement::move_player(&mut self.world, dx, dy);
            }
            PlayerCommand::Attack => {
                let multiplier =
                    self.fighter.profile().attack_power * self.fighter.rage_multiplier();
                self.player_hit(PLAYER_ATTACK_RANGE, multiplier, now_ms);
            }
            PlayerCommand::CastSkill { skill_id, charge } => {
                match self.skills.activate(&skill_id, &self.fighter, charge, now_ms) {
                    Ok(cast) => {
                        let player = systems::movement::player_position(&self.world);
                        // Aim at the nearest enemy anywhere; range limits the flight.
                        let toward =
                            systems::targeting::nearest_enemy(&self.world, player, f64::INFINITY)
                                .and_then(|e| self.world.get::<&Position>(e).ok().map(|p| *p));
                        self.projectiles.launch(&cast, player, toward, now_ms);
                    }
                    Err(e) => warn!(error = %e, "skill cast rejected"),
                }
            }
            PlayerCommand::ActivateRage => {
                self.fighter.activate_rage(now_ms);
            }
            PlayerCommand::SwitchCharacter { character } => {
                self.fighter.switch_character(character);
            }
        }
    }

    fn start_arena(&mut self) {
        self.world.clear();
        self.projectiles.clear();
        self.time = SimTime::default();
        self.score = ScoreState::default();
        self.combat = CombatEngine::new();
        self.fighter.reset();
        self.fighter.grant_revives(self.config.revives);

        world_setup::spawn_player(&mut self.world);
        self.next_id = world_setup::spawn_wave(
            &mut self.world,
            &mut self.rng,
            self.config.enemy_count,
            self.config.max_tier,
            world_setup::PLAYER_ID + 1,
        );
        self.score.enemies_total = self.config.enemy_count as u32;
        self.phase = GamePhase::Active;
        info!(
            enemies = self.config.enemy_count,
            max_tier = %self.config.max_tier,
            difficulty = self.config.difficulty.as_str(),
            "arena started"
        );
    }

    fn player_stats(&self) -> Stats {
        self.world
            .query::<(&Player, &Stats)>()
            .iter()
            .next()
            .map(|(_, (_, stats))| *stats)
            .unwrap_or_default()
    }

    /// Hit the nearest enemy within `range`.
    fn player_hit(&mut self, range: f64, multiplier: f64, now_ms: u64) {
        let player = systems::movement::player_position(&self.world);
        let Some(target) = systems::targeting::nearest_enemy(&self.world, player, range) else {
            debug!(range, "no enemy in reach");
            return;
        };
        let attacker = self.player_stats();

        let Ok((id, position, defender_stats, health)) = self
            .world
            .query_one_mut::<(&EntityId, &Position, &Stats, &mut Health)>(target)
        else {
            return;
        };
        let result = self.combat.apply_damage(
            &attacker,
            Defender {
                id: id.0,
                position: *position,
                stats: defender_stats,
                health,
            },
            multiplier,
            &mut self.rng,
            now_ms,
        );

        self.fighter.register_hit(now_ms);
        self.score.damage_dealt += result.damage as u64;
        if result.killed {
            self.score.enemies_defeated += 1;
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let now_ms = self.time.elapsed_ms;
        let player = systems::movement::player_position(&self.world);

        let player_stats = self.player_stats();

        // 1. Projectiles
        let hits = systems::projectiles::run(
            &mut self.world,
            &mut self.projectiles,
            &mut self.combat,
            &mut self.rng,
            player_stats,
            now_ms,
        );
        if !hits.is_empty() {
            self.fighter.register_hit(now_ms);
        }
        for hit in &hits {
            self.score.damage_dealt += hit.damage as u64;
            if hit.killed {
                self.score.enemies_defeated += 1;
            }
        }

        // 2. Enemy brains
        let strikers = systems::brain::run(&mut self.world, player, now_ms, &mut self.events);

        // 3. Enemy strikes on the player
        for striker in strikers {
            if !self.fighter.is_alive() {
                break;
            }
            let Ok(stats) = self.world.get::<&Stats>(striker).map(|s| *s) else {
                continue;
            };
            let (amount, _crit) =
                self.combat
                    .strike(&stats, &player_stats, player, 1.0, &mut self.rng, now_ms);
            self.fighter.take_damage(amount as f64);
            self.score.damage_taken += amount as u64;
        }

        // 4. Timers and feedback
        self.combat.update(DT, now_ms);
        self.fighter.update(now_ms);
        self.skills.update(now_ms);

        // 5. Cleanup
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);

        // 6. Outcome
        if !self.fighter.is_alive() {
            info!("arena lost");
            self.phase = GamePhase::Defeat;
        } else if self.score.enemies_total > 0
            && systems::targeting::living_enemies(&self.world) == 0
        {
            self.profile.skill_tree.add_points(SKILL_POINTS_PER_CLEAR);
            info!(
                defeated = self.score.enemies_defeated,
                skill_points = self.profile.skill_tree.points(),
                "arena cleared"
            );
            self.phase = GamePhase::Victory;
        }
    }

    fn collect_events(&mut self) -> Vec<CombatEvent> {
        let mut events = std::mem::take(&mut self.events);
        events.extend(self.combat.drain_events());
        events.extend(self.fighter.drain_events());
        events.extend(self.skills.drain_events());
        events.extend(self.profile.drain_events());
        events
    }
}
