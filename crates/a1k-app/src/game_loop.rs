//! Game loop thread: ticks the arena at 60Hz and publishes snapshots.
//!
//! The engine is created inside the thread so it never crosses threads.
//! Commands arrive over an `mpsc` channel and the latest snapshot is
//! stored in shared state for polling.

use std::sync::mpsc;
use std::sync::Mutex;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use a1k_core::constants::TICK_RATE;
use a1k_core::enums::GamePhase;
use a1k_core::events::CombatEvent;
use a1k_core::state::ArenaSnapshot;
use a1k_progression::Storage;
use a1k_sim::{ArenaEngine, SimConfig};

use crate::config::AppConfig;
use crate::error::AppError;
use crate::state::{GameLoopCommand, SharedSnapshot};

/// Nominal duration of one tick at 1x speed.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// What the loop thread needs from the app config.
#[derive(Debug, Clone)]
pub struct LoopSettings {
    pub sim: SimConfig,
    /// Stop after this many ticks. 0 runs until shutdown.
    pub max_ticks: u64,
    pub time_scale: f64,
}

impl From<&AppConfig> for LoopSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            sim: config.sim_config(),
            max_ticks: config.max_ticks,
            time_scale: config.time_scale,
        }
    }
}

/// Wall-clock interval between ticks at `time_scale`.
pub fn tick_interval(time_scale: f64) -> Duration {
    if time_scale > 0.001 {
        TICK_DURATION.div_f64(time_scale)
    } else {
        TICK_DURATION
    }
}

/// Spawn the game loop thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop<S>(
    settings: LoopSettings,
    storage: S,
    latest_snapshot: SharedSnapshot,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>), AppError>
where
    S: Storage + Clone + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("a1k-game-loop".into())
        .spawn(move || {
            let engine = ArenaEngine::with_storage(settings.sim.clone(), storage);
            run_game_loop(engine, &settings, cmd_rx, &latest_snapshot);
        })
        .map_err(AppError::Spawn)?;

    Ok((cmd_tx, handle))
}

/// Runs until a Shutdown command, channel disconnect or the tick budget.
fn run_game_loop<S: Storage + Clone>(
    mut engine: ArenaEngine<S>,
    settings: &LoopSettings,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<ArenaSnapshot>>,
) {
    let interval = tick_interval(settings.time_scale);
    let mut next_tick_time = Instant::now();
    let mut ticks_run = 0u64;
    let mut last_phase = engine.phase();

    info!(seed = settings.sim.seed, max_ticks = settings.max_ticks, "game loop started");

    'outer: loop {
        // 1. Drain pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => break 'outer,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => break 'outer,
            }
        }

        // 2. Advance one tick (the engine handles pause itself)
        let snapshot = engine.tick();
        log_events(&snapshot.events);
        if snapshot.phase != last_phase {
            info!(from = ?last_phase, to = ?snapshot.phase, tick = snapshot.time.tick, "phase changed");
            last_phase = snapshot.phase;
        }

        // 3. Publish for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        ticks_run += 1;
        if settings.max_ticks > 0 && ticks_run >= settings.max_ticks {
            info!(ticks_run, "tick budget reached");
            break;
        }

        // 4. Sleep until the next tick
        next_tick_time += interval;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > interval * 2 {
            // Too far behind, skip the catch-up.
            next_tick_time = now;
        }
    }

    if let Err(e) = engine.flush() {
        warn!(error = %e, "failed to flush progression on shutdown");
    }
    info!(ticks_run, "game loop stopped");
}

fn log_events(events: &[CombatEvent]) {
    for event in events {
        match event {
            CombatEvent::Death { id } => info!(id, "enemy defeated"),
            CombatEvent::SkillLevelUp { skill_id, level } => info!(%skill_id, level, "mastery up"),
            CombatEvent::PlayerDied { .. } | CombatEvent::PlayerRevived { .. } => {
                info!(?event, "player")
            }
            _ => debug!(?event),
        }
    }
}

/// Phases in which the arena no longer changes until a new command.
pub fn is_finished(phase: GamePhase) -> bool {
    matches!(phase, GamePhase::Victory | GamePhase::Defeat)
}
