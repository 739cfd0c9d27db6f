use std::path::PathBuf;
use std::time::Duration;

use tracing::{error, info};

use a1k_app::autopilot::Autopilot;
use a1k_app::config::AppConfig;
use a1k_app::game_loop::{self, LoopSettings};
use a1k_app::state::AppState;
use a1k_app::{logging, AppError};
use a1k_core::commands::PlayerCommand;
use a1k_progression::FileStorage;

fn main() {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("a1k.json"));

    let config = match AppConfig::load(&path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };
    logging::init(&config.log_level);

    if let Err(e) = run(&config) {
        error!(error = %e, "arena run failed");
        std::process::exit(1);
    }
}

fn run(config: &AppConfig) -> Result<(), AppError> {
    info!(?config, "starting headless arena");
    let state = AppState::new();
    state.start(LoopSettings::from(config), FileStorage::new(&config.save_dir))?;
    state.send_command(PlayerCommand::StartArena)?;

    let mut pilot = Autopilot::new();
    let poll = game_loop::tick_interval(config.time_scale) / 2;
    while state.is_running() {
        if let Some(snapshot) = state.latest_snapshot()? {
            if game_loop::is_finished(snapshot.phase) {
                info!(
                    phase = ?snapshot.phase,
                    tick = snapshot.time.tick,
                    defeated = snapshot.score.enemies_defeated,
                    dealt = snapshot.score.damage_dealt,
                    taken = snapshot.score.damage_taken,
                    best_streak = snapshot.score.best_streak,
                    "arena over"
                );
                break;
            }
            for command in pilot.decide(&snapshot) {
                // Loop may stop on its tick budget between polls.
                if state.send_command(command).is_err() {
                    break;
                }
            }
        }
        std::thread::sleep(poll.max(Duration::from_micros(200)));
    }

    state.shutdown()
}
