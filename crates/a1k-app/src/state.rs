//! Application state shared between the driver and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use tracing::info;

use a1k_core::commands::PlayerCommand;
use a1k_core::state::ArenaSnapshot;
use a1k_progression::Storage;

use crate::error::AppError;
use crate::game_loop::{self, LoopSettings};

/// Latest snapshot published by the loop thread.
pub type SharedSnapshot = Arc<Mutex<Option<ArenaSnapshot>>>;

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the arena engine.
    PlayerCommand(PlayerCommand),
    /// Stop the loop thread gracefully.
    Shutdown,
}

/// Handle on a running game loop.
///
/// `mpsc::Sender` is not `Sync`, so it sits behind a `Mutex` like the rest.
#[derive(Default)]
pub struct AppState {
    /// `None` until `start` is called.
    command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    latest_snapshot: SharedSnapshot,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn the loop thread. Fails if one is already running.
    pub fn start<S>(&self, settings: LoopSettings, storage: S) -> Result<(), AppError>
    where
        S: Storage + Clone + Send + 'static,
    {
        let mut handle = self.handle.lock().map_err(|_| AppError::StatePoisoned)?;
        if handle.as_ref().is_some_and(|h| !h.is_finished()) {
            return Err(AppError::AlreadyRunning);
        }

        let (cmd_tx, join) =
            game_loop::spawn_game_loop(settings, storage, Arc::clone(&self.latest_snapshot))?;
        *self.command_tx.lock().map_err(|_| AppError::StatePoisoned)? = Some(cmd_tx);
        *handle = Some(join);
        Ok(())
    }

    /// Forward a player command to the loop.
    pub fn send_command(&self, command: PlayerCommand) -> Result<(), AppError> {
        let tx = self.command_tx.lock().map_err(|_| AppError::StatePoisoned)?;
        match tx.as_ref() {
            Some(tx) => tx
                .send(GameLoopCommand::PlayerCommand(command))
                .map_err(|_| AppError::NotRunning),
            None => Err(AppError::NotRunning),
        }
    }

    pub fn latest_snapshot(&self) -> Result<Option<ArenaSnapshot>, AppError> {
        let lock = self
            .latest_snapshot
            .lock()
            .map_err(|_| AppError::StatePoisoned)?;
        Ok(lock.clone())
    }

    pub fn is_running(&self) -> bool {
        self.handle
            .lock()
            .map(|h| h.as_ref().is_some_and(|h| !h.is_finished()))
            .unwrap_or(false)
    }

    /// Stop the loop and wait for it to flush and exit.
    pub fn shutdown(&self) -> Result<(), AppError> {
        if let Some(tx) = self
            .command_tx
            .lock()
            .map_err(|_| AppError::StatePoisoned)?
            .take()
        {
            // The loop may already have stopped on its tick budget.
            let _ = tx.send(GameLoopCommand::Shutdown);
        }
        let join = self
            .handle
            .lock()
            .map_err(|_| AppError::StatePoisoned)?
            .take();
        if let Some(join) = join {
            join.join().map_err(|_| AppError::LoopPanicked)?;
            info!("game loop joined");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use a1k_core::enums::GamePhase;
    use a1k_progression::MemoryStorage;
    use a1k_sim::SimConfig;

    fn settings() -> LoopSettings {
        LoopSettings {
            sim: SimConfig::default(),
            max_ticks: 0,
            time_scale: 1_000.0,
        }
    }

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(!state.is_running());
        assert!(state.latest_snapshot().unwrap().is_none());
        assert!(matches!(
            state.send_command(PlayerCommand::StartArena),
            Err(AppError::NotRunning)
        ));
    }

    #[test]
    fn test_start_send_and_shutdown() {
        let state = AppState::new();
        state.start(settings(), MemoryStorage::new()).unwrap();
        assert!(state.is_running());
        assert!(matches!(
            state.start(settings(), MemoryStorage::new()),
            Err(AppError::AlreadyRunning)
        ));

        state.send_command(PlayerCommand::StartArena).unwrap();
        let mut phase = GamePhase::Lobby;
        for _ in 0..200 {
            if let Some(snap) = state.latest_snapshot().unwrap() {
                phase = snap.phase;
                if phase != GamePhase::Lobby {
                    break;
                }
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        assert_ne!(phase, GamePhase::Lobby);

        state.shutdown().unwrap();
        assert!(!state.is_running());
        assert!(matches!(
            state.send_command(PlayerCommand::Pause),
            Err(AppError::NotRunning)
        ));
    }
}
