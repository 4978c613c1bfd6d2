//! Shared engine handle.
//!
//! One mutex guards the whole [`Game`], so ticks and commands from different
//! threads are serialised exactly as the single-threaded engine expects.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::sync::Notify;
use tui_blockfall_core::{Game, GameSnapshot};

use crate::types::{EngineState, GameCommand, GameEvent};

#[derive(Debug)]
struct Inner {
    game: Mutex<Game>,
    schedule_changed: Notify,
}

/// Cloneable handle to one engine instance.
#[derive(Debug, Clone)]
pub struct SharedGame {
    inner: Arc<Inner>,
}

impl SharedGame {
    pub fn new(game: Game) -> Self {
        Self {
            inner: Arc::new(Inner {
                game: Mutex::new(game),
                schedule_changed: Notify::new(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Game> {
        self.inner
            .game
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Apply a command, waking the ticker if the schedule may have moved.
    pub fn apply(&self, command: GameCommand) -> bool {
        self.with_mut(|game| game.apply(command))
    }

    /// Run one gravity step.
    pub fn tick(&self) -> bool {
        self.with_mut(Game::tick)
    }

    /// Read-only access under the lock.
    pub fn with<R>(&self, f: impl FnOnce(&Game) -> R) -> R {
        f(&*self.lock())
    }

    /// Mutable access under the lock.
    ///
    /// The ticker is notified when the schedule epoch moved, so a closure
    /// that restarts the period (reset then start, pause then resume) still
    /// wakes it even though the state looks unchanged afterwards.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut Game) -> R) -> R {
        let (result, changed) = {
            let mut game = self.lock();
            let before = game.schedule_epoch();
            let result = f(&mut *game);
            (result, before != game.schedule_epoch())
        };
        if changed {
            self.inner.schedule_changed.notify_one();
        }
        result
    }

    pub fn state(&self) -> EngineState {
        self.with(Game::state)
    }

    pub fn tick_interval(&self) -> Option<Duration> {
        self.with(Game::tick_interval)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.with(Game::snapshot)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.with(|game| game.snapshot_into(out));
    }

    pub fn take_events(&self) -> Vec<GameEvent> {
        self.with_mut(Game::take_events)
    }

    /// Wait until the schedule may have changed.
    pub(crate) async fn schedule_changed(&self) {
        self.inner.schedule_changed.notified().await;
    }
}
