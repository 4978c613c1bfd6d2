//! Async gravity driver.
//!
//! Sleeps for the engine's current tick interval, ticks, and re-reads the
//! interval. Pausing, game over, reset and level changes all move the
//! schedule; the task wakes on those and starts a fresh period.

use tokio::task::JoinHandle;
use tracing::{debug, trace};

use crate::shared::SharedGame;

/// Handle to a running ticker task. Dropping it stops the task.
#[derive(Debug)]
pub struct Ticker {
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Spawn the ticker on the current tokio runtime.
    pub fn spawn(shared: SharedGame) -> Self {
        let handle = tokio::spawn(run(shared));
        Self { handle }
    }

    /// Stop ticking.
    pub fn stop(self) {
        drop(self);
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn run(shared: SharedGame) {
    debug!("ticker started");
    loop {
        match shared.tick_interval() {
            None => {
                trace!("ticker parked");
                shared.schedule_changed().await;
            }
            Some(period) => {
                tokio::select! {
                    _ = tokio::time::sleep(period) => {
                        shared.tick();
                    }
                    _ = shared.schedule_changed() => {
                        trace!("schedule changed");
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::time::sleep;
    use tui_blockfall_core::Game;

    use super::*;
    use crate::types::{EngineState, GameCommand, ShapeKind};

    fn row(shared: &SharedGame) -> i8 {
        shared.snapshot().current.map(|p| p.y).unwrap_or(-1)
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_on_fall_interval() {
        let shared = SharedGame::new(Game::with_sequence([ShapeKind::T]));
        shared.apply(GameCommand::Start);
        let ticker = Ticker::spawn(shared.clone());

        sleep(Duration::from_millis(3500)).await;
        assert_eq!(row(&shared), 3);

        ticker.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_game_is_not_ticked() {
        let shared = SharedGame::new(Game::with_sequence([ShapeKind::T]));
        let _ticker = Ticker::spawn(shared.clone());

        sleep(Duration::from_millis(5000)).await;
        assert_eq!(shared.state(), EngineState::Idle);

        // Starting wakes the parked task.
        shared.apply(GameCommand::Start);
        sleep(Duration::from_millis(1500)).await;
        assert_eq!(row(&shared), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_parks_and_resume_starts_fresh_period() {
        let shared = SharedGame::new(Game::with_sequence([ShapeKind::T]));
        shared.apply(GameCommand::Start);
        let _ticker = Ticker::spawn(shared.clone());

        sleep(Duration::from_millis(1500)).await;
        assert_eq!(row(&shared), 1);

        shared.apply(GameCommand::Pause);
        sleep(Duration::from_millis(10_000)).await;
        assert_eq!(row(&shared), 1);

        shared.apply(GameCommand::Resume);
        sleep(Duration::from_millis(999)).await;
        assert_eq!(row(&shared), 1);
        sleep(Duration::from_millis(2)).await;
        assert_eq!(row(&shared), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_moves_do_not_delay_gravity() {
        let shared = SharedGame::new(Game::with_sequence([ShapeKind::O]));
        shared.apply(GameCommand::Start);
        let _ticker = Ticker::spawn(shared.clone());

        for _ in 0..4 {
            sleep(Duration::from_millis(300)).await;
            shared.apply(GameCommand::MoveLeft);
        }
        assert_eq!(row(&shared), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_ends_ticking() {
        let shared = SharedGame::new(Game::with_sequence([ShapeKind::T]));
        shared.apply(GameCommand::Start);
        let ticker = Ticker::spawn(shared.clone());

        sleep(Duration::from_millis(1500)).await;
        ticker.stop();
        sleep(Duration::from_millis(5000)).await;
        assert_eq!(row(&shared), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_in_one_step_gets_a_full_period() {
        let shared = SharedGame::new(Game::with_sequence([ShapeKind::T]));
        shared.apply(GameCommand::Start);
        let _ticker = Ticker::spawn(shared.clone());

        sleep(Duration::from_millis(900)).await;
        shared.with_mut(|game| {
            game.reset();
            game.start();
        });

        // The old deadline (t=1000) must not tick the new game.
        sleep(Duration::from_millis(200)).await;
        assert_eq!(row(&shared), 0);
        sleep(Duration::from_millis(801)).await;
        assert_eq!(row(&shared), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_resume_in_one_step_gets_a_full_period() {
        let shared = SharedGame::new(Game::with_sequence([ShapeKind::T]));
        shared.apply(GameCommand::Start);
        let _ticker = Ticker::spawn(shared.clone());

        sleep(Duration::from_millis(900)).await;
        shared.with_mut(|game| {
            game.toggle_pause();
            game.toggle_pause();
        });
        assert_eq!(shared.state(), EngineState::Running);

        sleep(Duration::from_millis(999)).await;
        assert_eq!(row(&shared), 0);
        sleep(Duration::from_millis(2)).await;
        assert_eq!(row(&shared), 1);
    }
}
