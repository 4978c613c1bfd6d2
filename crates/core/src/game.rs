//! Game module - the engine state machine
//!
//! Ties together the board, pieces, validator, randomizer and scoring. The
//! engine owns exactly one board and at most two pieces (current and next),
//! and exposes a command surface that either applies a legal change or does
//! nothing. Illegal commands are never errors.
//!
//! ```text
//! Idle --start--> Running <--pause/resume--> Paused
//!                    |
//!              blocked spawn
//!                    v
//!                 GameOver          (reset from any state -> Idle)
//! ```

use std::time::Duration;

use tracing::{debug, info};

use crate::board::Board;
use crate::clock::FallClock;
use crate::piece::Piece;
use crate::rng::PieceSource;
use crate::scoring::{drop_score, fall_interval_ms, level_for_lines, line_clear_score};
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::types::{EngineState, GameCommand, GameEvent, ShapeKind, START_LEVEL};
use crate::validator::{drop_distance, fits};

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current: Option<Piece>,
    next: Option<Piece>,
    source: PieceSource,
    state: EngineState,
    /// `Some` exactly while gravity is scheduled (i.e. while running).
    clock: Option<FallClock>,
    /// Bumped every time the clock is installed or dropped.
    schedule_epoch: u64,
    score: u32,
    level: u32,
    lines: u32,
    events: Vec<GameEvent>,
}

impl Game {
    /// Create an idle game whose pieces are drawn uniformly from `seed`
    pub fn new(seed: u32) -> Self {
        Self::with_source(PieceSource::uniform(seed))
    }

    /// Create an idle game that deals `kinds` in order, cycling
    pub fn with_sequence(kinds: impl Into<Vec<ShapeKind>>) -> Self {
        Self::with_source(PieceSource::sequence(kinds))
    }

    pub fn with_source(source: PieceSource) -> Self {
        Self {
            board: Board::new(),
            current: None,
            next: None,
            source,
            state: EngineState::Idle,
            clock: None,
            schedule_epoch: 0,
            score: 0,
            level: START_LEVEL,
            lines: 0,
            events: Vec::new(),
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == EngineState::Running
    }

    pub fn is_paused(&self) -> bool {
        self.state == EngineState::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.state == EngineState::GameOver
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn current(&self) -> Option<Piece> {
        self.current
    }

    pub fn next(&self) -> Option<Piece> {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Gravity period for the current level
    pub fn fall_interval_ms(&self) -> u32 {
        fall_interval_ms(self.level)
    }

    /// Period of the tick schedule, or `None` while ticking is suspended
    pub fn tick_interval(&self) -> Option<Duration> {
        self.clock.map(|c| c.interval())
    }

    /// Generation of the tick schedule. Changes whenever a fresh period is
    /// started or ticking is suspended, even if the interval is the same.
    pub fn schedule_epoch(&self) -> u64 {
        self.schedule_epoch
    }

    /// Drain queued events, oldest first
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.current = self.current.map(PieceSnapshot::from);
        out.next = self.next.map(PieceSnapshot::from);
        out.state = self.state;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.fall_interval_ms = self.fall_interval_ms();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Begin play from `Idle`
    pub fn start(&mut self) -> bool {
        if self.state != EngineState::Idle {
            return false;
        }

        if self.current.is_none() {
            self.current = Some(Piece::new(self.source.draw()));
            self.next = Some(Piece::new(self.source.draw()));
        }

        self.state = EngineState::Running;
        info!(level = self.level, "game started");

        if !self.current_fits() {
            self.enter_game_over();
            return true;
        }

        self.schedule();
        true
    }

    /// Suspend ticking. Only valid while running.
    pub fn pause(&mut self) -> bool {
        if self.state != EngineState::Running {
            return false;
        }
        self.state = EngineState::Paused;
        self.unschedule();
        debug!("paused");
        true
    }

    /// Resume ticking with a fresh period. Only valid while paused.
    pub fn resume(&mut self) -> bool {
        if self.state != EngineState::Paused {
            return false;
        }
        self.state = EngineState::Running;
        self.schedule();
        debug!("resumed");
        true
    }

    pub fn toggle_pause(&mut self) -> bool {
        match self.state {
            EngineState::Running => self.pause(),
            EngineState::Paused => self.resume(),
            _ => false,
        }
    }

    /// Discard the game and return to `Idle`. The randomizer keeps its state.
    pub fn reset(&mut self) -> bool {
        self.board.clear();
        self.current = None;
        self.next = None;
        self.state = EngineState::Idle;
        self.unschedule();
        self.score = 0;
        self.level = START_LEVEL;
        self.lines = 0;
        self.events.clear();
        info!("game reset");
        true
    }

    /// One gravity step: fall a row, or lock if the piece is resting.
    pub fn tick(&mut self) -> bool {
        if self.state != EngineState::Running {
            return false;
        }
        if self.try_shift(0, 1) {
            return true;
        }
        self.lock_current();
        true
    }

    /// Feed elapsed host time to the fall clock and run every tick that
    /// came due. Returns the number of ticks run.
    ///
    /// A level change, pause or game over during the loop replaces or drops
    /// the clock, which ends the loop.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        let Some(clock) = self.clock.as_mut() else {
            return 0;
        };
        clock.accumulate(elapsed_ms);

        let mut ticks = 0;
        while self.clock.as_mut().is_some_and(|c| c.take_due()) {
            self.tick();
            ticks += 1;
        }
        ticks
    }

    pub fn move_left(&mut self) -> bool {
        self.try_shift(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_shift(1, 0)
    }

    /// Move down one row for a point. A blocked soft drop does not lock.
    pub fn soft_drop(&mut self) -> bool {
        if !self.try_shift(0, 1) {
            return false;
        }
        self.score = self.score.saturating_add(drop_score(1, false));
        true
    }

    /// Drop to rest (two points per row) and lock immediately.
    pub fn hard_drop(&mut self) -> bool {
        if self.state != EngineState::Running {
            return false;
        }
        let Some(piece) = self.current else {
            return false;
        };

        let distance = drop_distance(&piece, &self.board);
        self.current = Some(piece.shifted(0, distance as i8));
        self.score = self.score.saturating_add(drop_score(distance as u32, true));
        self.lock_current();
        true
    }

    /// Rotate clockwise in place; rejected if the rotated shape does not fit.
    pub fn rotate(&mut self) -> bool {
        if self.state != EngineState::Running {
            return false;
        }
        let Some(piece) = self.current else {
            return false;
        };

        let rotated = piece.rotated();
        if !fits(&rotated, &self.board) {
            return false;
        }
        self.current = Some(rotated);
        true
    }

    /// Apply a command
    pub fn apply(&mut self, command: GameCommand) -> bool {
        match command {
            GameCommand::Start => self.start(),
            GameCommand::Pause => self.pause(),
            GameCommand::Resume => self.resume(),
            GameCommand::TogglePause => self.toggle_pause(),
            GameCommand::Reset => self.reset(),
            GameCommand::MoveLeft => self.move_left(),
            GameCommand::MoveRight => self.move_right(),
            GameCommand::SoftDrop => self.soft_drop(),
            GameCommand::HardDrop => self.hard_drop(),
            GameCommand::Rotate => self.rotate(),
            GameCommand::Tick => self.tick(),
        }
    }

    fn try_shift(&mut self, dx: i8, dy: i8) -> bool {
        if self.state != EngineState::Running {
            return false;
        }
        let Some(piece) = self.current else {
            return false;
        };

        let moved = piece.shifted(dx, dy);
        if !fits(&moved, &self.board) {
            return false;
        }
        self.current = Some(moved);
        true
    }

    fn current_fits(&self) -> bool {
        self.current.is_some_and(|p| fits(&p, &self.board))
    }

    fn schedule(&mut self) {
        self.clock = Some(FallClock::new(self.fall_interval_ms()));
        self.schedule_epoch = self.schedule_epoch.wrapping_add(1);
    }

    fn unschedule(&mut self) {
        if self.clock.take().is_some() {
            self.schedule_epoch = self.schedule_epoch.wrapping_add(1);
        }
    }

    /// Merge, clear rows, score, promote next, and check the new spawn.
    fn lock_current(&mut self) {
        let Some(piece) = self.current.take() else {
            return;
        };

        self.board.merge(&piece);
        let cleared = self.board.clear_full_rows().len() as u32;
        debug!(
            kind = piece.kind.as_str(),
            x = piece.x,
            y = piece.y,
            cleared,
            "piece locked"
        );

        if cleared > 0 {
            // Points use the level the piece locked at.
            self.score = self
                .score
                .saturating_add(line_clear_score(cleared, self.level));
            self.lines = self.lines.saturating_add(cleared);
            self.events.push(GameEvent::LinesCleared { count: cleared });

            let level = level_for_lines(self.lines);
            if level != self.level {
                self.level = level;
                let interval = self.fall_interval_ms();
                if self.state == EngineState::Running {
                    self.schedule();
                }
                info!(level, fall_interval_ms = interval, "level up");
                self.events.push(GameEvent::LevelChanged {
                    level,
                    fall_interval_ms: interval,
                });
            }
        }

        let promoted = match self.next.take() {
            Some(next) => next,
            None => Piece::new(self.source.draw()),
        };
        self.current = Some(promoted);
        self.next = Some(Piece::new(self.source.draw()));

        if !self.current_fits() {
            self.enter_game_over();
        }
    }

    fn enter_game_over(&mut self) {
        self.state = EngineState::GameOver;
        self.unschedule();
        info!(
            score = self.score,
            level = self.level,
            lines = self.lines,
            "game over"
        );
        self.events.push(GameEvent::GameOver {
            score: self.score,
            level: self.level,
            lines: self.lines,
        });
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(1)
    }
}
