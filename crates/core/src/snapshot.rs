//! Read-only view of a game for renderers.

use crate::board::Grid;
use crate::piece::{Piece, ShapeMatrix};
use crate::types::{EngineState, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH, START_LEVEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub kind: ShapeKind,
    pub shape: ShapeMatrix,
    pub x: i8,
    pub y: i8,
}

impl From<Piece> for PieceSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: Grid,
    pub current: Option<PieceSnapshot>,
    pub next: Option<PieceSnapshot>,
    pub state: EngineState,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    /// Current gravity period; only meaningful while running
    pub fall_interval_ms: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
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
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            current: None,
            next: None,
            state: EngineState::Idle,
            score: 0,
            level: START_LEVEL,
            lines: 0,
            fall_interval_ms: crate::scoring::fall_interval_ms(START_LEVEL),
        }
    }
}
