//! Shared types and constants for the falling-block game.
//!
//! Everything here is plain data with no dependencies, so the core engine,
//! the input layer and the terminal renderer can all agree on the same
//! vocabulary.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//!
//! # Fall Interval by Level
//!
//! Gravity speeds up by a fixed step per level and is floored:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 1000ms |
//! | 2 | 950ms |
//! | 10 | 550ms |
//! | 19+ | 100ms (floor) |
//!
//! # Scoring
//!
//! | Event | Points |
//! |-------|--------|
//! | Line clear | `lines * 100 * level` |
//! | Soft drop | 1 per row |
//! | Hard drop | 2 per row |
//!
//! # Examples
//!
//! ```
//! use tui_blockfall_types::{GameCommand, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let kind = ShapeKind::from_str("t").unwrap();
//! assert_eq!(kind, ShapeKind::T);
//! assert_eq!(kind.color_hex(), "#a000f0");
//!
//! assert_eq!(GameCommand::from_str("hardDrop"), Some(GameCommand::HardDrop));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Fall interval at level 1 (one row per second)
pub const BASE_FALL_INTERVAL_MS: u32 = 1000;

/// Fall interval reduction per level above 1
pub const FALL_INTERVAL_STEP_MS: u32 = 50;

/// Fastest fall interval, reached at level 19
pub const MIN_FALL_INTERVAL_MS: u32 = 100;

/// Points per cleared line, multiplied by the level at the time of the lock
pub const LINE_CLEAR_POINTS: u32 = 100;

/// Points per row of a successful soft drop
pub const SOFT_DROP_POINTS: u32 = 1;

/// Points per row travelled by a hard drop
pub const HARD_DROP_POINTS: u32 = 2;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Starting level
pub const START_LEVEL: u32 = 1;

/// The seven piece shapes
///
/// Each shape has a fixed base matrix and colour:
/// - **I**: Cyan, 1x4 bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple
/// - **L**: Orange, 3 tall
/// - **J**: Blue, 3 tall (mirror of L)
/// - **S**: Green
/// - **Z**: Red (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl ShapeKind {
    /// All kinds, in the order the randomizer indexes them.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::S,
        ShapeKind::Z,
    ];

    /// Parse shape kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfall_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("i"), Some(ShapeKind::I));
    /// assert_eq!(ShapeKind::from_str("Z"), Some(ShapeKind::Z));
    /// assert_eq!(ShapeKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeKind::I),
            "o" => Some(ShapeKind::O),
            "t" => Some(ShapeKind::T),
            "l" => Some(ShapeKind::L),
            "j" => Some(ShapeKind::J),
            "s" => Some(ShapeKind::S),
            "z" => Some(ShapeKind::Z),
            _ => None,
        }
    }

    /// Uppercase letter, as shown in previews
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "I",
            ShapeKind::O => "O",
            ShapeKind::T => "T",
            ShapeKind::L => "L",
            ShapeKind::J => "J",
            ShapeKind::S => "S",
            ShapeKind::Z => "Z",
        }
    }

    /// Colour token stored alongside the shape, as `#rrggbb`
    pub fn color_hex(&self) -> &'static str {
        match self {
            ShapeKind::I => "#00f0f0",
            ShapeKind::O => "#f0f000",
            ShapeKind::T => "#a000f0",
            ShapeKind::L => "#f0a000",
            ShapeKind::J => "#0000f0",
            ShapeKind::S => "#00f000",
            ShapeKind::Z => "#f00000",
        }
    }

    /// Colour token as an `(r, g, b)` triple
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            ShapeKind::I => (0x00, 0xf0, 0xf0),
            ShapeKind::O => (0xf0, 0xf0, 0x00),
            ShapeKind::T => (0xa0, 0x00, 0xf0),
            ShapeKind::L => (0xf0, 0xa0, 0x00),
            ShapeKind::J => (0x00, 0x00, 0xf0),
            ShapeKind::S => (0x00, 0xf0, 0x00),
            ShapeKind::Z => (0xf0, 0x00, 0x00),
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(ShapeKind)`: Cell filled by a locked piece of that shape
pub type Cell = Option<ShapeKind>;

/// Lifecycle state of a game
///
/// `Idle` → `Running` ⇄ `Paused`, `Running` → `GameOver`, and any state
/// returns to `Idle` on reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EngineState {
    /// Never started, or reset
    #[default]
    Idle,
    /// Gravity ticking, commands accepted
    Running,
    /// Ticking suspended, commands ignored
    Paused,
    /// Spawn was blocked; only reset leaves this state
    GameOver,
}

impl EngineState {
    pub fn as_str(&self) -> &'static str {
        match self {
            EngineState::Idle => "idle",
            EngineState::Running => "running",
            EngineState::Paused => "paused",
            EngineState::GameOver => "gameOver",
        }
    }
}

/// Commands a host can issue to the engine
///
/// Used by both keyboard input and scripted drivers. Commands that do not
/// apply in the current state are ignored by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// Begin a game from `Idle`
    Start,
    /// Suspend ticking
    Pause,
    /// Resume ticking after a pause
    Resume,
    /// Pause if running, resume if paused
    TogglePause,
    /// Discard the game and return to `Idle`
    Reset,
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (+1 point)
    SoftDrop,
    /// Drop piece to rest and lock it (+2 points per row)
    HardDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// One gravity step
    Tick,
}

impl GameCommand {
    /// Parse command from a camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfall_types::GameCommand;
    ///
    /// assert_eq!(GameCommand::from_str("moveLeft"), Some(GameCommand::MoveLeft));
    /// assert_eq!(GameCommand::from_str("ROTATE"), Some(GameCommand::Rotate));
    /// assert_eq!(GameCommand::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" => Some(GameCommand::Start),
            "pause" => Some(GameCommand::Pause),
            "resume" => Some(GameCommand::Resume),
            "togglepause" => Some(GameCommand::TogglePause),
            "reset" => Some(GameCommand::Reset),
            "moveleft" => Some(GameCommand::MoveLeft),
            "moveright" => Some(GameCommand::MoveRight),
            "softdrop" => Some(GameCommand::SoftDrop),
            "harddrop" => Some(GameCommand::HardDrop),
            "rotate" => Some(GameCommand::Rotate),
            "tick" => Some(GameCommand::Tick),
            _ => None,
        }
    }

    /// Convert to camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            GameCommand::Start => "start",
            GameCommand::Pause => "pause",
            GameCommand::Resume => "resume",
            GameCommand::TogglePause => "togglePause",
            GameCommand::Reset => "reset",
            GameCommand::MoveLeft => "moveLeft",
            GameCommand::MoveRight => "moveRight",
            GameCommand::SoftDrop => "softDrop",
            GameCommand::HardDrop => "hardDrop",
            GameCommand::Rotate => "rotate",
            GameCommand::Tick => "tick",
        }
    }
}

/// Notification queued by the engine for the UI layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A lock completed one or more rows
    LinesCleared { count: u32 },
    /// The level rose; the fall clock now runs at `fall_interval_ms`
    LevelChanged { level: u32, fall_interval_ms: u32 },
    /// A spawned piece collided immediately
    GameOver { score: u32, level: u32, lines: u32 },
}
