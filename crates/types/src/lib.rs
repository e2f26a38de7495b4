//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be
//! shared by the game core, the terminal view and the key mapping alike.
//!
//! # Board Dimensions
//!
//! The default playfield is 10 columns by 15 rows. Coordinates are
//! `(row, col)` with row 0 at the top, or `(x, y)` for piece positions where
//! `x` is the column offset and `y` the row offset of the shape's top-left
//! corner.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_GRAVITY_MS` | 200 | Forced drop interval |
//! | `FRAME_MS` | 16 | Host input-poll / render cadence (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{ColorTag, GameAction, PieceKind};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
//!
//! let locked = ColorTag::new(200, 100, 50).locked();
//! assert_eq!(locked, ColorTag::new(100, 50, 25));
//! ```

/// Default board width in cells
pub const DEFAULT_BOARD_WIDTH: usize = 10;

/// Default board height in cells
pub const DEFAULT_BOARD_HEIGHT: usize = 15;

/// Largest board side accepted by the configuration
pub const MAX_BOARD_DIM: usize = 256;

/// Default forced-drop interval in milliseconds (five rows per second)
pub const DEFAULT_GRAVITY_MS: u64 = 200;

/// Host frame cadence in milliseconds
pub const FRAME_MS: u64 = 16;

/// Row on which new pieces spawn
pub const SPAWN_ROW: i32 = 0;

/// Points awarded per cleared line
pub const LINE_CLEAR_POINTS: u32 = 100;

/// Channel multiplier applied to a piece's color when it locks
pub const LOCKED_SHADE: f32 = 0.5;


/// Visual tag attached to a piece and to every board cell.
///
/// The core only stores and derives tags; turning them into pixels or
/// terminal colors is the host's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorTag {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorTag {
    /// Tag of an empty board cell (light gray)
    pub const BACKGROUND: ColorTag = ColorTag::new(192, 192, 192);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Multiply every channel by `factor`, saturating at 255
    pub fn scaled(self, factor: f32) -> Self {
        let ch = |c: u8| (c as f32 * factor).clamp(0.0, 255.0) as u8;
        Self::new(ch(self.r), ch(self.g), ch(self.b))
    }

    /// Tag stored in the board when a piece of this tag locks
    pub fn locked(self) -> Self {
        self.scaled(LOCKED_SHADE)
    }
}

impl Default for ColorTag {
    fn default() -> Self {
        Self::BACKGROUND
    }
}

/// Occupancy of a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Empty,
    Occupied,
}

/// The five piece kinds of the catalog
///
/// - **O**: 2x2 square
/// - **L**: 3 tall, foot to the right
/// - **Z**: 2x3 skew
/// - **T**: 2x3, stem pointing down
/// - **I**: 4 tall bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    O,
    L,
    Z,
    T,
    I,
}

impl PieceKind {
    /// Every kind, in catalog order
    pub const ALL: [PieceKind; 5] = [
        PieceKind::O,
        PieceKind::L,
        PieceKind::Z,
        PieceKind::T,
        PieceKind::I,
    ];

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "o" => Some(PieceKind::O),
            "l" => Some(PieceKind::L),
            "z" => Some(PieceKind::Z),
            "t" => Some(PieceKind::T),
            "i" => Some(PieceKind::I),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::O => "o",
            PieceKind::L => "l",
            PieceKind::Z => "z",
            PieceKind::T => "t",
            PieceKind::I => "i",
        }
    }
}

/// Session phase
///
/// `GameOver` is terminal: only [`GameAction::Restart`] leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Playing,
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Playing => "playing",
            Phase::GameOver => "gameOver",
        }
    }
}

/// Player actions understood by the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one row, locking it if it cannot fall
    SoftDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Start a new session (only honored after game over)
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("softDrop"), Some(GameAction::SoftDrop));
    /// assert_eq!(GameAction::from_str("ROTATE"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotate" => Some(GameAction::Rotate),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
            GameAction::Restart => "restart",
        }
    }
}
