//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules and session state. It has **no
//! dependencies** on terminals, input devices or I/O, making it:
//!
//! - **Deterministic**: the same seed and inputs replay the same game
//! - **Testable**: every rule is reachable without a host
//! - **Portable**: the host only feeds actions and timestamps in and reads
//!   the board, active piece, score and phase back out
//!
//! # Module Structure
//!
//! - [`shape`]: immutable occupancy masks and clockwise rotation
//! - [`piece`]: a shape placed on the board with its color tag
//! - [`pieces`]: the five-piece catalog (masks and base colors)
//! - [`board`]: the locked-cell grid, collision queries and line clears
//! - [`game`]: the session state machine (gravity, locking, scoring, game over)
//! - [`rng`]: seeded LCG for uniform spawns
//! - [`config`]: board size, gravity interval and seed, with validation
//!
//! # Game Rules
//!
//! - Pieces spawn on row 0 at a random column where they fit
//! - Gravity drops the piece one row per interval; soft drop does it at once
//! - A piece that cannot fall locks; complete rows in its span are removed
//! - Each cleared line is worth 100 points
//! - Rotation is clockwise only, with no wall kicks
//! - A spawn that collides ends the session until an explicit restart
//!
//! # Example
//!
//! ```
//! use std::time::Instant;
//!
//! use blockfall_core::{Game, GameConfig};
//! use blockfall_core::types::{GameAction, Phase};
//!
//! let mut game = Game::new(GameConfig::default().with_seed(12345)).unwrap();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::SoftDrop);
//! game.tick(Instant::now());
//!
//! assert_eq!(game.phase(), Phase::Playing);
//! assert_eq!(game.score(), 0);
//! ```

pub mod board;
pub mod config;
pub mod game;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod shape;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, BoardCell};
pub use config::{ConfigError, GameConfig};
pub use game::{Game, LockEvent};
pub use piece::Piece;
pub use pieces::{get_color, get_shape};
pub use rng::SimpleRng;
pub use shape::{Shape, ShapeError};
