//! Terminal rendering for the falling-block game.
//!
//! A small, game-oriented layer: [`GameView`] paints a [`blockfall_core::Game`]
//! into a [`FrameBuffer`] (pure, testable), and [`TerminalRenderer`] flushes
//! framebuffers to a real terminal, redrawing only changed runs.
//!
//! Board cells are drawn two columns wide to compensate for the usual
//! terminal glyph aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
