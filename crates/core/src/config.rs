//! Game configuration
//!
//! Everything a session needs that is not game state: board size, gravity
//! interval and RNG seed. Validation happens once, when a [`crate::Game`] is
//! built, so the loop itself never has to handle a malformed setup.

use std::time::Duration;

use thiserror::Error;

use crate::pieces::{MAX_CATALOG_HEIGHT, MAX_CATALOG_WIDTH};
use crate::types::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_GRAVITY_MS, MAX_BOARD_DIM};

/// Smallest board that can host every catalog piece
pub const MIN_BOARD_WIDTH: usize = MAX_CATALOG_WIDTH;

/// A spawned piece needs one free row beneath it, otherwise it locks at once
pub const MIN_BOARD_HEIGHT: usize = MAX_CATALOG_HEIGHT + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board width {0} is below the minimum of {}", MIN_BOARD_WIDTH)]
    TooNarrow(usize),
    #[error("board height {0} is below the minimum of {}", MIN_BOARD_HEIGHT)]
    TooShort(usize),
    #[error("board dimension {0} exceeds the maximum of {}", MAX_BOARD_DIM)]
    TooLarge(usize),
    #[error("gravity interval must be non-zero")]
    ZeroGravity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    /// Time between forced drops
    pub gravity_interval: Duration,
    pub seed: u32,
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < MIN_BOARD_WIDTH {
            return Err(ConfigError::TooNarrow(self.width));
        }
        if self.height < MIN_BOARD_HEIGHT {
            return Err(ConfigError::TooShort(self.height));
        }
        if let Some(&dim) = [self.width, self.height]
            .iter()
            .find(|&&d| d > MAX_BOARD_DIM)
        {
            return Err(ConfigError::TooLarge(dim));
        }
        if self.gravity_interval.is_zero() {
            return Err(ConfigError::ZeroGravity);
        }
        Ok(())
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            gravity_interval: Duration::from_millis(DEFAULT_GRAVITY_MS),
            seed: 1,
        }
    }
}
