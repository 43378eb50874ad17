//! Game configuration
//!
//! Every tunable the simulation reads lives in one record. The defaults are
//! the fixed build-time constants from [`crate::consts`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::Cell;

/// Errors raised when configuration invariants are violated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid size must be at least 2 (got {0})")]
    GridTooSmall(i32),
    #[error("{field} must be positive")]
    ZeroSpeed { field: &'static str },
    #[error("minimum speed {min}ms exceeds initial speed {initial}ms")]
    MinExceedsInitial { min: u32, initial: u32 },
    #[error("score increment must be positive")]
    ZeroScoreIncrement,
}

/// Simulation configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cells per side of the square board
    pub grid_size: i32,
    /// Tick interval at level 1 (ms)
    pub initial_speed_ms: u32,
    /// Interval reduction per level (ms)
    pub speed_decrement_ms: u32,
    /// Interval floor (ms)
    pub min_speed_ms: u32,
    /// Score needed per level
    pub score_increment: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            initial_speed_ms: INITIAL_SPEED_MS,
            speed_decrement_ms: SPEED_DECREMENT_MS,
            min_speed_ms: MIN_SPEED_MS,
            score_increment: SCORE_INCREMENT,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom board size
    pub fn with_grid_size(grid_size: i32) -> Self {
        Self {
            grid_size,
            ..Default::default()
        }
    }

    /// Check the invariants the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < 2 {
            return Err(ConfigError::GridTooSmall(self.grid_size));
        }
        if self.initial_speed_ms == 0 {
            return Err(ConfigError::ZeroSpeed {
                field: "initial_speed_ms",
            });
        }
        if self.min_speed_ms == 0 {
            return Err(ConfigError::ZeroSpeed {
                field: "min_speed_ms",
            });
        }
        if self.min_speed_ms > self.initial_speed_ms {
            return Err(ConfigError::MinExceedsInitial {
                min: self.min_speed_ms,
                initial: self.initial_speed_ms,
            });
        }
        if self.score_increment == 0 {
            return Err(ConfigError::ZeroScoreIncrement);
        }
        Ok(())
    }

    /// Validated copy, falling back to defaults on error
    pub fn validated_or_default(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(err) => {
                log::warn!("Invalid game config ({err}), using defaults");
                Self::default()
            }
        }
    }

    /// Total number of cells on the board
    pub fn cell_count(&self) -> usize {
        (self.grid_size as usize) * (self.grid_size as usize)
    }

    /// Cell the snake starts from (board center)
    pub fn start_cell(&self) -> Cell {
        Cell::new(self.grid_size / 2, self.grid_size / 2)
    }
}
