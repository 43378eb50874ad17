//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in [`SimulationState`].

use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use super::difficulty::{Difficulty, curve};
use super::geometry::Cell;
use super::heading::{DirectionPolicy, Heading};
use crate::config::GameConfig;

/// Current status of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Waiting for the player to start
    #[default]
    Menu,
    /// Ticks advance the snake
    Playing,
    /// Frozen; pending direction is kept
    Paused,
    /// Snake hit a wall or itself
    GameOver,
    /// Snake fills the board, no cell left for food
    Won,
}

impl GameStatus {
    /// Terminal statuses accept `start()` and `reset()`
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::GameOver | GameStatus::Won)
    }
}

/// What the head ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionKind {
    Wall,
    SelfCollision,
}

/// Discrete things that happened during a command or tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Paused,
    Resumed,
    FoodEaten { score: u32 },
    LevelUp { level: u32 },
    Collision(CollisionKind),
    GameOver { score: u32, new_high_score: bool },
    BoardFull { score: u32, new_high_score: bool },
    Reset,
}

/// Complete simulation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    /// Body cells, head first
    pub snake: VecDeque<Cell>,
    pub food: Cell,
    /// Applied and pending headings
    pub direction: DirectionPolicy,
    pub score: u32,
    /// Best score across sessions
    pub high_score: u32,
    pub status: GameStatus,
    pub tick_interval_ms: u32,
    pub level: u32,
    pub config: GameConfig,
}

impl SimulationState {
    /// Fresh state in the menu
    pub fn new(config: GameConfig, high_score: u32, food: Cell) -> Self {
        let Difficulty {
            level,
            tick_interval_ms,
        } = curve(0, &config);
        Self {
            snake: VecDeque::from([config.start_cell()]),
            food,
            direction: DirectionPolicy::new(Heading::Right),
            score: 0,
            high_score,
            status: GameStatus::Menu,
            tick_interval_ms,
            level,
            config,
        }
    }

    pub fn head(&self) -> Cell {
        // Length is at least 1 by construction
        self.snake[0]
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }

    /// Snake cells as a set, for free-cell selection
    pub fn occupied(&self) -> HashSet<Cell> {
        self.snake.iter().copied().collect()
    }

    /// Raise the high score if the current score beats it.
    /// Returns true when it changed.
    pub(crate) fn record_high_score(&mut self) -> bool {
        if self.score > self.high_score {
            self.high_score = self.score;
            true
        } else {
            false
        }
    }

    /// Read-only view for renderers and HUDs
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            snake: self.snake.iter().copied().collect(),
            food: self.food,
            score: self.score,
            high_score: self.high_score,
            level: self.level,
            tick_interval_ms: self.tick_interval_ms,
            status: self.status,
            grid_size: self.config.grid_size,
        }
    }
}

/// Immutable copy of what a frame needs to draw
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub snake: Vec<Cell>,
    pub food: Cell,
    pub score: u32,
    pub high_score: u32,
    pub level: u32,
    pub tick_interval_ms: u32,
    pub status: GameStatus,
    pub grid_size: i32,
}
