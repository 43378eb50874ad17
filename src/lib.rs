//! Grid Snake - a tick-driven snake simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, growth, game status)
//! - `scheduler`: Accumulator that turns frame time into simulation ticks
//! - `session`: Host wiring of engine, scheduler, score store and audio
//! - `highscores`: High score persistence
//! - `audio`: Audio cue notifications
//! - `input`: Key and swipe translation into intents
//! - `config`: The single configuration record

pub mod audio;
pub mod config;
pub mod highscores;
pub mod input;
pub mod scheduler;
pub mod session;
pub mod sim;

pub use audio::{AudioCue, AudioNotifier, LogNotifier, ToneSpec};
pub use config::{ConfigError, GameConfig};
pub use highscores::{FileStore, MemoryStore, ScoreStore, StoreError};
pub use input::Intent;
pub use scheduler::TickScheduler;
pub use session::GameSession;

/// Game configuration constants
pub mod consts {
    /// Cells per side of the square board
    pub const GRID_SIZE: i32 = 20;

    /// Tick interval at level 1 (ms)
    pub const INITIAL_SPEED_MS: u32 = 150;
    /// Interval reduction per level gained (ms)
    pub const SPEED_DECREMENT_MS: u32 = 10;
    /// Fastest allowed tick interval (ms)
    pub const MIN_SPEED_MS: u32 = 50;
    /// Points needed per level
    pub const SCORE_INCREMENT: u32 = 5;

    /// Longest frame the scheduler will account for (tab switches, debugger stops)
    pub const MAX_FRAME_MS: f64 = 1000.0;
    /// Maximum ticks per frame to prevent spiral of death
    pub const MAX_TICKS_PER_FRAME: u32 = 8;
}
