//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One cell per tick
//! - Seeded RNG only
//! - No rendering, audio or storage dependencies

pub mod autopilot;
pub mod difficulty;
pub mod engine;
pub mod geometry;
pub mod heading;
pub mod state;
pub mod tick;

pub use autopilot::suggest_heading;
pub use difficulty::{Difficulty, curve};
pub use engine::SimulationEngine;
pub use geometry::{Cell, SimError, is_out_of_bounds, is_self_collision, pick_free_cell};
pub use heading::{DirectionPolicy, Heading};
pub use state::{CollisionKind, GameEvent, GameStatus, SimulationState, Snapshot};
pub use tick::{Command, advance, apply, transition};
