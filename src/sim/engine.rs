//! Owner of the authoritative simulation state

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::geometry::pick_free_cell;
use super::heading::Heading;
use super::state::{GameEvent, GameStatus, SimulationState, Snapshot};
use super::tick::{self, Command};
use crate::config::GameConfig;

/// Simulation engine: state plus the seeded RNG used for food placement
#[derive(Debug, Clone)]
pub struct SimulationEngine {
    state: SimulationState,
    rng: Pcg32,
    seed: u64,
}

impl SimulationEngine {
    /// Create an engine in the menu with a seeded RNG
    pub fn new(config: GameConfig, high_score: u32, seed: u64) -> Self {
        let config = config.validated_or_default();
        let mut rng = Pcg32::seed_from_u64(seed);
        let start = config.start_cell();
        let occupied = [start].into_iter().collect();
        // Validated boards have at least four cells
        let food = pick_free_cell(&occupied, config.grid_size, &mut rng).unwrap_or(start);
        Self {
            state: SimulationState::new(config, high_score, food),
            rng,
            seed,
        }
    }

    /// Engine with default configuration
    pub fn with_seed(seed: u64) -> Self {
        Self::new(GameConfig::default(), 0, seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut SimulationState {
        &mut self.state
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn tick_interval_ms(&self) -> u32 {
        self.state.tick_interval_ms
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// Apply any command
    pub fn apply(&mut self, command: Command) -> Vec<GameEvent> {
        tick::apply(&mut self.state, command, &mut self.rng)
    }

    pub fn start(&mut self) -> Vec<GameEvent> {
        let events = tick::start(&mut self.state, &mut self.rng);
        if !events.is_empty() {
            log::info!("Game started (seed {})", self.seed);
        }
        events
    }

    pub fn toggle_pause(&mut self) -> Vec<GameEvent> {
        tick::toggle_pause(&mut self.state)
    }

    pub fn request_direction(&mut self, heading: Heading) -> bool {
        tick::request_direction(&mut self.state, heading)
    }

    pub fn reset(&mut self) -> Vec<GameEvent> {
        tick::reset(&mut self.state)
    }

    /// One tick; no-op unless playing
    pub fn advance(&mut self) -> Vec<GameEvent> {
        tick::advance(&mut self.state, &mut self.rng)
    }
}
