//! Frame-time to tick conversion
//!
//! Hosts call [`TickScheduler::pump`] once per frame with the elapsed time.
//! Elapsed time accumulates and a tick fires each time the accumulator covers
//! the engine's current interval; the remainder carries into the next frame.

use crate::consts::{MAX_FRAME_MS, MAX_TICKS_PER_FRAME};
use crate::sim::{GameEvent, GameStatus, SimulationEngine};

/// Accumulator-driven tick source
#[derive(Debug, Clone, Default)]
pub struct TickScheduler {
    accumulator_ms: f64,
    ticks: u64,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unspent time carried to the next frame (ms)
    pub fn accumulated_ms(&self) -> f64 {
        self.accumulator_ms
    }

    /// Ticks fired since creation
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Drop any carried time
    pub fn clear(&mut self) {
        self.accumulator_ms = 0.0;
    }

    /// Run as many ticks as `elapsed_ms` pays for and return their events
    ///
    /// Does nothing while the engine is not playing. The interval is re-read
    /// before every tick, so a speed-up applies from the next tick on.
    pub fn pump(&mut self, engine: &mut SimulationEngine, elapsed_ms: f64) -> Vec<GameEvent> {
        if engine.status() != GameStatus::Playing {
            self.clear();
            return Vec::new();
        }

        let elapsed = if elapsed_ms.is_finite() {
            elapsed_ms.clamp(0.0, MAX_FRAME_MS)
        } else {
            0.0
        };
        self.accumulator_ms += elapsed;

        let mut events = Vec::new();
        let mut substeps = 0;
        while engine.status() == GameStatus::Playing && substeps < MAX_TICKS_PER_FRAME {
            let interval = f64::from(engine.tick_interval_ms());
            if self.accumulator_ms < interval {
                break;
            }
            events.extend(engine.advance());
            self.accumulator_ms -= interval;
            self.ticks += 1;
            substeps += 1;
        }

        if engine.status() != GameStatus::Playing {
            self.clear();
        } else if substeps == MAX_TICKS_PER_FRAME {
            // Drop the backlog beyond one interval so slow frames cannot queue ticks
            let interval = f64::from(engine.tick_interval_ms());
            if self.accumulator_ms >= interval {
                log::debug!(
                    "Tick catch-up capped, dropping {:.1}ms",
                    self.accumulator_ms - interval
                );
                self.accumulator_ms = self.accumulator_ms.min(interval);
            }
        }

        events
    }
}
