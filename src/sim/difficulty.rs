//! Score to difficulty mapping

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// Difficulty tier derived from cumulative score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Difficulty {
    /// 1-based level
    pub level: u32,
    /// Delay between ticks (ms)
    pub tick_interval_ms: u32,
}

/// Map a score to its level and tick interval.
///
/// `level = score / score_increment + 1` and the interval shrinks by
/// `speed_decrement_ms` per level, never going below `min_speed_ms`.
pub fn curve(score: u32, config: &GameConfig) -> Difficulty {
    let level = score / config.score_increment.max(1) + 1;
    let reduction = (level - 1).saturating_mul(config.speed_decrement_ms);
    let tick_interval_ms = config
        .initial_speed_ms
        .saturating_sub(reduction)
        .max(config.min_speed_ms);
    Difficulty {
        level,
        tick_interval_ms,
    }
}
