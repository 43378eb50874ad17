//! Grid geometry helpers
//!
//! Bounds checks, self-intersection and random free-cell selection.

use std::collections::HashSet;

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::heading::Heading;

/// Rejection-sampling attempts before falling back to enumerating free cells
const MAX_SAMPLE_ATTEMPTS: usize = 64;

/// Errors raised by the geometry helpers
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SimError {
    /// Every cell on the board is occupied
    #[error("no free cell left on the board")]
    BoardFull,
}

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Neighbouring cell one step along `heading`
    pub fn step(self, heading: Heading) -> Self {
        let (dx, dy) = heading.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Manhattan distance between two cells
    pub fn manhattan(self, other: Cell) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// True if the cell lies outside a `grid_size` x `grid_size` board
#[inline]
pub fn is_out_of_bounds(cell: Cell, grid_size: i32) -> bool {
    cell.x < 0 || cell.x >= grid_size || cell.y < 0 || cell.y >= grid_size
}

/// True if `head` overlaps any cell of `body`
#[inline]
pub fn is_self_collision<'a>(head: Cell, body: impl IntoIterator<Item = &'a Cell>) -> bool {
    body.into_iter().any(|&segment| segment == head)
}

/// Pick a uniformly random cell not contained in `occupied`
///
/// Samples the whole board and resamples on a hit. After a bounded number of
/// misses the free cells are enumerated and one is chosen uniformly, so a
/// nearly full board still terminates quickly.
pub fn pick_free_cell<R: Rng + ?Sized>(
    occupied: &HashSet<Cell>,
    grid_size: i32,
    rng: &mut R,
) -> Result<Cell, SimError> {
    let total = (grid_size.max(0) as usize).pow(2);
    let blocked = occupied
        .iter()
        .filter(|cell| !is_out_of_bounds(**cell, grid_size))
        .count();
    if blocked >= total {
        return Err(SimError::BoardFull);
    }

    for _ in 0..MAX_SAMPLE_ATTEMPTS {
        let cell = Cell::new(
            rng.random_range(0..grid_size),
            rng.random_range(0..grid_size),
        );
        if !occupied.contains(&cell) {
            return Ok(cell);
        }
    }

    let free: Vec<Cell> = (0..grid_size)
        .flat_map(|y| (0..grid_size).map(move |x| Cell::new(x, y)))
        .filter(|cell| !occupied.contains(cell))
        .collect();
    // Non-empty: blocked < total above
    Ok(free[rng.random_range(0..free.len())])
}
