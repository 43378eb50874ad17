//! Headings and the direction-input buffer

use serde::{Deserialize, Serialize};

/// Axis-aligned direction of travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Heading {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::Up, Heading::Down, Heading::Left, Heading::Right];

    /// The 180-degree reverse of this heading
    pub fn opposite(self) -> Heading {
        match self {
            Heading::Up => Heading::Down,
            Heading::Down => Heading::Up,
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(self, other: Heading) -> bool {
        self.opposite() == other
    }

    /// Unit vector (dx, dy); y grows downward
    pub fn delta(self) -> (i32, i32) {
        match self {
            Heading::Up => (0, -1),
            Heading::Down => (0, 1),
            Heading::Left => (-1, 0),
            Heading::Right => (1, 0),
        }
    }
}

/// One-slot buffer of the next heading to apply
///
/// Requests are checked against the heading most recently applied to a move,
/// not the pending one, so several presses between two ticks collapse to the
/// last one that is not a reversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DirectionPolicy {
    current: Heading,
    pending: Heading,
}

impl DirectionPolicy {
    pub fn new(heading: Heading) -> Self {
        Self {
            current: heading,
            pending: heading,
        }
    }

    /// Heading applied on the last tick
    pub fn current(&self) -> Heading {
        self.current
    }

    /// Heading the next tick will apply
    pub fn pending(&self) -> Heading {
        self.pending
    }

    /// Buffer `candidate` unless it reverses the current heading.
    /// Returns whether the request was accepted.
    pub fn request(&mut self, candidate: Heading) -> bool {
        if self.current.is_opposite(candidate) {
            log::debug!("Ignoring reversal {:?} -> {:?}", self.current, candidate);
            return false;
        }
        self.pending = candidate;
        true
    }

    /// Apply the pending heading; called once per tick
    pub fn consume(&mut self) -> Heading {
        self.current = self.pending;
        self.current
    }
}
