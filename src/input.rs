//! Input translation
//!
//! Maps key names and touch swipes to intents. Reversal filtering is left to
//! the simulation's direction buffer.

use crate::sim::Heading;

/// Swipes shorter than this on both axes are ignored (px)
pub const MIN_SWIPE_DISTANCE: f32 = 30.0;

/// What the player asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Turn(Heading),
    TogglePause,
    Start,
    Reset,
}

/// Intent for a key name (`KeyboardEvent.key` style)
pub fn intent_for_key(key: &str) -> Option<Intent> {
    let intent = match key {
        "ArrowUp" | "w" | "W" => Intent::Turn(Heading::Up),
        "ArrowDown" | "s" | "S" => Intent::Turn(Heading::Down),
        "ArrowLeft" | "a" | "A" => Intent::Turn(Heading::Left),
        "ArrowRight" | "d" | "D" => Intent::Turn(Heading::Right),
        " " => Intent::TogglePause,
        _ => return None,
    };
    Some(intent)
}

/// Intent for a swipe from touch start to touch end.
/// Screen coordinates: positive `dy` points down.
pub fn intent_for_swipe(dx: f32, dy: f32) -> Option<Intent> {
    if dx.abs() <= MIN_SWIPE_DISTANCE && dy.abs() <= MIN_SWIPE_DISTANCE {
        return None;
    }

    let heading = if dx.abs() > dy.abs() {
        if dx > 0.0 { Heading::Right } else { Heading::Left }
    } else if dy > 0.0 {
        Heading::Down
    } else {
        Heading::Up
    };
    Some(Intent::Turn(heading))
}
