//! Idle/demo steering
//!
//! Picks a heading greedily: never a reversal, never straight into a wall or
//! the body, and preferring moves that close the distance to food.

use super::geometry::{is_out_of_bounds, is_self_collision};
use super::heading::Heading;
use super::state::SimulationState;

/// Suggest the next heading for a demo game
pub fn suggest_heading(state: &SimulationState) -> Heading {
    let current = state.direction.current();
    let head = state.head();
    // The tail cell is still occupied when the move is checked
    let safe = |heading: Heading| {
        let next = head.step(heading);
        !is_out_of_bounds(next, state.config.grid_size) && !is_self_collision(next, &state.snake)
    };

    Heading::ALL
        .into_iter()
        .filter(|heading| !current.is_opposite(*heading))
        .filter(|heading| safe(*heading))
        .min_by_key(|heading| {
            let distance = head.step(*heading).manhattan(state.food);
            // Ties go to keeping the current heading
            (distance, *heading != current)
        })
        .unwrap_or(current)
}
