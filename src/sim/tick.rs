//! Simulation step and command transitions
//!
//! Every mutation of [`SimulationState`] goes through the functions here.
//! Commands issued in a status that does not accept them are no-ops.

use rand::Rng;

use super::difficulty::curve;
use super::geometry::{SimError, is_out_of_bounds, is_self_collision, pick_free_cell};
use super::heading::{DirectionPolicy, Heading};
use super::state::{CollisionKind, GameEvent, GameStatus, SimulationState};

/// Inbound commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    TogglePause,
    RequestDirection(Heading),
    Reset,
    /// One tick of movement
    Advance,
}

/// Apply a command in place and report what happened
pub fn apply<R: Rng + ?Sized>(
    state: &mut SimulationState,
    command: Command,
    rng: &mut R,
) -> Vec<GameEvent> {
    match command {
        Command::Start => start(state, rng),
        Command::TogglePause => toggle_pause(state),
        Command::RequestDirection(heading) => {
            request_direction(state, heading);
            Vec::new()
        }
        Command::Reset => reset(state),
        Command::Advance => advance(state, rng),
    }
}

/// `(state, command) -> state` form of [`apply`]
pub fn transition<R: Rng + ?Sized>(
    mut state: SimulationState,
    command: Command,
    rng: &mut R,
) -> (SimulationState, Vec<GameEvent>) {
    let events = apply(&mut state, command, rng);
    (state, events)
}

/// Begin a new run from the menu or a finished run
pub fn start<R: Rng + ?Sized>(state: &mut SimulationState, rng: &mut R) -> Vec<GameEvent> {
    if !matches!(state.status, GameStatus::Menu) && !state.status.is_terminal() {
        return Vec::new();
    }

    let config = state.config;
    state.snake.clear();
    state.snake.push_back(config.start_cell());
    state.direction = DirectionPolicy::new(Heading::Right);
    state.score = 0;
    let difficulty = curve(0, &config);
    state.level = difficulty.level;
    state.tick_interval_ms = difficulty.tick_interval_ms;
    state.status = GameStatus::Playing;

    let mut events = vec![GameEvent::Started];
    match pick_free_cell(&state.occupied(), config.grid_size, rng) {
        Ok(food) => state.food = food,
        Err(SimError::BoardFull) => events.extend(finish_board_full(state)),
    }
    events
}

/// Playing <-> Paused; no-op in any other status
pub fn toggle_pause(state: &mut SimulationState) -> Vec<GameEvent> {
    match state.status {
        GameStatus::Playing => {
            state.status = GameStatus::Paused;
            log::debug!("Paused at score {}", state.score);
            vec![GameEvent::Paused]
        }
        GameStatus::Paused => {
            state.status = GameStatus::Playing;
            log::debug!("Resumed");
            vec![GameEvent::Resumed]
        }
        _ => Vec::new(),
    }
}

/// Buffer a heading change while a run is active (playing or paused).
/// Returns whether the request was accepted.
pub fn request_direction(state: &mut SimulationState, heading: Heading) -> bool {
    match state.status {
        GameStatus::Playing | GameStatus::Paused => state.direction.request(heading),
        _ => false,
    }
}

/// Back to the menu from a paused or finished run. Only the status changes.
pub fn reset(state: &mut SimulationState) -> Vec<GameEvent> {
    match state.status {
        GameStatus::Paused | GameStatus::GameOver | GameStatus::Won => {
            state.status = GameStatus::Menu;
            log::info!("Returned to menu");
            vec![GameEvent::Reset]
        }
        _ => Vec::new(),
    }
}

/// Advance the snake by one cell
///
/// A move is fatal if the new head leaves the board or lands on any cell of
/// the body as it was before this tick, tail included: the tail is not
/// vacated ahead of the check.
pub fn advance<R: Rng + ?Sized>(state: &mut SimulationState, rng: &mut R) -> Vec<GameEvent> {
    if state.status != GameStatus::Playing {
        return Vec::new();
    }

    let heading = state.direction.consume();
    let new_head = state.head().step(heading);

    let collision = if is_out_of_bounds(new_head, state.config.grid_size) {
        Some(CollisionKind::Wall)
    } else if is_self_collision(new_head, &state.snake) {
        Some(CollisionKind::SelfCollision)
    } else {
        None
    };

    if let Some(kind) = collision {
        state.status = GameStatus::GameOver;
        let new_high_score = state.record_high_score();
        log::info!(
            "Game over ({:?}) with score {} at level {}{}",
            kind,
            state.score,
            state.level,
            if new_high_score { " - new high score" } else { "" }
        );
        return vec![
            GameEvent::Collision(kind),
            GameEvent::GameOver {
                score: state.score,
                new_high_score,
            },
        ];
    }

    state.snake.push_front(new_head);

    if new_head != state.food {
        state.snake.pop_back();
        return Vec::new();
    }

    // Ate food: keep the tail for one cell of growth
    state.score += 1;
    let previous_level = state.level;
    let difficulty = curve(state.score, &state.config);
    state.level = difficulty.level;
    state.tick_interval_ms = difficulty.tick_interval_ms;
    log::debug!(
        "Food eaten: score {}, level {}, interval {}ms",
        state.score,
        state.level,
        state.tick_interval_ms
    );

    let mut events = vec![GameEvent::FoodEaten { score: state.score }];
    if state.level > previous_level {
        events.push(GameEvent::LevelUp { level: state.level });
    }

    match pick_free_cell(&state.occupied(), state.config.grid_size, rng) {
        Ok(food) => state.food = food,
        Err(SimError::BoardFull) => events.extend(finish_board_full(state)),
    }
    events
}

/// Terminal transition when no cell is left for food
fn finish_board_full(state: &mut SimulationState) -> Vec<GameEvent> {
    state.status = GameStatus::Won;
    let new_high_score = state.record_high_score();
    log::info!("Board full with score {}", state.score);
    vec![GameEvent::BoardFull {
        score: state.score,
        new_high_score,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::Cell;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use std::collections::VecDeque;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(12345)
    }

    fn playing_state(snake: &[(i32, i32)], heading: Heading, food: (i32, i32)) -> SimulationState {
        let mut state = SimulationState::new(GameConfig::default(), 0, Cell::new(food.0, food.1));
        state.snake = snake.iter().map(|&(x, y)| Cell::new(x, y)).collect();
        state.direction = DirectionPolicy::new(heading);
        state.status = GameStatus::Playing;
        state
    }

    #[test]
    fn test_five_ticks_straight() {
        let mut rng = rng();
        let mut state = playing_state(&[(10, 10)], Heading::Right, (15, 15));
        for _ in 0..5 {
            assert!(advance(&mut state, &mut rng).is_empty());
        }
        assert_eq!(state.head(), Cell::new(15, 10));
        assert_eq!(state.len(), 1);
        assert_eq!(state.score, 0);
        assert_eq!(state.status, GameStatus::Playing);
    }

    #[test]
    fn test_eat_food_grows() {
        let mut rng = rng();
        let mut state = playing_state(&[(1, 0), (0, 0)], Heading::Right, (2, 0));
        let events = advance(&mut state, &mut rng);

        assert_eq!(events, vec![GameEvent::FoodEaten { score: 1 }]);
        assert_eq!(
            state.snake,
            VecDeque::from([Cell::new(2, 0), Cell::new(1, 0), Cell::new(0, 0)])
        );
        assert_eq!(state.score, 1);
        assert_eq!(state.level, 1);
        assert_eq!(state.tick_interval_ms, 150);
        assert!(!state.snake.contains(&state.food));
    }

    #[test]
    fn test_level_up_speeds_up() {
        let mut rng = rng();
        let mut state = playing_state(&[(1, 0), (0, 0)], Heading::Right, (2, 0));
        state.score = 4;
        let events = advance(&mut state, &mut rng);
        assert!(events.contains(&GameEvent::LevelUp { level: 2 }));
        assert_eq!(state.tick_interval_ms, 140);
    }

    #[test]
    fn test_wall_collision() {
        let mut rng = rng();
        let mut state = playing_state(&[(0, 5), (1, 5)], Heading::Left, (15, 15));
        state.score = 3;
        state.high_score = 10;
        let before = state.clone();

        let events = advance(&mut state, &mut rng);
        assert_eq!(
            events,
            vec![
                GameEvent::Collision(CollisionKind::Wall),
                GameEvent::GameOver {
                    score: 3,
                    new_high_score: false
                }
            ]
        );
        assert_eq!(state.status, GameStatus::GameOver);
        assert_eq!(state.high_score, 10);
        assert_eq!(state.snake, before.snake);
        assert_eq!(state.food, before.food);
    }

    #[test]
    fn test_game_over_raises_high_score() {
        let mut rng = rng();
        let mut state = playing_state(&[(0, 5)], Heading::Left, (15, 15));
        state.score = 12;
        state.high_score = 10;
        let events = advance(&mut state, &mut rng);
        assert!(events.contains(&GameEvent::GameOver {
            score: 12,
            new_high_score: true
        }));
        assert_eq!(state.high_score, 12);
    }

    #[test]
    fn test_self_collision() {
        let mut rng = rng();
        // Hook shape: head at (5,5) heading Up into (5,4) which is body
        let mut state = playing_state(
            &[(5, 5), (6, 5), (6, 4), (5, 4), (4, 4)],
            Heading::Left,
            (15, 15),
        );
        request_direction(&mut state, Heading::Up);
        let events = advance(&mut state, &mut rng);
        assert_eq!(events[0], GameEvent::Collision(CollisionKind::SelfCollision));
        assert_eq!(state.status, GameStatus::GameOver);
    }

    #[test]
    fn test_moving_into_tail_is_fatal() {
        let mut rng = rng();
        // Square loop: head (5,5), tail (5,4) directly above the head
        let mut state = playing_state(
            &[(5, 5), (6, 5), (6, 4), (5, 4)],
            Heading::Left,
            (15, 15),
        );
        request_direction(&mut state, Heading::Up);
        let events = advance(&mut state, &mut rng);
        assert_eq!(events[0], GameEvent::Collision(CollisionKind::SelfCollision));
    }

    #[test]
    fn test_direction_buffer_last_wins() {
        let mut rng = rng();
        let mut state = playing_state(&[(10, 10)], Heading::Right, (15, 15));
        assert!(request_direction(&mut state, Heading::Up));
        assert!(request_direction(&mut state, Heading::Down));
        advance(&mut state, &mut rng);
        assert_eq!(state.head(), Cell::new(10, 11));
        assert_eq!(state.direction.current(), Heading::Down);
    }

    #[test]
    fn test_reversal_ignored_while_playing() {
        let mut rng = rng();
        let mut state = playing_state(&[(10, 10), (9, 10)], Heading::Right, (15, 15));
        assert!(!request_direction(&mut state, Heading::Left));
        advance(&mut state, &mut rng);
        assert_eq!(state.head(), Cell::new(11, 10));
    }

    #[test]
    fn test_toggle_pause_in_menu_is_noop() {
        let mut state = SimulationState::new(GameConfig::default(), 0, Cell::new(15, 15));
        assert!(toggle_pause(&mut state).is_empty());
        assert_eq!(state.status, GameStatus::Menu);
    }

    #[test]
    fn test_state_machine() {
        let mut rng = rng();
        let mut state = SimulationState::new(GameConfig::default(), 0, Cell::new(15, 15));

        // Reset in menu does nothing
        assert!(reset(&mut state).is_empty());

        assert_eq!(start(&mut state, &mut rng), vec![GameEvent::Started]);
        assert_eq!(state.status, GameStatus::Playing);
        // Start while playing is a no-op
        assert!(start(&mut state, &mut rng).is_empty());

        assert_eq!(toggle_pause(&mut state), vec![GameEvent::Paused]);
        assert_eq!(state.status, GameStatus::Paused);
        // Paused snake does not move
        let head = state.head();
        assert!(advance(&mut state, &mut rng).is_empty());
        assert_eq!(state.head(), head);

        assert_eq!(toggle_pause(&mut state), vec![GameEvent::Resumed]);
        assert_eq!(state.status, GameStatus::Playing);

        assert_eq!(toggle_pause(&mut state), vec![GameEvent::Paused]);
        assert_eq!(reset(&mut state), vec![GameEvent::Reset]);
        assert_eq!(state.status, GameStatus::Menu);
    }

    #[test]
    fn test_start_reinitializes_run() {
        let mut rng = rng();
        let mut state = playing_state(&[(0, 5), (1, 5), (2, 5)], Heading::Left, (15, 15));
        state.score = 9;
        state.level = 2;
        state.tick_interval_ms = 140;
        advance(&mut state, &mut rng);
        assert_eq!(state.status, GameStatus::GameOver);
        assert_eq!(state.high_score, 9);

        start(&mut state, &mut rng);
        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.snake, VecDeque::from([Cell::new(10, 10)]));
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.tick_interval_ms, 150);
        assert_eq!(state.direction.current(), Heading::Right);
        assert_eq!(state.high_score, 9);
        assert_ne!(state.food, Cell::new(10, 10));
    }

    #[test]
    fn test_pending_direction_survives_pause() {
        let mut rng = rng();
        let mut state = playing_state(&[(10, 10)], Heading::Right, (15, 15));
        toggle_pause(&mut state);
        assert!(request_direction(&mut state, Heading::Down));
        toggle_pause(&mut state);
        advance(&mut state, &mut rng);
        assert_eq!(state.head(), Cell::new(10, 11));
    }

    #[test]
    fn test_requests_ignored_outside_run() {
        let mut state = SimulationState::new(GameConfig::default(), 0, Cell::new(15, 15));
        assert!(!request_direction(&mut state, Heading::Up));
        assert_eq!(state.direction.pending(), Heading::Right);
    }

    #[test]
    fn test_board_full_is_won() {
        let mut rng = rng();
        let mut state = playing_state(&[(1, 0), (0, 0), (0, 1)], Heading::Down, (1, 1));
        state.config = GameConfig::with_grid_size(2);
        state.high_score = 1;
        let events = advance(&mut state, &mut rng);
        assert_eq!(
            events,
            vec![
                GameEvent::FoodEaten { score: 1 },
                GameEvent::BoardFull {
                    score: 1,
                    new_high_score: false
                }
            ]
        );
        assert_eq!(state.status, GameStatus::Won);
        assert_eq!(state.len(), 4);

        // Won accepts start and reset like game over
        assert_eq!(reset(&mut state), vec![GameEvent::Reset]);
        assert_eq!(state.status, GameStatus::Menu);
    }

    #[test]
    fn test_transition_is_value_based() {
        let mut rng = rng();
        let state = SimulationState::new(GameConfig::default(), 0, Cell::new(15, 15));
        let (state, events) = transition(state, Command::Start, &mut rng);
        assert_eq!(events, vec![GameEvent::Started]);
        let (state, _) = transition(state, Command::RequestDirection(Heading::Up), &mut rng);
        let (state, _) = transition(state, Command::Advance, &mut rng);
        assert_eq!(state.head(), Cell::new(10, 9));
    }
}
