//! Grid Snake entry point
//!
//! Headless demo: the autopilot plays one run on a simulated 60 Hz frame
//! clock. Set `RUST_LOG=debug` to see every food pickup and tone.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use grid_snake::sim::{GameStatus, suggest_heading};
    use grid_snake::{FileStore, GameConfig, GameSession, Intent, LogNotifier};

    /// Simulated frame length (ms)
    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Stop the demo after this many frames even if the snake survives
    const MAX_FRAMES: u32 = 60 * 60 * 5;

    env_logger::init();
    log::info!("Grid Snake (native demo) starting...");

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let store = FileStore::in_dir(std::env::temp_dir());
    let mut session = GameSession::new(GameConfig::default(), store, LogNotifier::new(), seed);

    session.handle(Intent::Start);
    let mut frames = 0;
    while session.snapshot().status == GameStatus::Playing && frames < MAX_FRAMES {
        let heading = suggest_heading(session.engine().state());
        session.handle(Intent::Turn(heading));
        session.frame(FRAME_MS);
        frames += 1;
    }

    let snapshot = session.snapshot();
    println!(
        "{:?} after {:.1}s: score {}, level {}, length {}, high score {}, {} tones",
        snapshot.status,
        f64::from(frames) * FRAME_MS / 1000.0,
        snapshot.score,
        snapshot.level,
        snapshot.snake.len(),
        snapshot.high_score,
        session.audio().played()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser host; the library is driven by an embedding page
}
