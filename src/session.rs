//! Host session
//!
//! Wires the engine to its collaborators: intents come in, frames pump the
//! scheduler, events fan out to audio and the score store.

use crate::audio::{AudioCue, AudioNotifier};
use crate::config::GameConfig;
use crate::highscores::ScoreStore;
use crate::input::Intent;
use crate::scheduler::TickScheduler;
use crate::sim::{GameEvent, SimulationEngine, Snapshot};

/// One player's game session
pub struct GameSession<S: ScoreStore, A: AudioNotifier> {
    engine: SimulationEngine,
    scheduler: TickScheduler,
    store: S,
    audio: A,
    /// Best score known to be persisted
    saved_high_score: u32,
}

impl<S: ScoreStore, A: AudioNotifier> GameSession<S, A> {
    /// Load the high score once and build an engine in the menu
    pub fn new(config: GameConfig, mut store: S, audio: A, seed: u64) -> Self {
        let high_score = store.load();
        log::info!("Session started, high score {high_score}");
        Self {
            engine: SimulationEngine::new(config, high_score, seed),
            scheduler: TickScheduler::new(),
            store,
            audio,
            saved_high_score: high_score,
        }
    }

    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn snapshot(&self) -> Snapshot {
        self.engine.snapshot()
    }

    /// Route one player intent
    pub fn handle(&mut self, intent: Intent) -> Vec<GameEvent> {
        let events = match intent {
            Intent::Turn(heading) => {
                self.engine.request_direction(heading);
                Vec::new()
            }
            Intent::TogglePause => self.engine.toggle_pause(),
            Intent::Start => {
                let events = self.engine.start();
                if !events.is_empty() {
                    self.audio.init();
                    self.scheduler.clear();
                }
                events
            }
            Intent::Reset => self.engine.reset(),
        };
        self.dispatch(&events);
        events
    }

    /// Advance by one host frame of `elapsed_ms`
    pub fn frame(&mut self, elapsed_ms: f64) -> Vec<GameEvent> {
        let events = self.scheduler.pump(&mut self.engine, elapsed_ms);
        self.dispatch(&events);
        events
    }

    fn dispatch(&mut self, events: &[GameEvent]) {
        for event in events {
            if let Some(cue) = AudioCue::for_event(event) {
                self.audio.notify(cue);
            }
            match *event {
                GameEvent::GameOver { score, .. } | GameEvent::BoardFull { score, .. } => {
                    self.persist_high_score(score);
                }
                _ => {}
            }
        }
    }

    fn persist_high_score(&mut self, score: u32) {
        if score <= self.saved_high_score {
            return;
        }
        match self.store.save(score) {
            Ok(()) => self.saved_high_score = score,
            Err(err) => log::warn!("Could not save high score: {err}"),
        }
    }
}
