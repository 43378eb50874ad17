//! Audio cue notifications
//!
//! The simulation only reports events; hosts turn the two audible ones into
//! short procedurally generated tones. Backends are created lazily on the
//! first `start()`, since audio output may require a user gesture.

use crate::sim::GameEvent;

/// Oscillator shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
}

/// Tone parameters for a cue
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneSpec {
    pub frequency_hz: f32,
    pub duration_secs: f32,
    pub waveform: Waveform,
    /// Gain at the start of the tone
    pub start_gain: f32,
    /// Gain reached by exponential ramp at the end
    pub end_gain: f32,
}

/// Audible events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    /// Snake ate food
    FoodEaten,
    /// Snake hit a wall or itself
    Collision,
}

impl AudioCue {
    /// Cue for a simulation event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::FoodEaten { .. } => Some(AudioCue::FoodEaten),
            GameEvent::Collision(_) => Some(AudioCue::Collision),
            _ => None,
        }
    }

    pub fn tone(self) -> ToneSpec {
        match self {
            AudioCue::FoodEaten => ToneSpec {
                frequency_hz: 800.0,
                duration_secs: 0.2,
                waveform: Waveform::Sine,
                start_gain: 0.1,
                end_gain: 0.01,
            },
            AudioCue::Collision => ToneSpec {
                frequency_hz: 200.0,
                duration_secs: 0.5,
                waveform: Waveform::Square,
                start_gain: 0.1,
                end_gain: 0.01,
            },
        }
    }
}

/// Fire-and-forget receiver of audio cues
pub trait AudioNotifier {
    /// Prepare the output device. Called by the session when a run starts;
    /// cues before the first call may be dropped.
    fn init(&mut self) {}

    fn notify(&mut self, cue: AudioCue);
}

/// Notifier that logs the tones it would play
#[derive(Debug, Clone, Default)]
pub struct LogNotifier {
    ready: bool,
    played: u32,
}

impl LogNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Tones played since init
    pub fn played(&self) -> u32 {
        self.played
    }
}

impl AudioNotifier for LogNotifier {
    fn init(&mut self) {
        if !self.ready {
            self.ready = true;
            log::debug!("Audio output initialised");
        }
    }

    fn notify(&mut self, cue: AudioCue) {
        if !self.ready {
            return;
        }
        let tone = cue.tone();
        self.played += 1;
        log::debug!(
            "Tone {:?}: {}Hz {:?} for {}s, gain {:.2} -> {:.2}",
            cue,
            tone.frequency_hz,
            tone.waveform,
            tone.duration_secs,
            tone.start_gain,
            tone.end_gain
        );
    }
}
