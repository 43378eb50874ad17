//! High score persistence
//!
//! A single integer, read once when a session starts and written when a run
//! ends above the previous best.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while writing the high score
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write high score to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode high score: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Key-value storage for the best score
pub trait ScoreStore {
    /// Stored high score; 0 when absent or unreadable
    fn load(&mut self) -> u32;

    /// Persist a new high score
    fn save(&mut self, score: u32) -> Result<(), StoreError>;
}

/// Volatile store, used for tests and sessions without persistence
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub value: Option<u32>,
    pub saves: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: u32) -> Self {
        Self {
            value: Some(value),
            saves: 0,
        }
    }
}

impl ScoreStore for MemoryStore {
    fn load(&mut self) -> u32 {
        self.value.unwrap_or(0)
    }

    fn save(&mut self, score: u32) -> Result<(), StoreError> {
        self.value = Some(score);
        self.saves += 1;
        Ok(())
    }
}

/// Store backed by a small JSON file holding one integer
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Default file name
    pub const FILE_NAME: &'static str = "snake_high_score.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at [`Self::FILE_NAME`] inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(Self::FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Parse stored text, tolerating surrounding whitespace
fn parse_score(text: &str) -> Option<u32> {
    serde_json::from_str::<u32>(text.trim()).ok()
}

impl ScoreStore for FileStore {
    fn load(&mut self) -> u32 {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("No high score found, starting fresh");
                return 0;
            }
            Err(err) => {
                log::warn!("Could not read {}: {err}", self.path.display());
                return 0;
            }
        };

        match parse_score(&text) {
            Some(score) => {
                log::info!("Loaded high score {score}");
                score
            }
            None => {
                log::warn!(
                    "Malformed high score in {}, using 0",
                    self.path.display()
                );
                0
            }
        }
    }

    fn save(&mut self, score: u32) -> Result<(), StoreError> {
        let json = serde_json::to_string(&score)?;
        // Write to a sibling temp file, then rename over the old one
        let tmp = self.path.with_extension("tmp");
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };
        fs::write(&tmp, json).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)?;
        log::info!("High score saved ({score})");
        Ok(())
    }
}
