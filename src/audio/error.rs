use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum AudioError {
    #[error("Failed to open {path}: {reason}")]
    FileOpen { path: PathBuf, reason: String },

    #[error("Failed to decode {path}: {reason}")]
    Decode { path: PathBuf, reason: String },

    #[error("No track loaded")]
    NoTrackLoaded,

    #[error("Audio output unavailable: {0}")]
    OutputInit(String),

    #[error("No configured track at index {0}")]
    TrackNotFound(usize),
}
