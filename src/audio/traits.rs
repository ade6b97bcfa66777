use std::path::Path;

use crate::audio::error::AudioError;

/// Seam over the decode subsystem: turns a file path into an opaque,
/// replayable decoded-audio handle. The handle is closed by dropping it.
pub trait TrackLoader {
    type Track;

    fn load(&self, path: &Path) -> Result<Self::Track, AudioError>;
}

/// Seam over the audio-output subsystem. The device is brought up lazily on
/// the first `play`; submitting a stream replaces whatever is already
/// playing. There is deliberately no live-volume primitive: a new attenuation
/// level only takes effect through another `play`.
pub trait AudioOutput {
    type Track;

    fn play(&mut self, track: &Self::Track, level: f32) -> Result<(), AudioError>;
    fn clear(&mut self);
    fn close(&mut self);
}
