use std::path::{Path, PathBuf};

use crate::audio::{
    decode::RodioLoader,
    error::AudioError,
    playback::PlaybackEngine,
    traits::{AudioOutput, TrackLoader},
};

pub type AmbiencePlayer = SoundPlayer<RodioLoader, PlaybackEngine>;

struct Loaded<T> {
    path: PathBuf,
    track: T,
}

/// Playback state for the whole application: which track is loaded, whether
/// a stream is active, and at what attenuation level. All mutation happens
/// from the single dispatch loop, so there is no locking in here.
///
/// States are Idle (no handle), loaded-stopped, and loaded-playing. `load`
/// always lands in loaded-stopped, `play` and `pause` move between the two
/// loaded states, and a volume change while playing restarts the stream so
/// the new level is audible.
pub struct SoundPlayer<L, O>
where
    L: TrackLoader,
    O: AudioOutput<Track = L::Track>,
{
    loader: L,
    output: O,
    tracks: Vec<PathBuf>,
    current: Option<Loaded<L::Track>>,
    is_playing: bool,
    volume: f32,
}

impl SoundPlayer<RodioLoader, PlaybackEngine> {
    pub fn with_rodio(tracks: Vec<PathBuf>, volume: f32) -> Self {
        Self::new(RodioLoader, PlaybackEngine::new(), tracks, volume)
    }
}

impl<L, O> SoundPlayer<L, O>
where
    L: TrackLoader,
    O: AudioOutput<Track = L::Track>,
{
    pub fn new(loader: L, output: O, tracks: Vec<PathBuf>, volume: f32) -> Self {
        Self {
            loader,
            output,
            tracks,
            current: None,
            is_playing: false,
            volume,
        }
    }

    pub fn tracks(&self) -> &[PathBuf] {
        &self.tracks
    }

    pub fn current_track(&self) -> Option<&Path> {
        self.current.as_ref().map(|loaded| loaded.path.as_path())
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Opens the decode stream for `tracks[index]`, replacing any current
    /// one. The previous handle is closed before the next one opens, so at
    /// most one decode stream is ever live; a failed open leaves the player
    /// with no track loaded. Does not touch the output device.
    pub fn load(&mut self, index: usize) -> Result<(), AudioError> {
        let path = self
            .tracks
            .get(index)
            .cloned()
            .ok_or(AudioError::TrackNotFound(index))?;

        self.current = None;
        let track = self.loader.load(&path)?;
        self.current = Some(Loaded { path, track });
        Ok(())
    }

    /// Submits the loaded track to the output as an infinite loop at the
    /// current attenuation level, replacing any stream already playing.
    pub fn play(&mut self) -> Result<(), AudioError> {
        let loaded = self.current.as_ref().ok_or(AudioError::NoTrackLoaded)?;
        self.output.play(&loaded.track, self.volume)?;
        self.is_playing = true;
        Ok(())
    }

    /// Stops whatever is playing. Idempotent.
    pub fn pause(&mut self) {
        self.output.clear();
        self.is_playing = false;
    }

    /// Stores the attenuation level. While playing this restarts the stream
    /// in one pause+play cycle; the restart error is surfaced so the caller
    /// can log it rather than lose it.
    pub fn set_volume(&mut self, level: f32) -> Result<(), AudioError> {
        self.volume = level;
        if self.is_playing {
            self.pause();
            self.play()?;
        }
        Ok(())
    }

    /// Loads `tracks[index]` and, if playback was active, resumes on the new
    /// track at the preserved volume.
    pub fn select_track(&mut self, index: usize) -> Result<(), AudioError> {
        let resume = self.is_playing;
        self.load(index)?;
        if resume {
            self.play()?;
        }
        Ok(())
    }

    /// Teardown on quit: stop the stream, close the decode handle, release
    /// the output device.
    pub fn shutdown(&mut self) {
        self.pause();
        self.current = None;
        self.output.close();
    }
}
