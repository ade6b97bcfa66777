//! Test doubles for the decode and output seams: a handle-counting loader
//! and a call-recording output.

use std::{
    path::{Path, PathBuf},
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
};

use crate::audio::{
    error::AudioError,
    player::SoundPlayer,
    traits::{AudioOutput, TrackLoader},
};

pub struct FakeHandle {
    pub path: PathBuf,
    live: Arc<AtomicUsize>,
}

impl Drop for FakeHandle {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}

pub struct FakeLoader {
    live: Arc<AtomicUsize>,
    fail_on: Option<&'static str>,
}

impl TrackLoader for FakeLoader {
    type Track = FakeHandle;

    fn load(&self, path: &Path) -> Result<FakeHandle, AudioError> {
        if let Some(marker) = self.fail_on {
            if path.to_string_lossy().contains(marker) {
                return Err(AudioError::Decode {
                    path: path.to_path_buf(),
                    reason: "unsupported container".into(),
                });
            }
        }
        self.live.fetch_add(1, Ordering::SeqCst);
        Ok(FakeHandle {
            path: path.to_path_buf(),
            live: self.live.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum OutputCall {
    Play { path: PathBuf, level: f32 },
    Clear,
    Close,
}

pub struct FakeOutput {
    calls: Arc<Mutex<Vec<OutputCall>>>,
    fail_play: Arc<AtomicBool>,
}

impl AudioOutput for FakeOutput {
    type Track = FakeHandle;

    fn play(&mut self, track: &FakeHandle, level: f32) -> Result<(), AudioError> {
        if self.fail_play.load(Ordering::SeqCst) {
            return Err(AudioError::OutputInit("device unavailable".into()));
        }
        self.calls.lock().unwrap().push(OutputCall::Play {
            path: track.path.clone(),
            level,
        });
        Ok(())
    }

    fn clear(&mut self) {
        self.calls.lock().unwrap().push(OutputCall::Clear);
    }

    fn close(&mut self) {
        self.calls.lock().unwrap().push(OutputCall::Close);
    }
}

/// Shared view into what the fakes observed while the player owned them.
pub struct Harness {
    live: Arc<AtomicUsize>,
    calls: Arc<Mutex<Vec<OutputCall>>>,
    pub fail_play: Arc<AtomicBool>,
}

impl Harness {
    pub fn calls(&self) -> Vec<OutputCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn drain(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn live_handles(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }
}

pub fn fake_player(
    tracks: &[&str],
    fail_on: Option<&'static str>,
) -> (SoundPlayer<FakeLoader, FakeOutput>, Harness) {
    let harness = Harness {
        live: Arc::new(AtomicUsize::new(0)),
        calls: Arc::new(Mutex::new(Vec::new())),
        fail_play: Arc::new(AtomicBool::new(false)),
    };
    let loader = FakeLoader {
        live: harness.live.clone(),
        fail_on,
    };
    let output = FakeOutput {
        calls: harness.calls.clone(),
        fail_play: harness.fail_play.clone(),
    };
    let tracks = tracks.iter().map(PathBuf::from).collect();
    (SoundPlayer::new(loader, output, tracks, -2.0), harness)
}
