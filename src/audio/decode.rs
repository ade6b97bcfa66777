use std::{fs::File, io::BufReader, path::Path};

use rodio::{Decoder, Source, source::Buffered};

use crate::audio::{error::AudioError, traits::TrackLoader};

/// A fully-opened decode stream over one audio file. Cloning is cheap and
/// yields an independent reader positioned at the first sample frame, which
/// is how playback restarts from the beginning.
#[derive(Clone)]
pub struct DecodedTrack(Buffered<Decoder<BufReader<File>>>);

impl DecodedTrack {
    pub fn source(&self) -> Buffered<Decoder<BufReader<File>>> {
        self.0.clone()
    }
}

/// Opens audio files with rodio's symphonia-backed decoder.
pub struct RodioLoader;

impl TrackLoader for RodioLoader {
    type Track = DecodedTrack;

    fn load(&self, path: &Path) -> Result<Self::Track, AudioError> {
        let file = File::open(path).map_err(|e| AudioError::FileOpen {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let decoder = Decoder::builder()
            .with_data(BufReader::new(file))
            .with_gapless(true)
            .build()
            .map_err(|e| AudioError::Decode {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        Ok(DecodedTrack(decoder.buffered()))
    }
}
