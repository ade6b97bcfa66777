use rodio::{
    Device, DeviceTrait, OutputStream, OutputStreamBuilder, Sink, Source,
    cpal::{BufferSize, SampleFormat, SampleRate, StreamConfig, default_host, traits::HostTrait},
};

use crate::audio::{decode::DecodedTrack, error::AudioError, traits::AudioOutput};

fn setup_device_config() -> Result<(Device, StreamConfig, SampleFormat), AudioError> {
    let host = default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| AudioError::OutputInit("no default output device".into()))?;
    let config: StreamConfig;
    let sample_format: SampleFormat;

    if let Ok(default_configs) = device.supported_output_configs() {
        let default_config = default_configs
            .max_by_key(|cfg| cfg.max_sample_rate().0)
            .ok_or_else(|| AudioError::OutputInit("no supported output config".into()))?;

        config = StreamConfig {
            channels: default_config.channels(),
            sample_rate: default_config.max_sample_rate(),
            buffer_size: BufferSize::Fixed(4096),
        };
        sample_format = default_config.sample_format();
    } else {
        config = StreamConfig {
            channels: 2,
            sample_rate: SampleRate(48000),
            buffer_size: BufferSize::Fixed(4096),
        };
        sample_format = SampleFormat::F32;
    }

    Ok((device, config, sample_format))
}

fn construct_sink(
    device: Device,
    config: &StreamConfig,
    sample_format: SampleFormat,
) -> Result<(OutputStream, Sink), AudioError> {
    let stream = OutputStreamBuilder::default()
        .with_buffer_size(config.buffer_size)
        .with_sample_rate(config.sample_rate.0)
        .with_device(device)
        .with_sample_format(sample_format)
        .open_stream_or_fallback()
        .map_err(|e| AudioError::OutputInit(e.to_string()))?;
    let mixer = stream.mixer();
    let sink = Sink::connect_new(mixer);

    Ok((stream, sink))
}

/// Output device and sink, brought up on first use and held until `close`.
/// One stream plays at a time; submitting a new one replaces it.
#[derive(Default)]
pub struct PlaybackEngine {
    sink: Option<(OutputStream, Sink)>,
}

impl PlaybackEngine {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_sink(&mut self) -> Result<&Sink, AudioError> {
        if self.sink.is_none() {
            let (device, config, sample_format) = setup_device_config()?;
            self.sink = Some(construct_sink(device, &config, sample_format)?);
        }
        let (_, sink) = self
            .sink
            .as_ref()
            .ok_or_else(|| AudioError::OutputInit("output device closed".into()))?;
        Ok(sink)
    }
}

impl AudioOutput for PlaybackEngine {
    type Track = DecodedTrack;

    fn play(&mut self, track: &Self::Track, level: f32) -> Result<(), AudioError> {
        // Attenuation levels are base-2 exponents: 0 is unity gain, each
        // step of -1 halves the amplitude.
        let gain = 2f32.powf(level);
        let source = track.source().repeat_infinite().amplify(gain);

        let sink = self.ensure_sink()?;
        sink.stop();
        sink.append(source);
        sink.play();
        Ok(())
    }

    fn clear(&mut self) {
        if let Some((_, sink)) = &self.sink {
            sink.stop();
        }
    }

    fn close(&mut self) {
        self.sink = None;
    }
}
