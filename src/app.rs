use flume::Receiver;
use tracing::{error, info};

use crate::{
    audio::{
        decode::RodioLoader,
        playback::PlaybackEngine,
        player::SoundPlayer,
        traits::{AudioOutput, TrackLoader},
    },
    config::Config,
    event::TrayEvent,
};

/// Single-owner dispatch loop. All player mutation goes through here, one
/// event at a time, so the player itself needs no locking. Errors are logged
/// and the loop keeps going; only Quit (or the tray shell disappearing)
/// ends it.
pub struct App<L, O>
where
    L: TrackLoader,
    O: AudioOutput<Track = L::Track>,
{
    player: SoundPlayer<L, O>,
    event_rx: Receiver<TrayEvent>,
    should_quit: bool,
}

impl App<RodioLoader, PlaybackEngine> {
    pub fn new(config: &Config, event_rx: Receiver<TrayEvent>) -> Self {
        let player = SoundPlayer::with_rodio(config.tracks.clone(), config.startup_volume);
        Self::with_player(player, event_rx)
    }
}

impl<L, O> App<L, O>
where
    L: TrackLoader,
    O: AudioOutput<Track = L::Track>,
{
    pub fn with_player(player: SoundPlayer<L, O>, event_rx: Receiver<TrayEvent>) -> Self {
        Self {
            player,
            event_rx,
            should_quit: false,
        }
    }

    pub fn run(&mut self) {
        self.startup();

        while !self.should_quit {
            match self.event_rx.recv() {
                Ok(event) => self.handle_event(event),
                // The tray shell dropped its sender; nothing left to wait for.
                Err(_) => break,
            }
        }
    }

    fn startup(&mut self) {
        if self.player.tracks().is_empty() {
            info!("no tracks configured, starting idle");
            return;
        }
        if let Err(e) = self.player.load(0) {
            error!("failed to load startup track: {e}");
            return;
        }
        if let Err(e) = self.player.play() {
            error!("failed to start playback: {e}");
        }
    }

    pub fn handle_event(&mut self, event: TrayEvent) {
        match event {
            TrayEvent::Play => {
                if let Err(e) = self.player.play() {
                    error!("play failed: {e}");
                }
            }
            TrayEvent::Pause => self.player.pause(),
            TrayEvent::Volume(preset) => {
                if let Err(e) = self.player.set_volume(preset.level()) {
                    error!("volume change failed: {e}");
                }
            }
            TrayEvent::Track(index) => {
                if let Err(e) = self.player.select_track(index) {
                    error!("track change failed: {e}");
                }
            }
            TrayEvent::Quit => {
                info!("quit requested, tearing down");
                self.player.shutdown();
                self.should_quit = true;
            }
        }
    }
}
