use std::path::{Path, PathBuf};

use flume::Sender;
use tracing::warn;
use tray_icon::{
    Icon, TrayIcon, TrayIconBuilder,
    menu::{IsMenuItem, Menu, MenuEvent, MenuItem, PredefinedMenuItem, Submenu},
};

use crate::{
    config::Config,
    event::{TrayEvent, VolumePreset},
};

const TOOLTIP: &str = "Ambiance";

const VOLUME_PRESETS: [VolumePreset; 3] =
    [VolumePreset::Low, VolumePreset::Medium, VolumePreset::High];

/// Maps a clicked menu item id back to its event. Track entries carry their
/// index in the id (`track:3`); everything else is a fixed id.
pub fn event_for_id(id: &str) -> Option<TrayEvent> {
    match id {
        "play" => Some(TrayEvent::Play),
        "pause" => Some(TrayEvent::Pause),
        "volume:low" => Some(TrayEvent::Volume(VolumePreset::Low)),
        "volume:medium" => Some(TrayEvent::Volume(VolumePreset::Medium)),
        "volume:high" => Some(TrayEvent::Volume(VolumePreset::High)),
        "quit" => Some(TrayEvent::Quit),
        _ => id.strip_prefix("track:")?.parse().ok().map(TrayEvent::Track),
    }
}

fn preset_id(preset: VolumePreset) -> String {
    format!("volume:{}", preset.label().to_lowercase())
}

pub fn track_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Declares the static menu tree:
/// {Play, Pause, Volume▸{Low, Medium, High}, Sounds▸{per track}, Quit}.
fn build_menu(tracks: &[PathBuf]) -> Result<Menu, tray_icon::menu::Error> {
    let play = MenuItem::with_id("play", "Play", true, None);
    let pause = MenuItem::with_id("pause", "Pause", true, None);

    let presets: Vec<MenuItem> = VOLUME_PRESETS
        .iter()
        .map(|&preset| MenuItem::with_id(preset_id(preset), preset.label(), true, None))
        .collect();
    let preset_refs: Vec<&dyn IsMenuItem> =
        presets.iter().map(|item| item as &dyn IsMenuItem).collect();
    let volume = Submenu::with_items("Volume", true, &preset_refs)?;

    let sounds_items: Vec<MenuItem> = tracks
        .iter()
        .enumerate()
        .map(|(index, path)| {
            MenuItem::with_id(format!("track:{index}"), track_label(path), true, None)
        })
        .collect();
    let sound_refs: Vec<&dyn IsMenuItem> = sounds_items
        .iter()
        .map(|item| item as &dyn IsMenuItem)
        .collect();
    let sounds = Submenu::with_items("Sounds", true, &sound_refs)?;

    let quit = MenuItem::with_id("quit", "Quit", true, None);

    Menu::with_items(&[
        &play,
        &pause,
        &volume,
        &sounds,
        &PredefinedMenuItem::separator(),
        &quit,
    ])
}

/// Routes every menu click into the dispatch channel as a `TrayEvent`.
/// Unknown ids are dropped.
pub fn forward_menu_events(event_tx: Sender<TrayEvent>) {
    MenuEvent::set_event_handler(Some(move |event: MenuEvent| {
        if let Some(tray_event) = event_for_id(event.id.0.as_str()) {
            let _ = event_tx.send(tray_event);
        }
    }));
}

fn load_icon(path: &Path) -> Option<Icon> {
    let image = match image::open(path) {
        Ok(image) => image.into_rgba8(),
        Err(e) => {
            warn!("failed to load tray icon {}: {e}", path.display());
            return None;
        }
    };
    let (width, height) = image.dimensions();
    match Icon::from_rgba(image.into_raw(), width, height) {
        Ok(icon) => Some(icon),
        Err(e) => {
            warn!("failed to convert tray icon {}: {e}", path.display());
            None
        }
    }
}

/// Creates the tray icon with its menu. Must run on the thread driving the
/// shell event loop, after that loop has started.
pub fn build_tray(config: &Config) -> color_eyre::Result<TrayIcon> {
    let menu = build_menu(&config.tracks)?;

    let mut builder = TrayIconBuilder::new()
        .with_menu(Box::new(menu))
        .with_tooltip(TOOLTIP);
    if let Some(icon) = load_icon(&config.icon_path) {
        builder = builder.with_icon(icon);
    }

    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_ids_map_to_their_events() {
        assert_eq!(event_for_id("play"), Some(TrayEvent::Play));
        assert_eq!(event_for_id("pause"), Some(TrayEvent::Pause));
        assert_eq!(
            event_for_id("volume:low"),
            Some(TrayEvent::Volume(VolumePreset::Low))
        );
        assert_eq!(
            event_for_id("volume:medium"),
            Some(TrayEvent::Volume(VolumePreset::Medium))
        );
        assert_eq!(
            event_for_id("volume:high"),
            Some(TrayEvent::Volume(VolumePreset::High))
        );
        assert_eq!(event_for_id("quit"), Some(TrayEvent::Quit));
    }

    #[test]
    fn track_ids_carry_their_index() {
        assert_eq!(event_for_id("track:0"), Some(TrayEvent::Track(0)));
        assert_eq!(event_for_id("track:12"), Some(TrayEvent::Track(12)));
        assert_eq!(event_for_id("track:"), None);
        assert_eq!(event_for_id("track:x"), None);
    }

    #[test]
    fn unknown_ids_are_dropped() {
        assert_eq!(event_for_id(""), None);
        assert_eq!(event_for_id("volume:mute"), None);
        assert_eq!(event_for_id("sounds"), None);
    }

    #[test]
    fn preset_ids_round_trip_through_the_mapping() {
        for preset in VOLUME_PRESETS {
            assert_eq!(
                event_for_id(&preset_id(preset)),
                Some(TrayEvent::Volume(preset))
            );
        }
    }

    #[test]
    fn tracks_are_labeled_by_filename() {
        assert_eq!(track_label(Path::new("sounds/summer-rain.mp3")), "summer-rain.mp3");
        assert_eq!(track_label(Path::new("rain.mp3")), "rain.mp3");
    }
}
