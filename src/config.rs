use std::path::PathBuf;

/// Compiled-in configuration: the track list is fixed at startup and there
/// is no config file, CLI, or environment surface for it.
#[derive(Debug, Clone)]
pub struct Config {
    pub tracks: Vec<PathBuf>,
    pub startup_volume: f32,
    pub icon_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tracks: vec![
                PathBuf::from("sounds/mountain-stream.mp3"),
                PathBuf::from("sounds/summer-rain.mp3"),
                PathBuf::from("sounds/night-crickets.mp3"),
            ],
            startup_volume: -2.0,
            icon_path: PathBuf::from("assets/ambiance.png"),
        }
    }
}
