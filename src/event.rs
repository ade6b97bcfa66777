/// One menu click, already resolved to its meaning. Every control on the
/// tray menu maps to exactly one of these, merged into a single channel with
/// a single blocking wait point in the dispatch loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrayEvent {
    Play,
    Pause,
    Volume(VolumePreset),
    Track(usize),
    Quit,
}

/// The three fixed volume entries on the menu, as attenuation levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumePreset {
    Low,
    Medium,
    High,
}

impl VolumePreset {
    pub fn level(self) -> f32 {
        match self {
            VolumePreset::Low => -3.0,
            VolumePreset::Medium => -1.0,
            VolumePreset::High => 0.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VolumePreset::Low => "Low",
            VolumePreset::Medium => "Medium",
            VolumePreset::High => "High",
        }
    }
}
