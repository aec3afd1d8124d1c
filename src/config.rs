use std::path::PathBuf;

use serde::Serialize;

/// Environment variable overriding the HTTP bind address.
pub const BIND_ENV: &str = "SPACEX_DASH_BIND";
/// Environment variable overriding the launch data file.
pub const DATA_ENV: &str = "SPACEX_DASH_DATA";

/// Range slider geometry, in kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SliderConfig {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0,
            max: 10_000,
            step: 1_000,
        }
    }
}

impl SliderConfig {
    /// Labelled tick positions, one per step including both ends.
    pub fn marks(&self) -> Vec<u32> {
        let step = self.step.max(1) as usize;
        (self.min..=self.max).step_by(step).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub bind_addr: String,
    pub data_path: PathBuf,
    pub slider: SliderConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8052".into(),
            data_path: PathBuf::from("spacex_launch_dash.csv"),
            slider: SliderConfig::default(),
        }
    }
}

/// Defaults overridden by the process environment.
pub fn load_settings() -> Settings {
    settings_from(|key| std::env::var(key).ok())
}

fn settings_from(lookup: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Some(v) = lookup(BIND_ENV).filter(|v| !v.trim().is_empty()) {
        settings.bind_addr = v.trim().to_string();
    }
    if let Some(v) = lookup(DATA_ENV).filter(|v| !v.trim().is_empty()) {
        settings.data_path = PathBuf::from(v.trim());
    }

    settings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_environment() {
        let settings = settings_from(|_| None);
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.bind_addr, "127.0.0.1:8052");
    }

    #[test]
    fn environment_overrides_defaults() {
        let settings = settings_from(|key| match key {
            BIND_ENV => Some("0.0.0.0:9000".into()),
            DATA_ENV => Some(" /data/launches.csv ".into()),
            _ => None,
        });
        assert_eq!(settings.bind_addr, "0.0.0.0:9000");
        assert_eq!(settings.data_path, PathBuf::from("/data/launches.csv"));
    }

    #[test]
    fn blank_override_is_ignored() {
        let settings = settings_from(|key| (key == BIND_ENV).then(|| "  ".to_string()));
        assert_eq!(settings.bind_addr, "127.0.0.1:8052");
    }

    #[test]
    fn slider_marks_cover_full_range() {
        let marks = SliderConfig::default().marks();
        assert_eq!(marks.len(), 11);
        assert_eq!(marks.first(), Some(&0));
        assert_eq!(marks.last(), Some(&10_000));
    }
}
