use crate::model::SketchConfig;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub(super) struct AppSettings {
    pub grid_spacing: f32,
    pub snap_threshold: f32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            grid_spacing: 20.0,
            snap_threshold: 30.0,
        }
    }
}

impl AppSettings {
    pub fn to_config(&self) -> SketchConfig {
        SketchConfig {
            grid_spacing: self.grid_spacing,
            snap_threshold: self.snap_threshold,
            ..SketchConfig::default()
        }
    }

    pub fn from_config(config: &SketchConfig) -> Self {
        Self {
            grid_spacing: config.grid_spacing,
            snap_threshold: config.snap_threshold,
        }
    }
}

pub(super) fn load_settings(path: &str) -> Option<AppSettings> {
    let s = std::fs::read_to_string(path).ok()?;
    if path.ends_with(".toml") {
        toml::from_str::<AppSettings>(&s)
            .ok()
            .or_else(|| serde_json::from_str::<AppSettings>(&s).ok())
    } else {
        serde_json::from_str::<AppSettings>(&s)
            .ok()
            .or_else(|| toml::from_str::<AppSettings>(&s).ok())
    }
}

pub(super) fn save_settings(path: &str, settings: &AppSettings) -> Result<(), String> {
    if path.ends_with(".toml") {
        let toml = toml::to_string_pretty(settings).map_err(|e| e.to_string())?;
        std::fs::write(path, toml).map_err(|e| e.to_string())
    } else {
        let json = serde_json::to_string_pretty(settings).map_err(|e| e.to_string())?;
        std::fs::write(path, json).map_err(|e| e.to_string())
    }
}
