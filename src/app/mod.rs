use crate::model::{LabelSequence, Sketch, SketchConfig};
use crate::tools::{ToolKind, ToolSession};

mod help;
mod painter;
mod settings;
mod update;

pub struct SketchApp {
    sketch: Sketch,
    labels: LabelSequence,
    session: ToolSession,
    tool: Option<ToolKind>,
    config: SketchConfig,
    settings_path: String,
    status: Option<String>,
    show_help: bool,
}

impl SketchApp {
    fn config_path() -> Option<String> {
        if let Some(home) = std::env::var_os("HOME") {
            let path = std::path::PathBuf::from(home)
                .join(".config")
                .join("sketchrule.toml");
            if path.exists() {
                return Some(path.display().to_string());
            }
        }
        if std::path::Path::new("settings.toml").exists() {
            return Some("settings.toml".to_string());
        }
        None
    }

    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let settings_path = Self::config_path().unwrap_or_else(|| "settings.toml".to_string());
        let loaded = settings::load_settings(&settings_path)
            .or_else(|| settings::load_settings("settings.json"))
            .unwrap_or_default();
        let config = loaded.to_config();

        Self {
            sketch: Sketch::default(),
            labels: LabelSequence::new(config.label_start),
            session: ToolSession::idle(),
            tool: None,
            config,
            settings_path,
            status: None,
            show_help: false,
        }
    }

    /// Switching the active tool (or disarming it) always clears any pending
    /// gesture, so no anchor survives a mid-gesture switch.
    fn set_tool(&mut self, tool: Option<ToolKind>) {
        if self.tool != tool {
            self.session = ToolSession::idle();
        }
        self.tool = tool;
    }

    /// The only operation that resets the label sequence.
    fn clear_all(&mut self) {
        self.sketch.clear();
        self.labels.reset();
        self.session = ToolSession::idle();
        self.status = Some("Cleared".to_string());
        log::info!("sketch cleared, label sequence reset");
    }

    fn save_settings(&mut self) {
        let settings = settings::AppSettings::from_config(&self.config);
        match settings::save_settings(&self.settings_path, &settings) {
            Ok(()) => {
                self.status = Some(format!("Settings saved to {}", self.settings_path));
            }
            Err(e) => {
                log::warn!("failed to save settings: {e}");
                self.status = Some(format!("Settings save failed: {e}"));
            }
        }
    }
}
