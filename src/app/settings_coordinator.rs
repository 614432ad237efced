//! Settings persistence coordination.
//!
//! The demo keeps its preferences in eframe's persistent storage as one
//! JSON document under [`SETTINGS_KEY`].

use serde::{Deserialize, Serialize};

use crate::state::{DEFAULT_ROWS, DEFAULT_SEED};
use crate::stories::Story;

/// Storage key of the settings document.
pub const SETTINGS_KEY: &str = "tailed_ellipsis_demo";

/// Everything the demo remembers between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
    pub story: Story,
    pub rows: usize,
    pub seed: u64,
    /// Column widths for the table story [Name, Text, Email]
    pub column_widths: [f32; 3],
    pub custom_width: f32,
    pub dark_mode: bool,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            story: Story::default(),
            rows: DEFAULT_ROWS,
            seed: DEFAULT_SEED,
            column_widths: [200.0, 400.0, 250.0],
            custom_width: 300.0,
            dark_mode: true,
        }
    }
}

/// Coordinates settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads settings from persistent storage.
    ///
    /// Missing storage or a missing key yields the defaults; a malformed
    /// document is logged and replaced by the defaults.
    pub fn load(storage: Option<&dyn eframe::Storage>) -> DemoSettings {
        let Some(json_str) = storage.and_then(|s| s.get_string(SETTINGS_KEY)) else {
            return DemoSettings::default();
        };

        match serde_json::from_str(&json_str) {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!(error = %err, "ignoring malformed demo settings");
                DemoSettings::default()
            }
        }
    }

    /// Saves settings to persistent storage.
    pub fn save(storage: &mut dyn eframe::Storage, settings: &DemoSettings) {
        match serde_json::to_string(settings) {
            Ok(json_str) => {
                storage.set_string(SETTINGS_KEY, json_str);
                storage.flush();
            }
            Err(err) => tracing::warn!(error = %err, "failed to encode demo settings"),
        }
    }
}
