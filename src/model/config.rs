use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration loaded from the optional `--config` TOML file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show key hints in the status row
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Capture the mouse so rows and buttons can be clicked
    #[serde(default = "default_true")]
    pub mouse: bool,
    /// Hex overrides for theme slots, e.g. `green = "#44FF88"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            mouse: true,
            colors: HashMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}
