// Application Configuration
// Defaults compiled from config.yaml at build time
// Modify config.yaml and rebuild to change these values

// Include the auto-generated config from build.rs
pub mod compiled {
    include!(concat!(env!("OUT_DIR"), "/compiled_config.rs"));
}

/// Application-level configuration for the portfolio TUI
/// Values are compiled in from config.yaml at build time
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// UI and display settings
    pub ui: UiSettings,

    /// Name of the optional content override file
    pub content_file: String,
}

#[derive(Debug, Clone)]
pub struct UiSettings {
    /// Enable mouse support
    pub mouse_enabled: bool,

    /// Event poll timeout in milliseconds
    pub tick_rate_ms: u64,

    /// Width of the navigation sidebar in cells
    pub sidebar_width: u16,

    /// Width of skill gauge bars in cells
    pub gauge_width: u16,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            mouse_enabled: compiled::MOUSE_ENABLED,
            tick_rate_ms: compiled::TICK_RATE_MS,
            sidebar_width: compiled::SIDEBAR_WIDTH,
            gauge_width: compiled::GAUGE_WIDTH,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ui: UiSettings::default(),
            content_file: compiled::CONTENT_FILE.to_string(),
        }
    }
}
