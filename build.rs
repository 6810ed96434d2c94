// Build script - reads config.yaml at compile time and generates defaults
// This allows changing UI defaults during development without editing source code

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Tell Cargo to rerun if config.yaml changes
    println!("cargo:rerun-if-changed=src/config.yaml");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("compiled_config.rs");

    // Try to read config.yaml from src/, fall back to hardcoded defaults if not found
    let config = if Path::new("src/config.yaml").exists() {
        let content = fs::read_to_string("src/config.yaml")
            .expect("Failed to read src/config.yaml");
        parse_config(&content)
    } else {
        CompiledConfig::default()
    };

    let generated = format!(
        r#"// Auto-generated from config.yaml at compile time
// Do not edit - modify config.yaml and rebuild instead

pub const MOUSE_ENABLED: bool = {mouse_enabled};
pub const TICK_RATE_MS: u64 = {tick_rate_ms};
pub const SIDEBAR_WIDTH: u16 = {sidebar_width};
pub const GAUGE_WIDTH: u16 = {gauge_width};
pub const CONTENT_FILE: &str = "{content_file}";

// Theme colors (RGB tuples)
pub const ACCENT_FG: (u8, u8, u8) = {accent};
pub const HEADING_FG: (u8, u8, u8) = {heading};
pub const LINK_FG: (u8, u8, u8) = {link};
pub const GAUGE_FG: (u8, u8, u8) = {gauge};
"#,
        mouse_enabled = config.mouse_enabled,
        tick_rate_ms = config.tick_rate_ms,
        sidebar_width = config.sidebar_width,
        gauge_width = config.gauge_width,
        content_file = config.content_file,
        accent = fmt_rgb(config.accent),
        heading = fmt_rgb(config.heading),
        link = fmt_rgb(config.link),
        gauge = fmt_rgb(config.gauge),
    );

    fs::write(&dest_path, generated).expect("Failed to write compiled config");
}

struct CompiledConfig {
    mouse_enabled: bool,
    tick_rate_ms: u64,
    sidebar_width: u16,
    gauge_width: u16,
    content_file: String,
    accent: (u8, u8, u8),
    heading: (u8, u8, u8),
    link: (u8, u8, u8),
    gauge: (u8, u8, u8),
}

impl Default for CompiledConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            tick_rate_ms: 250,
            sidebar_width: 24,
            gauge_width: 24,
            content_file: "portfolio.yaml".to_string(),
            accent: (0, 102, 204),   // #0066cc
            heading: (51, 153, 255), // #3399ff
            link: (102, 178, 255),   // #66b2ff
            gauge: (0, 102, 204),    // #0066cc
        }
    }
}

fn parse_config(content: &str) -> CompiledConfig {
    let mut config = CompiledConfig::default();

    // Simple YAML parsing (avoiding external dependencies in build script)
    let mut in_ui = false;
    let mut in_colors = false;

    for line in content.lines() {
        let trimmed = line.trim();

        // Track which section we're in
        if trimmed.starts_with("ui:") {
            in_ui = true;
            in_colors = false;
            continue;
        } else if trimmed.starts_with("colors:") {
            in_ui = false;
            in_colors = true;
            continue;
        }

        if let Some((key, value)) = parse_kv(trimmed) {
            if in_ui {
                match key {
                    "mouse_enabled" => config.mouse_enabled = parse_bool(value),
                    "tick_rate_ms" => config.tick_rate_ms = value.parse().unwrap_or(250),
                    "sidebar_width" => config.sidebar_width = value.parse().unwrap_or(24),
                    "gauge_width" => config.gauge_width = value.parse().unwrap_or(24),
                    "content_file" => {
                        config.content_file = value.trim_matches('"').to_string();
                    }
                    _ => {}
                }
            } else if in_colors {
                match key {
                    "accent" => config.accent = parse_hex_color(value),
                    "heading" => config.heading = parse_hex_color(value),
                    "link" => config.link = parse_hex_color(value),
                    "gauge" => config.gauge = parse_hex_color(value),
                    _ => {}
                }
            }
        }
    }

    config
}

fn parse_kv(line: &str) -> Option<(&str, &str)> {
    // Skip comments and empty lines
    if line.starts_with('#') || line.is_empty() {
        return None;
    }

    let colon_pos = line.find(':')?;
    let key = line[..colon_pos].trim();
    let mut value = line[colon_pos + 1..].trim();

    // Remove inline comments; a '#' preceded by a space is a comment, not a hex color
    if let Some(comment_pos) = value.find(" #") {
        value = value[..comment_pos].trim();
    }

    if value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn parse_bool(s: &str) -> bool {
    matches!(s.to_lowercase().as_str(), "true" | "yes" | "1")
}

fn parse_hex_color(s: &str) -> (u8, u8, u8) {
    let s = s.trim().trim_matches('"').trim_matches('\'');
    let s = s.strip_prefix('#').unwrap_or(s);

    if s.len() == 6 {
        if let (Ok(r), Ok(g), Ok(b)) = (
            u8::from_str_radix(&s[0..2], 16),
            u8::from_str_radix(&s[2..4], 16),
            u8::from_str_radix(&s[4..6], 16),
        ) {
            return (r, g, b);
        }
    }

    (0, 0, 0)
}

fn fmt_rgb(rgb: (u8, u8, u8)) -> String {
    format!("({}, {}, {})", rgb.0, rgb.1, rgb.2)
}
