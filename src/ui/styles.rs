// UI Styles
// Color scheme and styling for the TUI

use ratatui::style::{Color, Modifier, Style};

/// Application color scheme and styles
pub struct Styles;

impl Styles {
    // === Header / Footer ===

    pub fn header() -> Style {
        let (r, g, b) = crate::core::app_config::compiled::ACCENT_FG;
        Style::default()
            .fg(Color::Rgb(r, g, b))
            .add_modifier(Modifier::BOLD)
    }

    pub fn footer() -> Style {
        Style::default().fg(Color::Yellow)
    }

    // === Sidebar ===

    pub fn sidebar_selected() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    pub fn sidebar_normal() -> Style {
        Style::default()
    }

    // === Panel Content ===
    // Colors are compiled from config.yaml

    pub fn heading() -> Style {
        let (r, g, b) = crate::core::app_config::compiled::HEADING_FG;
        Style::default()
            .fg(Color::Rgb(r, g, b))
            .add_modifier(Modifier::BOLD)
    }

    pub fn subheading() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn paragraph() -> Style {
        Style::default()
    }

    pub fn meta() -> Style {
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn link_label() -> Style {
        Style::default()
    }

    pub fn link_url() -> Style {
        let (r, g, b) = crate::core::app_config::compiled::LINK_FG;
        Style::default()
            .fg(Color::Rgb(r, g, b))
            .add_modifier(Modifier::UNDERLINED)
    }

    // === Skill Gauges ===

    pub fn gauge_filled() -> Style {
        let (r, g, b) = crate::core::app_config::compiled::GAUGE_FG;
        Style::default().fg(Color::Rgb(r, g, b))
    }

    pub fn gauge_empty() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    // === Image Placeholder / Errors ===

    pub fn image_placeholder() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn render_error() -> Style {
        Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD)
    }

    // === Border Styles ===

    pub fn border_focused() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn border_unfocused() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn title_focused() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title_unfocused() -> Style {
        Style::default().fg(Color::Gray)
    }
}
