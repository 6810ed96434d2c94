// Application View
// Main application layout and rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{render_panel, render_sidebar, Styles};
use crate::core::App;

/// Render the entire application
pub fn render_app(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main content
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_main_content(f, app, chunks[1]);
    render_footer(f, chunks[2]);
}

/// Render the header bar with the page title
fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!("{} - Portfolio", app.portfolio.profile.name);
    let header = Paragraph::new(title)
        .style(Styles::header())
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

/// Render the sidebar and the selected panel
fn render_main_content(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(app.config.ui.sidebar_width),
            Constraint::Min(0),
        ])
        .split(area);

    render_sidebar(f, app.selected, chunks[0]);
    render_panel(
        f,
        app.body(),
        app.selected.title(),
        chunks[1],
        app.scroll_offset,
    );
}

/// Render the footer bar
fn render_footer(f: &mut Frame, area: Rect) {
    let help_text =
        "q: Quit | ↑/↓: Navigate | 1-6: Jump | PgUp/PgDn: Scroll | Home: Top | r: Reload";

    let footer = Paragraph::new(help_text)
        .style(Styles::footer())
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}
