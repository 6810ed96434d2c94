// UI module
// TUI components and views for the portfolio

pub mod app_view;
pub mod panel_view;
pub mod sidebar;
pub mod styles;

use anyhow::Result;
use crossterm::event;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::Stdout;
use std::time::Duration;

use crate::core::{App, AppEvent, EventHandler};

pub use app_view::render_app;
pub use panel_view::render_panel;
pub use sidebar::render_sidebar;
pub use styles::Styles;

/// Run the main application event loop
/// Strictly synchronous; each interaction completes its redraw before the
/// next input is read
pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    let tick_rate = Duration::from_millis(app.config.ui.tick_rate_ms);

    loop {
        // Dispatch a render pass if the selection changed
        app.ensure_body_cached();

        // Render the UI
        terminal.draw(|f| render_app(f, app))?;

        // Handle events
        if event::poll(tick_rate)? {
            let event = event::read()?;
            let app_event = EventHandler::handle(event);

            handle_event(app, app_event);
        }

        // Check if we should quit
        if app.should_quit {
            return Ok(());
        }
    }
}

/// Handle an application event
fn handle_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Quit => app.quit(),
        AppEvent::SelectPrevious => app.select_previous(),
        AppEvent::SelectNext => app.select_next(),
        AppEvent::SelectIndex(index) => {
            if let Some(panel) = crate::panels::PanelId::from_index(index) {
                app.select(panel);
            }
        }
        AppEvent::ScrollUp(amount) => app.scroll_up(amount),
        AppEvent::ScrollDown(amount) => app.scroll_down(amount),
        AppEvent::PageUp => app.scroll_up(10),
        AppEvent::PageDown => app.scroll_down(10),
        AppEvent::ScrollTop => app.scroll_top(),
        AppEvent::Reload => {
            // Keep showing the previous content if the file went bad
            let _ = app.reload();
        }
        AppEvent::None => {}
    }
}
