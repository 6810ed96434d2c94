// Application State
// Owns the current panel selection and the cached body for it

use anyhow::Result;
use std::path::PathBuf;

use super::AppConfig;
use crate::content::Portfolio;
use crate::panels::{render_current, PanelBody, PanelId};

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Application configuration (built-in defaults)
    pub config: AppConfig,

    /// The portfolio content, loaded once at startup
    pub portfolio: Portfolio,

    /// Path of the content override file, if one was loaded
    pub content_path: Option<PathBuf>,

    /// The currently selected panel - the only mutable selection state
    pub selected: PanelId,

    /// Scroll offset within the content area
    pub scroll_offset: usize,

    /// Body cached for the current selection; rebuilt on selection change
    body: PanelBody,
    body_for: Option<PanelId>,

    /// Whether the application should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new application instance
    /// Loads portfolio.yaml from the working directory when present,
    /// otherwise uses the built-in content
    pub fn new() -> Result<Self> {
        let config = AppConfig::default();

        let content_path = PathBuf::from(&config.content_file);
        let (portfolio, content_path) = if content_path.exists() {
            (Portfolio::load(&content_path)?, Some(content_path))
        } else {
            (Portfolio::default(), None)
        };

        Ok(Self {
            config,
            portfolio,
            content_path,
            selected: PanelId::About,
            scroll_offset: 0,
            body: PanelBody::new(),
            body_for: None,
            should_quit: false,
        })
    }

    /// Select a panel; a real change invalidates the cached body
    pub fn select(&mut self, panel: PanelId) {
        if panel != self.selected {
            self.selected = panel;
            self.invalidate_body();
        }
    }

    /// Move selection to the previous panel in the sidebar
    pub fn select_previous(&mut self) {
        self.select(self.selected.previous());
    }

    /// Move selection to the next panel in the sidebar
    pub fn select_next(&mut self) {
        self.select(self.selected.next());
    }

    /// Ensure the body is cached for the current selection
    /// Dispatches exactly one render pass per selection change
    pub fn ensure_body_cached(&mut self) {
        if self.body_for != Some(self.selected) {
            self.body = render_current(self.selected, &self.portfolio);
            self.body_for = Some(self.selected);
        }
    }

    /// The body for the current selection
    pub fn body(&self) -> &PanelBody {
        &self.body
    }

    /// Drop the cached body so the next pass rebuilds it
    fn invalidate_body(&mut self) {
        self.body_for = None;
        self.scroll_offset = 0;
    }

    /// Scroll content up
    pub fn scroll_up(&mut self, amount: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(amount);
    }

    /// Scroll content down; the view clamps to the body length
    pub fn scroll_down(&mut self, amount: usize) {
        self.scroll_offset += amount;
    }

    /// Jump back to the top of the content
    pub fn scroll_top(&mut self) {
        self.scroll_offset = 0;
    }

    /// Re-read the content override file and rebuild the current panel
    /// Keeps the previous content when the file fails to load
    pub fn reload(&mut self) -> Result<()> {
        if let Some(path) = &self.content_path {
            self.portfolio = Portfolio::load(path)?;
            self.invalidate_body();
        }
        Ok(())
    }

    /// Request application quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        App {
            config: AppConfig::default(),
            portfolio: Portfolio::default(),
            content_path: None,
            selected: PanelId::About,
            scroll_offset: 0,
            body: PanelBody::new(),
            body_for: None,
            should_quit: false,
        }
    }

    #[test]
    fn test_selection_change_rebuilds_body() {
        let mut app = test_app();
        app.ensure_body_cached();
        assert!(app.body().contains_text(&app.portfolio.profile.name));

        app.select(PanelId::Skills);
        app.ensure_body_cached();
        assert!(app.body().contains_text("Technical Skills"));
        assert!(!app.body().contains_text(&app.portfolio.profile.headline));
    }

    #[test]
    fn test_reselecting_same_panel_keeps_cache() {
        let mut app = test_app();
        app.select(PanelId::Projects);
        app.ensure_body_cached();
        app.scroll_down(4);

        // Selecting the already-current panel must not reset scroll
        app.select(PanelId::Projects);
        assert_eq!(app.scroll_offset, 4);

        app.select(PanelId::Education);
        assert_eq!(app.scroll_offset, 0);
    }

    #[test]
    fn test_scroll_saturates_at_top() {
        let mut app = test_app();
        app.scroll_down(3);
        app.scroll_up(10);
        assert_eq!(app.scroll_offset, 0);
    }
}
