// Event Handling
// Application event types and handler infrastructure

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

/// Application events that can be handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Quit the application
    Quit,

    /// Select the previous panel in the sidebar
    SelectPrevious,

    /// Select the next panel in the sidebar
    SelectNext,

    /// Jump directly to a panel by sidebar position
    SelectIndex(usize),

    /// Scroll content up by amount
    ScrollUp(usize),

    /// Scroll content down by amount
    ScrollDown(usize),

    /// Page up
    PageUp,

    /// Page down
    PageDown,

    /// Jump to the top of the content
    ScrollTop,

    /// Re-read the content override file
    Reload,

    /// No operation
    None,
}

/// Event handler that converts terminal events to application events
pub struct EventHandler;

impl EventHandler {
    /// Convert a crossterm event to an application event
    pub fn handle(event: Event) -> AppEvent {
        match event {
            Event::Key(key) => Self::handle_key(key),
            Event::Mouse(mouse) => Self::handle_mouse(mouse),
            _ => AppEvent::None,
        }
    }

    /// Handle keyboard events
    fn handle_key(key: KeyEvent) -> AppEvent {
        // Only handle key press events
        if key.kind != crossterm::event::KeyEventKind::Press {
            return AppEvent::None;
        }

        match key.code {
            // Quit
            KeyCode::Char('q') => AppEvent::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => AppEvent::Quit,
            KeyCode::Esc => AppEvent::Quit,

            // Panel navigation
            KeyCode::Up | KeyCode::Char('k') => AppEvent::SelectPrevious,
            KeyCode::Down | KeyCode::Char('j') => AppEvent::SelectNext,
            KeyCode::Char(c @ '1'..='6') => {
                AppEvent::SelectIndex(c as usize - '1' as usize)
            }

            // Content scrolling
            KeyCode::PageUp => AppEvent::PageUp,
            KeyCode::PageDown => AppEvent::PageDown,
            KeyCode::Home => AppEvent::ScrollTop,

            // Refresh content
            KeyCode::Char('r') => AppEvent::Reload,

            _ => AppEvent::None,
        }
    }

    /// Handle mouse events
    fn handle_mouse(mouse: MouseEvent) -> AppEvent {
        match mouse.kind {
            MouseEventKind::ScrollUp => AppEvent::ScrollUp(3),
            MouseEventKind::ScrollDown => AppEvent::ScrollDown(3),
            _ => AppEvent::None,
        }
    }
}
