// Portfolio TUI Library
// A terminal application that renders a personal portfolio as six
// navigable content panels

// Core infrastructure - application state, events, configuration
pub mod core;

// Content - static portfolio data and YAML loading
pub mod content;

// Panels - panel identifiers, registry, and render procedures
pub mod panels;

// Assets - local resource loading (profile photo)
pub mod assets;

// UI - TUI components and views
pub mod ui;

// Utilities - helper functions and tools
pub mod utilities;

// Re-export commonly used items for convenience
pub use content::Portfolio;
pub use core::{App, AppConfig};
pub use panels::{render_current, PanelBody, PanelId};
