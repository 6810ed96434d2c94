// Utilities module
// Helper functions and tools

pub mod format;
pub mod text;

pub use format::human_size;
pub use text::wrap_text;
