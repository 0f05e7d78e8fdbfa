// Question templates: keyword matching and template selection.
// Pure and synchronous; handlers are the only part that touches AppState.

pub mod catalog;
pub mod handlers;
pub mod matcher;
pub mod selector;
