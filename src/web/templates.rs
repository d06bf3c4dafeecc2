//! HTML templates for the browser UI.
//!
//! Templates are embedded at compile time using `include_str!`.

/// The single-page task list UI.
pub const INDEX_TEMPLATE: &str = include_str!("templates/index.html");
