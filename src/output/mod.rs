//! Output module
//! Report structures and rendering to console, JSON, Markdown, and HTML

pub mod formatter;
pub mod report;
