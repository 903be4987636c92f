//! Terminal output: theme, progress lines, NDJSON events

pub mod json;
pub mod output;
pub mod theme;

pub use output::{ConsoleSink, JsonSink, UiContext};
