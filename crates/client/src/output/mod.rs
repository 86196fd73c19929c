//! Output formatting functions.

pub mod json;
pub mod pretty;

use serde::Serialize;

use crate::cli::OutputFormat;

/// Renders `value` as JSON, or with `pretty` for human-readable output.
pub fn render<T, F>(value: &T, format: OutputFormat, pretty: F) -> String
where
    T: Serialize + ?Sized,
    F: FnOnce(&T) -> String,
{
    match format {
        OutputFormat::Json => json::format_json(value),
        OutputFormat::Pretty => pretty(value),
    }
}
