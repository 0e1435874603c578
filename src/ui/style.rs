use console::style;
use std::fmt::Display;

const SEPARATOR_WIDTH: usize = 60;

/// Green bold: published, granted, saved
pub fn success<D: Display>(text: D) -> String {
    style(text).green().bold().to_string()
}

/// Red bold: failed runs and rejected posts
pub fn failure<D: Display>(text: D) -> String {
    style(text).red().bold().to_string()
}

/// White bold: section headers
pub fn header<D: Display>(text: D) -> String {
    style(text).white().bold().to_string()
}

/// Dim: secondary text, raw diagnostics
pub fn dim<D: Display>(text: D) -> String {
    style(text).dim().to_string()
}

/// Yellow: warnings and skipped steps
pub fn warning<D: Display>(text: D) -> String {
    style(text).yellow().to_string()
}

/// Green: configured values, ids
pub fn value<D: Display>(text: D) -> String {
    style(text).green().to_string()
}

/// Cyan underlined: URLs
pub fn url<D: Display>(text: D) -> String {
    style(text).cyan().underlined().to_string()
}

/// Dim horizontal rule framing a generated draft.
pub fn separator() -> String {
    dim("-".repeat(SEPARATOR_WIDTH))
}
