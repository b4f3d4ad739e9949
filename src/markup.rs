//! Heading markup fragments ready to be spliced into a document.
//!
//! Every fragment starts with a newline so it can be inserted at the end of an existing line.

use chrono::{DateTime, TimeZone};

/// Level at which a missing section heading is created.
pub const DEFAULT_SECTION_LEVEL: usize = 2;

/// Format of the timestamp that opens a timeline entry.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

fn hashes(level: usize) -> String {
    "#".repeat(level)
}

#[must_use]
/// Builds a complete heading line, padded with a newline on both sides.
pub fn create_heading_text(label: &str, level: usize) -> String {
    format!("\n{} {label}\n", hashes(level))
}

#[must_use]
/// Builds an empty heading prefix one level below `parent_level`.
pub fn create_child_heading_text(parent_level: usize) -> String {
    format!("\n{} ", hashes(parent_level + 1))
}

/// Renders `at` as local wall-clock time to the minute, e.g. `2023-01-15 10:30`.
///
/// The offset carried by `at` decides what "local" means; no zone identifier is emitted.
#[must_use]
pub fn format_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String {
    at.naive_local().format(TIMESTAMP_FORMAT).to_string()
}

#[must_use]
/// Builds a child heading prefix one level below `parent_level`, opened with a timestamp.
pub fn create_timeline_heading_text<Tz: TimeZone>(parent_level: usize, at: &DateTime<Tz>) -> String {
    format!("\n{} {} ", hashes(parent_level + 1), format_timestamp(at))
}

#[cfg(test)]
#[path = "tests/markup.rs"]
mod tests;
