//! The two user-facing commands: add an entry to the inbox, add an entry to the timeline.
//!
//! Both follow the same sequence against an [`EditSurface`]: find the section heading (or
//! append it to the end of the document), find the end of its subtree, insert a child heading
//! prefix there and park the cursor where the user will type. Each step reads the surface's
//! current text, so the insertion point is always computed after the heading exists.

use crate::buffer::EditSurface;
use crate::config::Config;
use crate::heading::{find_subtree_insertion_point, locate_heading};
use crate::markup::{
    create_child_heading_text, create_heading_text, create_timeline_heading_text,
    DEFAULT_SECTION_LEVEL,
};
use crate::position::{calculate_cursor_position, HeadingInfo, Position};
use chrono::{DateTime, FixedOffset, Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// The two sections a document keeps.
pub enum Section {
    /// Undated entries, titled by the user.
    Inbox,
    /// Entries opened with a timestamp.
    Timeline,
}

impl Section {
    #[must_use]
    /// The heading label configured for this section.
    pub fn label(self, cfg: &Config) -> &str {
        match self {
            Self::Inbox => &cfg.inbox_heading,
            Self::Timeline => &cfg.timeline_heading,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inbox => f.write_str("inbox"),
            Self::Timeline => f.write_str("timeline"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// A single text insertion applied to a document.
pub struct Insertion {
    /// Where the text went.
    pub at: Position,
    /// The literal text inserted.
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Everything a command did to the document, in the order it did it.
pub struct EntryReport {
    /// Heading label the entry was filed under.
    pub section: String,
    /// The parent heading the entry went under.
    pub heading: HeadingInfo,
    /// Whether the parent heading had to be appended first.
    pub created_heading: bool,
    /// Where the child heading prefix was inserted.
    pub insert_at: Position,
    /// The child heading prefix.
    pub text: String,
    /// Final cursor position.
    pub cursor: Position,
    /// All insertions, replayable in order against the original document.
    pub insertions: Vec<Insertion>,
}

/// Finds the heading labelled `label`, appending a level 2 heading at the end of the document
/// if there is none.
///
/// A created heading is reported at column 0 of the line after the old last line, which is
/// where its text now sits.
pub fn find_or_create_heading<E: EditSurface>(
    surface: &mut E,
    label: &str,
) -> (HeadingInfo, Option<Insertion>) {
    if let Some(found) = locate_heading(&surface.value(), label) {
        debug!(label, line = found.pos.line, level = found.level, "found heading");
        return (found, None);
    }

    let text = create_heading_text(label, DEFAULT_SECTION_LEVEL);
    let last_line = surface.last_line();
    let at = Position {
        line: last_line,
        ch: surface
            .line(last_line)
            .map_or(0, |line| line.chars().count()),
    };
    surface.replace_range(&text, at);
    debug!(label, line = last_line + 1, "created heading at end of document");

    let heading = HeadingInfo {
        pos: Position {
            line: last_line + 1,
            ch: 0,
        },
        level: DEFAULT_SECTION_LEVEL,
    };
    (heading, Some(Insertion { at, text }))
}

fn add_child<E: EditSurface>(
    surface: &mut E,
    label: &str,
    child_text: impl FnOnce(usize) -> String,
    place_at_end: bool,
) -> EntryReport {
    let (heading, created) = find_or_create_heading(surface, label);
    let created_heading = created.is_some();
    let mut insertions: Vec<Insertion> = created.into_iter().collect();

    let insert_at = find_subtree_insertion_point(&surface.value(), heading.pos, heading.level);
    let text = child_text(heading.level);
    surface.replace_range(&text, insert_at);
    insertions.push(Insertion {
        at: insert_at,
        text: text.clone(),
    });

    let cursor = calculate_cursor_position(insert_at, &text, place_at_end);
    surface.set_cursor(cursor);
    debug!(label, line = insert_at.line, ?cursor, "inserted entry");

    EntryReport {
        section: label.to_string(),
        heading,
        created_heading,
        insert_at,
        text,
        cursor,
        insertions,
    }
}

/// Adds an untitled child heading at the end of the inbox section, cursor ready for a title.
pub fn add_to_inbox<E: EditSurface>(surface: &mut E, label: &str) -> EntryReport {
    add_child(surface, label, create_child_heading_text, false)
}

/// Adds a timestamped child heading at the end of the timeline section, cursor after the
/// timestamp.
pub fn add_to_timeline<E: EditSurface, Tz: TimeZone>(
    surface: &mut E,
    label: &str,
    at: &DateTime<Tz>,
) -> EntryReport {
    add_child(
        surface,
        label,
        |level| create_timeline_heading_text(level, at),
        true,
    )
}

/// The instant a timeline entry is stamped with, in the machine's local zone.
///
/// A given instant keeps its point in time but is shown as local wall-clock time, whatever
/// offset it was written with. Without one, the entry is stamped with now.
#[must_use]
pub fn timeline_instant(at: Option<DateTime<FixedOffset>>) -> DateTime<Local> {
    at.map_or_else(Local::now, |at| at.with_timezone(&Local))
}

/// Types `text` at the cursor and moves the cursor past it, as the user would.
pub fn type_at_cursor<E: EditSurface>(surface: &mut E, report: &mut EntryReport, text: &str) {
    if text.is_empty() {
        return;
    }
    let at = surface.cursor();
    surface.replace_range(text, at);
    let cursor = match text.rsplit_once('\n') {
        Some((head, tail)) => Position {
            line: at.line + head.matches('\n').count() + 1,
            ch: tail.chars().count(),
        },
        None => Position {
            line: at.line,
            ch: at.ch + text.chars().count(),
        },
    };
    surface.set_cursor(cursor);
    report.cursor = cursor;
    report.insertions.push(Insertion {
        at,
        text: text.to_string(),
    });
}

#[cfg(test)]
#[path = "tests/commands.rs"]
mod tests;
