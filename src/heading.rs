//! Heading-tree queries over a plain-text snapshot.
//!
//! A document is treated as a flat list of lines. Some of those lines are ATX headings, and
//! a heading "owns" every line after it until the next heading of equal or shallower depth.
//! Nothing here parses Markdown beyond that rule: fenced code, setext headings and front
//! matter are all just lines.

use crate::position::{HeadingInfo, Position};

/// Deepest ATX heading level.
pub const MAX_LEVEL: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// What a single line of the document is, as far as the heading tree cares.
pub enum LineKind<'a> {
    /// An ATX heading line.
    Heading {
        /// Number of leading `#`.
        level: usize,
        /// Heading text after the markers, trimmed.
        text: &'a str,
    },
    /// Body text, blank lines, and anything that only looks like a heading.
    Plain,
}

/// Decides whether `line` is a heading.
///
/// A heading is a run of one to six `#`, then a whitespace character, then at least one more
/// character. `#tag`, `####### seven` and a bare `## ` are all plain lines.
#[must_use]
pub fn classify_line(line: &str) -> LineKind<'_> {
    let level = line.chars().take_while(|&c| c == '#').count();
    if !(1..=MAX_LEVEL).contains(&level) {
        return LineKind::Plain;
    }

    let rest = &line[level..];
    let mut chars = rest.chars();
    match (chars.next(), chars.next()) {
        (Some(sep), Some(_)) if sep.is_whitespace() => LineKind::Heading {
            level,
            text: rest.trim(),
        },
        _ => LineKind::Plain,
    }
}

fn line_len(line: &str) -> usize {
    line.chars().count()
}

/// Finds the bottom-most heading whose text is exactly `label`.
///
/// The scan runs from the last line upwards, so when a document holds the same heading more
/// than once the most recent one wins. Heading text is trimmed before comparison; `label`
/// is compared as given.
#[must_use]
pub fn locate_heading(text: &str, label: &str) -> Option<HeadingInfo> {
    let lines: Vec<&str> = text.split('\n').collect();

    lines
        .iter()
        .enumerate()
        .rev()
        .find_map(|(i, line)| match classify_line(line) {
            LineKind::Heading { level, text: found } if found == label => Some(HeadingInfo {
                pos: Position {
                    line: i,
                    ch: line_len(line),
                },
                level,
            }),
            _ => None,
        })
}

/// Finds where a new child of the heading at `heading_pos` should go.
///
/// Every line after the heading belongs to its subtree until a heading of `level` or
/// shallower turns up; nested headings of any depth extend the subtree. The returned
/// position is the end of the subtree's last line, which is the heading line itself when
/// the section is empty.
#[must_use]
pub fn find_subtree_insertion_point(text: &str, heading_pos: Position, level: usize) -> Position {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut last_line_in_section = heading_pos.line;

    for (i, line) in lines.iter().enumerate().skip(heading_pos.line + 1) {
        if let LineKind::Heading { level: found, .. } = classify_line(line) {
            if found <= level {
                break;
            }
        }
        last_line_in_section = i;
    }

    Position {
        line: last_line_in_section,
        ch: lines.get(last_line_in_section).map_or(0, |line| line_len(line)),
    }
}

#[cfg(test)]
#[path = "tests/heading.rs"]
mod tests;
