//! Coordinates into a text buffer and where the cursor lands after an insertion.
//!
//! Every operation in the engine speaks in (line, column) pairs rather than byte offsets,
//! because that is what an editor host consumes. Columns count `char`s, not bytes.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// A 0-indexed (line, column) coordinate into a text buffer.
pub struct Position {
    /// Line index, counting lines split on `'\n'`.
    pub line: usize,
    /// Character offset within the line.
    pub ch: usize,
}

impl Position {
    #[must_use]
    /// Shorthand constructor.
    pub const fn new(line: usize, ch: usize) -> Self {
        Self { line, ch }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// A located (or freshly created) heading.
pub struct HeadingInfo {
    /// End-of-line position of the heading's own line.
    pub pos: Position,
    /// ATX depth, the number of leading `#`.
    pub level: usize,
}

/// Works out where the cursor should sit after `fragment` was inserted at `insert_pos`.
///
/// Fragments always open with a newline, so the cursor goes on the line below the insertion
/// point. With `place_at_end` the column is one short of the fragment length (the leading
/// newline does not occupy a column on the new line). Otherwise the cursor goes right after
/// the `#` run and its separating space, or to column 0 when the fragment carries no heading
/// prefix.
#[must_use]
pub fn calculate_cursor_position(insert_pos: Position, fragment: &str, place_at_end: bool) -> Position {
    let ch = if place_at_end {
        fragment.chars().count().saturating_sub(1)
    } else {
        heading_prefix_len(fragment).map_or(0, |hashes| hashes + 1)
    };

    Position {
        line: insert_pos.line + 1,
        ch,
    }
}

/// Length of the `#` run at the start of `fragment` (after any newlines), if it is 1..=6 long
/// and followed by whitespace.
fn heading_prefix_len(fragment: &str) -> Option<usize> {
    let body = fragment.trim_start_matches('\n');
    let hashes = body.chars().take_while(|&c| c == '#').count();
    let followed_by_space = body[hashes..].chars().next().is_some_and(char::is_whitespace);

    ((1..=6).contains(&hashes) && followed_by_space).then_some(hashes)
}

#[cfg(test)]
#[path = "tests/position.rs"]
mod tests;
