use super::{EditSurface, TextBuffer};
use crate::position::Position;

#[test]
fn test_line_access() {
    let buffer = TextBuffer::new("# Title\n## INBOX\n");

    assert_eq!(buffer.last_line(), 2);
    assert_eq!(buffer.line(1).as_deref(), Some("## INBOX"));
    assert_eq!(buffer.line(2).as_deref(), Some(""));
    assert_eq!(buffer.line(3), None);
}

#[test]
fn test_empty_buffer_has_one_line() {
    let buffer = TextBuffer::new("");

    assert_eq!(buffer.last_line(), 0);
    assert_eq!(buffer.line(0).as_deref(), Some(""));
}

#[test]
fn test_insert_at_end_of_line() {
    let mut buffer = TextBuffer::new("A\nB\nC");

    buffer.replace_range("\n### ", Position::new(1, 1));

    assert_eq!(buffer.as_str(), "A\nB\n### \nC");
}

#[test]
fn test_insert_mid_line_multibyte() {
    let mut buffer = TextBuffer::new("café au lait");

    buffer.replace_range("!", Position::new(0, 4));

    assert_eq!(buffer.as_str(), "café! au lait");
}

#[test]
fn test_insert_clamps_out_of_range() {
    let mut buffer = TextBuffer::new("one\ntwo");

    buffer.replace_range("!", Position::new(1, 99));
    buffer.replace_range("?", Position::new(42, 0));

    assert_eq!(buffer.as_str(), "one\n?two!");
}

#[test]
fn test_cursor_roundtrip() {
    let mut buffer = TextBuffer::new("text");
    assert_eq!(buffer.cursor(), Position::default());

    buffer.set_cursor(Position::new(0, 2));

    assert_eq!(buffer.cursor(), Position::new(0, 2));
}
