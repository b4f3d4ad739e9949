use super::{classify_line, find_subtree_insertion_point, locate_heading, LineKind};
use crate::position::{HeadingInfo, Position};

#[test]
fn test_classify_heading_levels() {
    for level in 1..=6 {
        let line = format!("{} Title", "#".repeat(level));
        assert_eq!(
            classify_line(&line),
            LineKind::Heading {
                level,
                text: "Title"
            },
            "level {level} should be a heading"
        );
    }
}

#[test]
fn test_classify_rejects_non_headings() {
    for line in ["", "plain text", "#tag", "####### Seven", "## ", "##", " ## Indented"] {
        assert_eq!(classify_line(line), LineKind::Plain, "{line:?} is not a heading");
    }
}

#[test]
fn test_classify_trims_heading_text() {
    assert_eq!(
        classify_line("##   INBOX  "),
        LineKind::Heading {
            level: 2,
            text: "INBOX"
        }
    );
}

#[test]
fn test_classify_whitespace_only_text() {
    assert_eq!(
        classify_line("##  "),
        LineKind::Heading { level: 2, text: "" }
    );
}

#[test]
fn test_classify_tab_separator() {
    assert_eq!(
        classify_line("#\tNotes"),
        LineKind::Heading {
            level: 1,
            text: "Notes"
        }
    );
}

#[test]
fn test_locate_heading() {
    let content = "# Title\n## INBOX\n### Item 1";

    let found = locate_heading(content, "INBOX");

    assert_eq!(
        found,
        Some(HeadingInfo {
            pos: Position::new(1, 8),
            level: 2
        })
    );
}

#[test]
fn test_locate_heading_not_found() {
    let content = "# Title\n## Other\n### Item 1";

    assert_eq!(locate_heading(content, "INBOX"), None);
}

#[test]
fn test_locate_heading_empty_document() {
    assert_eq!(locate_heading("", "INBOX"), None);
}

#[test]
fn test_locate_last_occurrence() {
    let content = "# Title\n## INBOX\n### Item 1\n## INBOX\n### Item 2";

    let found = locate_heading(content, "INBOX").unwrap();

    assert_eq!(found.pos, Position::new(3, 8));
    assert_eq!(found.level, 2);
}

#[test]
fn test_locate_exact_match_only() {
    let content = "# Title\n## INBOX HEADING\n### Item 1\n## INBOX\n### Item 2";

    let found = locate_heading(content, "INBOX").unwrap();

    assert_eq!(found.pos, Position::new(3, 8));
}

#[test]
fn test_locate_no_prefix_match() {
    let content = "## INBOX HEADING\n## MY INBOX";

    assert_eq!(locate_heading(content, "INBOX"), None);
}

#[test]
fn test_locate_trims_document_heading() {
    let content = "text\n###   TIMELINE   ";

    let found = locate_heading(content, "TIMELINE").unwrap();

    assert_eq!(found.level, 3);
    assert_eq!(found.pos, Position::new(1, "###   TIMELINE   ".len()));
}

#[test]
fn test_locate_label_compared_as_given() {
    let content = "## INBOX";

    assert_eq!(locate_heading(content, " INBOX"), None);
}

#[test]
fn test_locate_ignores_plain_lines_with_label() {
    let content = "INBOX\n#INBOX\n####### INBOX";

    assert_eq!(locate_heading(content, "INBOX"), None);
}

#[test]
fn test_insertion_point_end_of_section() {
    let content = "# Title\n## INBOX\n### Item 1\n### Item 2\n## Something Else";

    let pos = find_subtree_insertion_point(content, Position::new(1, 8), 2);

    assert_eq!(pos, Position::new(3, "### Item 2".len()));
}

#[test]
fn test_insertion_point_empty_section() {
    let content = "# Title\n## INBOX\n## Something Else";

    let pos = find_subtree_insertion_point(content, Position::new(1, 8), 2);

    assert_eq!(pos, Position::new(1, "## INBOX".len()));
}

#[test]
fn test_insertion_point_nested_levels() {
    let content =
        "# Title\n## INBOX\n### Level 3\n#### Level 4\n### Another Level 3\n## Something Else";

    let pos = find_subtree_insertion_point(content, Position::new(1, 8), 2);

    assert_eq!(pos, Position::new(4, "### Another Level 3".len()));
}

#[test]
fn test_insertion_point_after_deepest_content() {
    // The last line of the subtree is a grandchild's body, not a direct child.
    let content = "## INBOX\n### Child\n#### Grandchild\nbody text\n# Next";

    let pos = find_subtree_insertion_point(content, Position::new(0, 8), 2);

    assert_eq!(pos, Position::new(3, "body text".len()));
}

#[test]
fn test_insertion_point_last_section_in_document() {
    let content = "# Title\n## Other Section\n## INBOX\n### Item 1";

    let pos = find_subtree_insertion_point(content, Position::new(2, 8), 2);

    assert_eq!(pos, Position::new(3, "### Item 1".len()));
}

#[test]
fn test_insertion_point_counts_trailing_blank_line() {
    let content = "## INBOX\n### Item 1\n";

    let pos = find_subtree_insertion_point(content, Position::new(0, 8), 2);

    assert_eq!(pos, Position::new(2, 0));
}

#[test]
fn test_insertion_point_stops_at_ancestor() {
    let content = "# Top\n### TIMELINE\n#### Entry\n## Shallower";

    let pos = find_subtree_insertion_point(content, Position::new(1, 12), 3);

    assert_eq!(pos, Position::new(2, "#### Entry".len()));
}

#[test]
fn test_insertion_point_heading_past_end() {
    let pos = find_subtree_insertion_point("one line", Position::new(5, 0), 2);

    assert_eq!(pos, Position::new(5, 0));
}
