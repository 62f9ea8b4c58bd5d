//! Line classifier and bold-span splitter

use super::blocks::{DisplayBlock, Span};

const HEADING_PREFIXES: [(&str, u8); 3] = [("# ", 1), ("## ", 2), ("### ", 3)];
const LIST_PREFIXES: [&str; 2] = ["- ", "* "];
const BOLD_MARKER: &str = "**";

/// Render answer text into display blocks, one block per line.
///
/// # Examples
///
/// ```
/// use medinfo_domain::render::{render, DisplayBlock, Span};
///
/// let blocks = render("## ขั้นตอน\n- ข้อ 1\nกด **แรง** ๆ");
/// assert_eq!(blocks[0], DisplayBlock::heading(2, "ขั้นตอน"));
/// assert_eq!(blocks[1], DisplayBlock::list_item("ข้อ 1"));
/// assert_eq!(
///     blocks[2],
///     DisplayBlock::paragraph(vec![Span::plain("กด "), Span::bold("แรง"), Span::plain(" ๆ")])
/// );
/// ```
pub fn render(content: &str) -> Vec<DisplayBlock> {
    content.split('\n').map(classify_line).collect()
}

fn classify_line(line: &str) -> DisplayBlock {
    for (prefix, level) in HEADING_PREFIXES {
        if let Some(text) = line.strip_prefix(prefix) {
            return DisplayBlock::heading(level, text);
        }
    }

    for prefix in LIST_PREFIXES {
        if let Some(text) = line.strip_prefix(prefix) {
            return DisplayBlock::list_item(text);
        }
    }

    if line.trim().is_empty() {
        return DisplayBlock::LineBreak;
    }

    DisplayBlock::paragraph(split_bold(line))
}

/// Split a line into plain and bold spans.
///
/// Each `**` is paired with the nearest following `**` (leftmost, shortest
/// match). A marker with no partner stays in the plain text. Empty plain
/// runs between adjacent pairs are not emitted.
pub fn split_bold(line: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut rest = line;

    while let Some(open) = rest.find(BOLD_MARKER) {
        let inner = &rest[open + BOLD_MARKER.len()..];
        let Some(close) = inner.find(BOLD_MARKER) else {
            break;
        };

        push_plain(&mut spans, &rest[..open]);
        spans.push(Span::bold(&inner[..close]));
        rest = &inner[close + BOLD_MARKER.len()..];
    }

    push_plain(&mut spans, rest);
    spans
}

fn push_plain(spans: &mut Vec<Span>, text: &str) {
    if !text.is_empty() {
        spans.push(Span::plain(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_line_is_single_span() {
        let blocks = render("ดื่มน้ำมาก ๆ และพักผ่อน");
        assert_eq!(
            blocks,
            vec![DisplayBlock::paragraph(vec![Span::plain("ดื่มน้ำมาก ๆ และพักผ่อน")])]
        );
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(render("# A"), vec![DisplayBlock::heading(1, "A")]);
        assert_eq!(render("## Heading"), vec![DisplayBlock::heading(2, "Heading")]);
        assert_eq!(render("### C"), vec![DisplayBlock::heading(3, "C")]);
    }

    #[test]
    fn test_deeper_heading_is_paragraph() {
        assert_eq!(
            render("#### D"),
            vec![DisplayBlock::paragraph(vec![Span::plain("#### D")])]
        );
    }

    #[test]
    fn test_heading_needs_space() {
        assert_eq!(
            render("#hashtag"),
            vec![DisplayBlock::paragraph(vec![Span::plain("#hashtag")])]
        );
    }

    #[test]
    fn test_list_items_stay_independent() {
        assert_eq!(
            render("- one\n* two"),
            vec![DisplayBlock::list_item("one"), DisplayBlock::list_item("two")]
        );
    }

    #[test]
    fn test_list_item_keeps_inline_markers() {
        assert_eq!(render("- **bold**"), vec![DisplayBlock::list_item("**bold**")]);
    }

    #[test]
    fn test_blank_lines_are_breaks() {
        assert_eq!(
            render("a\n\n   \nb"),
            vec![
                DisplayBlock::paragraph(vec![Span::plain("a")]),
                DisplayBlock::LineBreak,
                DisplayBlock::LineBreak,
                DisplayBlock::paragraph(vec![Span::plain("b")]),
            ]
        );
    }

    #[test]
    fn test_empty_content_is_one_break() {
        assert_eq!(render(""), vec![DisplayBlock::LineBreak]);
    }

    #[test]
    fn test_bold_span_extraction() {
        assert_eq!(
            split_bold("A **B** C"),
            vec![Span::plain("A "), Span::bold("B"), Span::plain(" C")]
        );
    }

    #[test]
    fn test_multiple_bold_spans() {
        assert_eq!(
            split_bold("**x** and **y**"),
            vec![Span::bold("x"), Span::plain(" and "), Span::bold("y")]
        );
    }

    #[test]
    fn test_adjacent_bold_spans_have_no_empty_plain() {
        assert_eq!(split_bold("**a****b**"), vec![Span::bold("a"), Span::bold("b")]);
    }

    #[test]
    fn test_odd_marker_count_is_plain() {
        assert_eq!(split_bold("A ** B"), vec![Span::plain("A ** B")]);
    }

    #[test]
    fn test_trailing_unmatched_marker_kept() {
        assert_eq!(
            split_bold("**a** b **c"),
            vec![Span::bold("a"), Span::plain(" b **c")]
        );
    }

    #[test]
    fn test_shortest_match() {
        assert_eq!(split_bold("***a**"), vec![Span::bold("*a")]);
    }

    #[test]
    fn test_step_by_step_answer() {
        let blocks = render("## ขั้นตอน\n- ข้อ 1\n- ข้อ 2");
        assert_eq!(
            blocks,
            vec![
                DisplayBlock::heading(2, "ขั้นตอน"),
                DisplayBlock::list_item("ข้อ 1"),
                DisplayBlock::list_item("ข้อ 2"),
            ]
        );
    }
}
