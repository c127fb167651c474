//! 文本切分模块
//!
//! 将输入拆分为标签片段和可翻译文本片段，保持原始顺序。

use crate::types::Segment;
use regex::Regex;
use std::sync::LazyLock;

/// 一个完整的标签：以 `<` 开头、`>` 结尾，内部不含 `<` 或 `>`。
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^<>]*>").expect("Invalid tag regex"));

/// 按标签边界切分文本
///
/// 标签与标签之间的文本成为文本片段。去除首尾空白后为空的片段会被丢弃，
/// 因此只由空白组成的片段不会出现在结果中。
///
/// # 示例
///
/// ```rust
/// use markup_translator::extract_segments;
///
/// let segments = extract_segments("<b>hi</b> there");
/// let parts: Vec<(&str, bool)> = segments
///     .iter()
///     .map(|s| (s.content.as_str(), s.is_tag))
///     .collect();
///
/// assert_eq!(
///     parts,
///     vec![("<b>", true), ("hi", false), ("</b>", true), (" there", false)]
/// );
/// ```
pub fn extract_segments(content: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last_end = 0;

    for tag in TAG_PATTERN.find_iter(content) {
        push_text(&mut segments, &content[last_end..tag.start()]);
        segments.push(Segment::tag(tag.as_str()));
        last_end = tag.end();
    }
    push_text(&mut segments, &content[last_end..]);

    segments
}

fn push_text(segments: &mut Vec<Segment>, text: &str) {
    if !text.trim().is_empty() {
        segments.push(Segment::text(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(content: &str) -> Vec<(String, bool)> {
        extract_segments(content)
            .into_iter()
            .map(|s| (s.content, s.is_tag))
            .collect()
    }

    #[test]
    fn test_plain_text_is_single_segment() {
        let text = "Привет, мир!\nКак дела?\n";
        assert_eq!(parts(text), vec![(text.to_string(), false)]);
    }

    #[test]
    fn test_tags_and_text_keep_order() {
        assert_eq!(
            parts("<b>hi</b> there"),
            vec![
                ("<b>".to_string(), true),
                ("hi".to_string(), false),
                ("</b>".to_string(), true),
                (" there".to_string(), false),
            ]
        );
    }

    #[test]
    fn test_whitespace_only_runs_are_dropped() {
        let html = "<ul>\n  <li>один</li>\n  <li>два</li>\n</ul>\n";
        let segments = extract_segments(html);

        assert!(segments.iter().all(|s| !s.content.trim().is_empty()));
        let joined: String = segments.iter().map(|s| s.content.as_str()).collect();
        assert_eq!(joined, "<ul><li>один</li><li>два</li></ul>");
    }

    #[test]
    fn test_tag_attributes_are_untouched() {
        let segments = extract_segments(r#"<a href="/x" title='y'>ссылка</a>"#);
        assert_eq!(segments[0], Segment::tag(r#"<a href="/x" title='y'>"#));
        assert_eq!(segments[1], Segment::text("ссылка"));
        assert_eq!(segments[2], Segment::tag("</a>"));
    }

    #[test]
    fn test_unmatched_angle_brackets_are_text() {
        assert_eq!(parts("a < b"), vec![("a < b".to_string(), false)]);
        assert_eq!(parts("a > b"), vec![("a > b".to_string(), false)]);
    }

    #[test]
    fn test_nested_open_bracket_is_not_a_tag() {
        assert_eq!(
            parts("<a<b>"),
            vec![("<a".to_string(), false), ("<b>".to_string(), true)]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_segments("").is_empty());
        assert!(extract_segments(" \n\t ").is_empty());
    }

    #[test]
    fn test_concatenation_reconstructs_input() {
        let html = "<p>Первый абзац.</p><p>Второй <i>абзац</i>.</p>";
        let joined: String = extract_segments(html)
            .iter()
            .map(|s| s.content.as_str())
            .collect();
        assert_eq!(joined, html);
    }
}
