//! Applying a range-scoped change to a buffer and its line index.

use crate::base::{LineIndex, Range};

use super::normalize_range;

/// Replace `range` in `content` with `text`, keeping `index` in step.
///
/// The range is normalized against the current content first, so reversed
/// or out-of-bounds ranges are applied at the nearest valid position. Only
/// the line starts inside `text` are computed; the rest of the index is
/// shifted in place. Returns the range that was actually replaced.
pub fn apply_incremental(content: &mut String, index: &mut LineIndex, range: Range, text: &str) -> Range {
    let range = normalize_range(index, content, range);
    let start = index.offset_at(content, range.start);
    let end = index.offset_at(content, range.end);

    content.replace_range(usize::from(start)..usize::from(end), text);
    index.splice(start, end, text);

    range
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(start: &str, range: Range, text: &str) -> (String, LineIndex) {
        let mut content = start.to_string();
        let mut index = LineIndex::new(&content);
        apply_incremental(&mut content, &mut index, range, text);
        (content, index)
    }

    #[test]
    fn test_remove_line_substring() {
        let (content, index) = apply("abcdef", Range::from_coords(0, 2, 0, 3), "");
        assert_eq!(content, "abdef");
        assert_eq!(index, LineIndex::new(&content));
    }

    #[test]
    fn test_remove_part_of_two_lines() {
        let (content, index) = apply(
            "Line one\nLine two\nLine three",
            Range::from_coords(0, 4, 2, 4),
            "",
        );
        assert_eq!(content, "Line three");
        assert_eq!(index.line_count(), 1);
        assert_eq!(index, LineIndex::new(&content));
    }

    #[test]
    fn test_out_of_range_clamps_to_end_of_file() {
        let (content, index) = apply("a", Range::from_coords(200, 600, 300, 1200), "\nb");
        assert_eq!(content, "a\nb");
        assert_eq!(index, LineIndex::new(&content));
    }

    #[test]
    fn test_reversed_range_applies_as_ordered() {
        let (content, _) = apply("0\n1\n2", Range::from_coords(2, 0, 1, 0), "");
        assert_eq!(content, "0\n2");
    }

    #[test]
    fn test_returns_normalized_range() {
        let mut content = "abc".to_string();
        let mut index = LineIndex::new(&content);
        let applied = apply_incremental(&mut content, &mut index, Range::from_coords(4, 0, 0, 1), "");
        assert_eq!(applied, Range::from_coords(0, 1, 0, 3));
        assert_eq!(content, "a");
    }

    #[test]
    fn test_replace_spanning_lines_with_more_lines() {
        let (content, index) = apply(
            "function abc() {\n  console.log(\"hello, world!\");\n}",
            Range::from_coords(0, 0, 0, 16),
            "\n//hello\nfunction d(){",
        );
        assert_eq!(content, "\n//hello\nfunction d(){\n  console.log(\"hello, world!\");\n}");
        assert_eq!(index.line_count(), 5);
        assert_eq!(index, LineIndex::new(&content));
    }

    #[test]
    fn test_utf16_columns_splice_bytes() {
        // "𝄞" occupies columns 1..3 on the wire and bytes 1..5 in the buffer
        let (content, index) = apply("a𝄞b\nc", Range::from_coords(0, 1, 0, 3), "é\n");
        assert_eq!(content, "aé\nb\nc");
        assert_eq!(index, LineIndex::new(&content));
    }
}
