//! Range normalization.
//!
//! Editors occasionally send ranges computed against a stale view of the
//! document, especially during bursts of typing. Instead of rejecting them,
//! ranges are reordered and clamped to the nearest position that exists.

use crate::base::{LineIndex, Position, Range};

/// Return `range` with `start <= end` and both endpoints inside the buffer.
///
/// - A line past the last line clamps to the end of the last line.
/// - A character past the end of its line clamps to the line length
///   (terminator included).
pub fn normalize_range(index: &LineIndex, text: &str, range: Range) -> Range {
    let range = range.well_formed();
    Range::new(
        clamp_position(index, text, range.start),
        clamp_position(index, text, range.end),
    )
}

fn clamp_position(index: &LineIndex, text: &str, position: Position) -> Position {
    let last_line = index.line_count() - 1;
    let line = position.line as usize;

    if line > last_line {
        let len = index.line_len(text, last_line).unwrap_or(0);
        return Position::new(last_line as u32, len);
    }

    let len = index.line_len(text, line).unwrap_or(0);
    Position::new(position.line, position.character.min(len))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(text: &str, range: Range) -> Range {
        normalize_range(&LineIndex::new(text), text, range)
    }

    #[test]
    fn test_end_of_file_is_not_normalized() {
        let range = Range::from_coords(0, 11, 0, 11);
        assert_eq!(normalize("Hello World", range), range);
    }

    #[test]
    fn test_past_the_chars_is_normalized_to_end_of_line() {
        let range = Range::from_coords(0, 12, 0, 12);
        assert_eq!(normalize("Hello World", range), Range::from_coords(0, 11, 0, 11));
    }

    #[test]
    fn test_past_the_lines_is_normalized_to_end_of_file() {
        let range = Range::from_coords(2, 3, 2, 3);
        assert_eq!(normalize("Hello World", range), Range::from_coords(0, 11, 0, 11));
    }

    #[test]
    fn test_reversed_range_is_reordered() {
        let range = Range::from_coords(1, 2, 0, 1);
        assert_eq!(normalize("abc\ndef", range), Range::from_coords(0, 1, 1, 2));
    }

    #[test]
    fn test_character_clamps_to_line_length_including_terminator() {
        let range = Range::from_coords(0, 40, 1, 40);
        assert_eq!(normalize("abc\ndef", range), Range::from_coords(0, 4, 1, 3));
    }

    #[test]
    fn test_empty_document() {
        let range = Range::from_coords(5, 5, 9, 9);
        assert_eq!(normalize("", range), Range::from_coords(0, 0, 0, 0));
    }

    #[test]
    fn test_columns_are_counted_in_utf16() {
        // '𝄞' is two UTF-16 code units
        let range = Range::from_coords(0, 10, 0, 10);
        assert_eq!(normalize("a𝄞", range), Range::from_coords(0, 3, 0, 3));
    }
}
