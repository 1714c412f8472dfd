//! Conversion between byte offsets and line/character positions.

use text_size::{TextRange, TextSize};

use super::{Position, PositionEncoding};

/// Index for converting between byte offsets and line/character positions.
///
/// Holds the byte offset of every line start. `line_starts[0]` is always 0,
/// the offsets are strictly increasing, and the last line runs to the end
/// of the buffer, so the line count is `line_starts.len()`.
///
/// A line ends after each `\n`, which covers `\r\n` as one terminator. A
/// lone `\r` does not end a line.
///
/// Columns are counted in the index's [`PositionEncoding`]; methods that
/// produce or consume columns take the buffer text so they can convert
/// within a single line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineIndex {
    /// Byte offset of the start of each line
    line_starts: Vec<TextSize>,
    /// Length of the indexed text in bytes
    len: TextSize,
    encoding: PositionEncoding,
}

impl LineIndex {
    /// Build a line index from source text, counting columns in UTF-16.
    pub fn new(text: &str) -> Self {
        Self::with_encoding(text, PositionEncoding::default())
    }

    /// Build a line index whose columns are counted in `encoding`.
    pub fn with_encoding(text: &str, encoding: PositionEncoding) -> Self {
        Self {
            line_starts: Self::compute_line_starts(text, true, TextSize::from(0)),
            len: TextSize::of(text),
            encoding,
        }
    }

    /// Scan `text` once and return the line starts it produces.
    ///
    /// With `at_line_start`, `base` itself opens the first line. Every
    /// produced offset is shifted by `base`, so the starts of an inserted
    /// chunk can be spliced straight into the index of the whole buffer.
    pub fn compute_line_starts(text: &str, at_line_start: bool, base: TextSize) -> Vec<TextSize> {
        let mut starts = Vec::new();
        if at_line_start {
            starts.push(base);
        }
        starts.extend(
            text.match_indices('\n')
                .map(|(offset, _)| base + TextSize::from(offset as u32 + 1)),
        );
        starts
    }

    /// The unit columns are counted in.
    #[inline]
    pub fn encoding(&self) -> PositionEncoding {
        self.encoding
    }

    /// Get the number of lines. Never zero.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Length in bytes of the indexed text.
    #[inline]
    pub fn len(&self) -> TextSize {
        self.len
    }

    /// Check if the indexed text is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == TextSize::from(0)
    }

    /// Byte offsets of every line start.
    pub fn line_starts(&self) -> &[TextSize] {
        &self.line_starts
    }

    /// Byte range of `line`, including its terminator.
    pub fn line_range(&self, line: usize) -> Option<TextRange> {
        let start = *self.line_starts.get(line)?;
        let end = self.line_starts.get(line + 1).copied().unwrap_or(self.len);
        Some(TextRange::new(start, end))
    }

    /// Length of `line` in encoding units, terminator included.
    pub fn line_len(&self, text: &str, line: usize) -> Option<u32> {
        let range = self.line_range(line)?;
        Some(self.encoding.text_len(&text[range]))
    }

    /// The line containing `offset`. Offsets past the end land on the last line.
    pub fn line_of(&self, offset: TextSize) -> usize {
        self.line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1)
    }

    /// Convert a position to a byte offset.
    ///
    /// The line is clamped to the last line and the character to the
    /// line's length (terminator included), so this never fails.
    pub fn offset_at(&self, text: &str, position: Position) -> TextSize {
        debug_assert_eq!(TextSize::of(text), self.len, "line index is stale");

        let line = (position.line as usize).min(self.line_count() - 1);
        let range = TextRange::new(
            self.line_starts[line],
            self.line_starts.get(line + 1).copied().unwrap_or(self.len),
        );
        let column = self.encoding.byte_offset(&text[range], position.character);
        range.start() + TextSize::from(column as u32)
    }

    /// Convert a byte offset to a position.
    ///
    /// Offsets past the end clamp to the end of the text; offsets inside a
    /// multi-byte character resolve to the start of that character.
    pub fn position_at(&self, text: &str, offset: TextSize) -> Position {
        debug_assert_eq!(TextSize::of(text), self.len, "line index is stale");

        let mut offset = usize::from(offset.min(self.len));
        while !text.is_char_boundary(offset) {
            offset -= 1;
        }
        let offset = TextSize::from(offset as u32);

        let line = self.line_of(offset);
        let line_start = self.line_starts[line];
        let character = self.encoding.text_len(&text[TextRange::new(line_start, offset)]);

        Position::new(line as u32, character)
    }

    /// Update the index after `start..end` was replaced with `inserted`.
    ///
    /// Only the line starts produced by `inserted` are computed; the starts
    /// that followed the replaced region are shifted by the length delta.
    /// `start` and `end` are byte offsets into the text *before* the edit.
    pub(crate) fn splice(&mut self, start: TextSize, end: TextSize, inserted: &str) {
        debug_assert!(start <= end && end <= self.len);

        // Lines are taken from the offsets, not from the caller's positions:
        // a column past a terminator addresses the next line.
        let start_line = self.line_of(start);
        let end_line = self.line_of(end);
        let added = Self::compute_line_starts(inserted, false, start);
        let removed = end_line - start_line;
        let first = start_line + 1;

        tracing::trace!(start_line, end_line, added = added.len(), removed, "splicing line index");

        if added.len() == removed {
            self.line_starts[first..first + added.len()].copy_from_slice(&added);
        } else {
            self.line_starts.splice(first..=end_line, added.iter().copied());
        }

        let removed_len = end - start;
        let inserted_len = TextSize::of(inserted);
        if inserted_len != removed_len {
            for line_start in &mut self.line_starts[first + added.len()..] {
                *line_start = *line_start + inserted_len - removed_len;
            }
        }
        self.len = self.len + inserted_len - removed_len;
    }
}
