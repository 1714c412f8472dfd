//! Composing a batch of non-overlapping edits into new text.

use text_size::{TextRange, TextSize};

use crate::base::{LineIndex, Range};
use crate::error::{DocumentError, Result};

use super::TextEdit;

/// Apply `edits` to `text` in one left-to-right pass and return the result.
///
/// Edits may arrive in any order. Each range is reordered (not clamped),
/// then the edits are stably sorted by start position, so edits sharing a
/// start keep their input order. An edit that starts before the end of an
/// earlier one is an overlap and rejects the whole batch.
pub fn compose_edits(index: &LineIndex, text: &str, edits: &[TextEdit]) -> Result<String> {
    let mut ordered: Vec<(Range, &str)> = edits
        .iter()
        .map(|edit| (edit.range.well_formed(), edit.new_text.as_str()))
        .collect();
    ordered.sort_by(|(a, _), (b, _)| a.start.cmp(&b.start));

    let mut composed = String::with_capacity(text.len());
    let mut consumed = TextSize::from(0);

    for (range, new_text) in ordered {
        let start = index.offset_at(text, range.start);
        if start < consumed {
            tracing::warn!(%range, "rejecting batch with overlapping edits");
            return Err(DocumentError::OverlappingEdit { start, consumed });
        }
        composed.push_str(&text[TextRange::new(consumed, start)]);
        composed.push_str(new_text);
        consumed = index.offset_at(text, range.end);
    }
    composed.push_str(&text[usize::from(consumed)..]);

    Ok(composed)
}
