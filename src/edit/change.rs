//! Change and edit values as they arrive from the client.

use crate::base::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One entry of a `textDocument/didChange` notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentChange {
    /// Replace the whole document.
    Full { text: String },
    /// Replace `range` with `text`.
    Incremental { range: Range, text: String },
}

impl ContentChange {
    pub fn full(text: impl Into<String>) -> Self {
        ContentChange::Full { text: text.into() }
    }

    pub fn incremental(range: Range, text: impl Into<String>) -> Self {
        ContentChange::Incremental {
            range,
            text: text.into(),
        }
    }

    /// Build a change from the wire shape, where a missing range means
    /// the whole document is replaced.
    pub fn from_parts(range: Option<Range>, text: impl Into<String>) -> Self {
        match range {
            Some(range) => Self::incremental(range, text),
            None => Self::full(text),
        }
    }

    /// The replacement text.
    pub fn text(&self) -> &str {
        match self {
            ContentChange::Full { text } | ContentChange::Incremental { text, .. } => text,
        }
    }

    pub fn range(&self) -> Option<Range> {
        match self {
            ContentChange::Full { .. } => None,
            ContentChange::Incremental { range, .. } => Some(*range),
        }
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        matches!(self, ContentChange::Full { .. })
    }
}

/// The `TextDocumentContentChangeEvent` wire struct.
///
/// A payload without `text` fails to deserialize; there is no way to
/// build a change of unknown shape.
#[cfg(feature = "serde")]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextDocumentContentChangeEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<Range>,
    pub text: String,
}

#[cfg(feature = "serde")]
impl From<TextDocumentContentChangeEvent> for ContentChange {
    fn from(event: TextDocumentContentChangeEvent) -> Self {
        ContentChange::from_parts(event.range, event.text)
    }
}

#[cfg(feature = "serde")]
impl From<ContentChange> for TextDocumentContentChangeEvent {
    fn from(change: ContentChange) -> Self {
        match change {
            ContentChange::Full { text } => Self { range: None, text },
            ContentChange::Incremental { range, text } => Self {
                range: Some(range),
                text,
            },
        }
    }
}

/// A replacement produced by a formatter or refactoring, applied as part
/// of a batch.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TextEdit {
    pub range: Range,
    pub new_text: String,
}

impl TextEdit {
    pub fn new(range: Range, new_text: impl Into<String>) -> Self {
        Self {
            range,
            new_text: new_text.into(),
        }
    }

    /// An edit whose range has its endpoints in order.
    pub fn well_formed(self) -> Self {
        Self {
            range: self.range.well_formed(),
            ..self
        }
    }
}
