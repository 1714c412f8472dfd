//! Thread-safe façade over [`TextDocument`].

use std::fmt;

use parking_lot::RwLock;
use text_size::TextSize;

use crate::base::{Position, Range};
use crate::config::DocumentConfig;
use crate::edit::{ContentChange, TextEdit};
use crate::error::Result;

use super::TextDocument;

/// A [`TextDocument`] that can be shared between request handlers.
///
/// Changes take the write lock, so notifications for one document are
/// applied one at a time and in the order the calls are made. Queries take
/// the read lock and may run concurrently with each other, never with a
/// change in flight.
///
/// Queries return owned values since no borrow may outlive the lock. Use
/// [`snapshot`](Self::snapshot) to hand a consistent copy to a slow reader
/// such as a parser.
pub struct Document {
    inner: RwLock<TextDocument>,
}

impl Document {
    pub fn new(version: i32, content: impl Into<String>) -> Self {
        Self::from(TextDocument::new(version, content))
    }

    pub fn with_config(version: i32, content: impl Into<String>, config: DocumentConfig) -> Self {
        Self::from(TextDocument::with_config(version, content, config))
    }

    /// Apply the changes of one notification and record `version`.
    pub fn update(&self, changes: &[ContentChange], version: i32) -> Result<()> {
        self.inner.write().update(changes, version)
    }

    /// Apply a single change, keeping the version.
    pub fn apply(&self, change: &ContentChange) {
        self.inner.write().apply(change);
    }

    pub fn version(&self) -> i32 {
        self.inner.read().version()
    }

    pub fn text(&self) -> String {
        self.inner.read().text().to_owned()
    }

    pub fn get_text(&self, range: Option<Range>) -> String {
        self.inner.read().get_text(range).to_owned()
    }

    pub fn offset_at(&self, position: Position) -> TextSize {
        self.inner.read().offset_at(position)
    }

    pub fn position_at(&self, offset: TextSize) -> Position {
        self.inner.read().position_at(offset)
    }

    pub fn line_count(&self) -> usize {
        self.inner.read().line_count()
    }

    pub fn normalize(&self, range: Range) -> Range {
        self.inner.read().normalize(range)
    }

    /// See [`TextDocument::apply_edits`].
    pub fn apply_edits(&self, edits: &[TextEdit]) -> Result<String> {
        self.inner.read().apply_edits(edits)
    }

    /// A copy of the current state, detached from the lock.
    pub fn snapshot(&self) -> TextDocument {
        self.inner.read().clone()
    }

    /// Run `f` against the document under the read lock.
    pub fn with<R>(&self, f: impl FnOnce(&TextDocument) -> R) -> R {
        f(&self.inner.read())
    }
}

impl From<TextDocument> for Document {
    fn from(document: TextDocument) -> Self {
        Self {
            inner: RwLock::new(document),
        }
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("Document")
            .field("version", &inner.version())
            .field("len", &inner.text().len())
            .finish()
    }
}
