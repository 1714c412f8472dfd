//! The unsynchronized document core.

use std::fmt;
use std::sync::OnceLock;

use text_size::TextSize;

use crate::base::{LineIndex, Position, Range};
use crate::config::DocumentConfig;
use crate::edit::{self, ContentChange, TextEdit};
use crate::error::{DocumentError, Result};

/// The authoritative text of one open file.
///
/// Holds the content, the last version the client reported, and a line
/// index derived from the content on first use. A full replace drops the
/// index; range changes patch it in place.
///
/// Mutation needs `&mut self`. To share a document between the request
/// handlers of a server, wrap it in a [`Document`](super::Document).
#[derive(Clone)]
pub struct TextDocument {
    version: i32,
    content: String,
    /// Derived from `content`; empty until first queried after a full replace.
    line_index: OnceLock<LineIndex>,
    config: DocumentConfig,
}

impl TextDocument {
    /// Create a document with the default configuration.
    pub fn new(version: i32, content: impl Into<String>) -> Self {
        Self::with_config(version, content, DocumentConfig::default())
    }

    pub fn with_config(version: i32, content: impl Into<String>, config: DocumentConfig) -> Self {
        Self {
            version,
            content: content.into(),
            line_index: OnceLock::new(),
            config,
        }
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    #[inline]
    pub fn version(&self) -> i32 {
        self.version
    }

    #[inline]
    pub fn config(&self) -> DocumentConfig {
        self.config
    }

    /// The full current text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.content
    }

    /// The line index for the current content, computing it if needed.
    pub fn line_index(&self) -> &LineIndex {
        self.line_index
            .get_or_init(|| LineIndex::with_encoding(&self.content, self.config.encoding))
    }

    /// The text covered by `range`, or the whole text for `None`.
    ///
    /// Endpoints are clamped like [`offset_at`](Self::offset_at); a reversed
    /// range yields the same text as its ordered form.
    pub fn get_text(&self, range: Option<Range>) -> &str {
        let Some(range) = range else {
            return &self.content;
        };
        let range = range.well_formed();
        let start = self.offset_at(range.start);
        let end = self.offset_at(range.end);
        &self.content[usize::from(start)..usize::from(end)]
    }

    /// Byte offset of `position`, clamped into the document.
    pub fn offset_at(&self, position: Position) -> TextSize {
        self.line_index().offset_at(&self.content, position)
    }

    /// Position of the byte `offset`, clamped into the document.
    pub fn position_at(&self, offset: TextSize) -> Position {
        self.line_index().position_at(&self.content, offset)
    }

    pub fn line_count(&self) -> usize {
        self.line_index().line_count()
    }

    /// `range` reordered and clamped to positions that exist in the document.
    pub fn normalize(&self, range: Range) -> Range {
        edit::normalize_range(self.line_index(), &self.content, range)
    }

    /// The text that results from applying a batch of edits.
    ///
    /// The document itself is not modified.
    pub fn apply_edits(&self, edits: &[TextEdit]) -> Result<String> {
        edit::compose_edits(self.line_index(), &self.content, edits)
    }

    // ========================================================================
    // MUTATIONS
    // ========================================================================

    /// Apply a single change without touching the version.
    pub fn apply(&mut self, change: &ContentChange) {
        match change {
            ContentChange::Full { text } => {
                self.content.clone_from(text);
                self.line_index = OnceLock::new();
            }
            ContentChange::Incremental { range, text } => {
                let mut index = self
                    .line_index
                    .take()
                    .unwrap_or_else(|| LineIndex::with_encoding(&self.content, self.config.encoding));
                let applied = edit::apply_incremental(&mut self.content, &mut index, *range, text);
                self.line_index = OnceLock::from(index);
                tracing::trace!(requested = %range, %applied, inserted = text.len(), "applied incremental change");
            }
        }
    }

    /// Apply the changes of one `didChange` notification in order, then
    /// record `version`.
    ///
    /// Under [`VersionPolicy::StrictlyIncreasing`](crate::VersionPolicy) a
    /// version that does not advance the document is rejected before any
    /// change is applied.
    pub fn update(&mut self, changes: &[ContentChange], version: i32) -> Result<()> {
        if !self.config.version_policy.accepts(self.version, version) {
            tracing::warn!(current = self.version, received = version, "rejecting stale document version");
            return Err(DocumentError::StaleVersion {
                current: self.version,
                received: version,
            });
        }

        for change in changes {
            self.apply(change);
        }
        self.version = version;

        tracing::debug!(version, changes = changes.len(), len = self.content.len(), "document updated");
        Ok(())
    }
}

impl fmt::Debug for TextDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextDocument")
            .field("version", &self.version)
            .field("len", &self.content.len())
            .field("indexed", &self.line_index.get().is_some())
            .finish()
    }
}

impl fmt::Display for TextDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}
