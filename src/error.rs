//! Errors reported to the proxy layer.
//!
//! Out-of-range positions are never errors: they are repaired by range
//! normalization. What remains are caller contract violations.

use std::sync::Arc;

use text_size::TextSize;
use thiserror::Error;

/// A caller contract violation detected while synchronizing a document.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DocumentError {
    /// A batch edit starts before the end of an edit already applied.
    /// The whole batch is rejected.
    #[error("overlapping edit: starts at byte {start:?} but bytes up to {consumed:?} are already replaced")]
    OverlappingEdit { start: TextSize, consumed: TextSize },

    /// A change notification carried a version that does not advance the
    /// document under [`VersionPolicy::StrictlyIncreasing`](crate::VersionPolicy).
    #[error("stale version {received} (document is at version {current})")]
    StaleVersion { current: i32, received: i32 },

    /// A change was sent for a document that is not open.
    #[error("document not open: {uri}")]
    UnknownDocument { uri: Arc<str> },
}

pub type Result<T, E = DocumentError> = std::result::Result<T, E>;
