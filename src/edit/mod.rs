//! Edits: turning client changes into new document text.
//!
//! - [`normalize_range`] repairs reversed and out-of-bounds ranges
//! - [`apply_incremental`] splices one change into a buffer and its line index
//! - [`compose_edits`] applies a batch of non-overlapping edits in one pass
//!
//! Everything here is a pure function of its inputs; the stateful wrapper
//! lives in [`crate::document`].

mod change;
mod compose;
mod normalize;
mod patch;

#[cfg(feature = "serde")]
pub use change::TextDocumentContentChangeEvent;
pub use change::{ContentChange, TextEdit};
pub use compose::compose_edits;
pub use normalize::normalize_range;
pub use patch::apply_incremental;
