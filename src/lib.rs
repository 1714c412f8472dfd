//! # textsync-base
//!
//! Incremental text document model for language-server proxies.
//!
//! Holds the authoritative in-memory text of each open file, keeps a
//! line/character ↔ byte offset index up to date, and applies versioned
//! `textDocument/didChange` notifications exactly as an LSP client sends
//! them, whole-document replacements and range-scoped patches alike.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! document → TextDocument, synchronized Document, DocumentStore
//!   ↓
//! edit     → Range normalization, incremental patching, batch edits
//!   ↓
//! base     → Position, Range, PositionEncoding, LineIndex
//! ```
//!
//! ## Usage
//!
//! ```
//! use textsync::{ContentChange, Document, Range};
//!
//! let doc = Document::new(1, "a\nb\nc");
//! doc.update(&[ContentChange::incremental(Range::from_coords(1, 0, 2, 0), "")], 2)
//!     .unwrap();
//! assert_eq!(doc.text(), "a\nc");
//! ```

/// Foundation types: Position, Range, LineIndex
pub mod base;

/// Pure edit algorithms over a buffer and its line index
pub mod edit;

/// Stateful documents and the open-document store
pub mod document;

mod config;
mod error;

pub use base::{LineIndex, Position, PositionEncoding, Range, TextRange, TextSize};
pub use config::{DocumentConfig, VersionPolicy};
pub use document::{Document, DocumentStore, TextDocument};
#[cfg(feature = "serde")]
pub use edit::TextDocumentContentChangeEvent;
pub use edit::{ContentChange, TextEdit};
pub use error::{DocumentError, Result};
