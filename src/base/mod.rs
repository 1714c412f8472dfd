//! Foundation types for document synchronization.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`Position`], [`Range`] - Line/character coordinates as LSP sends them
//! - [`PositionEncoding`] - The unit a position's character is counted in
//! - [`LineIndex`] - Byte offset ↔ position conversion
//! - [`TextRange`], [`TextSize`] - Byte offsets
//!
//! This module has NO dependencies on other textsync modules.

mod encoding;
mod line_index;
mod position;

pub use encoding::PositionEncoding;
pub use line_index::LineIndex;
pub use position::{Position, Range};

// Re-export text-size types for convenience
pub use text_size::{self, TextRange, TextSize};
