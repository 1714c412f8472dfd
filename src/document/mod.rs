//! Documents: the stateful side of synchronization.
//!
//! - [`TextDocument`] owns the text, version and line index of one file
//! - [`Document`] wraps it in a reader-writer lock for sharing
//! - [`DocumentStore`] tracks every open document by URI

mod shared;
mod store;
mod text_document;

pub use shared::Document;
pub use store::DocumentStore;
pub use text_document::TextDocument;
