//! Open-document bookkeeping for a language server proxy.

use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;
use rustc_hash::FxBuildHasher;

use crate::config::DocumentConfig;
use crate::edit::ContentChange;
use crate::error::{DocumentError, Result};

use super::Document;

/// The documents a client currently has open, keyed by URI.
///
/// Mirrors the `didOpen` / `didChange` / `didClose` lifecycle. The store
/// lock only guards the map; changes to a document are serialized by that
/// document's own lock, so edits to different files do not contend.
#[derive(Debug, Default)]
pub struct DocumentStore {
    inner: RwLock<StoreInner>,
    config: DocumentConfig,
}

#[derive(Debug, Default)]
struct StoreInner {
    /// URI → Document, in the order the documents were opened
    documents: IndexMap<Arc<str>, Arc<Document>, FxBuildHasher>,
}

impl DocumentStore {
    /// Create a new empty store with the default document configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose documents all use `config`.
    pub fn with_config(config: DocumentConfig) -> Self {
        Self {
            inner: RwLock::default(),
            config,
        }
    }

    pub fn config(&self) -> DocumentConfig {
        self.config
    }

    /// Open a document.
    ///
    /// Opening a URI that is already open replaces the document.
    pub fn open(&self, uri: impl Into<Arc<str>>, version: i32, text: impl Into<String>) -> Arc<Document> {
        let uri = uri.into();
        let document = Arc::new(Document::with_config(version, text, self.config));

        let previous = self
            .inner
            .write()
            .documents
            .insert(Arc::clone(&uri), Arc::clone(&document));

        tracing::debug!(%uri, version, reopened = previous.is_some(), "document opened");
        document
    }

    /// Apply a change notification to an open document and return its new version.
    pub fn change(&self, uri: &str, version: i32, changes: &[ContentChange]) -> Result<i32> {
        let document = self.get(uri).ok_or_else(|| {
            tracing::warn!(uri, version, "change for a document that is not open");
            DocumentError::UnknownDocument { uri: uri.into() }
        })?;

        document.update(changes, version)?;
        Ok(version)
    }

    /// Close a document, returning it if it was open.
    pub fn close(&self, uri: &str) -> Option<Arc<Document>> {
        let removed = self.inner.write().documents.shift_remove(uri);
        tracing::debug!(uri, found = removed.is_some(), "document closed");
        removed
    }

    /// Get an open document.
    pub fn get(&self, uri: &str) -> Option<Arc<Document>> {
        self.inner.read().documents.get(uri).cloned()
    }

    /// Check if a document is open.
    pub fn contains(&self, uri: &str) -> bool {
        self.inner.read().documents.contains_key(uri)
    }

    /// URIs of all open documents, in the order they were opened.
    pub fn uris(&self) -> Vec<Arc<str>> {
        self.inner.read().documents.keys().cloned().collect()
    }

    /// Get the number of open documents.
    pub fn len(&self) -> usize {
        self.inner.read().documents.len()
    }

    /// Check if no document is open.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Range;

    #[test]
    fn test_open_change_close() {
        let store = DocumentStore::new();
        store.open("file:///a.templ", 1, "abc");

        let version = store
            .change(
                "file:///a.templ",
                2,
                &[ContentChange::incremental(Range::from_coords(0, 3, 0, 3), "d")],
            )
            .unwrap();
        assert_eq!(version, 2);
        assert_eq!(store.get("file:///a.templ").unwrap().text(), "abcd");

        let closed = store.close("file:///a.templ").unwrap();
        assert_eq!(closed.text(), "abcd");
        assert!(store.is_empty());
    }

    #[test]
    fn test_change_unknown_document() {
        let store = DocumentStore::new();
        let err = store.change("file:///missing.templ", 1, &[]).unwrap_err();
        assert_eq!(
            err,
            DocumentError::UnknownDocument {
                uri: "file:///missing.templ".into()
            }
        );
    }

    #[test]
    fn test_reopen_replaces_document() {
        let store = DocumentStore::new();
        store.open("file:///a.templ", 3, "old");
        store.open("file:///a.templ", 1, "new");

        assert_eq!(store.len(), 1);
        let doc = store.get("file:///a.templ").unwrap();
        assert_eq!(doc.text(), "new");
        assert_eq!(doc.version(), 1);
    }

    #[test]
    fn test_uris_in_open_order() {
        let store = DocumentStore::new();
        store.open("file:///b.templ", 1, "");
        store.open("file:///a.templ", 1, "");
        store.open("file:///c.templ", 1, "");
        store.close("file:///a.templ");

        let uris: Vec<_> = store.uris().iter().map(|u| u.to_string()).collect();
        assert_eq!(uris, vec!["file:///b.templ", "file:///c.templ"]);
        assert!(store.contains("file:///c.templ"));
        assert!(!store.contains("file:///a.templ"));
    }
}
