use dashmap::DashMap;
use tower_lsp::lsp_types::{TextDocumentContentChangeEvent, Url};

use super::Document;
use crate::vfs::FileId;

/// Thread-safe store of all open documents, keyed by file identity.
///
/// Uses `DashMap` internally so that all operations are safe to call
/// concurrently from any async task without external synchronisation.
/// Readers get owned snapshots, so no shard lock outlives a call.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: DashMap<FileId, Document>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open (register) a new document.
    pub fn open(
        &self,
        uri: Url,
        text: String,
        version: i32,
    ) -> FileId {
        let file = FileId::from_url(&uri);
        self.documents.insert(file.clone(), Document::new(uri, text, version));
        file
    }

    /// Replace the full content of a document, opening it if not tracked yet.
    pub fn update(
        &self,
        uri: Url,
        text: String,
        version: i32,
    ) -> FileId {
        let file = FileId::from_url(&uri);
        if let Some(mut doc) = self.documents.get_mut(&file) {
            doc.set_content(text, version);
        } else {
            self.documents.insert(file.clone(), Document::new(uri, text, version));
        }
        file
    }

    /// Apply incremental or full-content changes to an already-open document.
    ///
    /// Returns the new text, or `None` if the document is not open.
    pub fn apply_changes(
        &self,
        file: &FileId,
        changes: Vec<TextDocumentContentChangeEvent>,
        version: i32,
    ) -> Option<String> {
        let mut doc = self.documents.get_mut(file)?;
        doc.apply_changes(changes, version);
        Some(doc.text.clone())
    }

    /// Close (unregister) a document.
    pub fn close(
        &self,
        file: &FileId,
    ) {
        self.documents.remove(file);
    }

    pub fn contains(
        &self,
        file: &FileId,
    ) -> bool {
        self.documents.contains_key(file)
    }

    /// Return a clone of the full `Document`, if tracked.
    pub fn get(
        &self,
        file: &FileId,
    ) -> Option<Document> {
        self.documents.get(file).map(|r| r.value().clone())
    }
}

#[cfg(test)]
#[path = "../../tests/src/document/document_store_tests.rs"]
mod tests;
