use std::{
    path::{Path, PathBuf},
    sync::RwLock,
};

use tower_lsp::lsp_types::{TextDocumentContentChangeEvent, Url};
use tracing::debug;

use super::{FileId, normalized_path};
use crate::{
    document::{Document, DocumentStore},
    syntax::{DocumentTrees, SyntaxTree},
};

/// Lookups the resolver needs from the host's file and document model.
///
/// All three are read-only queries.
pub trait DocumentRegistry: Sync {
    /// Map a service URL to a local file, `None` when it is unknown.
    fn find_file_by_url(
        &self,
        url: &Url,
    ) -> Option<FileId>;

    fn document(
        &self,
        file: &FileId,
    ) -> Option<Document>;

    fn tree(
        &self,
        file: &FileId,
    ) -> Option<SyntaxTree>;
}

/// Registry of open documents and their trees, backed by the file system
/// for files that are not open.
#[derive(Default)]
pub struct Vfs {
    documents: DocumentStore,
    trees: DocumentTrees,
    roots: RwLock<Vec<PathBuf>>,
}

impl Vfs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict lookups to files under `roots`. An empty list lifts the restriction.
    pub fn set_roots(
        &self,
        roots: Vec<PathBuf>,
    ) {
        let roots = roots.iter().map(|root| normalized_path(root)).collect();
        if let Ok(mut guard) = self.roots.write() {
            *guard = roots;
        }
    }

    pub fn documents(&self) -> &DocumentStore {
        &self.documents
    }

    /// Open a document and parse it.
    pub fn open(
        &self,
        uri: Url,
        text: String,
        version: i32,
    ) -> FileId {
        let file = self.documents.open(uri, text.clone(), version);
        self.trees.parse_and_store(&file, &text);
        file
    }

    /// Replace a document's content and re-parse it.
    pub fn update(
        &self,
        uri: Url,
        text: String,
        version: i32,
    ) -> FileId {
        let file = self.documents.update(uri, text.clone(), version);
        self.trees.parse_and_store(&file, &text);
        file
    }

    /// Apply editor changes to an open document and re-parse it.
    pub fn apply_changes(
        &self,
        file: &FileId,
        changes: Vec<TextDocumentContentChangeEvent>,
        version: i32,
    ) -> bool {
        match self.documents.apply_changes(file, changes, version) {
            Some(text) => {
                self.trees.parse_and_store(file, &text);
                true
            },
            None => false,
        }
    }

    pub fn close(
        &self,
        file: &FileId,
    ) {
        self.documents.close(file);
        self.trees.remove(file);
    }

    fn is_within_roots(
        &self,
        path: &Path,
    ) -> bool {
        let Ok(roots) = self.roots.read() else {
            return false;
        };
        roots.is_empty() || roots.iter().any(|root| path.starts_with(root))
    }
}

impl DocumentRegistry for Vfs {
    fn find_file_by_url(
        &self,
        url: &Url,
    ) -> Option<FileId> {
        let Ok(path) = url.to_file_path() else {
            debug!("not a file URL: {url}");
            return None;
        };
        let file = FileId::from_path(&path);
        if !self.is_within_roots(file.as_path()) {
            debug!("{file} is outside the workspace roots");
            return None;
        }
        if self.documents.contains(&file) || file.as_path().is_file() {
            return Some(file);
        }
        debug!("{file} is neither open nor on disk");
        None
    }

    fn document(
        &self,
        file: &FileId,
    ) -> Option<Document> {
        if let Some(document) = self.documents.get(file) {
            return Some(document);
        }
        let uri = file.to_url()?;
        match std::fs::read_to_string(file.as_path()) {
            Ok(text) => Some(Document::new(uri, text, 0)),
            Err(error) => {
                debug!("cannot read {file}: {error}");
                None
            },
        }
    }

    fn tree(
        &self,
        file: &FileId,
    ) -> Option<SyntaxTree> {
        let document = self.document(file)?;
        match self.trees.get(file) {
            // A stored tree trails its document while an edit is in flight.
            Some(tree) if tree.source() == document.text => Some(tree),
            _ => Some(SyntaxTree::parse(&document.text)),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src/vfs/registry_tests.rs"]
mod tests;
