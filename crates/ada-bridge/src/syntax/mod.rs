pub mod cst;
pub mod cst_parser;
pub mod element;
pub mod kind;
pub mod lexer;

use std::sync::Arc;

use dashmap::DashMap;
use rowan::{TextSize, TokenAtOffset};

pub use element::{Element, are_equal};
pub use kind::SyntaxKind;

use crate::syntax::cst::SyntaxNode;
use crate::syntax::cst_parser::Parser;
use crate::vfs::FileId;

/// Immutable syntax snapshot for a parsed document.
///
/// Cloning is cheap and the snapshot is `Send + Sync`; red nodes are
/// materialized on demand from the green tree.
#[derive(Clone)]
pub struct SyntaxTree {
    green: rowan::GreenNode,
    source: Arc<str>,
}

impl SyntaxTree {
    pub fn parse(source: &str) -> Self {
        let parser = Parser::new(source);
        let green = parser.parse();
        Self {
            green,
            source: Arc::from(source),
        }
    }

    pub fn root(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether both handles point at the same parse.
    pub fn same_snapshot(
        &self,
        other: &SyntaxTree,
    ) -> bool {
        Arc::ptr_eq(&self.source, &other.source)
    }

    /// Leaf element whose range contains `offset`.
    ///
    /// At a boundary between two tokens the one starting at `offset` wins.
    /// Returns `None` at or past the end of the text.
    pub fn find_element_at(
        &self,
        file: &FileId,
        offset: usize,
    ) -> Option<Element> {
        let offset = TextSize::try_from(offset).ok()?;
        let root = self.root();
        if offset >= root.text_range().end() {
            return None;
        }
        let token = match root.token_at_offset(offset) {
            TokenAtOffset::None => return None,
            TokenAtOffset::Single(token) => token,
            TokenAtOffset::Between(_, right) => right,
        };
        Some(Element::new(file.clone(), self.clone(), token.kind(), token.text_range()))
    }
}

impl std::fmt::Debug for SyntaxTree {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{:#?}", self.root())
    }
}

/// Thread-safe store of parsed syntax trees for all open documents.
#[derive(Default)]
pub struct DocumentTrees {
    snapshots: DashMap<FileId, SyntaxTree>,
}

impl DocumentTrees {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full parse of a document, replacing any existing snapshot.
    pub fn parse_and_store(
        &self,
        file: &FileId,
        source: &str,
    ) {
        self.snapshots.insert(file.clone(), SyntaxTree::parse(source));
    }

    /// Get a cloned snapshot. No lock held after return.
    pub fn get(
        &self,
        file: &FileId,
    ) -> Option<SyntaxTree> {
        self.snapshots.get(file).map(|entry| entry.clone())
    }

    pub fn remove(
        &self,
        file: &FileId,
    ) {
        self.snapshots.remove(file);
    }
}

#[cfg(test)]
#[path = "../../tests/src/syntax/tree_tests.rs"]
mod tests;
