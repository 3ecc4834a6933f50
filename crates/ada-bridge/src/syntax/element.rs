use rowan::TextRange;

use crate::{
    syntax::{SyntaxTree, cst::SyntaxElement, kind::SyntaxKind},
    vfs::FileId,
};

/// A node or token of a file's syntax tree.
///
/// Stored as (file, snapshot, kind, range) rather than as a red node so that
/// elements can move between tasks.
#[derive(Clone)]
pub struct Element {
    file: FileId,
    tree: SyntaxTree,
    kind: SyntaxKind,
    range: TextRange,
}

impl Element {
    pub(crate) fn new(
        file: FileId,
        tree: SyntaxTree,
        kind: SyntaxKind,
        range: TextRange,
    ) -> Self {
        Self {
            file,
            tree,
            kind,
            range,
        }
    }

    pub fn file(&self) -> &FileId {
        &self.file
    }

    pub fn tree(&self) -> &SyntaxTree {
        &self.tree
    }

    pub fn kind(&self) -> SyntaxKind {
        self.kind
    }

    pub fn text_range(&self) -> TextRange {
        self.range
    }

    pub fn start_offset(&self) -> usize {
        self.range.start().into()
    }

    pub fn text(&self) -> &str {
        &self.tree.source()[self.range]
    }

    /// The red tree element this handle denotes.
    pub fn syntax(&self) -> Option<SyntaxElement> {
        let root = self.tree.root();
        if !root.text_range().contains_range(self.range) {
            return None;
        }
        let mut current = root.covering_element(self.range);
        loop {
            if current.kind() == self.kind && current.text_range() == self.range {
                return Some(current);
            }
            current = SyntaxElement::Node(current.parent()?);
        }
    }

    pub fn parent(&self) -> Option<Element> {
        let parent = self.syntax()?.parent()?;
        Some(Self::new(self.file.clone(), self.tree.clone(), parent.kind(), parent.text_range()))
    }

    /// The element that names the referent: an identifier token stands for
    /// its enclosing `Reference` node, anything else for itself.
    pub fn referent(&self) -> Element {
        if self.kind == SyntaxKind::Ident
            && let Some(parent) = self.parent()
            && parent.kind == SyntaxKind::Reference
        {
            return parent;
        }
        self.clone()
    }
}

impl PartialEq for Element {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.file == other.file && self.kind == other.kind && self.range == other.range && self.text() == other.text()
    }
}

impl Eq for Element {}

impl std::fmt::Debug for Element {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.debug_struct("Element")
            .field("file", &self.file)
            .field("kind", &self.kind)
            .field("range", &self.range)
            .field("text", &self.text())
            .finish()
    }
}

/// Tree-identity predicate of the host model.
///
/// Both sides are compared by referent. Two elements are equal when they are
/// the same node of the same parse, or when they sit in the same file at the
/// same range with the same kind and text (a re-parse of unchanged source).
pub fn are_equal(
    a: &Element,
    b: &Element,
) -> bool {
    let (a, b) = (a.referent(), b.referent());
    let same_node = a.tree.same_snapshot(&b.tree) && a.kind == b.kind && a.range == b.range;
    same_node || a == b
}

#[cfg(test)]
#[path = "../../tests/src/syntax/element_tests.rs"]
mod tests;
