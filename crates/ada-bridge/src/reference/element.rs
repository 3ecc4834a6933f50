use rowan::TextRange;

use crate::{
    syntax::{Element, SyntaxKind, SyntaxTree},
    vfs::FileId,
};

/// An identifier occurrence: a `Reference` node of some file's tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceElement {
    element: Element,
}

impl ReferenceElement {
    /// Wrap `element` if it names a reference, either the `Reference` node
    /// itself or the identifier token inside it.
    pub fn new(element: &Element) -> Option<Self> {
        let element = element.referent();
        (element.kind() == SyntaxKind::Reference).then_some(Self {
            element,
        })
    }

    /// The reference covering `offset`, if any.
    pub fn at(
        tree: &SyntaxTree,
        file: &FileId,
        offset: usize,
    ) -> Option<Self> {
        Self::new(&tree.find_element_at(file, offset)?)
    }

    /// Every reference of `tree`, in source order.
    pub fn all_in(
        tree: &SyntaxTree,
        file: &FileId,
    ) -> Vec<Self> {
        tree.root()
            .descendants()
            .filter(|node| node.kind() == SyntaxKind::Reference)
            .map(|node| Self {
                element: Element::new(file.clone(), tree.clone(), node.kind(), node.text_range()),
            })
            .collect()
    }

    pub fn file(&self) -> &FileId {
        self.element.file()
    }

    pub fn text(&self) -> &str {
        self.element.text()
    }

    pub fn text_range(&self) -> TextRange {
        self.element.text_range()
    }

    pub fn start_offset(&self) -> usize {
        self.element.start_offset()
    }

    pub fn as_element(&self) -> &Element {
        &self.element
    }
}

#[cfg(test)]
#[path = "../../tests/src/reference/element_tests.rs"]
mod tests;
