//! Capabilities of a reference element, split so a tree-node kind can
//! implement only the ones it has.

use rowan::TextRange;

use super::ReferenceElement;
use crate::{error::UnsupportedOperation, syntax::Element};

/// An element with a name.
pub trait Named {
    fn name(&self) -> &str;

    fn set_name(
        &self,
        name: &str,
    ) -> Result<Element, UnsupportedOperation>;
}

/// An element that points at a declaration elsewhere.
pub trait Referencing {
    /// The element the reference lives in.
    fn element(&self) -> &Element;

    /// The referring part, relative to [`element`](Self::element).
    fn range_in_element(&self) -> TextRange;

    fn canonical_text(&self) -> &str;

    fn handle_element_rename(
        &self,
        new_name: &str,
    ) -> Result<Element, UnsupportedOperation>;

    fn bind_to_element(
        &self,
        target: &Element,
    ) -> Result<Element, UnsupportedOperation>;

    /// Completion candidates offered at the reference.
    fn variants(&self) -> Vec<String> {
        Vec::new()
    }

    /// Soft references may fail to resolve without being an error.
    fn is_soft(&self) -> bool {
        false
    }

    fn can_navigate(&self) -> bool {
        true
    }
}

/// An element that is its own name identifier and its own only reference.
pub trait SelfIdentifying: Named {
    fn name_identifier(&self) -> &Self;

    fn references(&self) -> Vec<&dyn Referencing>;
}

impl Named for ReferenceElement {
    fn name(&self) -> &str {
        self.text()
    }

    fn set_name(
        &self,
        _name: &str,
    ) -> Result<Element, UnsupportedOperation> {
        Err(UnsupportedOperation::Rename)
    }
}

impl Referencing for ReferenceElement {
    fn element(&self) -> &Element {
        self.as_element()
    }

    fn range_in_element(&self) -> TextRange {
        TextRange::up_to(self.text_range().len())
    }

    // TODO: return the canonical spelling from the declaration instead of the source spelling.
    fn canonical_text(&self) -> &str {
        self.text()
    }

    fn handle_element_rename(
        &self,
        _new_name: &str,
    ) -> Result<Element, UnsupportedOperation> {
        Err(UnsupportedOperation::Rename)
    }

    fn bind_to_element(
        &self,
        _target: &Element,
    ) -> Result<Element, UnsupportedOperation> {
        Err(UnsupportedOperation::Bind)
    }
}

impl SelfIdentifying for ReferenceElement {
    fn name_identifier(&self) -> &Self {
        self
    }

    fn references(&self) -> Vec<&dyn Referencing> {
        vec![self as &dyn Referencing]
    }
}

#[cfg(test)]
#[path = "../../tests/src/reference/capabilities_tests.rs"]
mod tests;
