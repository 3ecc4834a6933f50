use super::{ReferenceElement, ReferenceResolver};
use crate::{
    service::AnalysisChannel,
    syntax::{Element, are_equal},
    vfs::DocumentRegistry,
};

/// Ada identifiers are case-insensitive.
pub fn texts_match(
    a: &str,
    b: &str,
) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

impl<C, R> ReferenceResolver<'_, C, R>
where
    C: AnalysisChannel,
    R: DocumentRegistry,
{
    /// Whether `reference` denotes `candidate`.
    ///
    /// The text check runs first and saves the round trip when it fails;
    /// otherwise this performs a full [`resolve`](Self::resolve). Callers
    /// comparing against many candidates should resolve once instead.
    pub async fn is_reference_to(
        &self,
        reference: &ReferenceElement,
        candidate: &Element,
    ) -> bool {
        if !texts_match(reference.text(), candidate.text()) {
            return false;
        }
        self.resolve(reference).await.is_some_and(|resolved| are_equal(&resolved, candidate))
    }
}
