use super::{ReferenceElement, ReferenceResolver};
use crate::{service::AnalysisChannel, vfs::DocumentRegistry};

impl<C, R> ReferenceResolver<'_, C, R>
where
    C: AnalysisChannel,
    R: DocumentRegistry,
{
    /// Whether `reference` is a defining occurrence.
    ///
    /// The service answers nothing when asked for the definition of a
    /// declaration, so an element that resolves to nothing counts as one.
    /// This also classifies broken or unresolvable references as
    /// declarations. A stricter rule would be `is_reference_to(e, e)`, which
    /// needs the service to return the declaration itself.
    pub async fn is_declaration(
        &self,
        reference: &ReferenceElement,
    ) -> bool {
        self.resolve(reference).await.is_none()
    }
}
