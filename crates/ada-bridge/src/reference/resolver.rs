use std::{future::Future, time::Duration};

use tracing::{debug, warn};

use super::ReferenceElement;
use crate::{
    config::ServiceSettings,
    service::AnalysisChannel,
    syntax::Element,
    text_pos::{offset_to_position, position_to_offset},
    vfs::DocumentRegistry,
};

/// Resolves references by asking the analysis service for their definition.
///
/// Borrows its collaborators for the duration of its use and keeps no state
/// between calls: every resolution is a fresh round trip.
pub struct ReferenceResolver<'a, C, R> {
    channel: &'a C,
    registry: &'a R,
    timeout: Duration,
}

impl<'a, C, R> ReferenceResolver<'a, C, R>
where
    C: AnalysisChannel,
    R: DocumentRegistry,
{
    pub fn new(
        channel: &'a C,
        registry: &'a R,
    ) -> Self {
        Self {
            channel,
            registry,
            timeout: ServiceSettings::default().request_timeout(),
        }
    }

    pub fn with_timeout(
        mut self,
        timeout: Duration,
    ) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_settings(
        self,
        settings: &ServiceSettings,
    ) -> Self {
        self.with_timeout(settings.request_timeout())
    }

    /// The element `reference` is defined by, or `None` when the service
    /// knows no definition or any step of the round trip fails.
    ///
    /// Suspends until the service answers or the timeout elapses.
    pub async fn resolve(
        &self,
        reference: &ReferenceElement,
    ) -> Option<Element> {
        let Some(document) = self.registry.document(reference.file()) else {
            debug!("resolve `{}`: {} has no document", reference.text(), reference.file());
            return None;
        };
        // The reference's offset only means something in the text it was parsed from.
        if reference.as_element().tree().source() != document.text {
            debug!("resolve `{}`: {} changed since the reference was taken", reference.text(), reference.file());
            return None;
        }
        let position = offset_to_position(&document, reference.start_offset())?;

        let start = std::time::Instant::now();
        let request = self.channel.definition(&document.uri, position);
        let location = match tokio::time::timeout(self.timeout, request).await {
            Ok(Ok(Some(location))) => location,
            Ok(Ok(None)) => {
                debug!(
                    "resolve `{}` {}:{}:{} → none ({:?})",
                    reference.text(),
                    reference.file(),
                    position.line + 1,
                    position.character + 1,
                    start.elapsed(),
                );
                return None;
            },
            Ok(Err(error)) => {
                warn!("definition request for `{}` failed: {error}", reference.text());
                return None;
            },
            Err(_) => {
                debug!("definition request for `{}` timed out after {:?}", reference.text(), self.timeout);
                return None;
            },
        };
        debug!(
            "resolve `{}` → {}:{}:{} ({:?})",
            reference.text(),
            location.uri,
            location.range.start.line + 1,
            location.range.start.character + 1,
            start.elapsed(),
        );

        let Some(target) = self.registry.find_file_by_url(&location.uri) else {
            debug!("definition target {} is not a known file", location.uri);
            return None;
        };
        let (Some(target_document), Some(target_tree)) = (self.registry.document(&target), self.registry.tree(&target))
        else {
            debug!("definition target {target} has no document or tree");
            return None;
        };
        let Some(offset) = position_to_offset(&target_document, location.range.start) else {
            debug!(
                "definition position {}:{} is outside {target}",
                location.range.start.line, location.range.start.character
            );
            return None;
        };

        target_tree.find_element_at(&target, offset)
    }

    /// [`resolve`](Self::resolve), abandoned as soon as `cancelled` completes.
    pub async fn resolve_or_cancel<F>(
        &self,
        reference: &ReferenceElement,
        cancelled: F,
    ) -> Option<Element>
    where
        F: Future<Output = ()>,
    {
        tokio::select! {
            biased;
            () = cancelled => {
                debug!("resolution of `{}` cancelled", reference.text());
                None
            },
            resolved = self.resolve(reference) => resolved,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src/reference/resolver_tests.rs"]
mod tests;
