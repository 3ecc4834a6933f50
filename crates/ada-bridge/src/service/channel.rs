use std::future::Future;

use tower_lsp::lsp_types::{GotoDefinitionResponse, Location, Position, Url};

use crate::error::ChannelError;

/// Request path to the external analysis service.
///
/// `definition` may suspend the caller for a full round trip; it must not
/// be awaited from a latency-sensitive path.
pub trait AnalysisChannel: Sync {
    /// Definition of the symbol at `position` in the document `uri`.
    ///
    /// `Ok(None)` means the service answered but knows no definition.
    fn definition(
        &self,
        uri: &Url,
        position: Position,
    ) -> impl Future<Output = Result<Option<Location>, ChannelError>> + Send;
}

/// Reduce a definition response to its first target.
pub fn first_location(response: GotoDefinitionResponse) -> Option<Location> {
    match response {
        GotoDefinitionResponse::Scalar(location) => Some(location),
        GotoDefinitionResponse::Array(locations) => locations.into_iter().next(),
        GotoDefinitionResponse::Link(links) => links.into_iter().next().map(|link| Location {
            uri: link.target_uri,
            range: link.target_selection_range,
        }),
    }
}
