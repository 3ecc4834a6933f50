//! Error types shared across the crate.

use std::path::PathBuf;

/// Tree mutations a reference refuses to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UnsupportedOperation {
    #[error("Rename not yet supported")]
    Rename,
    #[error("Bind not yet supported")]
    Bind,
}

/// Failures of the analysis service channel.
///
/// The resolver never surfaces these; they are logged and the resolution
/// degrades to "no result".
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    /// The peer sent something that is not a well-formed LSP message.
    #[error("protocol: {0}")]
    Protocol(String),

    /// The service answered with a JSON-RPC error object.
    #[error("service error: {0}")]
    Service(tower_lsp::jsonrpc::Error),

    /// The stream closed before the response arrived.
    #[error("channel closed")]
    Closed,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
}
