pub mod config;
pub mod document;
pub mod error;
pub mod reference;
pub mod service;
pub mod syntax;
pub mod text_pos;
pub mod vfs;

pub use config::BridgeSettings;
pub use document::{Document, DocumentStore};
pub use error::{ChannelError, ConfigError, UnsupportedOperation};
pub use reference::{Named, ReferenceElement, ReferenceResolver, Referencing, SelfIdentifying};
pub use service::{AnalysisChannel, JsonRpcChannel};
pub use syntax::{Element, SyntaxTree, are_equal};
pub use text_pos::{offset_to_position, position_to_offset};
pub use vfs::{DocumentRegistry, FileId, Vfs};
