//! Client side of the analysis service protocol.

mod channel;
mod framing;
mod jsonrpc;
mod pending;

pub use channel::{AnalysisChannel, first_location};
pub use framing::{read_message, write_message};
pub use jsonrpc::JsonRpcChannel;
