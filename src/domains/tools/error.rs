//! Tool-specific error types.

use thiserror::Error;

use crate::core::client::ClientError;
use crate::core::codec::CodecError;

/// Errors that can occur inside a tool handler.
///
/// These never propagate out of a tool invocation: the route adapter
/// converts them into an error-shaped tool result. There are no retries —
/// one failed attempt is the final outcome for that invocation.
#[derive(Debug, Error)]
pub enum ToolError {
    /// A panel request failed (network, HTTP status, or undecodable body).
    #[error(transparent)]
    Client(#[from] ClientError),

    /// A base64 text field could not be decoded.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// The panel answered 2xx but the payload was missing an expected field.
    #[error("unexpected panel response: {0}")]
    UnexpectedResponse(String),
}

impl ToolError {
    /// Create a new "unexpected response" error.
    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::UnexpectedResponse(msg.into())
    }
}
