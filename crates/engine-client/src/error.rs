//! Error types for the engine client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(test)]
mod tests;

/// Error reported by the engine's business logic inside a response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message} (code {code})")]
pub struct RpcError {
    /// Numeric error code assigned by the engine.
    #[serde(default)]
    pub code: i64,
    /// Human-readable error message.
    pub message: String,
}

/// Client error types.
///
/// Exactly one of these is returned by a failed call. The variants are listed
/// in the order the call pipeline can produce them.
#[derive(Debug, Error)]
pub enum Error {
    /// The parameter value could not be turned into positional arguments.
    #[error("unable to extract arguments: {0}")]
    Extraction(String),

    /// The request is malformed (e.g. empty method name).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The request envelope could not be encoded.
    #[error("unable to encode request: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Connecting, writing the request or reading the response failed.
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body is not a valid envelope or the result has an
    /// unexpected shape.
    #[error("unable to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The engine returned an application error.
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),

    /// Non-success HTTP status without an embedded application error.
    #[error("unexpected status code: {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// Invalid endpoint URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// Returns the application error if the engine reported one.
    #[must_use]
    pub fn as_rpc(&self) -> Option<&RpcError> {
        match self {
            Self::Rpc(err) => Some(err),
            _ => None,
        }
    }

    /// Whether the failure happened before anything was sent over the wire.
    #[must_use]
    pub fn is_pre_network(&self) -> bool {
        matches!(
            self,
            Self::Extraction(_)
                | Self::InvalidRequest(_)
                | Self::Serialization(_)
                | Self::InvalidUrl(_)
        )
    }
}
