//! Error types for the chat client.

use thiserror::Error;

/// Client-specific errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// Could not reach the server or the connection broke
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The server closed the connection
    #[error("Connection closed by server")]
    ConnectionClosed,

    /// An outbound event could not be encoded
    #[error("Failed to serialize event: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The outbound event queue has no receiver anymore
    #[error("Outbound channel closed")]
    ChannelClosed,
}
