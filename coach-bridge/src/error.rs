//! Bridge error types.
//!
//! Every failure mode has a named variant. No stringly-typed errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("malformed transcript: {reason}")]
    MalformedTranscript { reason: String },

    #[error("malformed transcript at conversation {index}: {reason}")]
    MalformedTranscriptAt { index: usize, reason: String },

    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for bridge operations.
pub type BridgeResult<T> = Result<T, BridgeError>;
