//! Error type for schema descriptor decoding.

use thiserror::Error;

/// Errors reported by a [`SchemaCodec`](super::SchemaCodec) while decoding
/// a serialized schema descriptor.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The descriptor string is not valid for this codec.
    #[error("malformed schema descriptor: {0}")]
    Malformed(String),

    /// The descriptor was produced by an unsupported codec version.
    #[error("unsupported schema descriptor version: {0}")]
    UnsupportedVersion(String),
}

impl CodecError {
    /// Create a malformed-descriptor error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }

    /// Create an unsupported-version error.
    pub fn unsupported_version(version: impl Into<String>) -> Self {
        Self::UnsupportedVersion(version.into())
    }
}
