//! Typed failures for the export pipeline.

use thiserror::Error;

use crate::codec::CodecError;

use super::codes::ExportCode;

/// Errors that can abort an export run.
///
/// Every variant maps to a stable [`ExportCode`]; a declined overwrite is a
/// clean cancellation and deliberately not represented here.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The module failed to compile (error-severity diagnostics).
    #[error("module compilation failed: {0}")]
    Compilation(String),

    /// A base-path filter was supplied but matched no declared service.
    #[error(
        "no GraphQL service found for base path '{requested}'; available base paths: [{}]",
        .available.join(", ")
    )]
    NoMatchingService {
        /// The filter value as the caller supplied it.
        requested: String,
        /// Every base path seen during the walk, in encounter order.
        available: Vec<String>,
    },

    /// A qualifying declaration carries no embedded schema descriptor.
    #[error("declaration '{0}' does not carry an embedded schema descriptor")]
    MissingSchema(String),

    /// A schema descriptor could not be decoded into a structured schema.
    #[error("failed to decode schema descriptor for service '{name}'")]
    Decode {
        /// Logical name of the offending service.
        name: String,
        #[source]
        source: CodecError,
    },

    /// IO error while probing or writing the output directory.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExportError {
    /// Create a compilation error.
    pub fn compilation(message: impl Into<String>) -> Self {
        Self::Compilation(message.into())
    }

    /// Create a no-matching-service error.
    pub fn no_matching_service(requested: impl Into<String>, available: Vec<String>) -> Self {
        Self::NoMatchingService {
            requested: requested.into(),
            available,
        }
    }

    /// Create a missing-descriptor error.
    pub fn missing_schema(name: impl Into<String>) -> Self {
        Self::MissingSchema(name.into())
    }

    /// Create a decode error for the named service.
    pub fn decode(name: impl Into<String>, source: CodecError) -> Self {
        Self::Decode {
            name: name.into(),
            source,
        }
    }

    /// The diagnostic code for this failure.
    pub fn code(&self) -> ExportCode {
        match self {
            Self::Compilation(_) => ExportCode::E0101,
            Self::NoMatchingService { .. } => ExportCode::E0201,
            Self::MissingSchema(_) => ExportCode::E0202,
            Self::Decode { .. } => ExportCode::E0301,
            Self::Io(_) => ExportCode::E0302,
        }
    }
}
