//! Diagnostic code definitions for export failures
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Compilation errors (module load, diagnostics)
//! - E02xx: Extraction errors (classification, filtering, descriptors)
//! - E03xx: Materialization errors (decode, file output)

use std::fmt;

/// Diagnostic codes for export failures
///
/// Each code represents a specific failure category, enabling filtering,
/// documentation, and tool integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportCode {
    // =========================================================================
    // E01xx: Compilation errors
    // =========================================================================
    /// The module's diagnostics contain error-severity entries
    E0101,

    // =========================================================================
    // E02xx: Extraction errors
    // =========================================================================
    /// A base-path filter matched no declared service
    E0201,
    /// A qualifying declaration carries no embedded schema descriptor
    E0202,

    // =========================================================================
    // E03xx: Materialization errors
    // =========================================================================
    /// A schema descriptor could not be decoded
    E0301,
    /// Writing an SDL file to the output directory failed
    E0302,
}

impl ExportCode {
    /// Get the string representation of the code (e.g., "E0201")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E0101 => "E0101",
            Self::E0201 => "E0201",
            Self::E0202 => "E0202",
            Self::E0301 => "E0301",
            Self::E0302 => "E0302",
        }
    }

    /// Get a short description of the code's category
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::E0101 => "compilation error",
            Self::E0201 | Self::E0202 => "extraction error",
            Self::E0301 | Self::E0302 => "materialization error",
        }
    }

    /// Get the default message template for this code
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::E0101 => "module compilation failed",
            Self::E0201 => "no matching service for requested base path",
            Self::E0202 => "missing schema descriptor",
            Self::E0301 => "schema descriptor decode failed",
            Self::E0302 => "failed to write SDL schema file",
        }
    }
}

impl fmt::Display for ExportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
