//! Error code definitions for parser and loader diagnostics
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Structural errors (expected tokens)
//! - E02xx: Metadata errors
//! - E03xx: Icon errors
//! - E04xx: Document errors
//! - E05xx: Load errors

use std::fmt;

/// Error codes for DKF diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Structural errors
    // =========================================================================
    /// Expected a fixed token (brace or section keyword)
    E0101,

    // =========================================================================
    // E02xx: Metadata errors
    // =========================================================================
    /// Required metadata field missing or empty
    E0201,
    /// Metadata field outside its allowed values
    E0202,

    // =========================================================================
    // E03xx: Icon errors
    // =========================================================================
    /// Unknown icon property
    E0301,
    /// Icon property given twice
    E0302,
    /// Invalid view box
    E0303,
    /// Path data not quote-delimited
    E0304,
    /// Icon without view box or paths
    E0305,
    /// Icon name defined twice in one document
    E0306,

    // =========================================================================
    // E04xx: Document errors
    // =========================================================================
    /// Declared icon count disagrees with parsed icons
    E0401,

    // =========================================================================
    // E05xx: Load errors
    // =========================================================================
    /// Source retrieval failed
    E0501,
    /// Batch load invoked without sources
    E0502,
}

impl ErrorCode {
    /// Get the string representation of the error code (e.g., "E0201")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E0101 => "E0101",
            Self::E0201 => "E0201",
            Self::E0202 => "E0202",
            Self::E0301 => "E0301",
            Self::E0302 => "E0302",
            Self::E0303 => "E0303",
            Self::E0304 => "E0304",
            Self::E0305 => "E0305",
            Self::E0306 => "E0306",
            Self::E0401 => "E0401",
            Self::E0501 => "E0501",
            Self::E0502 => "E0502",
        }
    }

    /// Get a short description of the error category
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::E0101 => "structural error",
            Self::E0201 | Self::E0202 => "metadata error",
            Self::E0301
            | Self::E0302
            | Self::E0303
            | Self::E0304
            | Self::E0305
            | Self::E0306 => "icon error",
            Self::E0401 => "document error",
            Self::E0501 | Self::E0502 => "load error",
        }
    }

    /// Check if this error is raised while parsing (as opposed to loading)
    pub fn is_parse_error(&self) -> bool {
        !matches!(self, Self::E0501 | Self::E0502)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
