//! Structured parse error types
//!
//! Every failure condition of the grammar has its own [`ParseErrorKind`]
//! variant carrying the offending key, token, or icon name, so callers can
//! branch on the kind instead of parsing message text.

use std::fmt;

use text_size::TextRange;
use thiserror::Error;

use super::codes::ErrorCode;
use super::context::ParseContext;
use crate::base::{LineCol, LineIndex};
use crate::parser::keywords::ICON_PROPERTIES;

/// What the parser found where it expected something else
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Found {
    Token(String),
    EndOfInput,
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(text) => write!(f, "`{}`", text),
            Self::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// Why a path entry is malformed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathFault {
    /// The entry does not start with a quote
    Unquoted,
    /// The input ended before the closing quote
    Unterminated,
}

impl fmt::Display for PathFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unquoted => f.write_str("must be wrapped in quotes"),
            Self::Unterminated => f.write_str("is missing its closing quote"),
        }
    }
}

/// The part an incomplete icon lacks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconPart {
    ViewBox,
    Paths,
}

impl fmt::Display for IconPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ViewBox => f.write_str("missing viewBox"),
            Self::Paths => f.write_str("has no paths"),
        }
    }
}

/// The failure conditions of a DKF parse
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A fixed token (brace or section keyword) was absent at the cursor.
    #[error("expected `{expected}`, found {found} {context}")]
    Structural {
        expected: String,
        found: Found,
        context: ParseContext,
    },

    /// A required metadata key is absent or has no value.
    #[error("metadata missing required field: {field}")]
    MissingField { field: &'static str },

    /// A metadata field holds a value outside its allowed set.
    #[error("invalid metadata {field}: `{value}` (expected {expected})")]
    InvalidValue {
        field: &'static str,
        value: String,
        expected: String,
    },

    /// An icon body contains a key the grammar does not recognize.
    #[error("unknown icon property `{property}` in icon \"{icon}\"")]
    UnknownProperty { icon: String, property: String },

    /// An icon property that may appear once appeared again.
    #[error("icon \"{icon}\" sets `{property}` more than once")]
    DuplicateProperty { icon: String, property: String },

    /// The view box components are not four finite numbers.
    #[error("icon \"{icon}\" has invalid viewBox `{value}`")]
    InvalidViewBox { icon: String, value: String },

    /// A path entry is not quote-delimited.
    #[error("path `{path}` in icon \"{icon}\" {fault}")]
    MalformedPath {
        icon: String,
        path: String,
        fault: PathFault,
    },

    /// An icon closed without a view box or without any path.
    #[error("icon \"{icon}\" {missing}")]
    IncompleteIcon { icon: String, missing: IconPart },

    /// An icon name appears twice in one document.
    #[error("icon \"{name}\" is defined more than once")]
    DuplicateIcon { name: String },

    /// The declared `iconCount` disagrees with the icons parsed.
    #[error("iconCount mismatch: meta={declared}, found={found}")]
    CountMismatch { declared: usize, found: usize },
}

impl ParseErrorKind {
    /// The error code for this kind
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Structural { .. } => ErrorCode::E0101,
            Self::MissingField { .. } => ErrorCode::E0201,
            Self::InvalidValue { .. } => ErrorCode::E0202,
            Self::UnknownProperty { .. } => ErrorCode::E0301,
            Self::DuplicateProperty { .. } => ErrorCode::E0302,
            Self::InvalidViewBox { .. } => ErrorCode::E0303,
            Self::MalformedPath { .. } => ErrorCode::E0304,
            Self::IncompleteIcon { .. } => ErrorCode::E0305,
            Self::DuplicateIcon { .. } => ErrorCode::E0306,
            Self::CountMismatch { .. } => ErrorCode::E0401,
        }
    }

    /// A suggestion for fixing the error, where one applies
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::UnknownProperty { .. } => Some(format!(
                "icon properties are: {}",
                ICON_PROPERTIES.join(", ")
            )),
            Self::MalformedPath {
                fault: PathFault::Unquoted,
                ..
            } => Some("wrap path data in double quotes".to_string()),
            Self::MalformedPath {
                fault: PathFault::Unterminated,
                ..
            } => Some("add the closing `\"`".to_string()),
            Self::IncompleteIcon {
                missing: IconPart::ViewBox,
                ..
            } => Some("add `viewBox: MIN_X MIN_Y WIDTH HEIGHT`".to_string()),
            Self::IncompleteIcon {
                missing: IconPart::Paths,
                ..
            } => Some("add a `paths { \"...\" }` block".to_string()),
            Self::Structural { context, .. } => {
                Some(format!("expected {}", context.expected_description()))
            }
            _ => None,
        }
    }
}

/// A parse failure with its location in the source
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct ParseError {
    kind: ParseErrorKind,
    range: TextRange,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, range: TextRange) -> Self {
        Self { kind, range }
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    pub fn into_kind(self) -> ParseErrorKind {
        self.kind
    }

    /// Byte range of the offending token(s)
    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// Position of the error in `source` (the text that was parsed)
    pub fn line_col(&self, source: &str) -> LineCol {
        LineIndex::new(source).line_col(self.range.start())
    }

    /// Format the error for display, e.g. `E0201 [3:1]: metadata missing ...`
    pub fn format(&self, source: &str) -> String {
        let mut result = format!("{} [{}]: {}", self.code(), self.line_col(source), self.kind);
        if let Some(hint) = self.kind.hint() {
            result.push_str(&format!("\n  hint: {}", hint));
        }
        result
    }
}
