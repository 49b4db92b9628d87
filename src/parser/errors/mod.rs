//! Parser error handling module
//!
//! This module provides structured error handling for the DKF parser:
//! - A tagged error kind per failure condition, carrying the offending
//!   key, token, or icon name
//! - Categorized error codes for filtering and documentation
//! - Context-aware messages for structural errors
//! - Byte ranges convertible to line/column for display

mod codes;
mod context;
mod error;

pub use codes::ErrorCode;
pub use context::ParseContext;
pub use error::{Found, IconPart, ParseError, ParseErrorKind, PathFault};
