//! Recursive-descent parser for DKF icon documents
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → `{`, `}` and whitespace-delimited words, with byte ranges
//!     ↓
//! Parser → one function per grammar production, single forward cursor
//!     ↓
//! Validation → metadata rules, icon completeness, declared icon count
//!     ↓
//! Document (MetadataBlock + IconRecords)
//! ```
//!
//! The grammar is LL(1): repetition loops stop at the closing `}` and no
//! production needs more than the current token to decide what to do.

#[allow(clippy::module_inception)]
mod parser;

pub mod errors;
pub mod keywords;
mod lexer;
mod validate;

pub use errors::{ErrorCode, Found, IconPart, ParseContext, ParseError, ParseErrorKind, PathFault};
pub use lexer::{Lexer, Token, TokenKind, tokenize};
pub use parser::parse;
