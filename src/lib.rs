//! # devkitty-base
//!
//! Core library for the DevKitty Format (DKF): parsing icon documents,
//! holding the parsed icons in a registry, and batch loading documents
//! from files or URLs.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! project   → Document retrieval, batch loading
//!   ↓
//! registry  → Icon registry, failure policy, global instance
//!   ↓
//! parser    → Logos lexer, recursive-descent parser, error codes
//!   ↓
//! syntax    → Document model: metadata block, icon records, view boxes
//!   ↓
//! base      → Primitives (TextRange, LineIndex, format constants)
//! ```
//!
//! ## Example
//!
//! ```
//! use devkitty::Registry;
//!
//! let source = r#"
//! @meta { format devkitty version 1 type icon mode single iconCount 1 }
//! @icons {
//!   icon cat { viewBox: 0 0 24 24 paths { "M12 2 L2 22 H22 Z" } }
//! }
//! "#;
//!
//! let mut registry = Registry::new();
//! registry.parse(source)?;
//! assert_eq!(registry.get("cat").map(|icon| icon.paths().len()), Some(1));
//! # Ok::<(), devkitty::ParseError>(())
//! ```

// ============================================================================
// MODULES (dependency order: base → syntax → parser → registry → project)
// ============================================================================

/// Foundation types: TextRange, LineIndex, format constants
pub mod base;

/// Syntax: the parsed document model
pub mod syntax;

/// Parser: Logos lexer, recursive-descent parser, structured errors
pub mod parser;

/// Icon registry and its loading policies
pub mod registry;

/// Document sources and batch loading
pub mod project;

// Re-export commonly needed items
pub use parser::{ErrorCode, ParseError, ParseErrorKind, keywords, parse};
pub use project::{DocumentLoader, Fetch, FileFetcher, LoadError, LoadReport, load_all};
pub use registry::{FailurePolicy, Registry, RegistryConfig};
pub use syntax::{Document, IconRecord, MetadataBlock, Mode, ViewBox};

// Re-export foundation types
pub use base::{LineCol, LineIndex, TextRange, TextSize};
