//! Foundation types for the DevKitty toolchain.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`LineCol`], [`LineIndex`] - Line/column conversion
//! - Format constants (format identity, required metadata keys, file extension)
//!
//! This module has NO dependencies on other devkitty modules.

pub mod constants;
mod position;

pub use position::{LineCol, LineIndex};

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
