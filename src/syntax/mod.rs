//! Syntax-level data model for DKF documents.
//!
//! The parser produces a [`Document`]: one [`MetadataBlock`] plus an
//! insertion-ordered map of validated [`IconRecord`]s. Records are
//! self-sufficient descriptions of one renderable icon.

mod document;
mod icon;
mod meta;

pub use document::{Document, IconMap};
pub use icon::{IconRecord, ViewBox};
pub use meta::{MetadataBlock, Mode, UnknownMode};
