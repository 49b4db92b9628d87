//! Icon registry: the current metadata block plus icon name -> record.
//!
//! ## Lifecycle
//!
//! A [`Registry`] starts empty. [`Registry::parse`] replaces all state with
//! one document; [`Registry::parse_append`] keeps previously loaded icons
//! and lets same-named icons from the new document win. Metadata is never
//! merged: the latest document's block always becomes current.
//!
//! Entries persist until an explicit [`clear`](Registry::clear) or overwrite.
//! There is no internal locking; one owner drives all loads. The
//! process-wide instance in [`global`] wraps a registry in a mutex for
//! callers that need ambient access.

mod config;
mod global;

pub use config::{FailurePolicy, RegistryConfig};
pub use global::global;

use smol_str::SmolStr;

use crate::parser::{self, ParseError};
use crate::syntax::{Document, IconMap, IconRecord, MetadataBlock};

/// In-memory store of parsed icons
#[derive(Debug, Clone, Default)]
pub struct Registry {
    meta: Option<MetadataBlock>,
    icons: IconMap,
    config: RegistryConfig,
}

impl Registry {
    /// Create an empty registry with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn get(&self, name: &str) -> Option<&IconRecord> {
        self.icons.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.icons.contains_key(name)
    }

    /// Metadata of the most recently loaded document.
    pub fn meta(&self) -> Option<&MetadataBlock> {
        self.meta.as_ref()
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Icon names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.icons.keys().map(SmolStr::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &IconRecord> {
        self.icons.values()
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    /// Insert or overwrite one icon under its own name.
    pub fn register(&mut self, icon: IconRecord) {
        self.icons.insert(icon.name().into(), icon);
    }

    /// Reset to the empty state with no metadata.
    pub fn clear(&mut self) {
        tracing::debug!(icons = self.icons.len(), "clearing icon registry");
        self.icons.clear();
        self.meta = None;
    }

    /// Merge icons into the registry. Incoming entries win on name collision;
    /// entries already present keep their position.
    pub fn merge(&mut self, icons: impl IntoIterator<Item = (SmolStr, IconRecord)>) {
        let before = self.icons.len();
        self.icons.extend(icons);
        tracing::debug!(before, after = self.icons.len(), "merged icons");
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Destructive load: replace all metadata and icons with `text`'s.
    ///
    /// On failure the registry is either left empty or left untouched,
    /// depending on [`FailurePolicy`]. It is never half-populated.
    pub fn parse(&mut self, text: &str) -> Result<(), ParseError> {
        if self.config.failure_policy == FailurePolicy::Clear {
            self.clear();
        }

        let document = parser::parse(text).inspect_err(|err| {
            tracing::warn!(code = %err.code(), error = %err, "DKF parse failed");
        })?;

        self.commit(document);
        Ok(())
    }

    /// Additive load: like [`parse`](Self::parse), but icons loaded earlier
    /// survive unless the new document redefines them.
    pub fn parse_append(&mut self, text: &str) -> Result<(), ParseError> {
        let snapshot = self.icons.clone();
        self.parse(text)?;

        let fresh = std::mem::replace(&mut self.icons, snapshot);
        self.merge(fresh);
        Ok(())
    }

    fn commit(&mut self, document: Document) {
        let (meta, icons) = document.into_parts();
        self.meta = Some(meta);
        self.icons = icons;
        tracing::info!(
            count = self.icons.len(),
            names = ?self.icons.keys().collect::<Vec<_>>(),
            "DevKitty icons loaded"
        );
    }
}
