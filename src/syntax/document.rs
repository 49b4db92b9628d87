use indexmap::IndexMap;
use smol_str::SmolStr;

use super::{IconRecord, MetadataBlock};

/// Icon name -> record, in insertion order.
pub type IconMap = IndexMap<SmolStr, IconRecord>;

/// A fully parsed and validated DKF document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub meta: MetadataBlock,
    pub icons: IconMap,
}

impl Document {
    pub fn new(meta: MetadataBlock, icons: IconMap) -> Self {
        Self { meta, icons }
    }

    pub fn get(&self, name: &str) -> Option<&IconRecord> {
        self.icons.get(name)
    }

    pub fn icon_count(&self) -> usize {
        self.icons.len()
    }

    pub fn into_parts(self) -> (MetadataBlock, IconMap) {
        (self.meta, self.icons)
    }
}
