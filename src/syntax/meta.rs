use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use smol_str::SmolStr;
use thiserror::Error;

/// Packaging mode declared by a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    /// The document carries a single icon
    Single,
    /// The document carries a package of icons
    Package,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Package => "package",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known [`Mode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mode `{0}`")]
pub struct UnknownMode(pub String);

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(Self::Single),
            "package" => Ok(Self::Package),
            other => Err(UnknownMode(other.to_string())),
        }
    }
}

/// The `@meta { ... }` block of a document.
///
/// Rebuilt from scratch on every successful parse. All required fields are
/// present and validated by construction; unrecognized keys are kept in
/// [`extra`](Self::extra) in source order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetadataBlock {
    pub format: String,
    /// Opaque version string
    pub version: String,
    /// The `type` field
    pub doc_type: String,
    pub mode: Mode,
    /// Number of icons the document declares
    pub icon_count: usize,
    pub extra: IndexMap<SmolStr, String>,
}

impl MetadataBlock {
    /// Look up an unrecognized metadata key.
    pub fn extra(&self, key: &str) -> Option<&str> {
        self.extra.get(key).map(String::as_str)
    }
}
