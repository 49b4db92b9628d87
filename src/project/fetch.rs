//! Retrieval of document text.

use std::path::{Path, PathBuf};

use super::error::RetrievalError;
use crate::base::constants::DKF_EXT;

/// The one capability the loader needs from a transport.
pub trait Fetch {
    /// Retrieve the text of `source`.
    fn fetch(&self, source: &str) -> Result<String, RetrievalError>;
}

impl<F> Fetch for F
where
    F: Fn(&str) -> Result<String, RetrievalError>,
{
    fn fetch(&self, source: &str) -> Result<String, RetrievalError> {
        self(source)
    }
}

/// Reads sources as local file paths.
///
/// Relative sources resolve against the base directory when one is set.
/// A source without an extension is read as a `.dkf` file.
#[derive(Debug, Clone, Default)]
pub struct FileFetcher {
    base_dir: Option<PathBuf>,
}

impl FileFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_dir<P: Into<PathBuf>>(base_dir: P) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
        }
    }

    /// Resolve a source to the path it will be read from.
    pub fn resolve(&self, source: &str) -> PathBuf {
        let path = Path::new(source);
        let mut resolved = match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        };
        if resolved.extension().is_none() {
            resolved.set_extension(DKF_EXT);
        }
        resolved
    }
}

impl Fetch for FileFetcher {
    fn fetch(&self, source: &str) -> Result<String, RetrievalError> {
        let path = self.resolve(source);
        std::fs::read_to_string(&path).map_err(|error| RetrievalError::Io {
            location: path.display().to_string(),
            error,
        })
    }
}
