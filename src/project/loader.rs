//! Batch loading of documents into a registry.

use super::error::LoadError;
use super::fetch::Fetch;
use crate::registry::Registry;

/// Summary of a successful batch load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    /// Number of documents retrieved and parsed.
    pub sources: usize,
    /// Registry size after the last document.
    pub icons: usize,
}

/// Loads batches of documents through one fetcher.
#[derive(Debug, Clone, Default)]
pub struct DocumentLoader<F> {
    fetcher: F,
}

impl<F: Fetch> DocumentLoader<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Fetch each source in order and additively parse it into `registry`.
    ///
    /// Later sources win on icon name collision. The first failure aborts
    /// the batch; sources after it are not retrieved, and the registry
    /// keeps whatever the failing parse left behind under its
    /// [`FailurePolicy`](crate::registry::FailurePolicy). An empty batch is
    /// a usage error raised before anything is fetched.
    pub fn load_all<S: AsRef<str>>(
        &self,
        registry: &mut Registry,
        sources: &[S],
    ) -> Result<LoadReport, LoadError> {
        if sources.is_empty() {
            return Err(LoadError::Usage);
        }

        for source in sources {
            let source = source.as_ref();
            tracing::debug!(source, "fetching DKF document");

            let text = self.fetcher.fetch(source).inspect_err(|err| {
                tracing::warn!(source, error = %err, "DKF retrieval failed");
            })?;
            registry
                .parse_append(&text)
                .map_err(|error| LoadError::Parse {
                    location: source.to_string(),
                    error,
                })?;
        }

        let report = LoadReport {
            sources: sources.len(),
            icons: registry.len(),
        };
        tracing::info!(sources = report.sources, icons = report.icons, "DKF batch loaded");
        Ok(report)
    }
}

/// Load `sources` into `registry` through `fetcher`.
///
/// Shorthand for [`DocumentLoader::load_all`].
pub fn load_all<F: Fetch, S: AsRef<str>>(
    registry: &mut Registry,
    fetcher: F,
    sources: &[S],
) -> Result<LoadReport, LoadError> {
    DocumentLoader::new(fetcher).load_all(registry, sources)
}

/// Split a whitespace-separated source list, as written in a single
/// attribute or config value, into individual sources.
pub fn split_sources(value: &str) -> Vec<&str> {
    value.split_whitespace().collect()
}
