//! Document sources and batch loading.
//!
//! The registry only ever sees document text. Retrieval sits behind the
//! [`Fetch`] trait so the transport (local files, HTTP, an embedder's own
//! loader) can be swapped without touching the parser.

mod error;
mod fetch;
#[cfg(feature = "http")]
mod http;
mod loader;

pub use error::{LoadError, RetrievalError};
pub use fetch::{Fetch, FileFetcher};
#[cfg(feature = "http")]
pub use http::{HttpConfig, HttpFetcher};
pub use loader::{DocumentLoader, LoadReport, load_all, split_sources};
