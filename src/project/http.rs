//! HTTP retrieval of remote documents.

use std::time::Duration;

use reqwest::blocking::Client;

use super::error::RetrievalError;
use super::fetch::Fetch;

/// User agent sent with every request.
const USER_AGENT: &str = concat!("devkitty-base/", env!("CARGO_PKG_VERSION"));

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for [`HttpFetcher`].
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// Fetches sources as URLs with a blocking client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, RetrievalError> {
        Self::with_config(&HttpConfig::default())
    }

    pub fn with_config(config: &HttpConfig) -> Result<Self, RetrievalError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(RetrievalError::Client)?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, source: &str) -> Result<String, RetrievalError> {
        let http = |error| RetrievalError::Http {
            location: source.to_string(),
            error,
        };

        let response = self.client.get(source).send().map_err(http)?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(source, status = %status, "DKF request failed");
            return Err(RetrievalError::Status {
                location: source.to_string(),
                status: status.as_u16(),
            });
        }
        response.text().map_err(http)
    }
}
