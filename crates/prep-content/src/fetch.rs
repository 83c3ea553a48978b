//! Document transport.
//!
//! [`Fetcher`] abstracts retrieval of raw document text by content path so
//! the store can be exercised without a network. The production transport
//! is [`HttpFetcher`], a plain unauthenticated GET client against a static
//! file base URL.

use std::time::Duration;

use tracing::debug;
use ureq::Agent;

use crate::error::LoadError;

/// Retrieves raw document text by content path.
///
/// Paths are relative to the content root
/// (e.g. "spaces/java/oop/what-is-inheritance.json").
pub trait Fetcher: Send + Sync {
    /// Fetch the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::NotFound`] when the document does not exist,
    /// [`LoadError::Unavailable`] for other non-success statuses and
    /// timeouts, and [`LoadError::Network`] for transport failures.
    fn fetch(&self, path: &str) -> Result<String, LoadError>;
}

/// HTTP transport against a static content host.
pub struct HttpFetcher {
    agent: Agent,
    base_url: String,
}

impl HttpFetcher {
    /// Create a transport for a base URL.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Content root URL (e.g. "https://example.com/data")
    /// * `timeout` - Global timeout applied to every request
    #[must_use]
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, path: &str) -> Result<String, LoadError> {
        let url = self.url_for(path);
        debug!(%url, "fetching document");

        let response = match self
            .agent
            .get(&url)
            .header("Accept", "application/json")
            .call()
        {
            Ok(response) => response,
            Err(ureq::Error::Timeout(reason)) => {
                return Err(LoadError::Unavailable {
                    path: path.to_owned(),
                    detail: reason.to_string(),
                });
            }
            Err(err) => {
                return Err(LoadError::Network {
                    path: path.to_owned(),
                    detail: err.to_string(),
                });
            }
        };

        let status = response.status().as_u16();
        match status {
            200..=299 => {}
            404 => {
                return Err(LoadError::NotFound {
                    path: path.to_owned(),
                });
            }
            _ => {
                return Err(LoadError::Unavailable {
                    path: path.to_owned(),
                    detail: format!("status {status}"),
                });
            }
        }

        response
            .into_body()
            .read_to_string()
            .map_err(|err| LoadError::Network {
                path: path.to_owned(),
                detail: err.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let fetcher = HttpFetcher::new("https://example.com/data", Duration::from_secs(1));

        assert_eq!(
            fetcher.url_for("spaces-index.json"),
            "https://example.com/data/spaces-index.json"
        );
    }

    #[test]
    fn test_url_normalizes_slashes() {
        let fetcher = HttpFetcher::new("https://example.com/data/", Duration::from_secs(1));

        assert_eq!(
            fetcher.url_for("/spaces/java/q.json"),
            "https://example.com/data/spaces/java/q.json"
        );
    }
}
