use page_analyzer_core::{FetchConfig, MAX_FETCH_REDIRECTS};

use crate::error::FetchError;

/// A page as received from the remote server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub status_code: u16,
    pub body: String,
}

/// Client for fetching tracked pages.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: reqwest::Client,
}

impl PageFetcher {
    /// Builds a fetcher with the configured timeout and user agent.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .redirect(reqwest::redirect::Policy::limited(MAX_FETCH_REDIRECTS))
            .build()
            .map_err(|e| FetchError::ClientInit(e.to_string()))?;
        Ok(Self { client })
    }

    /// GET `url` and return its status and decoded body.
    ///
    /// # Errors
    /// - [`FetchError::Timeout`] if no complete response arrived in time.
    /// - [`FetchError::HttpStatus`] for 4xx and 5xx responses.
    /// - [`FetchError::Network`] for DNS, connection and body read failures.
    pub async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8")
            .send()
            .await?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(FetchError::HttpStatus { code: status.as_u16() });
        }

        let body = response.text().await?;
        tracing::debug!(url, status = status.as_u16(), bytes = body.len(), "page fetched");
        Ok(FetchedPage { status_code: status.as_u16(), body })
    }
}
