//! Reqwest-backed locality source adapter.
//!
//! This adapter owns transport details only: query string construction,
//! bearer authentication, HTTP error mapping, and JSON decoding into domain
//! localities. No retries and no timeout beyond the client default.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use zeroize::Zeroizing;

use super::dto::LocalitySearchResponseDto;
use crate::domain::Locality;
use crate::domain::ports::{LocalitySearch, LocalitySource, LocalitySourceError};

const DEFAULT_USER_AGENT: &str = "address-validator/0.1";

/// Connection settings for the upstream locality service.
pub struct LocalityApiConfig {
    /// Search endpoint, e.g. `https://digitalapi.auspost.com.au/postcode/search.json`.
    pub endpoint: Url,
    /// Bearer credential sent with every request.
    pub bearer_token: Zeroizing<String>,
}

impl std::fmt::Debug for LocalityApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalityApiConfig")
            .field("endpoint", &self.endpoint.as_str())
            .field("bearer_token", &"<redacted>")
            .finish()
    }
}

/// Locality source performing one HTTP GET per search.
pub struct LocalityApiHttpSource {
    client: Client,
    endpoint: Url,
    bearer_token: Zeroizing<String>,
}

impl LocalityApiHttpSource {
    /// Build an adapter from explicit configuration.
    ///
    /// ```rust,ignore
    /// let source = LocalityApiHttpSource::new(config)?;
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(config: LocalityApiConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().user_agent(DEFAULT_USER_AGENT).build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint,
            bearer_token: config.bearer_token,
        })
    }
}

#[async_trait]
impl LocalitySource for LocalityApiHttpSource {
    async fn fetch_localities(
        &self,
        search: &LocalitySearch,
    ) -> Result<Vec<Locality>, LocalitySourceError> {
        let response = self
            .client
            .get(build_search_url(&self.endpoint, search))
            .bearer_auth(self.bearer_token.as_str())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        parse_localities(body.as_ref())
    }
}

fn build_search_url(endpoint: &Url, search: &LocalitySearch) -> Url {
    let mut url = endpoint.clone();
    {
        let mut pairs = url.query_pairs_mut();
        for (name, value) in [("q", &search.query), ("state", &search.state)] {
            if !value.is_empty() {
                pairs.append_pair(name, value);
            }
        }
    }
    if url.query() == Some("") {
        url.set_query(None);
    }
    url
}

fn parse_localities(body: &[u8]) -> Result<Vec<Locality>, LocalitySourceError> {
    let decoded: LocalitySearchResponseDto = serde_json::from_slice(body).map_err(|error| {
        LocalitySourceError::decode(format!("invalid locality JSON payload: {error}"))
    })?;
    Ok(decoded.into_domain_localities())
}

fn map_transport_error(error: reqwest::Error) -> LocalitySourceError {
    if error.is_timeout() {
        LocalitySourceError::timeout(error.to_string())
    } else {
        LocalitySourceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> LocalitySourceError {
    let body_preview = body_preview(body);
    let message = if body_preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), body_preview)
    };

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            LocalitySourceError::unauthorized(message)
        }
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            LocalitySourceError::timeout(message)
        }
        _ => LocalitySourceError::status(message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
        format!("{preview}...")
    } else {
        compact
    }
}

#[cfg(test)]
#[path = "http_source_tests.rs"]
mod tests;
