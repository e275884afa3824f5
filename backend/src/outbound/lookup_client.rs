//! HTTP client for a running validator server.
//!
//! Implements the [`LocalityLookup`] port by calling
//! `GET /api/v1/address/check` on another process, so the form can run apart
//! from the server that holds the upstream credential.

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::debug;

use crate::domain::ports::{CheckAddressRequest, LocalityLookup};
use crate::domain::{Error, LookupResult};

const CHECK_ADDRESS_PATH: &str = "api/v1/address/check";

/// Remote [`LocalityLookup`] backed by the validator server's query endpoint.
pub struct LocalityLookupClient {
    client: Client,
    check_url: Url,
}

impl LocalityLookupClient {
    /// Build a client for the server rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error when `base_url` cannot serve as a base or the reqwest
    /// client cannot be constructed.
    pub fn new(base_url: &Url) -> Result<Self, Error> {
        let mut base = base_url.clone();
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }
        let check_url = base
            .join(CHECK_ADDRESS_PATH)
            .map_err(|err| Error::invalid_request(format!("invalid validator server URL: {err}")))?;
        let client = Client::builder()
            .build()
            .map_err(|err| Error::internal(format!("failed to build HTTP client: {err}")))?;
        Ok(Self { client, check_url })
    }

    /// Fully resolved query endpoint.
    pub fn check_url(&self) -> &Url {
        &self.check_url
    }
}

#[async_trait]
impl LocalityLookup for LocalityLookupClient {
    async fn check_address(&self, request: &CheckAddressRequest) -> Result<LookupResult, Error> {
        let response = self
            .client
            .get(self.check_url.clone())
            .query(&[
                ("searchQuery", request.search_query.as_str()),
                ("state", request.state.as_str()),
            ])
            .send()
            .await
            .map_err(|err| Error::service_unavailable(format!("validator server unreachable: {err}")))?;

        let status = response.status();
        debug!(status = status.as_u16(), "validator server responded");
        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            return Err(serde_json::from_slice::<Error>(&body).unwrap_or_else(|_| {
                Error::service_unavailable(format!("validator server returned status {}", status.as_u16()))
            }));
        }

        response
            .json::<LookupResult>()
            .await
            .map_err(|err| Error::internal(format!("invalid validator server response: {err}")))
    }
}
