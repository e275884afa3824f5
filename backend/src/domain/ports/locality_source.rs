//! Driven port for searching the third-party locality service.
//!
//! The domain owns the search shape and the error contract; the reqwest
//! adapter in `outbound::locality_api` owns transport and payload quirks.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::Locality;

/// Search parameters forwarded verbatim to the upstream service.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocalitySearch {
    /// Free text: a postcode or a suburb name. Omitted upstream when empty.
    pub query: String,
    /// State code filter. Omitted upstream when empty.
    pub state: String,
}

impl LocalitySearch {
    pub fn new(query: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            state: state.into(),
        }
    }
}

define_port_error! {
    /// Errors surfaced while calling the locality service.
    pub enum LocalitySourceError {
        /// The request never produced a response.
        Transport { message: String } =>
            "locality service transport failed: {message}",
        /// The HTTP client gave up waiting.
        Timeout { message: String } =>
            "locality service timed out: {message}",
        /// The upstream rejected the bearer credential.
        Unauthorized { message: String } =>
            "locality service rejected credentials: {message}",
        /// The upstream answered with another non-success status.
        Status { message: String } =>
            "locality service returned an error: {message}",
        /// The response body could not be decoded.
        Decode { message: String } =>
            "locality service response decode failed: {message}",
    }
}

/// Port for searching localities.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocalitySource: Send + Sync {
    /// Return localities matching `search`, in upstream order. An empty list
    /// means the upstream found nothing.
    async fn fetch_localities(
        &self,
        search: &LocalitySearch,
    ) -> Result<Vec<Locality>, LocalitySourceError>;
}

/// Fixture implementation returning a fixed list for every search.
#[derive(Debug, Clone, Default)]
pub struct FixtureLocalitySource {
    localities: Vec<Locality>,
}

impl FixtureLocalitySource {
    pub fn new(localities: Vec<Locality>) -> Self {
        Self { localities }
    }
}

#[async_trait]
impl LocalitySource for FixtureLocalitySource {
    async fn fetch_localities(
        &self,
        _search: &LocalitySearch,
    ) -> Result<Vec<Locality>, LocalitySourceError> {
        Ok(self.localities.clone())
    }
}
