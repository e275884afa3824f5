//! Driving port behind the `checkAddress` query.
//!
//! The form service depends on this capability rather than on a concrete
//! proxy, so the same reconciliation runs in-process (server side) and over
//! HTTP (the form CLI talking to a running server).

use async_trait::async_trait;

use crate::domain::{Error, LookupResult};

/// Arguments of one `checkAddress` call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CheckAddressRequest {
    /// Postcode if the user entered one, otherwise the suburb name.
    pub search_query: String,
    /// Raw state input.
    pub state: String,
}

impl CheckAddressRequest {
    pub fn new(search_query: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            search_query: search_query.into(),
            state: state.into(),
        }
    }
}

/// Port resolving a search into a normalised [`LookupResult`].
///
/// Upstream failures are reported inside the `LookupResult`; `Err` is
/// reserved for failures reaching the lookup itself, such as a remote
/// validator server being unreachable.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocalityLookup: Send + Sync {
    /// Resolve one address check.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use address_validator::domain::ports::{CheckAddressRequest, LocalityLookup};
    ///
    /// let result = lookup
    ///     .check_address(&CheckAddressRequest::new("2000", "NSW"))
    ///     .await?;
    /// if !result.is_valid() {
    ///     eprintln!("{}", result.error_message());
    /// }
    /// ```
    async fn check_address(&self, request: &CheckAddressRequest) -> Result<LookupResult, Error>;
}
