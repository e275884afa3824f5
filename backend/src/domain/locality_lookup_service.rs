//! Lookup proxy service.
//!
//! Implements the [`LocalityLookup`] driving port on top of any
//! [`LocalitySource`]. Every upstream failure is folded into an invalid
//! [`LookupResult`]; nothing is raised past this boundary.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::ports::{CheckAddressRequest, LocalityLookup, LocalitySearch, LocalitySource};
use crate::domain::{Error, LookupResult};

/// Proxy resolving address checks against a locality source.
#[derive(Clone)]
pub struct LocalityLookupService<S> {
    source: Arc<S>,
}

impl<S> LocalityLookupService<S> {
    /// Create a lookup service over `source`.
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }
}

impl<S> LocalityLookupService<S>
where
    S: LocalitySource,
{
    /// Resolve a search, converting failures into an invalid result.
    pub async fn lookup(&self, search_query: &str, state: &str) -> LookupResult {
        let search = LocalitySearch::new(search_query, state);
        match self.source.fetch_localities(&search).await {
            Ok(localities) => {
                debug!(
                    query = %search.query,
                    state = %search.state,
                    count = localities.len(),
                    "locality lookup completed"
                );
                LookupResult::from_localities(localities)
            }
            Err(error) => {
                warn!(
                    query = %search.query,
                    state = %search.state,
                    error = %error,
                    "locality lookup failed"
                );
                LookupResult::failure(error.to_string())
            }
        }
    }
}

#[async_trait]
impl<S> LocalityLookup for LocalityLookupService<S>
where
    S: LocalitySource,
{
    async fn check_address(&self, request: &CheckAddressRequest) -> Result<LookupResult, Error> {
        Ok(self.lookup(&request.search_query, &request.state).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{FixtureLocalitySource, LocalitySourceError, MockLocalitySource};
    use crate::domain::{Locality, NO_LOCALITY_FOUND_MESSAGE};
    use mockall::predicate::eq;
    use rstest::rstest;

    fn sydney() -> Locality {
        Locality::new(123, "SYDNEY", 2000, "NSW").with_category("Delivery Area")
    }

    #[tokio::test]
    async fn forwards_query_and_state_to_the_source() {
        let mut source = MockLocalitySource::new();
        source
            .expect_fetch_localities()
            .with(eq(LocalitySearch::new("2000", "NSW")))
            .times(1)
            .return_once(|_| Ok(vec![sydney()]));

        let service = LocalityLookupService::new(Arc::new(source));
        let result = service.lookup("2000", "NSW").await;

        assert!(result.is_valid());
        assert_eq!(result.error_message(), "");
        assert_eq!(result.localities(), &[sydney()]);
    }

    #[tokio::test]
    async fn empty_source_result_is_reported_as_not_found() {
        let service = LocalityLookupService::new(Arc::new(FixtureLocalitySource::default()));

        let result = service.lookup("Atlantis", "").await;

        assert!(!result.is_valid());
        assert_eq!(result.error_message(), NO_LOCALITY_FOUND_MESSAGE);
        assert!(result.localities().is_empty());
    }

    #[rstest]
    #[case::transport(LocalitySourceError::transport("connection refused"))]
    #[case::timeout(LocalitySourceError::timeout("deadline elapsed"))]
    #[case::unauthorized(LocalitySourceError::unauthorized("status 401"))]
    #[case::status(LocalitySourceError::status("status 500"))]
    #[case::decode(LocalitySourceError::decode("expected value at line 1"))]
    #[tokio::test]
    async fn source_failures_become_invalid_results(#[case] error: LocalitySourceError) {
        let expected_message = error.to_string();
        let mut source = MockLocalitySource::new();
        source
            .expect_fetch_localities()
            .times(1)
            .return_once(move |_| Err(error));

        let service = LocalityLookupService::new(Arc::new(source));
        let result = service
            .check_address(&CheckAddressRequest::new("2000", "NSW"))
            .await
            .expect("lookup proxy never fails");

        assert!(!result.is_valid());
        assert_eq!(result.error_message(), expected_message);
        assert!(result.localities().is_empty());
    }
}
