//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::AddressFormService;
use crate::domain::ports::LocalityLookup;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Lookup proxy answering `GET /api/v1/address/check`.
    pub locality_lookup: Arc<dyn LocalityLookup>,
    /// Form submission workflow layered over the same lookup.
    pub address_form: AddressFormService<dyn LocalityLookup>,
}

impl HttpState {
    /// Construct state around a single lookup implementation.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use address_validator::domain::LocalityLookupService;
    /// use address_validator::domain::ports::FixtureLocalitySource;
    /// use address_validator::inbound::http::state::HttpState;
    ///
    /// let source = Arc::new(FixtureLocalitySource::new(Vec::new()));
    /// let state = HttpState::new(Arc::new(LocalityLookupService::new(source)));
    /// let _lookup = state.locality_lookup.clone();
    /// ```
    pub fn new(locality_lookup: Arc<dyn LocalityLookup>) -> Self {
        let address_form = AddressFormService::new(Arc::clone(&locality_lookup));
        Self {
            locality_lookup,
            address_form,
        }
    }
}
