//! Domain primitives and services.
//!
//! Purpose: hold the address validation logic independent of HTTP, reqwest,
//! or configuration. Adapters translate at the edges; everything here is
//! either a plain value or a service over a port trait.
//!
//! Public surface:
//! - `Locality`, `LookupResult`: upstream records and the normalised lookup
//!   outcome.
//! - `UserInput`, `ReconciliationOutcome`, `reconcile`: the comparison of
//!   entered fields against localities.
//! - `LocalityLookupService`: the lookup proxy over a `LocalitySource`.
//! - `AddressFormService`, `FormMessage`: one form submission end to end.
//! - `Error`, `ErrorCode`, `TraceId`: shared error and correlation types.

pub mod address_form_service;
pub mod error;
pub mod locality;
pub mod locality_lookup_service;
pub mod lookup_result;
pub mod ports;
pub mod reconciliation;
pub mod trace_id;

pub use self::address_form_service::{AddressFormService, FormMessage, FormOutcome};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::locality::Locality;
pub use self::locality_lookup_service::LocalityLookupService;
pub use self::lookup_result::{
    LOOKUP_FAILED_FALLBACK_MESSAGE, LookupResult, LookupResultValidationError,
    NO_LOCALITY_FOUND_MESSAGE,
};
pub use self::reconciliation::{
    AMBIGUOUS_ERROR_MESSAGE, FULL_MATCH_MESSAGE, ReconciliationOutcome, UserInput, reconcile,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
