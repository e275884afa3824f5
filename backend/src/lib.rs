//! Address validation service: a lookup proxy over a third-party locality
//! API and the reconciliation of user-entered postcode, suburb, and state
//! against the localities it returns.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
