//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! The schema wrappers mirror the wire shape of their corresponding domain
//! types but live in the inbound adapter layer where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// A collaborator could not be reached.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// API error response payload with machine-readable code and human-readable
/// message.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "request body must be a JSON address payload")]
    message: String,
    /// Correlation identifier matching the `trace-id` response header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Locality`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Locality)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct LocalitySchema {
    #[schema(example = "Delivery Area")]
    category: String,
    #[schema(example = 445)]
    id: i64,
    #[schema(example = -33.8688)]
    latitude: Option<f64>,
    /// Suburb name as the locality service spells it.
    #[schema(example = "SYDNEY")]
    location: String,
    #[schema(example = 151.2093)]
    longitude: Option<f64>,
    #[schema(example = 2000)]
    postcode: u32,
    #[schema(example = "NSW")]
    state: String,
}

/// OpenAPI schema for [`crate::domain::LookupResult`].
///
/// `isValid` is true exactly when `localities` is non-empty; otherwise
/// `errorMessage` explains why nothing was found.
#[derive(ToSchema)]
#[schema(as = crate::domain::LookupResult, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct LookupResultSchema {
    is_valid: bool,
    #[schema(example = "")]
    error_message: String,
    localities: Vec<LocalitySchema>,
}

/// OpenAPI schema for [`crate::domain::UserInput`].
#[derive(ToSchema)]
#[schema(as = crate::domain::UserInput)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserInputSchema {
    #[schema(example = "2000")]
    postcode: Option<String>,
    #[schema(example = "Sydney")]
    suburb: Option<String>,
    #[schema(example = "NSW")]
    state: Option<String>,
}

/// OpenAPI schema for [`crate::domain::FormOutcome`].
#[derive(ToSchema)]
#[schema(as = crate::domain::FormOutcome)]
pub enum FormOutcomeSchema {
    #[schema(rename = "full_match")]
    FullMatch,
    #[schema(rename = "state_mismatch")]
    StateMismatch,
    #[schema(rename = "postcode_suburb_mismatch")]
    PostcodeSuburbMismatch,
    #[schema(rename = "no_data")]
    NoData,
    #[schema(rename = "ambiguous_error")]
    AmbiguousError,
    /// The lookup reported a failure; `message` carries its text.
    #[schema(rename = "lookup_failed")]
    LookupFailed,
}

/// OpenAPI schema for [`crate::domain::FormMessage`].
#[derive(ToSchema)]
#[schema(as = crate::domain::FormMessage)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct FormMessageSchema {
    /// Whether the message should be styled as an error.
    error: bool,
    #[schema(example = "The postcode, suburb, and state input are valid.")]
    message: String,
    outcome: FormOutcomeSchema,
}
