//! Address validation HTTP handlers.
//!
//! ```text
//! GET  /api/v1/address/check?searchQuery=2000&state=NSW
//! POST /api/v1/address/validate {"postcode":"2000","suburb":"Sydney","state":"NSW"}
//! ```
//!
//! The check endpoint is the lookup proxy: upstream failures come back as a
//! `200` with `isValid: false`, never as an HTTP error. The validate endpoint
//! runs one full form submission and returns the message to display.

use actix_web::{get, post, web};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::domain::ports::CheckAddressRequest;
use crate::domain::{Error, FormMessage, LookupResult, UserInput};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{
    ErrorSchema, FormMessageSchema, LookupResultSchema, UserInputSchema,
};
use crate::inbound::http::state::HttpState;

/// Query parameters accepted by the check endpoint. Both default to empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckAddressQuery {
    #[serde(default)]
    pub search_query: String,
    #[serde(default)]
    pub state: String,
}

impl From<CheckAddressQuery> for CheckAddressRequest {
    fn from(value: CheckAddressQuery) -> Self {
        Self::new(value.search_query, value.state)
    }
}

/// JSON extractor configuration for address payloads.
///
/// Malformed bodies surface as `invalid_request` domain errors instead of
/// Actix's plain-text rejection.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        Error::invalid_request("request body must be a JSON address payload")
            .with_details(json!({ "code": "invalid_json", "reason": err.to_string() }))
            .into()
    })
}

/// Query extractor configuration for the check endpoint.
///
/// Unparseable query strings surface as `invalid_request` domain errors.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        Error::invalid_request("query must carry at most one searchQuery and state")
            .with_details(json!({ "code": "invalid_query", "reason": err.to_string() }))
            .into()
    })
}

/// Look up localities for a postcode or suburb, optionally filtered by state.
#[utoipa::path(
    get,
    path = "/api/v1/address/check",
    params(
        ("searchQuery" = Option<String>, Query, description = "Postcode or suburb name"),
        ("state" = Option<String>, Query, description = "State code filter, e.g. NSW")
    ),
    responses(
        (status = 200, description = "Lookup result; failures are reported in-band", body = LookupResultSchema),
        (status = 400, description = "Invalid query string", body = ErrorSchema),
        (status = 503, description = "Lookup capability unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["address"],
    operation_id = "checkAddress",
    security([])
)]
#[get("/address/check")]
pub async fn check_address(
    state: web::Data<HttpState>,
    query: web::Query<CheckAddressQuery>,
) -> ApiResult<web::Json<LookupResult>> {
    let request = CheckAddressRequest::from(query.into_inner());
    let result = state.locality_lookup.check_address(&request).await?;
    debug!(
        is_valid = result.is_valid(),
        count = result.localities().len(),
        "address check served"
    );
    Ok(web::Json(result))
}

/// Validate a postcode, suburb, and state triple and return the form message.
#[utoipa::path(
    post,
    path = "/api/v1/address/validate",
    request_body = UserInputSchema,
    responses(
        (status = 200, description = "Message to display for the submission", body = FormMessageSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["address"],
    operation_id = "validateAddress",
    security([])
)]
#[post("/address/validate")]
pub async fn validate_address(
    state: web::Data<HttpState>,
    payload: web::Json<UserInput>,
) -> ApiResult<web::Json<FormMessage>> {
    let input = payload.into_inner();
    let message = state.address_form.submit(&input).await;
    Ok(web::Json(message))
}

#[cfg(test)]
#[path = "address_tests.rs"]
mod tests;
