//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: the address endpoints and the health probes
//! - **Schemas**: domain type wrappers from
//!   [`crate::inbound::http::schemas`] that provide OpenAPI definitions
//!   without coupling domain types to the utoipa framework
//!
//! The generated specification is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, FormMessageSchema, FormOutcomeSchema, LocalitySchema,
    LookupResultSchema, UserInputSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Address validator API",
        description = "Postcode, suburb, and state validation backed by a locality search service."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::address::check_address,
        crate::inbound::http::address::validate_address,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        LocalitySchema,
        LookupResultSchema,
        UserInputSchema,
        FormMessageSchema,
        FormOutcomeSchema
    )),
    tags(
        (name = "address", description = "Locality lookup and address validation"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
