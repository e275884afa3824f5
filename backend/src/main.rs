//! Validator server entry-point: wires the locality adapter, REST endpoints,
//! health probes, and OpenAPI docs.

mod server;

use std::ffi::OsString;
use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use address_validator::domain::LocalityLookupService;
use address_validator::inbound::http::health::HealthState;
use address_validator::outbound::locality_api::LocalityApiHttpSource;
use address_validator::settings::{LocalityApiSettings, ServerSettings, token_fingerprint};
use server::{ServerConfig, create_server};

const BINARY_NAME: &str = "address-validator";

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    // Settings come from the environment only; no CLI flags are accepted.
    let locality_settings = LocalityApiSettings::load_from_iter([OsString::from(BINARY_NAME)])
        .map_err(|e| std::io::Error::other(format!("failed to load locality settings: {e}")))?;
    let server_settings = ServerSettings::load_from_iter([OsString::from(BINARY_NAME)])
        .map_err(|e| std::io::Error::other(format!("failed to load server settings: {e}")))?;

    let bind_addr = server_settings
        .bind_addr()
        .map_err(std::io::Error::other)?;
    let locality_config = locality_settings
        .into_config()
        .map_err(std::io::Error::other)?;
    info!(
        endpoint = %locality_config.endpoint,
        token_fingerprint = %token_fingerprint(&locality_config.bearer_token),
        "locality service configured"
    );

    let source = LocalityApiHttpSource::new(locality_config).map_err(|e| {
        std::io::Error::other(format!("failed to build locality client: {e}"))
    })?;
    let lookup = Arc::new(LocalityLookupService::new(Arc::new(source)));

    let config = ServerConfig::new(bind_addr, lookup);
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(
        server::build_metrics()
            .map_err(|e| warn!(error = %e, "metrics disabled"))
            .ok(),
    );

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    info!(%bind_addr, "address validator listening");
    server.await
}
