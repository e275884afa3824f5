//! Runtime configuration loaded via OrthoConfig.
//!
//! Values come from the environment (`LOCALITY_API_*`, `SERVER_*`) and are
//! validated once at startup. The locality credential is moved into a
//! [`Zeroizing`] buffer as soon as it is read and only a fingerprint of it is
//! ever logged.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use url::Url;
use zeroize::Zeroizing;

use crate::outbound::locality_api::LocalityApiConfig;

/// Default listener address for the validator server.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Environment variable naming the upstream search endpoint.
pub const BASE_URL_ENV: &str = "LOCALITY_API_BASE_URL";
/// Environment variable holding the upstream bearer credential.
pub const BEARER_TOKEN_ENV: &str = "LOCALITY_API_BEARER_TOKEN";

/// Length of the token fingerprint in bytes before hex encoding.
const FINGERPRINT_BYTES: usize = 8;

/// Errors raised while validating configuration.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SettingsError {
    /// A required value is missing or blank.
    #[error("missing required environment variable: {name}")]
    Missing { name: &'static str },
    /// A value is present but cannot be used.
    #[error("invalid value for {name}='{value}': {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Connection settings for the upstream locality service.
#[derive(Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "LOCALITY_API")]
pub struct LocalityApiSettings {
    /// Full search endpoint URL, e.g.
    /// `https://digitalapi.auspost.com.au/postcode/search.json`.
    #[ortho_config(default = String::new())]
    pub base_url: String,
    /// Bearer credential for the locality service.
    #[ortho_config(default = String::new())]
    pub bearer_token: String,
}

impl std::fmt::Debug for LocalityApiSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalityApiSettings")
            .field("base_url", &self.base_url)
            .field("bearer_token", &"<redacted>")
            .finish()
    }
}

impl LocalityApiSettings {
    /// Validate the settings and build adapter configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Missing`] when either value is blank and
    /// [`SettingsError::Invalid`] when the URL does not parse or is not
    /// HTTP(S).
    pub fn into_config(self) -> Result<LocalityApiConfig, SettingsError> {
        let raw_url = non_blank(self.base_url).ok_or(SettingsError::Missing {
            name: BASE_URL_ENV,
        })?;
        let bearer_token = non_blank(self.bearer_token)
            .map(Zeroizing::new)
            .ok_or(SettingsError::Missing {
                name: BEARER_TOKEN_ENV,
            })?;

        let endpoint = Url::parse(raw_url.trim()).map_err(|err| SettingsError::Invalid {
            name: BASE_URL_ENV,
            value: raw_url.clone(),
            reason: err.to_string(),
        })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(SettingsError::Invalid {
                name: BASE_URL_ENV,
                value: raw_url,
                reason: "expected an http or https URL".to_owned(),
            });
        }

        Ok(LocalityApiConfig {
            endpoint,
            bearer_token,
        })
    }
}

/// Listener settings for the validator server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SERVER")]
pub struct ServerSettings {
    /// Socket address to bind, e.g. `127.0.0.1:8080`.
    #[ortho_config(default = DEFAULT_BIND_ADDR.to_owned())]
    pub bind_addr: String,
}

impl ServerSettings {
    /// Parse the configured bind address.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Invalid`] when the value is not a socket
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.trim();
        raw.parse().map_err(|err: std::net::AddrParseError| SettingsError::Invalid {
            name: "SERVER_BIND_ADDR",
            value: raw.to_owned(),
            reason: err.to_string(),
        })
    }
}

/// Generate a truncated SHA-256 fingerprint of a bearer credential.
///
/// Lets operators confirm which credential is active without exposing it.
///
/// # Examples
///
/// ```rust
/// use address_validator::settings::token_fingerprint;
///
/// let fp = token_fingerprint("secret");
/// assert_eq!(fp.len(), 16);
/// assert!(fp.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
#[must_use]
pub fn token_fingerprint(token: &str) -> String {
    let digest = Sha256::digest(token.as_bytes());
    hex::encode(&digest[..FINGERPRINT_BYTES])
}

fn non_blank(value: String) -> Option<String> {
    Some(value).filter(|candidate| !candidate.trim().is_empty())
}

#[cfg(test)]
mod tests {
    //! Unit tests for configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const ENDPOINT: &str = "https://digitalapi.auspost.com.au/postcode/search.json";

    fn load_locality_settings() -> LocalityApiSettings {
        LocalityApiSettings::load_from_iter([OsString::from("address-validator")])
            .expect("config should load")
    }

    fn load_server_settings() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("address-validator")])
            .expect("config should load")
    }

    #[rstest]
    fn locality_settings_are_read_from_the_environment() {
        let _guard = lock_env([
            (BASE_URL_ENV, Some(ENDPOINT.to_owned())),
            (BEARER_TOKEN_ENV, Some("secret-token".to_owned())),
        ]);

        let config = load_locality_settings()
            .into_config()
            .expect("settings are valid");

        assert_eq!(config.endpoint.as_str(), ENDPOINT);
        assert_eq!(config.bearer_token.as_str(), "secret-token");
    }

    #[rstest]
    #[case::no_url(None, Some("token"), BASE_URL_ENV)]
    #[case::blank_url(Some("  "), Some("token"), BASE_URL_ENV)]
    #[case::no_token(Some(ENDPOINT), None, BEARER_TOKEN_ENV)]
    #[case::blank_token(Some(ENDPOINT), Some(""), BEARER_TOKEN_ENV)]
    fn missing_values_are_reported_by_name(
        #[case] url: Option<&str>,
        #[case] token: Option<&str>,
        #[case] expected: &'static str,
    ) {
        let settings = LocalityApiSettings {
            base_url: url.unwrap_or_default().to_owned(),
            bearer_token: token.unwrap_or_default().to_owned(),
        };

        let error = settings.into_config().expect_err("settings are incomplete");

        assert_eq!(error, SettingsError::Missing { name: expected });
    }

    #[rstest]
    #[case::nothing_set(None, None, BASE_URL_ENV)]
    #[case::only_url_set(Some(ENDPOINT), None, BEARER_TOKEN_ENV)]
    fn unset_environment_loads_and_reports_missing_values(
        #[case] url: Option<&str>,
        #[case] token: Option<&str>,
        #[case] expected: &'static str,
    ) {
        let _guard = lock_env([
            (BASE_URL_ENV, url.map(str::to_owned)),
            (BEARER_TOKEN_ENV, token.map(str::to_owned)),
        ]);

        let error = load_locality_settings()
            .into_config()
            .expect_err("settings are incomplete");

        assert_eq!(error, SettingsError::Missing { name: expected });
    }

    #[rstest]
    #[case::not_a_url("digitalapi.auspost.com.au")]
    #[case::wrong_scheme("ftp://digitalapi.auspost.com.au/postcode/search.json")]
    fn unusable_urls_are_rejected(#[case] url: &str) {
        let settings = LocalityApiSettings {
            base_url: url.to_owned(),
            bearer_token: "token".to_owned(),
        };

        let error = settings.into_config().expect_err("URL is unusable");

        assert!(matches!(error, SettingsError::Invalid { name: BASE_URL_ENV, .. }));
    }

    #[rstest]
    fn debug_output_redacts_the_token() {
        let settings = LocalityApiSettings {
            base_url: ENDPOINT.to_owned(),
            bearer_token: "secret-token".to_owned(),
        };

        let rendered = format!("{settings:?}");

        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("<redacted>"));
    }

    #[rstest]
    fn bind_addr_defaults_when_unset() {
        let _guard = lock_env([("SERVER_BIND_ADDR", None::<String>)]);

        let settings = load_server_settings();

        assert_eq!(
            settings.bind_addr().expect("default is valid"),
            DEFAULT_BIND_ADDR.parse::<SocketAddr>().expect("valid address")
        );
    }

    #[rstest]
    fn bind_addr_override_is_respected() {
        let _guard = lock_env([("SERVER_BIND_ADDR", Some("127.0.0.1:9090".to_owned()))]);

        let settings = load_server_settings();

        assert_eq!(
            settings.bind_addr().expect("override is valid").port(),
            9090
        );
    }

    #[rstest]
    fn invalid_bind_addr_is_rejected() {
        let settings = ServerSettings {
            bind_addr: "not-an-address".to_owned(),
        };

        assert!(matches!(
            settings.bind_addr(),
            Err(SettingsError::Invalid { .. })
        ));
    }

    #[rstest]
    fn fingerprints_are_stable_and_distinct() {
        assert_eq!(token_fingerprint("a"), token_fingerprint("a"));
        assert_ne!(token_fingerprint("a"), token_fingerprint("b"));
        assert_eq!(token_fingerprint("a"), token_fingerprint("a").to_lowercase());
    }
}
