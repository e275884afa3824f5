//! Outcome of a single locality lookup.
//!
//! `LookupResult` is the uniform shape returned by the lookup proxy. Its
//! fields are private so the validity flag can only be produced by the
//! constructors below, which keep it consistent with the locality list.

use serde::{Deserialize, Serialize};

use super::Locality;

/// Message reported when the upstream call succeeds but finds nothing.
pub const NO_LOCALITY_FOUND_MESSAGE: &str = "No valid locality found for the given address.";

/// Message reported when a failure carries no usable description.
pub const LOOKUP_FAILED_FALLBACK_MESSAGE: &str = "Failed to validate address.";

/// Normalised result of one lookup call.
///
/// ## Invariants
/// - `is_valid` is `true` if and only if `localities` is non-empty.
/// - `error_message` is empty exactly when `is_valid` is `true`.
///
/// # Examples
/// ```
/// use address_validator::domain::{LookupResult, NO_LOCALITY_FOUND_MESSAGE};
///
/// let empty = LookupResult::from_localities(Vec::new());
/// assert!(!empty.is_valid());
/// assert_eq!(empty.error_message(), NO_LOCALITY_FOUND_MESSAGE);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(try_from = "LookupResultDto")]
pub struct LookupResult {
    is_valid: bool,
    error_message: String,
    localities: Vec<Locality>,
}

/// Validation errors raised when decoding a lookup result from the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResultValidationError {
    /// `isValid` was set but no localities were supplied.
    ValidWithoutLocalities,
    /// `isValid` was cleared but localities were supplied.
    InvalidWithLocalities,
}

impl std::fmt::Display for LookupResultValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ValidWithoutLocalities => {
                write!(f, "valid lookup result must carry at least one locality")
            }
            Self::InvalidWithLocalities => {
                write!(f, "invalid lookup result must not carry localities")
            }
        }
    }
}

impl std::error::Error for LookupResultValidationError {}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupResultDto {
    is_valid: bool,
    #[serde(default)]
    error_message: String,
    #[serde(default)]
    localities: Option<Vec<Locality>>,
}

impl TryFrom<LookupResultDto> for LookupResult {
    type Error = LookupResultValidationError;

    fn try_from(value: LookupResultDto) -> Result<Self, Self::Error> {
        let LookupResultDto {
            is_valid,
            error_message,
            localities,
        } = value;
        let localities = localities.unwrap_or_default();
        match (is_valid, localities.is_empty()) {
            (true, true) => Err(LookupResultValidationError::ValidWithoutLocalities),
            (false, false) => Err(LookupResultValidationError::InvalidWithLocalities),
            (true, false) => Ok(Self::from_localities(localities)),
            (false, true) => Ok(Self::failure(error_message)),
        }
    }
}

impl LookupResult {
    /// Classify a successful upstream call by whether it returned anything.
    pub fn from_localities(localities: Vec<Locality>) -> Self {
        if localities.is_empty() {
            return Self::failure(NO_LOCALITY_FOUND_MESSAGE);
        }
        Self {
            is_valid: true,
            error_message: String::new(),
            localities,
        }
    }

    /// Report a failed call. Blank messages fall back to
    /// [`LOOKUP_FAILED_FALLBACK_MESSAGE`].
    ///
    /// # Examples
    /// ```
    /// use address_validator::domain::{LookupResult, LOOKUP_FAILED_FALLBACK_MESSAGE};
    ///
    /// let result = LookupResult::failure("  ");
    /// assert_eq!(result.error_message(), LOOKUP_FAILED_FALLBACK_MESSAGE);
    /// assert!(result.localities().is_empty());
    /// ```
    pub fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        let error_message = if message.trim().is_empty() {
            LOOKUP_FAILED_FALLBACK_MESSAGE.to_owned()
        } else {
            message
        };
        Self {
            is_valid: false,
            error_message,
            localities: Vec::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Failure description; empty for valid results.
    pub fn error_message(&self) -> &str {
        self.error_message.as_str()
    }

    /// Localities in upstream order.
    pub fn localities(&self) -> &[Locality] {
        &self.localities
    }

    /// Consume the result, yielding its localities.
    pub fn into_localities(self) -> Vec<Locality> {
        self.localities
    }
}
