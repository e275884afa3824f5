//! Reconciliation of user-entered address fields against authoritative
//! localities.
//!
//! Purpose: decide which of postcode, suburb, and state disagree with the
//! localities returned for a lookup. The decision is a pure function of its
//! inputs; rules are tried in a fixed priority order and the first rule with
//! any satisfying locality wins.
//!
//! Comparison rules:
//! - suburb and state compare case-insensitively;
//! - the numeric locality postcode is rendered as a decimal string and
//!   compared case-insensitively with the raw postcode input, so `"0800"`
//!   does not match postcode `800`.

use serde::{Deserialize, Serialize};

use super::Locality;

/// Message shown when every field agrees with a returned locality.
pub const FULL_MATCH_MESSAGE: &str = "The postcode, suburb, and state input are valid.";

/// Message shown when no rule can explain the returned localities.
pub const AMBIGUOUS_ERROR_MESSAGE: &str =
    "An error occurred during address validation. Please try again.";

/// Raw address fields as typed by the user.
///
/// No normalisation happens on construction; case folding is applied only
/// while comparing.
///
/// # Examples
/// ```
/// use address_validator::domain::UserInput;
///
/// let by_postcode = UserInput::new("2000", "Sydney", "NSW");
/// assert_eq!(by_postcode.search_query(), "2000");
///
/// let by_suburb = UserInput::new("", "Sydney", "NSW");
/// assert_eq!(by_suburb.search_query(), "Sydney");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserInput {
    /// Postcode as entered, e.g. `"2000"`.
    #[serde(default)]
    pub postcode: String,
    /// Suburb as entered, e.g. `"Sydney"`.
    #[serde(default)]
    pub suburb: String,
    /// State code as entered, e.g. `"NSW"`.
    #[serde(default)]
    pub state: String,
}

impl UserInput {
    pub fn new(
        postcode: impl Into<String>,
        suburb: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        Self {
            postcode: postcode.into(),
            suburb: suburb.into(),
            state: state.into(),
        }
    }

    /// Text sent to the lookup: the postcode when present, else the suburb.
    pub fn search_query(&self) -> &str {
        if self.postcode.is_empty() {
            self.suburb.as_str()
        } else {
            self.postcode.as_str()
        }
    }
}

/// Classification of user input against a set of localities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconciliationOutcome {
    /// Some locality agrees on postcode, suburb, and state.
    FullMatch,
    /// Postcode and suburb agree but the suburb lies in another state.
    StateMismatch { suburb: String, state: String },
    /// Postcode and state agree but the suburb differs.
    PostcodeSuburbMismatch { postcode: String, suburb: String },
    /// The lookup returned no localities at all.
    NoData { postcode: String, suburb: String },
    /// Localities were returned but none fits any rule.
    AmbiguousError,
}

impl ReconciliationOutcome {
    /// Human-readable message for display.
    ///
    /// # Examples
    /// ```
    /// use address_validator::domain::ReconciliationOutcome;
    ///
    /// let outcome = ReconciliationOutcome::StateMismatch {
    ///     suburb: "Sydney".to_owned(),
    ///     state: "NSW".to_owned(),
    /// };
    /// assert_eq!(outcome.message(), "The suburb Sydney does not exist in the state NSW.");
    /// ```
    pub fn message(&self) -> String {
        match self {
            Self::FullMatch => FULL_MATCH_MESSAGE.to_owned(),
            Self::StateMismatch { suburb, state } => {
                format!("The suburb {suburb} does not exist in the state {state}.")
            }
            Self::PostcodeSuburbMismatch { postcode, suburb } => {
                format!("The postcode {postcode} does not match the suburb {suburb}.")
            }
            Self::NoData { postcode, suburb } => {
                format!("No matching data found for postcode {postcode} and suburb {suburb}.")
            }
            Self::AmbiguousError => AMBIGUOUS_ERROR_MESSAGE.to_owned(),
        }
    }

    /// Whether the outcome should be presented as an error.
    pub fn is_error(&self) -> bool {
        !matches!(self, Self::FullMatch)
    }
}

#[derive(Debug, Clone, Copy)]
struct FieldAgreement {
    postcode: bool,
    suburb: bool,
    state: bool,
}

impl FieldAgreement {
    fn between(input: &UserInput, locality: &Locality) -> Self {
        Self {
            postcode: eq_ignore_case(&locality.postcode().to_string(), &input.postcode),
            suburb: eq_ignore_case(locality.location(), &input.suburb),
            state: eq_ignore_case(locality.state(), &input.state),
        }
    }
}

fn eq_ignore_case(authoritative: &str, entered: &str) -> bool {
    authoritative.to_lowercase() == entered.to_lowercase()
}

/// Classify `input` against `localities`.
///
/// # Examples
/// ```
/// use address_validator::domain::{reconcile, Locality, ReconciliationOutcome, UserInput};
///
/// let localities = [Locality::new(123, "SYDNEY", 2000, "NSW")];
/// let outcome = reconcile(&UserInput::new("2000", "sydney", "nsw"), &localities);
/// assert_eq!(outcome, ReconciliationOutcome::FullMatch);
/// ```
pub fn reconcile(input: &UserInput, localities: &[Locality]) -> ReconciliationOutcome {
    if localities.is_empty() {
        return ReconciliationOutcome::NoData {
            postcode: input.postcode.clone(),
            suburb: input.suburb.clone(),
        };
    }

    let agreements: Vec<FieldAgreement> = localities
        .iter()
        .map(|locality| FieldAgreement::between(input, locality))
        .collect();
    let any = |rule: fn(&FieldAgreement) -> bool| agreements.iter().any(rule);

    if any(|a| a.postcode && a.suburb && a.state) {
        ReconciliationOutcome::FullMatch
    } else if any(|a| a.postcode && a.suburb && !a.state) {
        ReconciliationOutcome::StateMismatch {
            suburb: input.suburb.clone(),
            state: input.state.clone(),
        }
    } else if any(|a| a.postcode && !a.suburb && a.state) {
        ReconciliationOutcome::PostcodeSuburbMismatch {
            postcode: input.postcode.clone(),
            suburb: input.suburb.clone(),
        }
    } else {
        ReconciliationOutcome::AmbiguousError
    }
}

#[cfg(test)]
#[path = "reconciliation_tests.rs"]
mod tests;
