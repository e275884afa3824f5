//! Address form submission.
//!
//! One submission performs one lookup through the injected
//! [`LocalityLookup`] and turns the result into the single message the form
//! displays. Upstream failures are shown verbatim; a failure of the lookup
//! capability itself falls back to the generic reconciliation error.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::domain::ports::{CheckAddressRequest, LocalityLookup};
use crate::domain::{ReconciliationOutcome, UserInput, reconcile};

/// How a submission was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormOutcome {
    FullMatch,
    StateMismatch,
    PostcodeSuburbMismatch,
    NoData,
    AmbiguousError,
    /// The lookup proxy reported a failure; its message is shown as is.
    LookupFailed,
}

impl From<&ReconciliationOutcome> for FormOutcome {
    fn from(value: &ReconciliationOutcome) -> Self {
        match value {
            ReconciliationOutcome::FullMatch => Self::FullMatch,
            ReconciliationOutcome::StateMismatch { .. } => Self::StateMismatch,
            ReconciliationOutcome::PostcodeSuburbMismatch { .. } => Self::PostcodeSuburbMismatch,
            ReconciliationOutcome::NoData { .. } => Self::NoData,
            ReconciliationOutcome::AmbiguousError => Self::AmbiguousError,
        }
    }
}

/// Message displayed after a submission.
///
/// # Examples
/// ```
/// use address_validator::domain::{FormMessage, FormOutcome, ReconciliationOutcome};
///
/// let message = FormMessage::from(ReconciliationOutcome::FullMatch);
/// assert!(!message.error);
/// assert_eq!(message.outcome, FormOutcome::FullMatch);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormMessage {
    /// Whether the message is styled as an error.
    pub error: bool,
    pub message: String,
    pub outcome: FormOutcome,
}

impl FormMessage {
    fn lookup_failed(message: impl Into<String>) -> Self {
        Self {
            error: true,
            message: message.into(),
            outcome: FormOutcome::LookupFailed,
        }
    }
}

impl From<ReconciliationOutcome> for FormMessage {
    fn from(value: ReconciliationOutcome) -> Self {
        Self {
            error: value.is_error(),
            message: value.message(),
            outcome: FormOutcome::from(&value),
        }
    }
}

/// Form service validating one [`UserInput`] per call.
pub struct AddressFormService<L: ?Sized> {
    lookup: Arc<L>,
}

impl<L: ?Sized> Clone for AddressFormService<L> {
    fn clone(&self) -> Self {
        Self {
            lookup: Arc::clone(&self.lookup),
        }
    }
}

impl<L: ?Sized> AddressFormService<L> {
    /// Create a form service over an injected lookup capability.
    pub fn new(lookup: Arc<L>) -> Self {
        Self { lookup }
    }
}

impl<L> AddressFormService<L>
where
    L: LocalityLookup + ?Sized,
{
    /// Validate `input`, producing the message to display.
    pub async fn submit(&self, input: &UserInput) -> FormMessage {
        let request = CheckAddressRequest::new(input.search_query(), input.state.as_str());
        let result = match self.lookup.check_address(&request).await {
            Ok(result) => result,
            Err(error) => {
                warn!(error = %error, "address lookup unavailable");
                return FormMessage::from(ReconciliationOutcome::AmbiguousError);
            }
        };

        if !result.is_valid() {
            info!(reason = %result.error_message(), "address lookup reported failure");
            return FormMessage::lookup_failed(result.error_message());
        }

        let outcome = reconcile(input, result.localities());
        if matches!(outcome, ReconciliationOutcome::AmbiguousError) {
            warn!(
                candidates = result.localities().len(),
                "no reconciliation rule matched; reporting generic failure"
            );
        }
        FormMessage::from(outcome)
    }
}

#[cfg(test)]
#[path = "address_form_service_tests.rs"]
mod tests;
