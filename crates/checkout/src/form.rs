//! Checkout form validation.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

// Unanchored on purpose: an `@` followed somewhere by a dotted domain
// segment is enough of an email for a demo checkout.
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));

/// The two fixed validation failures. The form never produces any other
/// error and nothing here is retried or escalated.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("All fields are required.")]
    MissingFields,
    #[error("Invalid email address format.")]
    InvalidEmail,
}

/// The checkout form: name, email, and the last validation error.
///
/// The form stays editable after a failed submit; the error is replaced on
/// the next attempt.
#[derive(Debug, Clone, Default)]
pub struct CheckoutForm {
    name: String,
    email: String,
    error: Option<CheckoutError>,
}

impl CheckoutForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// The last submit's validation failure, if any.
    pub fn error(&self) -> Option<CheckoutError> {
        self.error
    }

    /// Pure validation: both fields present, email roughly email-shaped.
    pub fn validate(&self) -> Result<(), CheckoutError> {
        if self.name.is_empty() || self.email.is_empty() {
            return Err(CheckoutError::MissingFields);
        }
        if !EMAIL_SHAPE.is_match(&self.email) {
            return Err(CheckoutError::InvalidEmail);
        }
        Ok(())
    }

    /// Submit the form.
    ///
    /// On failure the error is recorded and nothing else happens. On success
    /// the error is cleared and the caller-supplied completion callback runs
    /// with no payload.
    pub fn submit<F: FnOnce()>(&mut self, on_complete: F) -> Result<(), CheckoutError> {
        match self.validate() {
            Ok(()) => {
                self.error = None;
                tracing::info!(name = %self.name, "checkout form submitted");
                on_complete();
                Ok(())
            }
            Err(err) => {
                self.error = Some(err);
                tracing::warn!(error = %err, "checkout form rejected");
                Err(err)
            }
        }
    }
}
