//! Pre-order and newsletter submission.
//!
//! The buyer's contact details travel separately from the visual
//! configuration: the pre-order record is a deliberately smaller schema
//! (name, email, address, phone, a single color string) appended to an
//! external store. Validation is field-level and all-or-nothing; the store
//! is only reached by a fully valid draft, and one submission is in flight
//! at a time.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Color recorded on a pre-order when the buyer never picked one.
pub const DEFAULT_PRODUCT_COLOR: &str = "Black";

const MIN_NAME_CHARS: usize = 2;
const MIN_ADDRESS_CHARS: usize = 5;

// ============================================================================
// Validation
// ============================================================================

/// A single field-level validation failure. Display strings are the
/// messages shown inline under the form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Full name is required")]
    FullNameTooShort,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Shipping address is required")]
    ShippingAddressTooShort,
}

/// All field failures of one validation pass.
///
/// Fields fail independently; correcting one never affects another.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("pre-order form invalid: {}", .errors.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
pub struct ValidationErrors {
    pub errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// The first failure, for hosts that surface a single message.
    pub fn first(&self) -> ValidationError {
        self.errors[0]
    }

    /// Whether a specific field failed.
    pub fn contains(&self, error: ValidationError) -> bool {
        self.errors.contains(&error)
    }
}

/// Syntactic email check applied to the pre-order form: one `@`, a
/// non-empty local part, and a dotted domain.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

// ============================================================================
// PreOrderDraft / PreOrderRecord
// ============================================================================

/// The pre-order form as the buyer filled it in, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreOrderDraft {
    pub full_name: String,
    pub email: String,
    pub shipping_address: String,
    /// Optional and unvalidated; empty means not provided.
    pub phone_number: String,
    /// `None` falls back to [`DEFAULT_PRODUCT_COLOR`].
    pub product_color: Option<String>,
}

impl PreOrderDraft {
    /// Validates every field and produces the record to persist.
    ///
    /// All failures are collected; none of them short-circuits the rest of
    /// the form.
    pub fn validate(&self) -> Result<PreOrderRecord, ValidationErrors> {
        let mut errors = Vec::new();

        if self.full_name.chars().count() < MIN_NAME_CHARS {
            errors.push(ValidationError::FullNameTooShort);
        }
        if !is_valid_email(&self.email) {
            errors.push(ValidationError::InvalidEmail);
        }
        if self.shipping_address.chars().count() < MIN_ADDRESS_CHARS {
            errors.push(ValidationError::ShippingAddressTooShort);
        }

        if !errors.is_empty() {
            return Err(ValidationErrors { errors });
        }

        Ok(PreOrderRecord {
            user_id: None,
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            shipping_address: self.shipping_address.clone(),
            phone_number: (!self.phone_number.is_empty()).then(|| self.phone_number.clone()),
            product_color: self
                .product_color
                .clone()
                .unwrap_or_else(|| DEFAULT_PRODUCT_COLOR.to_string()),
        })
    }
}

/// The persisted pre-order row, as sent to the external store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct PreOrderRecord {
    /// Session association, when the buyer is authenticated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub full_name: String,
    pub email: String,
    pub shipping_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub product_color: String,
}

// ============================================================================
// Stores
// ============================================================================

/// Failure reported by an external collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct StoreError {
    pub message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The external pre-order store. Insert-only: there is no update or delete
/// surface.
pub trait PreOrderStore {
    fn insert(&mut self, record: &PreOrderRecord) -> Result<(), StoreError>;
}

/// The external newsletter service.
pub trait NewsletterSink {
    fn subscribe(&mut self, email: &str) -> Result<(), StoreError>;
}

// ============================================================================
// PreOrderSubmission
// ============================================================================

/// Error surfaced to the pre-order form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The submit control is disabled while a submission runs; reaching
    /// this means the host bypassed its own gating.
    #[error("a pre-order submission is already in flight")]
    AlreadyInFlight,

    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Generic and retryable: nothing was persisted, the buyer may submit
    /// again.
    #[error("Failed to submit pre-order. Please try again.")]
    Store(#[source] StoreError),
}

/// Single-in-flight pre-order submission gate.
///
/// # Example
///
/// ```
/// use luminx_customizer::{PreOrderDraft, PreOrderRecord, PreOrderSubmission, PreOrderStore, StoreError};
///
/// struct Memory(Vec<PreOrderRecord>);
/// impl PreOrderStore for Memory {
///     fn insert(&mut self, record: &PreOrderRecord) -> Result<(), StoreError> {
///         self.0.push(record.clone());
///         Ok(())
///     }
/// }
///
/// let draft = PreOrderDraft {
///     full_name: "Al".into(),
///     email: "al@example.com".into(),
///     shipping_address: "123 Main St".into(),
///     ..Default::default()
/// };
///
/// let mut store = Memory(Vec::new());
/// let mut submission = PreOrderSubmission::default();
/// let record = submission.submit(&draft, None, &mut store)?;
/// assert_eq!(record.product_color, "Black");
/// assert_eq!(store.0.len(), 1);
/// # Ok::<(), luminx_customizer::SubmitError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PreOrderSubmission {
    submitting: bool,
}

impl PreOrderSubmission {
    /// Whether a submission is in flight; the host disables the submit
    /// control while true.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Validates the draft and, if it passes, inserts the record.
    ///
    /// The store is never reached by an invalid draft. The in-flight flag
    /// covers the store call and is cleared on every completion path;
    /// a store failure reverts to "not submitting" with nothing persisted.
    pub fn submit(
        &mut self,
        draft: &PreOrderDraft,
        session_user: Option<&str>,
        store: &mut dyn PreOrderStore,
    ) -> Result<PreOrderRecord, SubmitError> {
        if self.submitting {
            return Err(SubmitError::AlreadyInFlight);
        }

        let mut record = draft.validate()?;
        record.user_id = session_user.map(String::from);

        self.submitting = true;
        let result = store.insert(&record);
        self.submitting = false;

        match result {
            Ok(()) => Ok(record),
            Err(error) => {
                warn!(%error, "pre-order insert failed");
                Err(SubmitError::Store(error))
            }
        }
    }
}

// ============================================================================
// NewsletterSignup
// ============================================================================

/// Error surfaced to the newsletter form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error("Please enter a valid email")]
    InvalidEmail,

    #[error("a signup is already in flight")]
    AlreadyInFlight,

    #[error("newsletter signup failed")]
    Sink(#[source] StoreError),
}

/// Single-in-flight newsletter signup gate.
///
/// The email check here is the signup form's lighter one (non-empty and
/// containing `@`), not the pre-order rules; the two forms validate
/// differently on purpose.
#[derive(Debug, Clone, Default)]
pub struct NewsletterSignup {
    submitting: bool,
}

impl NewsletterSignup {
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Validates the email and hands it to the sink.
    pub fn submit(
        &mut self,
        email: &str,
        sink: &mut dyn NewsletterSink,
    ) -> Result<(), SignupError> {
        if self.submitting {
            return Err(SignupError::AlreadyInFlight);
        }
        if email.is_empty() || !email.contains('@') {
            return Err(SignupError::InvalidEmail);
        }

        self.submitting = true;
        let result = sink.subscribe(email);
        self.submitting = false;

        result.map_err(|error| {
            warn!(%error, "newsletter signup failed");
            SignupError::Sink(error)
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
