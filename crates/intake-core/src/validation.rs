//! Identifier validation.
//!
//! Record numbers arriving from the desk are checked here before a patient is built. The
//! rules themselves live on [`MrNumber::parse`]; these helpers give the queue and the
//! interpreter a single entry point.

use intake_types::{IdentifierError, MrNumber};

/// Validates a candidate medical record number.
///
/// A candidate is valid when it is exactly six characters long, starts with `MR` and ends
/// with four decimal digits. Leading zeros are allowed and there is no range check.
///
/// # Errors
///
/// Returns the [`IdentifierError`] explaining the first rule the candidate breaks.
pub fn validate_mr_number(candidate: &str) -> Result<MrNumber, IdentifierError> {
    MrNumber::parse(candidate).inspect_err(|err| {
        tracing::debug!(candidate, %err, "rejected medical record number");
    })
}

/// Boolean form of [`validate_mr_number`].
pub fn is_valid_mr_number(candidate: &str) -> bool {
    validate_mr_number(candidate).is_ok()
}
