//! Ingestion-boundary validation.
//!
//! Malformed percentages and ineligible donors are caller errors and are
//! rejected before any scoring happens, so a clinical report is never built
//! from silently clamped or silently skipped records.

use crate::core::donor::Donor;
use crate::core::recipient::Recipient;

/// Maximum number of donors accepted in a single batch.
pub const MAX_BATCH_DONORS: usize = 10_000;

/// Typed validation failures surfaced to batch callers.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("recipient {recipient_id}: PRA must be between 0 and 100, got {pra}")]
    PraOutOfRange { recipient_id: String, pra: i32 },

    #[error("donor {donor_id} is not available for matching (status: {status})")]
    DonorNotAvailable { donor_id: String, status: String },

    #[error("{kind} record has an empty id")]
    EmptyId { kind: &'static str },

    #[error("batch too large: {count} donors exceeds maximum of {MAX_BATCH_DONORS}")]
    TooManyDonors { count: usize },
}

/// Validate the recipient side of a matching run.
///
/// # Errors
///
/// Returns [`ValidationError::PraOutOfRange`] when `pra` is outside 0-100 and
/// [`ValidationError::EmptyId`] when the record has no identifier.
pub fn validate_recipient(recipient: &Recipient) -> Result<(), ValidationError> {
    if recipient.id.trim().is_empty() {
        return Err(ValidationError::EmptyId { kind: "recipient" });
    }
    if !(0..=100).contains(&recipient.pra) {
        return Err(ValidationError::PraOutOfRange {
            recipient_id: recipient.id.clone(),
            pra: recipient.pra,
        });
    }
    Ok(())
}

/// Validate a candidate donor list before it reaches the engine.
///
/// The engine assumes only eligible donors are passed in; the availability
/// gate lives here at the boundary.
///
/// # Errors
///
/// Returns an error naming the first offending donor, or
/// [`ValidationError::TooManyDonors`] when the batch exceeds
/// [`MAX_BATCH_DONORS`].
pub fn validate_donors(donors: &[Donor]) -> Result<(), ValidationError> {
    if donors.len() > MAX_BATCH_DONORS {
        return Err(ValidationError::TooManyDonors {
            count: donors.len(),
        });
    }
    for donor in donors {
        if donor.id.trim().is_empty() {
            return Err(ValidationError::EmptyId { kind: "donor" });
        }
        if !donor.is_available() {
            return Err(ValidationError::DonorNotAvailable {
                donor_id: donor.id.clone(),
                status: donor.status.to_string(),
            });
        }
    }
    Ok(())
}
