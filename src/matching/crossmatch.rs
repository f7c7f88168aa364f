//! Crossmatch veto rule.

/// Whether a donor's crossmatch result satisfies the recipient's requirement.
///
/// The comparison is exact, case-sensitive string equality of the lab tokens
/// (e.g. `"Negative" == "Negative"`). This is a binary veto, not a graded
/// signal: any mismatch forces the final score to zero.
#[must_use]
pub fn is_crossmatch_compatible(donor_result: &str, recipient_requirement: &str) -> bool {
    donor_result == recipient_requirement
}
