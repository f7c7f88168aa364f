//! Unacceptable-antigen exclusion rule.

use crate::core::hla::parse_allele_set;

/// Antigen tokens carried by the donor that appear on the recipient's
/// unacceptable list, sorted for stable output.
///
/// Both lists are parsed the same way as HLA allele text (comma-split,
/// trimmed, empty entries dropped), so malformed input degrades to an empty
/// set rather than raising.
#[must_use]
pub fn unacceptable_overlap(recipient_unacceptable: &str, donor_antibodies: &str) -> Vec<String> {
    let unacceptable = parse_allele_set(recipient_unacceptable);
    let mut overlap: Vec<String> = parse_allele_set(donor_antibodies)
        .into_iter()
        .filter(|token| unacceptable.contains(token))
        .map(str::to_string)
        .collect();
    overlap.sort_unstable();
    overlap
}

/// True when any donor antibody token is on the recipient's unacceptable
/// list. A true result excludes the candidate from compatible/incompatible
/// classification entirely.
#[must_use]
pub fn has_exclusion(recipient_unacceptable: &str, donor_antibodies: &str) -> bool {
    !unacceptable_overlap(recipient_unacceptable, donor_antibodies).is_empty()
}

/// Human-readable exclusion reason naming the offending antigens, or `None`
/// when there is no overlap.
#[must_use]
pub fn exclusion_reason(recipient_unacceptable: &str, donor_antibodies: &str) -> Option<String> {
    let overlap = unacceptable_overlap(recipient_unacceptable, donor_antibodies);
    if overlap.is_empty() {
        None
    } else {
        Some(format!(
            "Donor carries unacceptable antigen(s): {}",
            overlap.join(", ")
        ))
    }
}
