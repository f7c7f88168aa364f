//! Score aggregation for a single donor-recipient pair.

use serde::{Deserialize, Serialize};

use crate::core::blood;
use crate::core::donor::Donor;
use crate::core::recipient::Recipient;
use crate::matching::{antigens, crossmatch, hla};

/// Nominal normalization denominator: 2 alleles for each of the 6 loci.
///
/// This is a fixed simplification carried over from the registry's scoring
/// convention, not derived from the allele counts actually present; a locus
/// may contribute more or fewer than 2 matches.
pub const TOTAL_HLA_ANTIGENS: u32 = 12;

/// Round to two decimal places, half away from zero (half-up for the
/// non-negative scores produced here).
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Per-rule breakdown of a single pair evaluation.
///
/// Every field is computed for every pair: `hla_matches` is reported for
/// transparency even when a gate zeroes the score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchDetails {
    /// Donor blood type may supply the recipient (directed ABO/Rh table).
    pub blood_type_match: bool,

    /// Total allele matches across the six loci, nominally out of
    /// [`TOTAL_HLA_ANTIGENS`].
    pub hla_matches: u32,

    /// Donor crossmatch result equals the recipient requirement.
    pub crossmatch_compatible: bool,

    /// Donor carries an antigen on the recipient's unacceptable list.
    pub has_unacceptable_antigens: bool,

    /// Names the offending antigens when excluded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excluded_reason: Option<String>,
}

/// How a candidate is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchClassification {
    /// Both gates pass and the score is positive.
    Compatible,
    /// A gate failed or the score came out zero.
    Incompatible,
    /// Unacceptable-antigen overlap; takes precedence over everything else.
    Excluded,
}

impl std::fmt::Display for MatchClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Compatible => write!(f, "Compatible"),
            Self::Incompatible => write!(f, "Incompatible"),
            Self::Excluded => write!(f, "Excluded"),
        }
    }
}

/// Result of evaluating one donor against the recipient of a matching run.
///
/// One instance per donor per run; never persisted. The recipient is carried
/// once on the surrounding [`MatchReport`](crate::report::MatchReport) rather
/// than on every result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub donor: Donor,

    /// Compatibility score in [0, 1], rounded to two decimals.
    pub compatibility_score: f64,

    pub details: MatchDetails,

    pub classification: MatchClassification,
}

impl MatchResult {
    /// Evaluate one donor-recipient pair.
    ///
    /// Blood type and crossmatch are hard gates: if either fails the score is
    /// forced to zero. HLA and PRA are graded multipliers applied only when
    /// both gates pass: `score = round2(hla_matches / 12 * (100 - pra) / 100)`.
    ///
    /// The caller must have validated the recipient's PRA range
    /// ([`crate::utils::validation::validate_recipient`]); this function
    /// assumes 0-100 and never clamps.
    #[must_use]
    pub fn evaluate(donor: &Donor, recipient: &Recipient) -> Self {
        let blood_type_match = blood::is_compatible(&donor.blood_type, &recipient.blood_type);

        // Always computed, even when a gate zeroes the score below.
        let hla_matches = hla::total_hla_matches(&donor.hla_typing, &recipient.hla_typing);

        let crossmatch_compatible = crossmatch::is_crossmatch_compatible(
            &donor.crossmatch_result,
            &recipient.crossmatch_requirement,
        );

        let excluded_reason =
            antigens::exclusion_reason(&recipient.unacceptable_antigens, &donor.donor_antibodies);
        let has_unacceptable_antigens = excluded_reason.is_some();

        let compatibility_score = if blood_type_match && crossmatch_compatible {
            let hla_score = f64::from(hla_matches) / f64::from(TOTAL_HLA_ANTIGENS);
            let pra_factor = f64::from(100 - recipient.pra) / 100.0;
            round2(hla_score * pra_factor)
        } else {
            0.0
        };

        let details = MatchDetails {
            blood_type_match,
            hla_matches,
            crossmatch_compatible,
            has_unacceptable_antigens,
            excluded_reason,
        };
        let classification = classify(&details, compatibility_score);

        Self {
            donor: donor.clone(),
            compatibility_score,
            details,
            classification,
        }
    }
}

/// Classify a result. Exclusion is checked first and takes precedence over
/// the score.
#[must_use]
fn classify(details: &MatchDetails, compatibility_score: f64) -> MatchClassification {
    if details.has_unacceptable_antigens {
        MatchClassification::Excluded
    } else if compatibility_score > 0.0 {
        MatchClassification::Compatible
    } else {
        MatchClassification::Incompatible
    }
}
