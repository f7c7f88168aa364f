//! Batch evaluation of a candidate donor list.

use serde::{Deserialize, Serialize};

use crate::core::donor::Donor;
use crate::core::recipient::Recipient;
use crate::matching::scoring::{MatchClassification, MatchResult};
use crate::utils::validation::{validate_recipient, ValidationError};

/// Evaluate every candidate donor against one recipient.
///
/// Results come back in input order; no sorting or deduplication happens
/// here (a donor appearing twice produces two results). The call is a pure
/// batch transform: one malformed input fails the whole batch so a caller
/// never receives a silently incomplete report.
///
/// # Errors
///
/// Returns [`ValidationError::PraOutOfRange`] (naming the recipient) when the
/// recipient's PRA is outside 0-100, before any donor is evaluated.
pub fn evaluate_batch(
    recipient: &Recipient,
    donors: &[Donor],
) -> Result<Vec<MatchResult>, ValidationError> {
    validate_recipient(recipient)?;

    Ok(donors
        .iter()
        .map(|donor| MatchResult::evaluate(donor, recipient))
        .collect())
}

/// Derived counts over a result sequence. Pure derivation; consumers may
/// recompute it instead of caching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub total: usize,
    pub compatible: usize,
    pub incompatible: usize,
    pub excluded: usize,

    /// Highest compatible score, absent when no donor is compatible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_score: Option<f64>,
}

impl MatchSummary {
    #[must_use]
    pub fn from_results(results: &[MatchResult]) -> Self {
        let mut summary = Self {
            total: results.len(),
            compatible: 0,
            incompatible: 0,
            excluded: 0,
            best_score: None,
        };

        for result in results {
            match result.classification {
                MatchClassification::Compatible => {
                    summary.compatible += 1;
                    let best = summary.best_score.get_or_insert(result.compatibility_score);
                    if result.compatibility_score > *best {
                        *best = result.compatibility_score;
                    }
                }
                MatchClassification::Incompatible => summary.incompatible += 1,
                MatchClassification::Excluded => summary.excluded += 1,
            }
        }

        summary
    }
}

/// Compatible results ranked by score descending for display.
///
/// The sort is stable, so ties keep their input order.
#[must_use]
pub fn rank_compatible(results: &[MatchResult]) -> Vec<&MatchResult> {
    let mut compatible: Vec<&MatchResult> = results
        .iter()
        .filter(|r| r.classification == MatchClassification::Compatible)
        .collect();
    compatible.sort_by(|a, b| {
        b.compatibility_score
            .partial_cmp(&a.compatibility_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    compatible
}
