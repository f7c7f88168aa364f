//! Report envelope around a matching run.
//!
//! Rendering (PDF, print) belongs to external consumers; this module only
//! assembles the structured payload they read: the recipient, the result
//! sequence in input order, the derived summary, and report metadata.
//! The report ID comes from an injected [`ReportIdSource`] so output is
//! reproducible in tests instead of depending on ambient randomness.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::recipient::Recipient;
use crate::matching::engine::MatchSummary;
use crate::matching::scoring::MatchResult;

/// Supplies short report identifiers.
pub trait ReportIdSource {
    fn next_id(&mut self) -> String;
}

/// Derives an 8-character uppercase hex ID from the clock.
#[derive(Debug, Default)]
pub struct TimestampIdSource;

impl ReportIdSource for TimestampIdSource {
    fn next_id(&mut self) -> String {
        let now = Utc::now();
        let nanos = u64::from(now.timestamp_subsec_nanos());
        let secs = now.timestamp().unsigned_abs();
        let mixed = secs.wrapping_mul(0x9E37_79B9).wrapping_add(nanos);
        format!("{:08X}", mixed & 0xFFFF_FFFF)
    }
}

/// Returns the same fixed ID every time. For tests and reproducible runs.
#[derive(Debug, Clone)]
pub struct FixedIdSource(pub String);

impl ReportIdSource for FixedIdSource {
    fn next_id(&mut self) -> String {
        self.0.clone()
    }
}

/// The structured payload consumed by report and summary views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub report_id: String,
    pub generated_at: DateTime<Utc>,
    pub recipient: Recipient,
    /// One result per submitted donor, in input order.
    pub results: Vec<MatchResult>,
    pub summary: MatchSummary,
}

impl MatchReport {
    /// Assemble a report from an evaluated batch. The summary is derived
    /// here; the result order is left untouched.
    #[must_use]
    pub fn build(
        recipient: Recipient,
        results: Vec<MatchResult>,
        id_source: &mut dyn ReportIdSource,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let summary = MatchSummary::from_results(&results);
        Self {
            report_id: id_source.next_id(),
            generated_at,
            recipient,
            results,
            summary,
        }
    }
}
