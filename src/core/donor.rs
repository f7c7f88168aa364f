use serde::{Deserialize, Serialize};

use crate::core::hla::HlaTyping;

/// Lifecycle status of a donor record. Managed by the registry, not the
/// matching engine; only Available donors may be submitted as candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DonorStatus {
    #[default]
    Available,
    Utilized,
}

impl std::fmt::Display for DonorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Available => write!(f, "Available"),
            Self::Utilized => write!(f, "Utilized"),
        }
    }
}

/// A donor record as materialized by the registry.
///
/// `blood_type` is kept as the raw intake token; the matching engine fails
/// closed on anything outside the eight ABO/Rh values. Clinical fields are
/// carried for reporting and never consulted by scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Donor {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mrn: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national_id: Option<String>,

    pub full_name: String,

    pub blood_type: String,

    #[serde(default)]
    pub hla_typing: HlaTyping,

    /// Laboratory crossmatch result token (e.g. "Negative", "Positive").
    pub crossmatch_result: String,

    /// Comma-separated antigen tokens the donor carries.
    #[serde(default)]
    pub donor_antibodies: String,

    #[serde(default)]
    pub status: DonorStatus,

    // === Clinical fields, not used in scoring ===
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serum_creatinine: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub egfr: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viral_screening: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cmv_status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Donor {
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.status == DonorStatus::Available
    }
}
