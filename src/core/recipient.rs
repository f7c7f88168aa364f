use serde::{Deserialize, Serialize};

use crate::core::hla::HlaTyping;

/// A recipient record as materialized by the registry. Read-only during
/// matching.
///
/// `pra` is the panel-reactive-antibody percentage; values outside 0-100 are
/// rejected at the ingestion boundary before any scoring happens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipient {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mrn: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national_id: Option<String>,

    pub full_name: String,

    pub blood_type: String,

    #[serde(default)]
    pub hla_typing: HlaTyping,

    /// Panel-reactive-antibody percentage, 0-100.
    pub pra: i32,

    /// Required crossmatch result token; donors whose result differs are
    /// vetoed.
    pub crossmatch_requirement: String,

    /// Comma-separated antigen tokens the recipient cannot tolerate.
    #[serde(default)]
    pub unacceptable_antigens: String,

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
