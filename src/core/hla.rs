use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// The six HLA loci compared during matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HlaLocus {
    A,
    B,
    C,
    Dr,
    Dq,
    Dp,
}

/// All loci, in the order they appear on lab reports.
pub const ALL_LOCI: [HlaLocus; 6] = [
    HlaLocus::A,
    HlaLocus::B,
    HlaLocus::C,
    HlaLocus::Dr,
    HlaLocus::Dq,
    HlaLocus::Dp,
];

impl HlaLocus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::Dr => "DR",
            Self::Dq => "DQ",
            Self::Dp => "DP",
        }
    }
}

impl std::fmt::Display for HlaLocus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HLA-{}", self.as_str())
    }
}

/// HLA typing as captured at intake: free-text, comma-separated allele
/// tokens per locus. An empty string means the locus was not typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HlaTyping {
    #[serde(default)]
    pub hla_a: String,
    #[serde(default)]
    pub hla_b: String,
    #[serde(default)]
    pub hla_c: String,
    #[serde(default)]
    pub hla_dr: String,
    #[serde(default)]
    pub hla_dq: String,
    #[serde(default)]
    pub hla_dp: String,
}

impl HlaTyping {
    /// Raw allele text for a locus.
    #[must_use]
    pub fn locus(&self, locus: HlaLocus) -> &str {
        match locus {
            HlaLocus::A => &self.hla_a,
            HlaLocus::B => &self.hla_b,
            HlaLocus::C => &self.hla_c,
            HlaLocus::Dr => &self.hla_dr,
            HlaLocus::Dq => &self.hla_dq,
            HlaLocus::Dp => &self.hla_dp,
        }
    }

    /// True when no locus holds any allele token.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        ALL_LOCI
            .iter()
            .all(|&locus| parse_allele_set(self.locus(locus)).is_empty())
    }
}

/// Parse a free-text allele list into a token set.
///
/// Tokens are comma-separated and whitespace-trimmed; empty entries are
/// dropped and duplicates collapse (a token repeated in input counts once).
/// The same parsing applies to antigen and antibody lists.
#[must_use]
pub fn parse_allele_set(text: &str) -> HashSet<&str> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}
