//! Per-locus HLA allele comparison.

use crate::core::hla::{parse_allele_set, HlaLocus, HlaTyping, ALL_LOCI};

/// Count allele tokens present on both sides of one locus.
///
/// Both inputs are comma-split, trimmed token sets; the result is the set
/// intersection size, so a token repeated in the input counts once. Empty or
/// untyped loci contribute zero.
#[must_use]
pub fn compare_locus(donor_alleles: &str, recipient_alleles: &str) -> usize {
    let donor_set = parse_allele_set(donor_alleles);
    let recipient_set = parse_allele_set(recipient_alleles);
    donor_set.intersection(&recipient_set).count()
}

/// Total match count across all six loci.
///
/// Bounded in practice by the number of tokens entered per locus; the
/// nominal denominator used for normalization is
/// [`TOTAL_HLA_ANTIGENS`](crate::matching::scoring::TOTAL_HLA_ANTIGENS).
#[must_use]
pub fn total_hla_matches(donor: &HlaTyping, recipient: &HlaTyping) -> u32 {
    let total: usize = ALL_LOCI
        .iter()
        .map(|&locus| locus_matches(donor, recipient, locus))
        .sum();
    u32::try_from(total).unwrap_or(u32::MAX)
}

/// Match count for a single locus of two typings.
#[must_use]
pub fn locus_matches(donor: &HlaTyping, recipient: &HlaTyping, locus: HlaLocus) -> usize {
    compare_locus(donor.locus(locus), recipient.locus(locus))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_locus_counts_intersection() {
        assert_eq!(compare_locus("A1,A2", "A1"), 1);
        assert_eq!(compare_locus("A1,A2", "A1,A2"), 2);
        assert_eq!(compare_locus("A1,A2", "A3,A4"), 0);
    }

    #[test]
    fn test_compare_locus_empty_sides() {
        assert_eq!(compare_locus("", "A1"), 0);
        assert_eq!(compare_locus("A1", ""), 0);
        assert_eq!(compare_locus("", ""), 0);
    }

    #[test]
    fn test_compare_locus_trims_and_dedups() {
        // Repeated tokens count once (set, not multiset)
        assert_eq!(compare_locus("A1,A1,A1", "A1"), 1);
        assert_eq!(compare_locus(" A1 , A2 ", "A2,  A1"), 2);
    }

    #[test]
    fn test_compare_locus_symmetric() {
        let pairs = [
            ("A1,A2", "A2,A3"),
            ("", "B7"),
            ("DR15,DR51", "DR51"),
            ("A1, A1", "A1"),
        ];
        for (x, y) in pairs {
            assert_eq!(compare_locus(x, y), compare_locus(y, x));
        }
    }

    #[test]
    fn test_total_hla_matches() {
        let donor = HlaTyping {
            hla_a: "A1,A2".to_string(),
            hla_b: "B7".to_string(),
            hla_dr: "DR15".to_string(),
            ..HlaTyping::default()
        };
        let recipient = HlaTyping {
            hla_a: "A1".to_string(),
            hla_b: "B7,B8".to_string(),
            hla_dr: "DR15".to_string(),
            ..HlaTyping::default()
        };
        // A1, B7, DR15
        assert_eq!(total_hla_matches(&donor, &recipient), 3);
    }

    #[test]
    fn test_total_may_exceed_nominal_denominator() {
        // Free-text loci can carry more than 2 tokens; the total is not
        // capped at 12, only normalized against it downstream
        let typing = HlaTyping {
            hla_a: "A1,A2,A3".to_string(),
            hla_b: "B7,B8,B27".to_string(),
            hla_c: "Cw1,Cw2,Cw7".to_string(),
            hla_dr: "DR1,DR15,DR51".to_string(),
            hla_dq: "DQ2,DQ6".to_string(),
            hla_dp: "DP1,DP4".to_string(),
        };
        assert_eq!(total_hla_matches(&typing, &typing.clone()), 16);
    }

    #[test]
    fn test_total_hla_matches_empty_typings() {
        assert_eq!(
            total_hla_matches(&HlaTyping::default(), &HlaTyping::default()),
            0
        );
    }

    #[test]
    fn test_loci_counted_independently() {
        // Same token on different loci must not cross-match
        let donor = HlaTyping {
            hla_a: "X1".to_string(),
            ..HlaTyping::default()
        };
        let recipient = HlaTyping {
            hla_b: "X1".to_string(),
            ..HlaTyping::default()
        };
        assert_eq!(total_hla_matches(&donor, &recipient), 0);
    }
}
