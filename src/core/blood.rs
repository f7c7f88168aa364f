use serde::{Deserialize, Serialize};

/// ABO/Rh blood group, the eight clinically used combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BloodType {
    #[serde(rename = "O-")]
    ONeg,
    #[serde(rename = "O+")]
    OPos,
    #[serde(rename = "A-")]
    ANeg,
    #[serde(rename = "A+")]
    APos,
    #[serde(rename = "B-")]
    BNeg,
    #[serde(rename = "B+")]
    BPos,
    #[serde(rename = "AB-")]
    AbNeg,
    #[serde(rename = "AB+")]
    AbPos,
}

/// All blood types, in conventional display order.
pub const ALL_BLOOD_TYPES: [BloodType; 8] = [
    BloodType::ONeg,
    BloodType::OPos,
    BloodType::ANeg,
    BloodType::APos,
    BloodType::BNeg,
    BloodType::BPos,
    BloodType::AbNeg,
    BloodType::AbPos,
];

impl BloodType {
    /// Parse a blood type token (e.g. `"O-"`, `"AB+"`).
    /// Returns `None` for anything not in the closed eight-value set.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim() {
            "O-" => Some(Self::ONeg),
            "O+" => Some(Self::OPos),
            "A-" => Some(Self::ANeg),
            "A+" => Some(Self::APos),
            "B-" => Some(Self::BNeg),
            "B+" => Some(Self::BPos),
            "AB-" => Some(Self::AbNeg),
            "AB+" => Some(Self::AbPos),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ONeg => "O-",
            Self::OPos => "O+",
            Self::ANeg => "A-",
            Self::APos => "A+",
            Self::BNeg => "B-",
            Self::BPos => "B+",
            Self::AbNeg => "AB-",
            Self::AbPos => "AB+",
        }
    }

    /// Recipient types this donor type may safely supply to, per the
    /// standard directed ABO/Rh donation rules.
    #[must_use]
    pub fn compatible_recipients(self) -> &'static [BloodType] {
        use BloodType::{AbNeg, AbPos, ANeg, APos, BNeg, BPos, ONeg, OPos};
        match self {
            // Universal donor
            ONeg => &[ONeg, OPos, ANeg, APos, BNeg, BPos, AbNeg, AbPos],
            OPos => &[OPos, APos, BPos, AbPos],
            ANeg => &[ANeg, APos, AbNeg, AbPos],
            APos => &[APos, AbPos],
            BNeg => &[BNeg, BPos, AbNeg, AbPos],
            BPos => &[BPos, AbPos],
            AbNeg => &[AbNeg, AbPos],
            // Universal recipient, can only donate to itself
            AbPos => &[AbPos],
        }
    }

    /// Whether this donor type may donate to the given recipient type.
    #[must_use]
    pub fn can_donate_to(self, recipient: BloodType) -> bool {
        self.compatible_recipients().contains(&recipient)
    }
}

impl std::fmt::Display for BloodType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Token-level compatibility check used by the matching engine.
///
/// Records carry blood types as raw tokens; an unrecognized token on either
/// side fails closed (never compatible) rather than erroring, so bad data can
/// only make a pair incompatible, not silently compatible.
#[must_use]
pub fn is_compatible(donor_token: &str, recipient_token: &str) -> bool {
    match (BloodType::parse(donor_token), BloodType::parse(recipient_token)) {
        (Some(donor), Some(recipient)) => donor.can_donate_to(recipient),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_universal_donor() {
        for recipient in ALL_BLOOD_TYPES {
            assert!(
                BloodType::ONeg.can_donate_to(recipient),
                "O- should donate to {recipient}"
            );
        }
    }

    #[test]
    fn test_universal_recipient() {
        for donor in ALL_BLOOD_TYPES {
            assert!(
                donor.can_donate_to(BloodType::AbPos),
                "{donor} should donate to AB+"
            );
        }
    }

    #[test]
    fn test_ab_pos_donates_only_to_self() {
        assert!(BloodType::AbPos.can_donate_to(BloodType::AbPos));
        for recipient in ALL_BLOOD_TYPES {
            if recipient != BloodType::AbPos {
                assert!(!BloodType::AbPos.can_donate_to(recipient));
            }
        }
    }

    #[test]
    fn test_rh_direction() {
        // Rh-negative can donate to Rh-positive of the same ABO group
        assert!(BloodType::ANeg.can_donate_to(BloodType::APos));
        assert!(BloodType::BNeg.can_donate_to(BloodType::BPos));
        // ... but not the other way around
        assert!(!BloodType::APos.can_donate_to(BloodType::ANeg));
        assert!(!BloodType::OPos.can_donate_to(BloodType::ONeg));
    }

    #[test]
    fn test_abo_mismatch() {
        assert!(!BloodType::APos.can_donate_to(BloodType::BPos));
        assert!(!BloodType::BPos.can_donate_to(BloodType::APos));
        assert!(!BloodType::APos.can_donate_to(BloodType::OPos));
    }

    #[test]
    fn test_full_table_against_canonical_counts() {
        // O-:8, O+:4, A-:4, A+:2, B-:4, B+:2, AB-:2, AB+:1
        let expected = [8, 4, 4, 2, 4, 2, 2, 1];
        for (blood_type, count) in ALL_BLOOD_TYPES.iter().zip(expected) {
            assert_eq!(
                blood_type.compatible_recipients().len(),
                count,
                "unexpected recipient count for {blood_type}"
            );
        }
    }

    #[test]
    fn test_parse_round_trip() {
        for blood_type in ALL_BLOOD_TYPES {
            assert_eq!(BloodType::parse(blood_type.as_str()), Some(blood_type));
        }
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(BloodType::parse(" O- "), Some(BloodType::ONeg));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(BloodType::parse(""), None);
        assert_eq!(BloodType::parse("C+"), None);
        assert_eq!(BloodType::parse("o-"), None); // case-sensitive
        assert_eq!(BloodType::parse("AB"), None);
    }

    #[test]
    fn test_token_compatibility_fails_closed() {
        assert!(is_compatible("O-", "AB+"));
        assert!(!is_compatible("AB+", "O-"));
        // Unknown tokens are never compatible
        assert!(!is_compatible("X+", "AB+"));
        assert!(!is_compatible("O-", "unknown"));
        assert!(!is_compatible("", ""));
    }

    #[test]
    fn test_serde_tokens() {
        let json = serde_json::to_string(&BloodType::AbNeg).unwrap();
        assert_eq!(json, "\"AB-\"");
        let parsed: BloodType = serde_json::from_str("\"O+\"").unwrap();
        assert_eq!(parsed, BloodType::OPos);
    }
}
