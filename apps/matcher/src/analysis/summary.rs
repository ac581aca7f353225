use serde::{Deserialize, Serialize};

/// Quality band of a match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Excellent,
    Good,
    Moderate,
    Low,
}

impl MatchTier {
    /// First band whose floor the score reaches; NaN falls through to `Low`.
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            MatchTier::Excellent
        } else if score >= 60.0 {
            MatchTier::Good
        } else if score >= 40.0 {
            MatchTier::Moderate
        } else {
            MatchTier::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MatchTier::Excellent => "Excellent",
            MatchTier::Good => "Good",
            MatchTier::Moderate => "Moderate",
            MatchTier::Low => "Low",
        }
    }
}

/// Human-readable verdict for a score and the number of missing keywords.
pub fn generate_summary(match_score: f64, missing_count: usize) -> String {
    match MatchTier::from_score(match_score) {
        MatchTier::Excellent => {
            format!("Excellent match; only {missing_count} skills to enhance.")
        }
        MatchTier::Good => {
            format!("Good match; consider adding {missing_count} missing skills.")
        }
        MatchTier::Moderate => {
            format!("Moderate match; {missing_count} key skills missing; tailor further.")
        }
        MatchTier::Low => format!("Low match; {missing_count} critical skills missing."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(MatchTier::from_score(100.0), MatchTier::Excellent);
        assert_eq!(MatchTier::from_score(80.0), MatchTier::Excellent);
        assert_eq!(MatchTier::from_score(79.99), MatchTier::Good);
        assert_eq!(MatchTier::from_score(60.0), MatchTier::Good);
        assert_eq!(MatchTier::from_score(59.99), MatchTier::Moderate);
        assert_eq!(MatchTier::from_score(40.0), MatchTier::Moderate);
        assert_eq!(MatchTier::from_score(39.99), MatchTier::Low);
        assert_eq!(MatchTier::from_score(0.0), MatchTier::Low);
    }

    #[test]
    fn test_nan_is_low() {
        assert_eq!(MatchTier::from_score(f64::NAN), MatchTier::Low);
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            generate_summary(85.0, 2),
            "Excellent match; only 2 skills to enhance."
        );
        assert_eq!(
            generate_summary(65.0, 4),
            "Good match; consider adding 4 missing skills."
        );
        assert_eq!(
            generate_summary(45.5, 7),
            "Moderate match; 7 key skills missing; tailor further."
        );
        assert_eq!(
            generate_summary(12.0, 15),
            "Low match; 15 critical skills missing."
        );
    }

    #[test]
    fn test_label_matches_message_prefix() {
        for score in [95.0, 70.0, 50.0, 10.0] {
            let label = MatchTier::from_score(score).label();
            assert!(generate_summary(score, 1).starts_with(label));
        }
    }
}
