//! Human-readable investor profile derived from answers.

use serde::Serialize;
use smartbeta_traits::{Result, RiskProfile};

use crate::{Answers, assess};

/// Investor context handed to downstream narrative generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvestorProfile {
    /// Overall risk profile.
    pub risk_profile: RiskProfile,
    /// Total questionnaire points.
    pub total_points: u32,
    /// Investment goal.
    pub goal: &'static str,
    /// Time horizon.
    pub horizon: &'static str,
    /// Reaction to drawdowns.
    pub risk_tolerance: &'static str,
    /// Investing experience.
    pub experience: &'static str,
    /// Share of income available to invest.
    pub capacity: &'static str,
}

impl InvestorProfile {
    /// Describe a completed questionnaire.
    ///
    /// # Errors
    ///
    /// Returns an error if any question is unanswered.
    pub fn from_answers(answers: &Answers) -> Result<Self> {
        let assessment = assess(answers)?;
        let pick = |id: u8, labels: [&'static str; 4]| {
            let points = answers.get(id).unwrap_or(1).clamp(1, 4);
            labels[usize::from(points - 1)]
        };

        Ok(Self {
            risk_profile: assessment.profile,
            total_points: assessment.total_points,
            goal: pick(
                1,
                [
                    "Capital Preservation",
                    "Regular Income",
                    "Long-term Growth",
                    "Aggressive Growth",
                ],
            ),
            horizon: pick(
                2,
                [
                    "Short-term (Less than 2 years)",
                    "Medium-term (2-5 years)",
                    "Long-term (5-10 years)",
                    "Very Long-term (More than 10 years)",
                ],
            ),
            risk_tolerance: pick(
                3,
                ["Very Conservative", "Conservative", "Moderate", "Aggressive"],
            ),
            experience: pick(4, ["Beginner", "Intermediate", "Advanced", "Expert"]),
            capacity: pick(
                5,
                [
                    "Low (Less than 10% of income)",
                    "Medium (10-20% of income)",
                    "High (20-30% of income)",
                    "Very High (More than 30% of income)",
                ],
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptors() {
        let answers = Answers::from_points(&[3, 4, 2, 1, 2]).unwrap();
        let profile = InvestorProfile::from_answers(&answers).unwrap();
        assert_eq!(profile.risk_profile, RiskProfile::Moderate);
        assert_eq!(profile.total_points, 12);
        assert_eq!(profile.goal, "Long-term Growth");
        assert_eq!(profile.horizon, "Very Long-term (More than 10 years)");
        assert_eq!(profile.risk_tolerance, "Conservative");
        assert_eq!(profile.experience, "Beginner");
        assert_eq!(profile.capacity, "Medium (10-20% of income)");
    }

    #[test]
    fn test_incomplete_answers() {
        let mut answers = Answers::new();
        answers.answer(1, 2).unwrap();
        assert!(InvestorProfile::from_answers(&answers).is_err());
    }
}
