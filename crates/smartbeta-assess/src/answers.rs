//! Collected answers and the points-to-profile mapping.

use std::collections::BTreeMap;

use serde::Serialize;
use smartbeta_traits::{Result, RiskProfile, SmartBetaError};
use tracing::debug;

use crate::questions::{QUESTIONS, question};

/// Highest total still classed as conservative.
const CONSERVATIVE_MAX_POINTS: u32 = 8;

/// Highest total still classed as moderate.
const MODERATE_MAX_POINTS: u32 = 15;

/// Points chosen per question id.
///
/// Every insert is checked against the questionnaire, so an `Answers` value
/// never holds an unknown question or an out-of-range point value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Answers {
    points: BTreeMap<u8, u8>,
}

impl Answers {
    /// No answers yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers given positionally, one point value per question in order.
    ///
    /// # Errors
    ///
    /// Returns [`SmartBetaError::InvalidArgument`] if the count does not match
    /// the questionnaire or a value is out of range.
    pub fn from_points(points: &[u8]) -> Result<Self> {
        if points.len() != QUESTIONS.len() {
            return Err(SmartBetaError::invalid(format!(
                "expected {} answers, got {}",
                QUESTIONS.len(),
                points.len()
            )));
        }
        let mut answers = Self::new();
        for (q, &p) in QUESTIONS.iter().zip(points) {
            answers.answer(q.id, p)?;
        }
        Ok(answers)
    }

    /// Record the points for a question, replacing any earlier answer.
    ///
    /// # Errors
    ///
    /// Returns [`SmartBetaError::InvalidArgument`] for an unknown question or
    /// a point value outside the question's options.
    pub fn answer(&mut self, question_id: u8, points: u8) -> Result<()> {
        let q = question(question_id)
            .ok_or_else(|| SmartBetaError::invalid(format!("unknown question {question_id}")))?;
        let (min, max) = q.points_range();
        if !(min..=max).contains(&points) {
            return Err(SmartBetaError::invalid(format!(
                "question {question_id} accepts {min} to {max} points, got {points}"
            )));
        }
        self.points.insert(question_id, points);
        Ok(())
    }

    /// Record an answer by option identifier, e.g. `(3, "hold")`.
    ///
    /// # Errors
    ///
    /// Returns [`SmartBetaError::InvalidArgument`] for an unknown question or option.
    pub fn select(&mut self, question_id: u8, value: &str) -> Result<()> {
        let q = question(question_id)
            .ok_or_else(|| SmartBetaError::invalid(format!("unknown question {question_id}")))?;
        let option = q.option(value).ok_or_else(|| {
            SmartBetaError::invalid(format!("question {question_id} has no option '{value}'"))
        })?;
        self.answer(question_id, option.points)
    }

    /// Points chosen for a question, if answered.
    #[must_use]
    pub fn get(&self, question_id: u8) -> Option<u8> {
        self.points.get(&question_id).copied()
    }

    /// Whether every question has an answer.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        QUESTIONS.iter().all(|q| self.points.contains_key(&q.id))
    }

    /// Ids of unanswered questions, in order.
    #[must_use]
    pub fn missing(&self) -> Vec<u8> {
        QUESTIONS
            .iter()
            .map(|q| q.id)
            .filter(|id| !self.points.contains_key(id))
            .collect()
    }

    /// Sum of points over answered questions.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.points.values().map(|&p| u32::from(p)).sum()
    }
}

/// Outcome of a completed questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Assessment {
    /// Sum of points.
    pub total_points: u32,
    /// Resulting risk profile.
    pub profile: RiskProfile,
}

/// Map a points total onto a risk profile.
#[must_use]
pub const fn profile_for_points(total: u32) -> RiskProfile {
    if total <= CONSERVATIVE_MAX_POINTS {
        RiskProfile::Conservative
    } else if total <= MODERATE_MAX_POINTS {
        RiskProfile::Moderate
    } else {
        RiskProfile::Aggressive
    }
}

/// Score a completed questionnaire.
///
/// # Errors
///
/// Returns [`SmartBetaError::InvalidArgument`] listing unanswered questions.
pub fn assess(answers: &Answers) -> Result<Assessment> {
    let missing = answers.missing();
    if !missing.is_empty() {
        return Err(SmartBetaError::invalid(format!(
            "unanswered questions: {missing:?}"
        )));
    }
    let total_points = answers.total();
    let profile = profile_for_points(total_points);
    debug!(total_points, %profile, "assessed risk profile");
    Ok(Assessment {
        total_points,
        profile,
    })
}
