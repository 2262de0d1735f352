use crate::domain::{
    analysis::entities::{AnalysisKind, AnalysisOutcome, AnalysisResult},
    common::{entities::app_errors::CoreError, normalizer::parse_response},
};

/// Parses and coerces raw oracle text into an [`AnalysisResult`].
pub fn parse_analysis(raw: &str) -> Result<AnalysisResult, CoreError> {
    parse_response(raw)
}

impl AnalysisResult {
    /// Applies the invariant of the call mode that produced this result.
    ///
    /// A result is either a clarification request with a question (bare images
    /// only) or a complete analysis with calories, health level and ingredients.
    pub fn into_outcome(self, kind: AnalysisKind) -> Result<AnalysisOutcome, CoreError> {
        if self.needs_clarification {
            if !kind.allows_clarification() {
                return Err(CoreError::AnalysisContract(format!(
                    "{} analysis asked for clarification",
                    kind
                )));
            }

            return match self.clarification_question {
                Some(question) if !question.trim().is_empty() => {
                    Ok(AnalysisOutcome::NeedsClarification { question })
                }
                _ => Err(CoreError::AnalysisContract(
                    "clarification requested without a question".to_string(),
                )),
            };
        }

        if self.total_calories.is_none() {
            return Err(CoreError::AnalysisContract(format!(
                "{} analysis is missing totalCalories",
                kind
            )));
        }
        if self.health_level.is_none() {
            return Err(CoreError::AnalysisContract(format!(
                "{} analysis is missing healthLevel",
                kind
            )));
        }
        if self.ingredients.is_none() {
            return Err(CoreError::AnalysisContract(format!(
                "{} analysis is missing ingredients",
                kind
            )));
        }

        Ok(AnalysisOutcome::Complete(self))
    }
}
