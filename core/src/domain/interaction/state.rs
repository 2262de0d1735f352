use crate::domain::{
    analysis::entities::AnalysisResult, meal_plan::entities::MealPlan,
    oracle::value_objects::ImageUpload,
};

/// The single UI state record.
///
/// Result and plan are variants rather than independent fields, so they can
/// never be shown together, and the pending image only exists while a
/// clarification is awaited.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InteractionState {
    #[default]
    Idle,
    Loading,
    AwaitingClarification {
        question: String,
        pending_image: ImageUpload,
    },
    ShowingResult(AnalysisResult),
    ShowingPlan(MealPlan),
    Error(String),
}

impl InteractionState {
    pub fn name(&self) -> &'static str {
        match self {
            InteractionState::Idle => "idle",
            InteractionState::Loading => "loading",
            InteractionState::AwaitingClarification { .. } => "awaiting_clarification",
            InteractionState::ShowingResult(_) => "showing_result",
            InteractionState::ShowingPlan(_) => "showing_plan",
            InteractionState::Error(_) => "error",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, InteractionState::Loading)
    }

    pub fn pending_image(&self) -> Option<&ImageUpload> {
        match self {
            InteractionState::AwaitingClarification { pending_image, .. } => Some(pending_image),
            _ => None,
        }
    }

    /// States from which a new image or text analysis may start.
    pub(crate) fn accepts_new_analysis(&self) -> bool {
        matches!(
            self,
            InteractionState::Idle
                | InteractionState::ShowingResult(_)
                | InteractionState::ShowingPlan(_)
        )
    }

    pub(crate) fn accepts_clarification(&self) -> bool {
        matches!(self, InteractionState::AwaitingClarification { .. })
    }

    pub(crate) fn accepts_meal_plan(&self) -> bool {
        !matches!(
            self,
            InteractionState::Loading | InteractionState::AwaitingClarification { .. }
        )
    }
}
