use crate::domain::{
    common::{entities::app_errors::CoreError, normalizer::parse_response},
    meal_plan::entities::{MealPlan, UserProfile},
};

/// Parses and coerces raw oracle text into a [`MealPlan`] for `profile`.
///
/// Fasting details only belong to fasting plans: they are dropped from any
/// other plan so the in-memory value matches the profile that produced it.
pub fn parse_meal_plan(raw: &str, profile: &UserProfile) -> Result<MealPlan, CoreError> {
    let mut plan: MealPlan = parse_response(raw)?;

    if profile.is_fasting() {
        if !plan.has_fasting_details() {
            tracing::warn!("Fasting meal plan came back without fasting details");
        }
    } else if plan.has_fasting_details() {
        tracing::debug!("Dropping fasting details from a {:?} plan", profile.goal);
        plan.fasting_protocol = None;
        plan.fasting_recommendations = None;
        plan.supplements = None;
    }

    Ok(plan)
}
