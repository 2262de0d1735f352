use crate::domain::{
    common::{entities::{app_errors::CoreError, language::Language}, generate_uuid_v7},
    meal_plan::{
        entities::{MealPlan, UserProfile},
        normalizer::parse_meal_plan,
        prompts::build_oracle_request,
    },
    oracle::ports::OracleClient,
};

/// Validates the profile, asks the oracle for a plan and normalizes it.
pub async fn generate_meal_plan<O>(
    oracle: &O,
    language: Language,
    profile: UserProfile,
) -> Result<MealPlan, CoreError>
where
    O: OracleClient,
{
    let profile = profile.into_validated()?;
    let request_id = generate_uuid_v7();
    tracing::info!(
        %request_id,
        goal = ?profile.goal,
        fasting_type = ?profile.fasting_type.filter(|_| profile.is_fasting()),
        %language,
        "Submitting meal plan request"
    );

    let raw_response = oracle
        .submit(build_oracle_request(&profile, language))
        .await
        .map_err(|e| {
            tracing::error!(%request_id, "Meal plan call failed: {}", e);
            e
        })?;

    let plan = parse_meal_plan(&raw_response, &profile)?;
    tracing::info!(
        %request_id,
        days = plan.plan.len(),
        meals = plan.total_meals(),
        "Meal plan generated"
    );

    Ok(plan)
}
