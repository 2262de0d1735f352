use crate::domain::{
    analysis::{
        entities::{AnalysisOutcome, AnalysisRequest},
        normalizer::parse_analysis,
        prompts::build_oracle_request,
    },
    common::{entities::{app_errors::CoreError, language::Language}, generate_uuid_v7},
    oracle::ports::OracleClient,
};

/// Runs one analysis round: build the prompt, call the oracle, normalize and
/// check the result against the invariant of the request's mode.
pub async fn analyze<O>(
    oracle: &O,
    language: Language,
    request: &AnalysisRequest,
) -> Result<AnalysisOutcome, CoreError>
where
    O: OracleClient,
{
    let request_id = generate_uuid_v7();
    let kind = request.kind();
    tracing::info!(%request_id, mode = %kind, %language, "Submitting food analysis");

    let oracle_request = build_oracle_request(language, request);
    let raw_response = oracle.submit(oracle_request).await.map_err(|e| {
        tracing::error!(%request_id, "Food analysis call failed: {}", e);
        e
    })?;

    let result = parse_analysis(&raw_response)?;
    let outcome = result.into_outcome(kind).map_err(|e| {
        tracing::error!(%request_id, "Food analysis rejected: {}", e);
        e
    })?;

    match &outcome {
        AnalysisOutcome::NeedsClarification { .. } => {
            tracing::info!(%request_id, "Oracle asked for clarification")
        }
        AnalysisOutcome::Complete(result) => tracing::info!(
            %request_id,
            total_calories = result.total_calories,
            "Food analysis completed"
        ),
    }

    Ok(outcome)
}
