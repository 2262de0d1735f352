use crate::{
    domain::{common::NutrilensConfig, interaction::InteractionController},
    infrastructure::llm::GeminiOracleClient,
};

pub type NutrilensController = InteractionController<GeminiOracleClient>;

/// Wires the Gemini adapter into a fresh controller.
pub fn create_controller(config: &NutrilensConfig) -> NutrilensController {
    let oracle = GeminiOracleClient::new(&config.llm);
    tracing::info!(
        model = oracle.model_name(),
        language = %config.language,
        "Nutrilens controller ready"
    );
    InteractionController::new(oracle)
}
