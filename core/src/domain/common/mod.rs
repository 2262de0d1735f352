use uuid::Uuid;

use crate::domain::common::entities::language::Language;

pub mod coerce;
pub mod entities;
pub mod normalizer;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Clone, Debug)]
pub struct NutrilensConfig {
    pub llm: LLMConfig,
    pub language: Language,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub base_url: String,
}

impl LLMConfig {
    pub fn new(gemini_api_key: String) -> Self {
        Self {
            gemini_api_key,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
        }
    }
}

/// Correlation id attached to every oracle call in the logs.
pub fn generate_uuid_v7() -> Uuid {
    Uuid::now_v7()
}
