use clap::Parser;
use nutrilens_core::domain::common::{
    DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, LLMConfig, NutrilensConfig,
    entities::language::Language,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "nutrilens", version, about = "Food photo and meal plan assistant")]
pub struct Args {
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub gemini_model: String,

    #[arg(long, env = "GEMINI_BASE_URL", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub gemini_base_url: String,

    /// Interface and prompt language (es or en).
    #[arg(long, env = "NUTRILENS_LANGUAGE", default_value = "es")]
    pub language: Language,

    /// Emit logs as JSON lines on stderr.
    #[arg(long, env = "LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

impl From<Args> for NutrilensConfig {
    fn from(args: Args) -> Self {
        NutrilensConfig {
            llm: LLMConfig {
                gemini_api_key: args.gemini_api_key,
                gemini_model: args.gemini_model,
                base_url: args.gemini_base_url,
            },
            language: args.language,
        }
    }
}
