use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    oracle::{
        ports::OracleClient,
        value_objects::{OracleRequest, PromptPart},
    },
};

#[derive(Debug, Clone)]
pub struct GeminiOracleClient {
    api_key: String,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest<'a> {
    contents: Vec<Content>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: &'static str,
    data: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig<'a> {
    response_mime_type: &'static str,
    response_schema: &'a serde_json::Value,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    error: GeminiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorDetail {
    message: String,
}

impl GeminiOracleClient {
    pub fn new(config: &LLMConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: &LLMConfig) -> Self {
        Self {
            api_key: config.gemini_api_key.clone(),
            model_name: config.gemini_model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model_name)
    }

    async fn call_gemini_api(&self, request: GeminiRequest<'_>) -> Result<String, CoreError> {
        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::Transport(e.without_url().to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            let message = match serde_json::from_str::<GeminiErrorBody>(&error_text) {
                Ok(body) => format!("{} ({})", body.error.message, status),
                Err(_) => format!("oracle returned {}", status),
            };
            return Err(CoreError::Transport(message));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::Transport(format!("unreadable oracle response: {}", e.without_url()))
        })?;

        extract_text(gemini_response)
    }
}

fn extract_text(response: GeminiResponse) -> Result<String, CoreError> {
    if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
        tracing::warn!(%reason, "Gemini blocked the prompt");
        return Err(CoreError::Transport(format!("prompt blocked: {}", reason)));
    }

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| CoreError::Transport("No response from oracle".to_string()))?;

    Ok(candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default())
}

fn to_part(part: PromptPart) -> Part {
    match part {
        PromptPart::Text(text) => Part::Text { text },
        PromptPart::InlineImage(image) => Part::InlineData {
            inline_data: InlineData {
                mime_type: image.mime_type.as_str(),
                data: general_purpose::STANDARD.encode(&image.data),
            },
        },
    }
}

impl OracleClient for GeminiOracleClient {
    async fn submit(&self, request: OracleRequest) -> Result<String, CoreError> {
        tracing::debug!(
            model = %self.model_name,
            parts = request.parts.len(),
            temperature = request.sampling.temperature,
            "Calling Gemini"
        );

        let gemini_request = GeminiRequest {
            contents: vec![Content {
                parts: request.parts.into_iter().map(to_part).collect(),
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: request.output_schema,
                temperature: request.sampling.temperature,
            },
        };

        self.call_gemini_api(gemini_request).await
    }
}
