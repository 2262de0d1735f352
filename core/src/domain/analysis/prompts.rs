//! Instruction text for food analysis, one table per language.
//!
//! Builders only pick a table and fill the `{input}` placeholder; the user's
//! text is embedded verbatim.

use crate::domain::{
    analysis::{
        entities::AnalysisRequest,
        schema::analysis_schema,
    },
    common::entities::language::Language,
    oracle::value_objects::{OracleRequest, PromptPart, SamplingConfig},
};

const INPUT_PLACEHOLDER: &str = "{input}";

#[derive(Debug)]
pub struct AnalysisPrompts {
    pub expert: &'static str,
    pub analyze_image: &'static str,
    pub identify_first: &'static str,
    pub with_clarification: &'static str,
    pub from_description: &'static str,
    pub json_only: &'static str,
}

const ES: AnalysisPrompts = AnalysisPrompts {
    expert: "Actúa como un nutricionista experto.",
    analyze_image: "Analiza la imagen de esta comida.",
    identify_first: "1. Primero decide si puedes identificar el plato con seguridad.
2. Si la imagen es ambigua, no hagas el análisis: responde solo con {\"needsClarification\": true, \"clarificationQuestion\": \"¿Podrías describir qué plato es este?\"} y adapta la pregunta si tienes alguna sospecha.
3. Si el plato es claro, haz un análisis completo con desglose nutricional detallado (vitaminas, minerales y ácidos grasos). En ese caso 'needsClarification' debe ser false.",
    with_clarification: "Analiza la imagen de esta comida teniendo en cuenta la aclaración del usuario: \"{input}\". Haz un análisis completo con desglose nutricional detallado (vitaminas, minerales y ácidos grasos). No pidas más aclaraciones: 'needsClarification' debe ser false.",
    from_description: "Analiza esta descripción de comida: \"{input}\". Haz un análisis completo con desglose nutricional detallado (vitaminas, minerales y ácidos grasos). Da la descripción por clara y analiza directamente: 'needsClarification' debe ser false.",
    json_only: "Devuelve únicamente el objeto JSON.",
};

const EN: AnalysisPrompts = AnalysisPrompts {
    expert: "Act as an expert nutritionist.",
    analyze_image: "Analyze the image of this meal.",
    identify_first: "1. First decide whether you can identify the dish with certainty.
2. If the image is ambiguous, do not analyze it: respond only with {\"needsClarification\": true, \"clarificationQuestion\": \"Could you describe what this dish is?\"} and adapt the question if you have a guess.
3. If the dish is clear, perform a complete analysis with a detailed nutritional breakdown (vitamins, minerals and fatty acids). In that case 'needsClarification' must be false.",
    with_clarification: "Analyze the image of this meal taking the user's clarification into account: \"{input}\". Perform a complete analysis with a detailed nutritional breakdown (vitamins, minerals and fatty acids). Do not ask for further clarification: 'needsClarification' must be false.",
    from_description: "Analyze this meal description: \"{input}\". Perform a complete analysis with a detailed nutritional breakdown (vitamins, minerals and fatty acids). Treat the description as clear and analyze it directly: 'needsClarification' must be false.",
    json_only: "Return only the JSON object.",
};

pub fn prompts_for(language: Language) -> &'static AnalysisPrompts {
    match language {
        Language::Es => &ES,
        Language::En => &EN,
    }
}

pub fn build_analysis_prompt(language: Language, request: &AnalysisRequest) -> String {
    let t = prompts_for(language);

    match request {
        AnalysisRequest::ImageOnly { .. } => format!(
            "{} {}\n{}\n{}",
            t.expert, t.analyze_image, t.identify_first, t.json_only
        ),
        AnalysisRequest::ImageWithClarification { clarification, .. } => format!(
            "{} {}\n{}",
            t.expert,
            t.with_clarification.replace(INPUT_PLACEHOLDER, clarification),
            t.json_only
        ),
        AnalysisRequest::TextDescription { text } => format!(
            "{} {}\n{}",
            t.expert,
            t.from_description.replace(INPUT_PLACEHOLDER, text),
            t.json_only
        ),
    }
}

/// Assembles the oracle call: image first when there is one, then the instructions.
pub fn build_oracle_request(language: Language, request: &AnalysisRequest) -> OracleRequest {
    let mut parts = Vec::with_capacity(2);
    if let Some(image) = request.image() {
        parts.push(PromptPart::InlineImage(image.clone()));
    }
    parts.push(PromptPart::Text(build_analysis_prompt(language, request)));

    OracleRequest {
        parts,
        output_schema: analysis_schema(),
        sampling: SamplingConfig::ANALYSIS,
    }
}
