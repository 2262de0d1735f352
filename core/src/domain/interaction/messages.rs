use crate::domain::common::entities::{app_errors::CoreError, language::Language};

struct ErrorMessages {
    analysis: &'static str,
    api: &'static str,
    unexpected_format: &'static str,
    analysis_failed: &'static str,
    image_not_found: &'static str,
    unsupported_image: &'static str,
    invalid_profile: &'static str,
}

const ES: ErrorMessages = ErrorMessages {
    analysis: "Error en el análisis",
    api: "Error de API",
    unexpected_format: "la respuesta tiene un formato inesperado",
    analysis_failed: "no se pudo completar el análisis",
    image_not_found: "No se encontró la imagen. Por favor, súbela de nuevo.",
    unsupported_image: "solo se admiten imágenes PNG o JPEG",
    invalid_profile: "perfil no válido",
};

const EN: ErrorMessages = ErrorMessages {
    analysis: "Analysis error",
    api: "API Error",
    unexpected_format: "the response had an unexpected format",
    analysis_failed: "the analysis could not be completed",
    image_not_found: "Image not found. Please upload it again.",
    unsupported_image: "only PNG or JPEG images are supported",
    invalid_profile: "invalid profile",
};

/// User-facing text for an error that ended an interaction.
pub fn error_message(error: &CoreError, language: Language) -> String {
    let t = match language {
        Language::Es => &ES,
        Language::En => &EN,
    };

    match error {
        CoreError::Transport(message) => format!("{}: {}: {}", t.analysis, t.api, message),
        CoreError::MalformedResponse(_) => format!("{}: {}", t.analysis, t.unexpected_format),
        CoreError::AnalysisContract(_) => format!("{}: {}", t.analysis, t.analysis_failed),
        CoreError::MissingInput => t.image_not_found.to_string(),
        CoreError::UnsupportedImage => format!("{}: {}", t.analysis, t.unsupported_image),
        CoreError::InvalidProfile(reason) => {
            format!("{}: {}: {}", t.analysis, t.invalid_profile, reason)
        }
    }
}
