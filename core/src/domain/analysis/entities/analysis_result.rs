use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::common::{
    coerce,
    entities::language::Language,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(default, deserialize_with = "coerce::flag")]
    pub needs_clarification: bool,
    #[serde(
        default,
        deserialize_with = "coerce::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub clarification_question: Option<String>,
    #[serde(
        default,
        deserialize_with = "coerce::optional_integer",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_calories: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_level: Option<HealthLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<Ingredient>>,
    #[serde(
        default,
        deserialize_with = "coerce::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub recommendation: Option<String>,
    #[serde(default, deserialize_with = "coerce::list")]
    pub healthy_alternatives: Vec<HealthyAlternative>,
}

/// What a normalized analysis turned out to be.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    NeedsClarification { question: String },
    Complete(AnalysisResult),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    #[serde(deserialize_with = "coerce::text")]
    pub name: String,
    #[serde(deserialize_with = "coerce::integer")]
    pub calories: i64,
    #[serde(default, deserialize_with = "coerce::list")]
    pub nutrients: Vec<Nutrient>,
    #[serde(default, deserialize_with = "coerce::list")]
    pub vitamins: Vec<Nutrient>,
    #[serde(default, deserialize_with = "coerce::list")]
    pub minerals: Vec<Nutrient>,
    #[serde(default, deserialize_with = "coerce::list")]
    pub fatty_acids: Vec<Nutrient>,
}

/// A named quantity. The amount is free-form ("12g", "15% DV") and never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nutrient {
    #[serde(deserialize_with = "coerce::text")]
    pub name: String,
    #[serde(default, deserialize_with = "coerce::text")]
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthyAlternative {
    #[serde(deserialize_with = "coerce::text")]
    pub name: String,
    #[serde(default, deserialize_with = "coerce::text")]
    pub description: String,
}

/// Health classification of a dish.
///
/// The wire literals are the Spanish labels declared in the output schema.
/// English and unaccented spellings are folded into the same variants; anything
/// else is kept verbatim in `Unrecognized` and styled as `Moderate`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HealthLevel {
    Healthy,
    Moderate,
    Unhealthy,
    Unrecognized(String),
}

impl HealthLevel {
    pub const HEALTHY: &'static str = "Saludable";
    pub const MODERATE: &'static str = "Moderado";
    pub const UNHEALTHY: &'static str = "Poco Saludable";

    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "saludable" | "healthy" => HealthLevel::Healthy,
            "moderado" | "moderate" => HealthLevel::Moderate,
            "poco saludable" | "poco_saludable" | "no saludable" | "unhealthy" => {
                HealthLevel::Unhealthy
            }
            _ => HealthLevel::Unrecognized(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            HealthLevel::Healthy => Self::HEALTHY,
            HealthLevel::Moderate => Self::MODERATE,
            HealthLevel::Unhealthy => Self::UNHEALTHY,
            HealthLevel::Unrecognized(raw) => raw.as_str(),
        }
    }

    /// Level used for styling. Unrecognized values display as `Moderate`.
    pub fn display_level(&self) -> HealthLevel {
        match self {
            HealthLevel::Healthy => HealthLevel::Healthy,
            HealthLevel::Unhealthy => HealthLevel::Unhealthy,
            HealthLevel::Moderate | HealthLevel::Unrecognized(_) => HealthLevel::Moderate,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, HealthLevel::Unrecognized(_))
    }

    pub fn label(&self, language: Language) -> &'static str {
        match (self.display_level(), language) {
            (HealthLevel::Healthy, Language::Es) => "Saludable",
            (HealthLevel::Healthy, Language::En) => "Healthy",
            (HealthLevel::Unhealthy, Language::Es) => "Poco saludable",
            (HealthLevel::Unhealthy, Language::En) => "Unhealthy",
            (_, Language::Es) => "Moderado",
            (_, Language::En) => "Moderate",
        }
    }
}

impl Serialize for HealthLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for HealthLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = coerce::text(deserializer)?;
        Ok(HealthLevel::parse(&raw))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_health_level_aliases() {
        assert_eq!(HealthLevel::parse("Saludable"), HealthLevel::Healthy);
        assert_eq!(HealthLevel::parse("Healthy"), HealthLevel::Healthy);
        assert_eq!(HealthLevel::parse(" moderate "), HealthLevel::Moderate);
        assert_eq!(HealthLevel::parse("Poco Saludable"), HealthLevel::Unhealthy);
        assert_eq!(HealthLevel::parse("UNHEALTHY"), HealthLevel::Unhealthy);
    }

    #[test]
    fn test_unrecognized_level_is_kept_and_styled_moderate() {
        let level = HealthLevel::parse("Excelente");
        assert_eq!(level, HealthLevel::Unrecognized("Excelente".to_string()));
        assert_eq!(level.display_level(), HealthLevel::Moderate);
        assert_eq!(level.label(Language::En), "Moderate");
        assert_eq!(serde_json::to_value(&level).unwrap(), json!("Excelente"));
    }

    #[test]
    fn test_canonical_serialization() {
        let level: HealthLevel = serde_json::from_value(json!("Unhealthy")).unwrap();
        assert_eq!(serde_json::to_value(&level).unwrap(), json!("Poco Saludable"));
    }

    #[test]
    fn test_ingredient_defaults_missing_groups() {
        let ingredient: Ingredient = serde_json::from_value(json!({
            "name": "rice",
            "calories": 200,
            "nutrients": [{"name": "Carbs", "amount": 45}]
        }))
        .unwrap();
        assert_eq!(ingredient.nutrients[0].amount, "45");
        assert!(ingredient.vitamins.is_empty());
        assert!(ingredient.fatty_acids.is_empty());
    }
}
