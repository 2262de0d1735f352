use std::{borrow::Cow, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::{
    common::entities::{app_errors::CoreError, language::Language},
    meal_plan::value_objects::Bmi,
};

/// Health profile filled in by the user before generating a meal plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_profile_consistency"))]
pub struct UserProfile {
    pub goal: Goal,
    pub gender: Gender,
    #[validate(range(min = 1, max = 120, message = "age must be between 1 and 120"))]
    pub age: u32,
    /// Kilograms, as typed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    /// Centimetres, as typed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[validate(length(max = 500, message = "restrictions must be at most 500 characters"))]
    #[serde(default)]
    pub restrictions: String,
    #[validate(length(max = 500, message = "dislikes must be at most 500 characters"))]
    #[serde(default)]
    pub dislikes: String,
    pub plan_duration: PlanDuration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fasting_type: Option<FastingType>,
}

impl UserProfile {
    /// Drops blank optional measurements and checks every field.
    pub fn into_validated(mut self) -> Result<Self, CoreError> {
        self.weight = non_blank(self.weight);
        self.height = non_blank(self.height);

        self.validate().map_err(|errors| {
            tracing::warn!("Rejected meal plan profile: {}", errors);
            CoreError::InvalidProfile(errors.to_string())
        })?;

        Ok(self)
    }

    pub fn weight_kg(&self) -> Option<f64> {
        self.weight.as_deref().and_then(parse_positive)
    }

    pub fn height_cm(&self) -> Option<f64> {
        self.height.as_deref().and_then(parse_positive)
    }

    pub fn bmi(&self) -> Option<Bmi> {
        Bmi::from_measurements(self.weight_kg()?, self.height_cm()?)
    }

    pub fn is_fasting(&self) -> bool {
        self.goal == Goal::IntermittentFasting
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_positive(raw: &str) -> Option<f64> {
    raw.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

fn validate_profile_consistency(profile: &UserProfile) -> Result<(), ValidationError> {
    if profile.is_fasting() && profile.fasting_type.is_none() {
        return Err(profile_error(
            "fasting_type_required",
            "a fasting type is required for intermittent fasting",
        ));
    }

    for (field, value) in [("weight", &profile.weight), ("height", &profile.height)] {
        if let Some(raw) = value.as_deref().filter(|v| !v.trim().is_empty()) {
            if parse_positive(raw).is_none() {
                return Err(profile_error(
                    "invalid_measurement",
                    &format!("{field} must be a positive number"),
                ));
            }
        }
    }

    Ok(())
}

fn profile_error(code: &'static str, message: &str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Owned(message.to_string()));
    error
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Goal {
    MaintainWeight,
    LoseWeight,
    GainMuscle,
    GeneralHealth,
    IntermittentFasting,
}

impl Goal {
    pub fn label(&self, language: Language) -> &'static str {
        match (self, language) {
            (Goal::MaintainWeight, Language::Es) => "Mantener peso",
            (Goal::MaintainWeight, Language::En) => "Maintain weight",
            (Goal::LoseWeight, Language::Es) => "Perder peso",
            (Goal::LoseWeight, Language::En) => "Lose weight",
            (Goal::GainMuscle, Language::Es) => "Ganar músculo",
            (Goal::GainMuscle, Language::En) => "Gain muscle",
            (Goal::GeneralHealth, Language::Es) => "Salud general",
            (Goal::GeneralHealth, Language::En) => "General health",
            (Goal::IntermittentFasting, Language::Es) => "Ayuno intermitente",
            (Goal::IntermittentFasting, Language::En) => "Intermittent fasting",
        }
    }
}

impl FromStr for Goal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match compact(s).as_str() {
            "maintainweight" | "maintain" => Ok(Goal::MaintainWeight),
            "loseweight" | "lose" => Ok(Goal::LoseWeight),
            "gainmuscle" | "muscle" => Ok(Goal::GainMuscle),
            "generalhealth" | "general" => Ok(Goal::GeneralHealth),
            "intermittentfasting" | "fasting" | "if" => Ok(Goal::IntermittentFasting),
            _ => Err(format!("unknown goal: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn label(&self, language: Language) -> &'static str {
        match (self, language) {
            (Gender::Male, Language::Es) => "Masculino",
            (Gender::Male, Language::En) => "Male",
            (Gender::Female, Language::Es) => "Femenino",
            (Gender::Female, Language::En) => "Female",
            (Gender::Other, Language::Es) => "Otro",
            (Gender::Other, Language::En) => "Other",
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match compact(s).as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            "other" | "o" => Ok(Gender::Other),
            _ => Err(format!("unknown gender: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlanDuration {
    Day,
    Week,
    Month,
}

impl PlanDuration {
    pub fn label(&self, language: Language) -> &'static str {
        match (self, language) {
            (PlanDuration::Day, Language::Es) => "Un día",
            (PlanDuration::Day, Language::En) => "One day",
            (PlanDuration::Week, Language::Es) => "Una semana",
            (PlanDuration::Week, Language::En) => "One week",
            (PlanDuration::Month, Language::Es) => "Un mes",
            (PlanDuration::Month, Language::En) => "One month",
        }
    }
}

impl FromStr for PlanDuration {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match compact(s).as_str() {
            "day" | "d" => Ok(PlanDuration::Day),
            "week" | "w" => Ok(PlanDuration::Week),
            "month" | "m" => Ok(PlanDuration::Month),
            _ => Err(format!("unknown plan duration: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FastingType {
    #[serde(rename = "16:8")]
    SixteenEight,
    #[serde(rename = "18:6")]
    EighteenSix,
    #[serde(rename = "20:4")]
    TwentyFour,
}

impl FastingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FastingType::SixteenEight => "16:8",
            FastingType::EighteenSix => "18:6",
            FastingType::TwentyFour => "20:4",
        }
    }
}

impl fmt::Display for FastingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FastingType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().replace('/', ":").as_str() {
            "16:8" => Ok(FastingType::SixteenEight),
            "18:6" => Ok(FastingType::EighteenSix),
            "20:4" => Ok(FastingType::TwentyFour),
            _ => Err(format!("unknown fasting type: {s}")),
        }
    }
}

fn compact(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(goal: Goal) -> UserProfile {
        UserProfile {
            goal,
            gender: Gender::Female,
            age: 30,
            weight: Some("65".to_string()),
            height: Some("170".to_string()),
            restrictions: "peanuts".to_string(),
            dislikes: "cilantro".to_string(),
            plan_duration: PlanDuration::Week,
            fasting_type: None,
        }
    }

    #[test]
    fn test_valid_profile() {
        let validated = profile(Goal::LoseWeight).into_validated().unwrap();
        assert_eq!(validated.weight_kg(), Some(65.0));
    }

    #[test]
    fn test_fasting_requires_fasting_type() {
        let err = profile(Goal::IntermittentFasting).into_validated().unwrap_err();
        assert!(matches!(err, CoreError::InvalidProfile(msg) if msg.contains("fasting type")));

        let mut fasting = profile(Goal::IntermittentFasting);
        fasting.fasting_type = Some(FastingType::SixteenEight);
        assert!(fasting.into_validated().is_ok());
    }

    #[test]
    fn test_age_range() {
        let mut p = profile(Goal::GeneralHealth);
        p.age = 0;
        assert!(matches!(p.into_validated(), Err(CoreError::InvalidProfile(_))));
    }

    #[test]
    fn test_blank_measurements_are_dropped() {
        let mut p = profile(Goal::GainMuscle);
        p.weight = Some("  ".to_string());
        p.height = Some(String::new());
        let validated = p.into_validated().unwrap();
        assert_eq!(validated.weight, None);
        assert_eq!(validated.height, None);
        assert!(validated.bmi().is_none());
    }

    #[test]
    fn test_non_numeric_measurement_is_rejected() {
        let mut p = profile(Goal::GainMuscle);
        p.height = Some("tall".to_string());
        assert!(matches!(p.into_validated(), Err(CoreError::InvalidProfile(msg)) if msg.contains("height")));
    }

    #[test]
    fn test_parse_profile_words() {
        assert_eq!("lose-weight".parse::<Goal>(), Ok(Goal::LoseWeight));
        assert_eq!("Intermittent Fasting".parse::<Goal>(), Ok(Goal::IntermittentFasting));
        assert_eq!("F".parse::<Gender>(), Ok(Gender::Female));
        assert_eq!("month".parse::<PlanDuration>(), Ok(PlanDuration::Month));
        assert_eq!("18/6".parse::<FastingType>(), Ok(FastingType::EighteenSix));
        assert!("12:12".parse::<FastingType>().is_err());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_value(FastingType::TwentyFour).unwrap();
        assert_eq!(json, serde_json::json!("20:4"));
        let goal: Goal = serde_json::from_value(serde_json::json!("intermittentFasting")).unwrap();
        assert_eq!(goal, Goal::IntermittentFasting);
    }
}
