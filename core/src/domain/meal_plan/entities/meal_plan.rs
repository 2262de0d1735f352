use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::{
    analysis::entities::Nutrient,
    common::{coerce, entities::language::Language},
};

pub const DEFAULT_PLAN_TITLE: &str = "Meal Plan";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    #[serde(default = "default_title", deserialize_with = "plan_title")]
    pub title: String,
    #[serde(default, deserialize_with = "coerce::text")]
    pub summary: String,
    #[serde(deserialize_with = "coerce::list")]
    pub plan: Vec<DayPlan>,
    #[serde(
        default,
        deserialize_with = "coerce::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub fasting_protocol: Option<String>,
    #[serde(
        default,
        deserialize_with = "coerce::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub fasting_recommendations: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplements: Option<Vec<String>>,
}

impl MealPlan {
    pub fn has_fasting_details(&self) -> bool {
        self.fasting_protocol.is_some()
            || self.fasting_recommendations.is_some()
            || self.supplements.is_some()
    }

    pub fn total_meals(&self) -> usize {
        self.plan.iter().map(|day| day.meals.len()).sum()
    }
}

fn default_title() -> String {
    DEFAULT_PLAN_TITLE.to_string()
}

fn plan_title<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(coerce::optional_text(deserializer)?.unwrap_or_else(default_title))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    #[serde(deserialize_with = "coerce::text")]
    pub day: String,
    #[serde(default, deserialize_with = "coerce::list")]
    pub meals: Vec<Meal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    #[serde(rename = "type")]
    pub meal_type: MealType,
    #[serde(deserialize_with = "coerce::text")]
    pub name: String,
    #[serde(default, deserialize_with = "coerce::text")]
    pub description: String,
    #[serde(
        default,
        deserialize_with = "coerce::optional_integer",
        skip_serializing_if = "Option::is_none"
    )]
    pub calories: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrients: Option<Vec<Nutrient>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vitamins: Option<Vec<Nutrient>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minerals: Option<Vec<Nutrient>>,
}

/// Meal slot. Both locales' labels are accepted; unknown labels are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
    BreakFast,
    Meal,
    Other(String),
}

impl MealType {
    /// Every label the output schema allows, in both locales.
    pub const SLOT_LABELS: [&'static str; 11] = [
        "Desayuno",
        "Almuerzo",
        "Cena",
        "Snack",
        "Romper Ayuno",
        "Comida",
        "Breakfast",
        "Lunch",
        "Dinner",
        "Break Fast",
        "Meal",
    ];

    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "desayuno" | "breakfast" => MealType::Breakfast,
            "almuerzo" | "lunch" => MealType::Lunch,
            "cena" | "dinner" => MealType::Dinner,
            "snack" | "merienda" => MealType::Snack,
            "romper ayuno" | "break fast" | "break-fast" => MealType::BreakFast,
            "comida" | "meal" => MealType::Meal,
            _ => MealType::Other(raw.to_string()),
        }
    }

    pub fn label(&self, language: Language) -> &str {
        match (self, language) {
            (MealType::Breakfast, Language::Es) => "Desayuno",
            (MealType::Breakfast, Language::En) => "Breakfast",
            (MealType::Lunch, Language::Es) => "Almuerzo",
            (MealType::Lunch, Language::En) => "Lunch",
            (MealType::Dinner, Language::Es) => "Cena",
            (MealType::Dinner, Language::En) => "Dinner",
            (MealType::Snack, _) => "Snack",
            (MealType::BreakFast, Language::Es) => "Romper Ayuno",
            (MealType::BreakFast, Language::En) => "Break Fast",
            (MealType::Meal, Language::Es) => "Comida",
            (MealType::Meal, Language::En) => "Meal",
            (MealType::Other(raw), _) => raw.as_str(),
        }
    }
}

impl Serialize for MealType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label(Language::En))
    }
}

impl<'de> Deserialize<'de> for MealType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = coerce::text(deserializer)?;
        Ok(MealType::parse(&raw))
    }
}
