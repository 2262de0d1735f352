use std::sync::LazyLock;

use serde_json::{Value, json};

use crate::domain::analysis::entities::HealthLevel;

static ANALYSIS_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    let nutrient_list = |description: &str| {
        json!({
            "type": "array",
            "description": description,
            "items": {
                "type": "object",
                "properties": {
                    "name": { "type": "string" },
                    "amount": { "type": "string" }
                },
                "required": ["name", "amount"]
            }
        })
    };

    json!({
        "type": "object",
        "properties": {
            "needsClarification": {
                "type": "boolean",
                "description": "True when the dish cannot be identified and the user must describe it."
            },
            "clarificationQuestion": {
                "type": "string",
                "description": "Question for the user, only when needsClarification is true."
            },
            "totalCalories": {
                "type": "integer",
                "description": "Estimated calories of the whole dish."
            },
            "healthLevel": {
                "type": "string",
                "description": "How healthy the dish is.",
                "enum": [HealthLevel::HEALTHY, HealthLevel::MODERATE, HealthLevel::UNHEALTHY]
            },
            "ingredients": {
                "type": "array",
                "description": "Main ingredients identified in the dish.",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "calories": { "type": "integer" },
                        "nutrients": nutrient_list("Key macronutrients (protein, carbohydrates, fat)."),
                        "vitamins": nutrient_list("Key vitamins (e.g. vitamin C, D, A)."),
                        "minerals": nutrient_list("Key minerals (e.g. iron, calcium, potassium)."),
                        "fattyAcids": nutrient_list("Key fatty acids (e.g. omega-3).")
                    },
                    "required": ["name", "calories", "nutrients", "vitamins", "minerals", "fattyAcids"]
                }
            },
            "recommendation": {
                "type": "string",
                "description": "A short, useful recommendation about the dish."
            },
            "healthyAlternatives": {
                "type": "array",
                "description": "Three or four healthier alternatives.",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "description": { "type": "string" }
                    },
                    "required": ["name", "description"]
                }
            }
        },
        "required": ["needsClarification"]
    })
});

/// Returns the JSON schema for food analysis responses. Built once, shared by every call.
pub fn analysis_schema() -> &'static Value {
    &ANALYSIS_SCHEMA
}
