use std::sync::LazyLock;

use serde_json::{Value, json};

use crate::domain::meal_plan::entities::MealType;

static MEAL_PLAN_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    let nutrient_list = json!({
        "type": "array",
        "items": {
            "type": "object",
            "properties": {
                "name": { "type": "string" },
                "amount": { "type": "string" }
            },
            "required": ["name", "amount"]
        }
    });

    json!({
        "type": "object",
        "properties": {
            "title": { "type": "string" },
            "summary": { "type": "string" },
            "fastingProtocol": {
                "type": "string",
                "description": "Intermittent fasting only. Fasting schedule and guidance."
            },
            "fastingRecommendations": {
                "type": "string",
                "description": "Intermittent fasting only. Advice for the fasting period."
            },
            "supplements": {
                "type": "array",
                "items": { "type": "string" },
                "description": "Intermittent fasting only. Recommended supplements."
            },
            "plan": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "day": { "type": "string" },
                        "meals": {
                            "type": "array",
                            "items": {
                                "type": "object",
                                "properties": {
                                    "type": { "type": "string", "enum": MealType::SLOT_LABELS },
                                    "name": { "type": "string" },
                                    "description": { "type": "string" },
                                    "calories": { "type": "integer" },
                                    "nutrients": nutrient_list.clone(),
                                    "vitamins": nutrient_list.clone(),
                                    "minerals": nutrient_list
                                },
                                "required": ["type", "name", "description", "calories", "nutrients", "vitamins", "minerals"]
                            }
                        }
                    },
                    "required": ["day", "meals"]
                }
            }
        },
        "required": ["title", "summary", "plan"]
    })
});

/// Returns the JSON schema for meal plan responses. Built once, shared by every call.
pub fn meal_plan_schema() -> &'static Value {
    &MEAL_PLAN_SCHEMA
}
