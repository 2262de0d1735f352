use std::fmt::Write;

use crate::domain::{
    common::entities::language::Language,
    meal_plan::{entities::UserProfile, schema::meal_plan_schema},
    oracle::value_objects::{OracleRequest, PromptPart, SamplingConfig},
};

#[derive(Debug)]
pub struct MealPlanPrompts {
    pub expert: &'static str,
    pub create_plan: &'static str,
    pub goal: &'static str,
    pub gender: &'static str,
    pub age: &'static str,
    pub weight: &'static str,
    pub height: &'static str,
    pub restrictions: &'static str,
    pub dislikes: &'static str,
    pub duration: &'static str,
    pub not_specified: &'static str,
    pub none: &'static str,
    pub fasting_heading: &'static str,
    pub fasting_type: &'static str,
    pub fasting_instructions: &'static str,
    pub general_heading: &'static str,
    pub general_instructions: &'static str,
}

const ES: MealPlanPrompts = MealPlanPrompts {
    expert: "Actúa como un nutricionista experto de primer nivel.",
    create_plan: "Crea un plan de comidas detallado para una persona con este perfil:",
    goal: "Objetivo",
    gender: "Género",
    age: "Edad",
    weight: "Peso",
    height: "Estatura",
    restrictions: "Restricciones/Alergias",
    dislikes: "Ingredientes que no le gustan",
    duration: "Duración del plan",
    not_specified: "No especificado",
    none: "Ninguna",
    fasting_heading: "**Instrucciones de ayuno intermitente:**",
    fasting_type: "Tipo de ayuno",
    fasting_instructions: "- Explica brevemente los beneficios de este tipo de ayuno.
- Da un horario claro para el periodo de ayuno y la ventana de alimentación.
- Aconseja qué se puede tomar durante el ayuno (agua, té, café solo, etc.).
- Todas las comidas del plan deben caer dentro de la ventana de alimentación.
- Recomienda 3-4 suplementos que podrían beneficiar a esta persona y a su objetivo.",
    general_heading: "**Instrucciones generales:**",
    general_instructions: "- El plan debe ser equilibrado, apetecible y realista.
- **NO INCLUYAS NINGÚN INGREDIENTE de la lista de Restricciones/Alergias ni de la lista de Ingredientes que no le gustan.**
- Para cada comida indica las calorías y listas de nutrientes (proteínas, carbohidratos, grasas), vitaminas (p. ej. vitamina C, D) y minerales (p. ej. hierro, calcio).
- Devuelve únicamente el objeto JSON con el formato indicado.",
};

const EN: MealPlanPrompts = MealPlanPrompts {
    expert: "Act as a world-class expert nutritionist.",
    create_plan: "Create a detailed meal plan for a person with this profile:",
    goal: "Goal",
    gender: "Gender",
    age: "Age",
    weight: "Weight",
    height: "Height",
    restrictions: "Restrictions/Allergies",
    dislikes: "Disliked ingredients",
    duration: "Plan duration",
    not_specified: "Not specified",
    none: "None",
    fasting_heading: "**Intermittent fasting instructions:**",
    fasting_type: "Fasting type",
    fasting_instructions: "- Briefly explain the benefits of this type of fasting.
- Give a clear schedule for the fasting period and the eating window.
- Advise on what may be consumed while fasting (water, tea, black coffee, etc.).
- Every meal in the plan must fall inside the eating window.
- Recommend 3-4 supplements that could benefit this person and their goal.",
    general_heading: "**General instructions:**",
    general_instructions: "- The plan must be balanced, appetizing and realistic.
- **DO NOT INCLUDE ANY INGREDIENT from the Restrictions/Allergies list or the Disliked ingredients list.**
- For every meal give the calories and lists of nutrients (protein, carbohydrates, fat), vitamins (e.g. vitamin C, D) and minerals (e.g. iron, calcium).
- Return only the JSON object in the specified format.",
};

pub fn prompts_for(language: Language) -> &'static MealPlanPrompts {
    match language {
        Language::Es => &ES,
        Language::En => &EN,
    }
}

pub fn build_meal_plan_prompt(profile: &UserProfile, language: Language) -> String {
    let t = prompts_for(language);

    let weight = profile
        .weight
        .as_deref()
        .map(|w| format!("{w} kg"))
        .unwrap_or_else(|| t.not_specified.to_string());
    let height = profile
        .height
        .as_deref()
        .map(|h| format!("{h} cm"))
        .unwrap_or_else(|| t.not_specified.to_string());
    let or_none = |value: &str| {
        if value.trim().is_empty() {
            t.none.to_string()
        } else {
            value.to_string()
        }
    };

    let mut prompt = format!("{} {}\n", t.expert, t.create_plan);
    let _ = writeln!(prompt, "- {}: {}", t.goal, profile.goal.label(language));
    let _ = writeln!(prompt, "- {}: {}", t.gender, profile.gender.label(language));
    let _ = writeln!(prompt, "- {}: {}", t.age, profile.age);
    let _ = writeln!(prompt, "- {}: {}", t.weight, weight);
    let _ = writeln!(prompt, "- {}: {}", t.height, height);
    let _ = writeln!(prompt, "- {}: {}", t.restrictions, or_none(&profile.restrictions));
    let _ = writeln!(prompt, "- {}: {}", t.dislikes, or_none(&profile.dislikes));

    match profile.fasting_type.filter(|_| profile.is_fasting()) {
        Some(fasting_type) => {
            let _ = write!(
                prompt,
                "\n{}\n- {}: {}.\n{}\n",
                t.fasting_heading, t.fasting_type, fasting_type, t.fasting_instructions
            );
        }
        None => {
            let _ = writeln!(
                prompt,
                "- {}: {}",
                t.duration,
                profile.plan_duration.label(language)
            );
        }
    }

    let _ = write!(prompt, "\n{}\n{}", t.general_heading, t.general_instructions);
    prompt
}

pub fn build_oracle_request(profile: &UserProfile, language: Language) -> OracleRequest {
    OracleRequest {
        parts: vec![PromptPart::Text(build_meal_plan_prompt(profile, language))],
        output_schema: meal_plan_schema(),
        sampling: SamplingConfig::MEAL_PLAN,
    }
}
