use nutrilens_core::domain::{
    analysis::entities::{AnalysisResult, HealthLevel, Ingredient, Nutrient},
    common::entities::language::Language,
    interaction::InteractionState,
    meal_plan::entities::{Meal, MealPlan},
};

struct Labels {
    welcome: &'static str,
    loading: &'static str,
    tip: &'static str,
    clarification_hint: &'static str,
    error_hint: &'static str,
    total_calories: &'static str,
    health: &'static str,
    ingredients: &'static str,
    nutrients: &'static str,
    vitamins: &'static str,
    minerals: &'static str,
    fatty_acids: &'static str,
    recommendation: &'static str,
    alternatives: &'static str,
    fasting_protocol: &'static str,
    fasting_tips: &'static str,
    supplements: &'static str,
    next_steps: &'static str,
}

const ES: Labels = Labels {
    welcome: "Sube una foto con `image <ruta>` o describe tu comida con `text <descripción>`. Escribe `plan` para un plan de comidas.",
    loading: "Analizando...",
    tip: "Consejo de salud",
    clarification_hint: "Responde con `answer <texto>`.",
    error_hint: "Escribe `reset` para empezar de nuevo.",
    total_calories: "Calorías totales",
    health: "Nivel de salud",
    ingredients: "Ingredientes",
    nutrients: "Nutrientes",
    vitamins: "Vitaminas",
    minerals: "Minerales",
    fatty_acids: "Ácidos grasos",
    recommendation: "Recomendación",
    alternatives: "Alternativas saludables",
    fasting_protocol: "Protocolo de ayuno",
    fasting_tips: "Recomendaciones de ayuno",
    supplements: "Suplementos",
    next_steps: "Escribe `reset` para volver al inicio, `plan` para un nuevo plan o `save <ruta>` para guardarlo.",
};

const EN: Labels = Labels {
    welcome: "Upload a photo with `image <path>` or describe your meal with `text <description>`. Type `plan` for a meal plan.",
    loading: "Analyzing...",
    tip: "Health tip",
    clarification_hint: "Reply with `answer <text>`.",
    error_hint: "Type `reset` to start over.",
    total_calories: "Total calories",
    health: "Health level",
    ingredients: "Ingredients",
    nutrients: "Nutrients",
    vitamins: "Vitamins",
    minerals: "Minerals",
    fatty_acids: "Fatty acids",
    recommendation: "Recommendation",
    alternatives: "Healthy alternatives",
    fasting_protocol: "Fasting protocol",
    fasting_tips: "Fasting recommendations",
    supplements: "Supplements",
    next_steps: "Type `reset` to go back, `plan` for a new plan or `save <path>` to keep it.",
};

fn labels(language: Language) -> &'static Labels {
    match language {
        Language::Es => &ES,
        Language::En => &EN,
    }
}

/// Renders the state as terminal text. `tip` is shown on the idle screen.
pub fn render(state: &InteractionState, language: Language, tip: &str) -> String {
    let t = labels(language);
    match state {
        InteractionState::Idle => format!("{}\n\n{}: {}", t.welcome, t.tip, tip),
        InteractionState::Loading => t.loading.to_string(),
        InteractionState::AwaitingClarification { question, .. } => {
            format!("? {}\n{}", question, t.clarification_hint)
        }
        InteractionState::ShowingResult(result) => render_result(result, language),
        InteractionState::ShowingPlan(plan) => render_plan(plan, language),
        InteractionState::Error(message) => format!("✗ {}\n{}", message, t.error_hint),
    }
}

/// Traffic light for the health level.
pub fn health_marker(level: &HealthLevel) -> &'static str {
    match level.display_level() {
        HealthLevel::Healthy => "🟢",
        HealthLevel::Unhealthy => "🔴",
        _ => "🟡",
    }
}

pub fn render_result(result: &AnalysisResult, language: Language) -> String {
    let t = labels(language);
    let mut lines = Vec::new();

    if let Some(calories) = result.total_calories {
        lines.push(format!("{}: {} kcal", t.total_calories, calories));
    }
    if let Some(level) = &result.health_level {
        lines.push(format!(
            "{}: {} {}",
            t.health,
            health_marker(level),
            level.label(language)
        ));
    }

    if let Some(ingredients) = result.ingredients.as_deref().filter(|i| !i.is_empty()) {
        lines.push(String::new());
        lines.push(format!("{}:", t.ingredients));
        for ingredient in ingredients {
            render_ingredient(&mut lines, ingredient, t);
        }
    }

    if let Some(recommendation) = &result.recommendation {
        lines.push(String::new());
        lines.push(format!("{}: {}", t.recommendation, recommendation));
    }

    if !result.healthy_alternatives.is_empty() {
        lines.push(String::new());
        lines.push(format!("{}:", t.alternatives));
        for alternative in &result.healthy_alternatives {
            lines.push(format!("  - {}: {}", alternative.name, alternative.description));
        }
    }

    lines.join("\n")
}

fn render_ingredient(lines: &mut Vec<String>, ingredient: &Ingredient, t: &Labels) {
    lines.push(format!("  - {} ({} kcal)", ingredient.name, ingredient.calories));
    for (label, group) in [
        (t.nutrients, &ingredient.nutrients),
        (t.vitamins, &ingredient.vitamins),
        (t.minerals, &ingredient.minerals),
        (t.fatty_acids, &ingredient.fatty_acids),
    ] {
        if let Some(list) = nutrient_list(group) {
            lines.push(format!("      {}: {}", label, list));
        }
    }
}

fn nutrient_list(nutrients: &[Nutrient]) -> Option<String> {
    if nutrients.is_empty() {
        return None;
    }
    Some(
        nutrients
            .iter()
            .map(|n| format!("{} {}", n.name, n.amount).trim().to_string())
            .collect::<Vec<_>>()
            .join(", "),
    )
}

pub fn render_plan(plan: &MealPlan, language: Language) -> String {
    let t = labels(language);
    let mut lines = vec![plan.title.to_uppercase()];
    if !plan.summary.is_empty() {
        lines.push(plan.summary.clone());
    }

    if let Some(protocol) = &plan.fasting_protocol {
        lines.push(String::new());
        lines.push(format!("{}: {}", t.fasting_protocol, protocol));
    }
    if let Some(recommendations) = &plan.fasting_recommendations {
        lines.push(format!("{}: {}", t.fasting_tips, recommendations));
    }
    if let Some(supplements) = plan.supplements.as_deref().filter(|s| !s.is_empty()) {
        lines.push(format!("{}: {}", t.supplements, supplements.join(", ")));
    }

    for day in &plan.plan {
        lines.push(String::new());
        lines.push(format!("== {} ==", day.day));
        for meal in &day.meals {
            render_meal(&mut lines, meal, language, t);
        }
    }

    lines.push(String::new());
    lines.push(t.next_steps.to_string());
    lines.join("\n")
}

fn render_meal(lines: &mut Vec<String>, meal: &Meal, language: Language, t: &Labels) {
    let calories = meal
        .calories
        .map(|c| format!(" ({} kcal)", c))
        .unwrap_or_default();
    lines.push(format!(
        "  [{}] {}{}",
        meal.meal_type.label(language),
        meal.name,
        calories
    ));
    if !meal.description.is_empty() {
        lines.push(format!("      {}", meal.description));
    }
    for (label, group) in [
        (t.nutrients, &meal.nutrients),
        (t.vitamins, &meal.vitamins),
        (t.minerals, &meal.minerals),
    ] {
        if let Some(list) = group.as_deref().and_then(nutrient_list) {
            lines.push(format!("      {}: {}", label, list));
        }
    }
}
