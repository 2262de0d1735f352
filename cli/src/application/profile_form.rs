use nutrilens_core::domain::{
    common::entities::language::Language,
    meal_plan::entities::{FastingType, Gender, Goal, PlanDuration, UserProfile},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Goal,
    FastingType,
    PlanDuration,
    Gender,
    Age,
    Weight,
    Height,
    Restrictions,
    Dislikes,
}

/// The meal plan questionnaire. Each answer replaces a default; an empty
/// answer keeps it.
#[derive(Debug, Clone)]
pub struct ProfileForm {
    profile: UserProfile,
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self {
            profile: UserProfile {
                goal: Goal::GeneralHealth,
                gender: Gender::Female,
                age: 30,
                weight: None,
                height: None,
                restrictions: String::new(),
                dislikes: String::new(),
                plan_duration: PlanDuration::Week,
                fasting_type: Some(FastingType::SixteenEight),
            },
        }
    }
}

impl ProfileForm {
    /// Fields in asking order. The goal decides whether the fasting type or
    /// the plan duration is asked.
    pub fn fields(&self) -> Vec<Field> {
        let schedule = if self.profile.is_fasting() {
            Field::FastingType
        } else {
            Field::PlanDuration
        };
        vec![
            Field::Goal,
            schedule,
            Field::Gender,
            Field::Age,
            Field::Weight,
            Field::Height,
            Field::Restrictions,
            Field::Dislikes,
        ]
    }

    pub fn prompt(&self, field: Field, language: Language) -> String {
        let es = language == Language::Es;
        let p = &self.profile;
        let (question, current, options) = match field {
            Field::Goal => (
                if es { "Objetivo" } else { "Goal" },
                p.goal.label(language).to_string(),
                "maintain, lose, muscle, general, fasting",
            ),
            Field::FastingType => (
                if es { "Tipo de ayuno" } else { "Fasting type" },
                p.fasting_type.map(|f| f.to_string()).unwrap_or_default(),
                "16:8, 18:6, 20:4",
            ),
            Field::PlanDuration => (
                if es { "Duración del plan" } else { "Plan duration" },
                p.plan_duration.label(language).to_string(),
                "day, week, month",
            ),
            Field::Gender => (
                if es { "Género" } else { "Gender" },
                p.gender.label(language).to_string(),
                "female, male, other",
            ),
            Field::Age => (if es { "Edad" } else { "Age" }, p.age.to_string(), ""),
            Field::Weight => (
                if es { "Peso (kg, opcional)" } else { "Weight (kg, optional)" },
                p.weight.clone().unwrap_or_default(),
                "",
            ),
            Field::Height => (
                if es { "Altura (cm, opcional)" } else { "Height (cm, optional)" },
                p.height.clone().unwrap_or_default(),
                "",
            ),
            Field::Restrictions => (
                if es { "Restricciones o alergias" } else { "Restrictions or allergies" },
                p.restrictions.clone(),
                "",
            ),
            Field::Dislikes => (
                if es { "Alimentos que no te gustan" } else { "Foods you dislike" },
                p.dislikes.clone(),
                "",
            ),
        };

        let mut prompt = question.to_string();
        if !options.is_empty() {
            prompt.push_str(&format!(" ({})", options));
        }
        if !current.is_empty() {
            prompt.push_str(&format!(" [{}]", current));
        }
        prompt.push_str(": ");
        prompt
    }

    pub fn apply(&mut self, field: Field, input: &str) -> Result<(), String> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(());
        }

        let p = &mut self.profile;
        match field {
            Field::Goal => p.goal = input.parse()?,
            Field::FastingType => p.fasting_type = Some(input.parse()?),
            Field::PlanDuration => p.plan_duration = input.parse()?,
            Field::Gender => p.gender = input.parse()?,
            Field::Age => {
                p.age = input
                    .parse()
                    .map_err(|_| format!("not a valid age: {input}"))?
            }
            Field::Weight => p.weight = Some(input.to_string()),
            Field::Height => p.height = Some(input.to_string()),
            Field::Restrictions => p.restrictions = input.to_string(),
            Field::Dislikes => p.dislikes = input.to_string(),
        }
        Ok(())
    }

    pub fn bmi_line(&self, language: Language) -> Option<String> {
        let bmi = self.profile.bmi()?;
        let label = match language {
            Language::Es => "IMC",
            Language::En => "BMI",
        };
        Some(format!("{}: {}", label, bmi.describe(language)))
    }

    pub fn into_profile(self) -> UserProfile {
        self.profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_survive_empty_answers() {
        let mut form = ProfileForm::default();
        for field in form.fields() {
            form.apply(field, "").unwrap();
        }

        let profile = form.into_profile();
        assert_eq!(profile.goal, Goal::GeneralHealth);
        assert_eq!(profile.age, 30);
        assert_eq!(profile.plan_duration, PlanDuration::Week);
        assert!(profile.weight.is_none());
    }

    #[test]
    fn test_fasting_goal_asks_for_fasting_type() {
        let mut form = ProfileForm::default();
        assert!(form.fields().contains(&Field::PlanDuration));

        form.apply(Field::Goal, "fasting").unwrap();
        let fields = form.fields();
        assert!(fields.contains(&Field::FastingType));
        assert!(!fields.contains(&Field::PlanDuration));

        form.apply(Field::FastingType, "18/6").unwrap();
        assert_eq!(form.into_profile().fasting_type, Some(FastingType::EighteenSix));
    }

    #[test]
    fn test_rejects_bad_answers() {
        let mut form = ProfileForm::default();
        assert!(form.apply(Field::Age, "thirty").is_err());
        assert!(form.apply(Field::Goal, "fly").is_err());
    }

    #[test]
    fn test_bmi_line_needs_both_measurements() {
        let mut form = ProfileForm::default();
        form.apply(Field::Weight, "70").unwrap();
        assert_eq!(form.bmi_line(Language::En), None);

        form.apply(Field::Height, "175").unwrap();
        assert_eq!(form.bmi_line(Language::En), Some("BMI: 22.9 (Normal)".to_string()));
    }

    #[test]
    fn test_prompt_shows_current_value() {
        let form = ProfileForm::default();
        let prompt = form.prompt(Field::Age, Language::En);
        assert_eq!(prompt, "Age [30]: ");
    }
}
