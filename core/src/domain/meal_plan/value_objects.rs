use std::fmt;

use crate::domain::common::entities::language::Language;

/// Body-mass index computed from the profile's weight (kg) and height (cm).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bmi {
    pub value: f64,
    pub category: BmiCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl Bmi {
    pub fn from_measurements(weight_kg: f64, height_cm: f64) -> Option<Self> {
        if weight_kg <= 0.0 || height_cm <= 0.0 {
            return None;
        }

        let height_m = height_cm / 100.0;
        let value = weight_kg / (height_m * height_m);
        Some(Self {
            value,
            category: BmiCategory::from_value(value),
        })
    }

    /// e.g. `22.5 (Normal)`
    pub fn describe(&self, language: Language) -> String {
        format!("{:.1} ({})", self.value, self.category.label(language))
    }
}

impl fmt::Display for Bmi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.value)
    }
}

impl BmiCategory {
    pub fn from_value(value: f64) -> Self {
        if value < 18.5 {
            BmiCategory::Underweight
        } else if value < 25.0 {
            BmiCategory::Normal
        } else if value < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn label(&self, language: Language) -> &'static str {
        match (self, language) {
            (BmiCategory::Underweight, Language::Es) => "Bajo peso",
            (BmiCategory::Underweight, Language::En) => "Underweight",
            (BmiCategory::Normal, Language::Es) => "Peso normal",
            (BmiCategory::Normal, Language::En) => "Normal",
            (BmiCategory::Overweight, Language::Es) => "Sobrepeso",
            (BmiCategory::Overweight, Language::En) => "Overweight",
            (BmiCategory::Obese, Language::Es) => "Obesidad",
            (BmiCategory::Obese, Language::En) => "Obese",
        }
    }
}
