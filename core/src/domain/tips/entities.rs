use crate::domain::common::entities::language::Language;

const TIPS_ES: &[&str] = &[
    "Bebe agua a lo largo del día; a veces la sed se confunde con hambre.",
    "Llena la mitad del plato con verduras de distintos colores.",
    "Prefiere cereales integrales frente a los refinados.",
    "Incluye una fuente de proteína en cada comida para saciarte más.",
    "Lee las etiquetas: el azúcar añadido aparece con muchos nombres.",
    "Come despacio; la sensación de saciedad tarda unos 20 minutos en llegar.",
];

const TIPS_EN: &[&str] = &[
    "Drink water throughout the day; thirst is sometimes mistaken for hunger.",
    "Fill half your plate with vegetables of different colors.",
    "Choose whole grains over refined ones.",
    "Include a source of protein in every meal to stay full longer.",
    "Read labels: added sugar hides under many names.",
    "Eat slowly; it takes about 20 minutes to feel full.",
];

pub fn tips_for(language: Language) -> &'static [&'static str] {
    match language {
        Language::Es => TIPS_ES,
        Language::En => TIPS_EN,
    }
}
