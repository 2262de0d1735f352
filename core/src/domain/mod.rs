pub mod analysis;
pub mod common;
pub mod interaction;
pub mod meal_plan;
pub mod oracle;
pub mod tips;
