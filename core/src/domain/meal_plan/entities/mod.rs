pub mod meal_plan;
pub mod user_profile;

pub use meal_plan::*;
pub use user_profile::*;
