pub mod entities;
pub mod services;

pub use services::*;
