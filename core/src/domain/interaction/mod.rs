pub mod messages;
pub mod services;
pub mod state;

pub use services::*;
pub use state::*;
