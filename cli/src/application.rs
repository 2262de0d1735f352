pub mod commands;
pub mod profile_form;
pub mod render;
pub mod session;
