// Calculator configuration
pub mod settings;
