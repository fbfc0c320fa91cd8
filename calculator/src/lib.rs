// Calculator library root
// Pure bill-split arithmetic plus the input clamping that guards it.

pub mod config;
pub mod error;
pub mod input;
pub mod split;

pub use config::settings::CalculatorSettings;
pub use error::CalculatorError;
pub use split::SplitCalculator;
