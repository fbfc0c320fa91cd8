// Range enforcement at the UI-input boundary.
// Everything that reaches `SplitCalculator` goes through here first.
use crate::config::settings::CalculatorSettings;
use crate::error::{CalculatorError, Result};
use crate::split::SplitCalculator;
use shared::models::MAX_TIP_PERCENTAGE;
use shared::utils::currency_format::CurrencyFormat;

pub fn clamp_tip_percentage(value: i64) -> u32 {
    value.clamp(0, i64::from(MAX_TIP_PERCENTAGE)) as u32
}

pub fn clamp_party_size(value: i64, settings: &CalculatorSettings) -> u32 {
    value.clamp(
        i64::from(settings.min_party_size),
        i64::from(settings.max_party_size),
    ) as u32
}

/// Reads the amount field. Empty text is zero; negative or non-numeric
/// text is rejected so the caller can keep its previous value, as is any
/// amount whose total at the highest tip would not be finite.
pub fn parse_check_amount(text: &str, format: &CurrencyFormat) -> Result<f64> {
    let amount = format
        .parse_amount(text)
        .map_err(|e| CalculatorError::InvalidAmount(e.to_string()))?;
    if amount < 0.0 {
        return Err(CalculatorError::NegativeAmount(amount));
    }
    let largest_total = SplitCalculator::default().compute_grand_total(amount, MAX_TIP_PERCENTAGE);
    if !largest_total.is_finite() {
        return Err(CalculatorError::InvalidAmount(format!(
            "amount '{}' is too large to total",
            text
        )));
    }
    tracing::debug!("Parsed check amount {:?} as {}", text, amount);
    Ok(amount)
}
