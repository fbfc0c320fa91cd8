// Calculator settings, deserialized from the `calculator` section of the app config
use crate::error::{CalculatorError, Result};
use serde::{Deserialize, Serialize};
use shared::models::{
    BillState, DEFAULT_TIP_PERCENTAGE, MAX_PARTY_SIZE, MAX_TIP_PERCENTAGE, MIN_PARTY_SIZE,
    TIP_PRESETS,
};
use std::ops::RangeInclusive;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct CalculatorSettings {
    pub min_party_size: u32,
    pub max_party_size: u32,
    pub tip_presets: Vec<u32>,
    pub default_tip_percentage: u32,
    /// Added to the party size before dividing. 2 matches the WeSplit 1.0
    /// behaviour, 0 divides by the number of people shown.
    pub party_size_offset: u32,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        CalculatorSettings {
            min_party_size: MIN_PARTY_SIZE,
            max_party_size: MAX_PARTY_SIZE,
            tip_presets: TIP_PRESETS.to_vec(),
            default_tip_percentage: DEFAULT_TIP_PERCENTAGE,
            party_size_offset: 0,
        }
    }
}

impl CalculatorSettings {
    pub fn validate(&self) -> Result<()> {
        if self.min_party_size < 1 {
            return Err(CalculatorError::ConfigError(
                "min_party_size must be at least 1".to_string(),
            ));
        }
        if self.min_party_size > self.max_party_size {
            return Err(CalculatorError::ConfigError(format!(
                "min_party_size ({}) is greater than max_party_size ({})",
                self.min_party_size, self.max_party_size
            )));
        }
        if self.max_party_size.checked_add(self.party_size_offset).is_none() {
            return Err(CalculatorError::ConfigError(format!(
                "party_size_offset ({}) overflows with max_party_size ({})",
                self.party_size_offset, self.max_party_size
            )));
        }
        if self.tip_presets.is_empty() {
            return Err(CalculatorError::ConfigError(
                "tip_presets must not be empty".to_string(),
            ));
        }
        if let Some(bad) = self.tip_presets.iter().find(|p| **p > MAX_TIP_PERCENTAGE) {
            return Err(CalculatorError::ConfigError(format!(
                "tip preset {}% exceeds {}%",
                bad, MAX_TIP_PERCENTAGE
            )));
        }
        if self.default_tip_percentage > MAX_TIP_PERCENTAGE {
            return Err(CalculatorError::ConfigError(format!(
                "default_tip_percentage {}% exceeds {}%",
                self.default_tip_percentage, MAX_TIP_PERCENTAGE
            )));
        }
        Ok(())
    }

    pub fn party_sizes(&self) -> RangeInclusive<u32> {
        self.min_party_size..=self.max_party_size
    }

    /// State the form starts with when the screen opens.
    pub fn initial_bill_state(&self) -> BillState {
        BillState::new(0.0, self.min_party_size, self.default_tip_percentage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = CalculatorSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.party_sizes(), 2..=99);
        assert_eq!(settings.tip_presets, vec![0, 10, 15, 20, 25]);
        assert_eq!(settings.initial_bill_state(), BillState::default());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: CalculatorSettings =
            serde_json::from_str(r#"{ "party_size_offset": 2 }"#).unwrap();
        assert_eq!(settings.party_size_offset, 2);
        assert_eq!(settings.max_party_size, 99);
    }

    #[test]
    fn test_rejects_zero_min_party_size() {
        let settings = CalculatorSettings {
            min_party_size: 0,
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(CalculatorError::ConfigError(_))));
    }

    #[test]
    fn test_rejects_inverted_party_range() {
        let settings = CalculatorSettings {
            min_party_size: 10,
            max_party_size: 5,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_overflowing_party_size_offset() {
        let settings = CalculatorSettings {
            party_size_offset: u32::MAX,
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(CalculatorError::ConfigError(_))));

        let parity = CalculatorSettings {
            party_size_offset: 2,
            ..Default::default()
        };
        assert!(parity.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_tip_presets() {
        let empty = CalculatorSettings {
            tip_presets: vec![],
            ..Default::default()
        };
        assert!(empty.validate().is_err());

        let too_high = CalculatorSettings {
            tip_presets: vec![10, 150],
            ..Default::default()
        };
        assert!(too_high.validate().is_err());

        let bad_default = CalculatorSettings {
            default_tip_percentage: 101,
            ..Default::default()
        };
        assert!(bad_default.validate().is_err());
    }
}
