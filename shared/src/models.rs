use serde::{Deserialize, Serialize};

/// Smallest party the form offers.
pub const MIN_PARTY_SIZE: u32 = 2;
/// Largest party the form offers (inclusive).
pub const MAX_PARTY_SIZE: u32 = 99;
/// Upper bound for any tip, preset or custom.
pub const MAX_TIP_PERCENTAGE: u32 = 100;
pub const DEFAULT_TIP_PERCENTAGE: u32 = 20;
/// Tip percentages offered by the segmented selector.
pub const TIP_PRESETS: [u32; 5] = [0, 10, 15, 20, 25];

// The three inputs of the form. Totals are always derived from this,
// never stored next to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BillState {
    pub check_amount: f64,
    pub party_size: u32,
    pub tip_percentage: u32,
}

impl Default for BillState {
    fn default() -> Self {
        Self {
            check_amount: 0.0,
            party_size: MIN_PARTY_SIZE,
            tip_percentage: DEFAULT_TIP_PERCENTAGE,
        }
    }
}

impl BillState {
    pub fn new(check_amount: f64, party_size: u32, tip_percentage: u32) -> Self {
        Self {
            check_amount,
            party_size,
            tip_percentage,
        }
    }

    /// True when the current tip is one of the segmented presets.
    pub fn has_preset_tip(&self) -> bool {
        TIP_PRESETS.contains(&self.tip_percentage)
    }
}

/// Derived values for one `BillState`, computed on demand for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    pub tip_value: f64,
    pub grand_total: f64,
    pub per_person: f64,
}
