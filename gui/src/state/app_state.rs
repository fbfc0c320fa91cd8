// State of the WeSplit screen.
// Provided at the root as a `Signal<AppState>`; components read it to render
// and call the methods below from their event handlers. Totals are never
// stored here, `breakdown()` derives them from `bill` on every read.

use calculator::input::{clamp_party_size, clamp_tip_percentage, parse_check_amount};
use calculator::{CalculatorSettings, SplitCalculator};
use shared::models::{BillState, Breakdown};
use shared::utils::currency_format::{format_percent, CurrencyFormat};

/// The custom tip sheet. `pending_tip` is only written back on confirm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CustomTipDialog {
    pub is_open: bool,
    pub pending_tip: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub bill: BillState,
    pub settings: CalculatorSettings,
    pub currency: CurrencyFormat,

    // Text currently shown in the amount field
    pub amount_text: String,
    pub amount_is_focused: bool,
    pub custom_tip: CustomTipDialog,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(CalculatorSettings::default(), CurrencyFormat::default())
    }
}

impl AppState {
    pub fn new(settings: CalculatorSettings, currency: CurrencyFormat) -> Self {
        let bill = settings.initial_bill_state();
        let amount_text = currency.format_amount(bill.check_amount);
        Self {
            bill,
            settings,
            currency,
            amount_text,
            amount_is_focused: false,
            custom_tip: CustomTipDialog::default(),
        }
    }

    pub fn calculator(&self) -> SplitCalculator {
        SplitCalculator::new(&self.settings)
    }

    pub fn breakdown(&self) -> Breakdown {
        self.calculator().breakdown(&self.bill)
    }

    pub fn formatted_per_person(&self) -> String {
        self.currency.format_amount(self.breakdown().per_person)
    }

    pub fn formatted_grand_total(&self) -> String {
        self.currency.format_amount(self.breakdown().grand_total)
    }

    pub fn custom_tip_label(&self) -> String {
        format!("Custom Tip ({})", format_percent(self.bill.tip_percentage))
    }

    // --- Amount field ---

    /// Keeps whatever was typed; the amount only changes when the text parses.
    pub fn set_amount_text(&mut self, text: &str) {
        self.amount_text = text.to_string();
        match parse_check_amount(text, &self.currency) {
            Ok(amount) => self.bill.check_amount = amount,
            Err(e) => tracing::debug!("Keeping check amount {}: {}", self.bill.check_amount, e),
        }
    }

    pub fn focus_amount(&mut self) {
        self.amount_is_focused = true;
    }

    /// The "Done" affordance. Also used when the field loses focus.
    pub fn dismiss_keyboard(&mut self) {
        self.amount_is_focused = false;
        self.amount_text = self.currency.format_amount(self.bill.check_amount);
    }

    // --- Pickers ---

    pub fn set_party_size(&mut self, value: i64) {
        self.bill.party_size = clamp_party_size(value, &self.settings);
        tracing::debug!("Party size set to {}", self.bill.party_size);
    }

    pub fn select_tip_preset(&mut self, value: u32) {
        self.bill.tip_percentage = clamp_tip_percentage(i64::from(value));
        tracing::debug!("Tip preset {}% selected", self.bill.tip_percentage);
    }

    // --- Custom tip sheet ---

    pub fn open_custom_tip(&mut self) {
        self.custom_tip = CustomTipDialog {
            is_open: true,
            pending_tip: self.bill.tip_percentage,
        };
    }

    pub fn select_pending_tip(&mut self, value: i64) {
        self.custom_tip.pending_tip = clamp_tip_percentage(value);
    }

    pub fn confirm_custom_tip(&mut self) {
        if !self.custom_tip.is_open {
            return;
        }
        self.bill.tip_percentage = clamp_tip_percentage(i64::from(self.custom_tip.pending_tip));
        self.custom_tip.is_open = false;
        tracing::info!("Custom tip {}% saved", self.bill.tip_percentage);
    }

    pub fn cancel_custom_tip(&mut self) {
        self.custom_tip.is_open = false;
    }
}
