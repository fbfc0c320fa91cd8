// GUI components module
pub mod amount_field;
pub mod custom_tip_sheet;
pub mod party_picker;
pub mod section;
pub mod summary;
pub mod tip_selector;
pub mod toolbar;

pub use amount_field::AmountField;
pub use custom_tip_sheet::CustomTipSheet;
pub use party_picker::PartyPicker;
pub use section::FormSection;
pub use summary::Summary;
pub use tip_selector::TipSelector;
pub use toolbar::KeyboardToolbar;
