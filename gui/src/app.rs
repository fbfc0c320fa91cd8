#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::components::{
    AmountField, CustomTipSheet, FormSection, KeyboardToolbar, PartyPicker, Summary, TipSelector,
};
use crate::config::theme::ThemePalette;
use crate::config::AppConfig;
use crate::state::app_state::AppState;

#[component]
pub fn App() -> Element {
    // AppConfig is handed to the launcher as root context in main.rs
    let config = use_context::<AppConfig>();
    let palette = use_context_provider(|| ThemePalette::for_theme(config.app.theme));
    let state = use_signal(|| {
        AppState::new(config.calculator.clone(), config.currency_format())
    });
    use_context_provider(|| state);

    let amount_is_focused = state.read().amount_is_focused;
    let dialog_open = state.read().custom_tip.is_open;

    rsx! {
        div {
            style: "min-height: 100vh; margin: 0; padding-bottom: 64px; background-color: {palette.background}; color: {palette.foreground}; font-family: -apple-system, 'Segoe UI', sans-serif;",
            h1 {
                style: "margin: 0; padding: 24px 16px 16px 16px; font-size: 2em;",
                "{config.app.title}"
            }
            FormSection {
                AmountField {}
                PartyPicker {}
            }
            FormSection {
                TipSelector {}
            }
            Summary {}
            if amount_is_focused {
                KeyboardToolbar {}
            }
            if dialog_open {
                CustomTipSheet {}
            }
        }
    }
}
