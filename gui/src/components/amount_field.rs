// Check amount input
#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::config::theme::ThemePalette;
use crate::state::app_state::AppState;

#[component]
pub fn AmountField() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let palette = use_context::<ThemePalette>();
    let text = state.read().amount_text.clone();

    rsx! {
        input {
            id: "amount-input",
            r#type: "text",
            placeholder: "Amount",
            value: "{text}",
            style: "width: 100%; box-sizing: border-box; padding: 12px 0; border: none; border-bottom: 1px solid {palette.border}; background: transparent; color: {palette.foreground}; font-size: 1em; outline: none;",
            onfocus: move |_| state.write().focus_amount(),
            onblur: move |_| state.write().dismiss_keyboard(),
            oninput: move |evt: FormEvent| state.write().set_amount_text(&evt.value()),
        }
    }
}
