// Modal sheet for picking any tip between 0% and 100%
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::models::MAX_TIP_PERCENTAGE;
use shared::utils::currency_format::format_percent;

use crate::config::theme::ThemePalette;
use crate::state::app_state::AppState;

#[component]
pub fn CustomTipSheet() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let palette = use_context::<ThemePalette>();
    let pending = state.read().custom_tip.pending_tip;
    let pending_label = format_percent(pending);

    rsx! {
        // Clicking the backdrop dismisses without saving
        div {
            style: "position: fixed; inset: 0; background-color: rgba(0, 0, 0, 0.4); display: flex; align-items: flex-end; z-index: 1000;",
            onclick: move |_| state.write().cancel_custom_tip(),
            div {
                style: "width: 100%; background-color: {palette.section_background}; color: {palette.foreground}; border-radius: 12px 12px 0 0; padding: 24px; display: flex; flex-direction: column; align-items: center; gap: 16px;",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                div { style: "color: {palette.muted};", "Tip Percentage" }
                div { id: "pending-tip", style: "font-size: 2.5em;", "{pending_label}" }
                input {
                    r#type: "range",
                    min: "0",
                    max: "{MAX_TIP_PERCENTAGE}",
                    step: "1",
                    value: "{pending}",
                    style: "width: 300px;",
                    oninput: move |evt: FormEvent| match evt.value().parse::<i64>() {
                        Ok(value) => state.write().select_pending_tip(value),
                        Err(e) => tracing::warn!("Ignoring tip {:?}: {}", evt.value(), e),
                    },
                }
                div {
                    style: "display: flex; gap: 24px;",
                    button {
                        style: "padding: 8px 16px; border: 1px solid {palette.border}; border-radius: 8px; background: transparent; color: {palette.foreground}; cursor: pointer;",
                        onclick: move |_| state.write().cancel_custom_tip(),
                        "Cancel"
                    }
                    button {
                        style: "padding: 8px 16px; border: none; border-radius: 8px; background-color: {palette.primary}; color: {palette.on_primary}; cursor: pointer;",
                        onclick: move |_| state.write().confirm_custom_tip(),
                        "Save"
                    }
                }
            }
        }
    }
}
