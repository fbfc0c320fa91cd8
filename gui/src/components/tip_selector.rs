// Segmented tip presets plus the button that opens the custom tip sheet
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::utils::currency_format::format_percent;

use crate::config::theme::ThemePalette;
use crate::state::app_state::AppState;

#[component]
pub fn TipSelector() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let palette = use_context::<ThemePalette>();
    let presets = state.read().settings.tip_presets.clone();
    let current = state.read().bill.tip_percentage;
    let custom_label = state.read().custom_tip_label();

    rsx! {
        div {
            style: "padding: 12px 0; display: flex; flex-direction: column; gap: 12px;",
            div {
                style: "display: flex; border: 1px solid {palette.border}; border-radius: 8px; overflow: hidden;",
                for percent in presets {
                    TipSegment { key: "{percent}", percent: percent, selected: percent == current }
                }
            }
            button {
                style: "align-self: center; padding: 8px 16px; border: none; border-radius: 8px; background-color: {palette.primary}; color: {palette.on_primary}; font-size: 1em; cursor: pointer;",
                onclick: move |_| state.write().open_custom_tip(),
                "{custom_label}"
            }
        }
    }
}

#[component]
fn TipSegment(percent: u32, selected: bool) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let palette = use_context::<ThemePalette>();
    let label = format_percent(percent);
    let (background, foreground) = if selected {
        (palette.primary.clone(), palette.on_primary.clone())
    } else {
        ("transparent".to_string(), palette.foreground.clone())
    };

    rsx! {
        button {
            style: "flex: 1; padding: 6px 0; border: none; background-color: {background}; color: {foreground}; cursor: pointer;",
            onclick: move |_| state.write().select_tip_preset(percent),
            "{label}"
        }
    }
}
