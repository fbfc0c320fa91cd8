// Number of people selector
#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::config::theme::ThemePalette;
use crate::state::app_state::AppState;

#[component]
pub fn PartyPicker() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let palette = use_context::<ThemePalette>();
    let sizes = state.read().settings.party_sizes();
    let current = state.read().bill.party_size;

    rsx! {
        label {
            style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0;",
            span { "Number of people" }
            select {
                value: "{current}",
                style: "background: transparent; color: {palette.muted}; border: none; font-size: 1em;",
                onchange: move |evt: FormEvent| match evt.value().parse::<i64>() {
                    Ok(n) => state.write().set_party_size(n),
                    Err(e) => tracing::warn!("Ignoring party size {:?}: {}", evt.value(), e),
                },
                for n in sizes {
                    option {
                        key: "{n}",
                        value: "{n}",
                        selected: n == current,
                        "{n} people"
                    }
                }
            }
        }
    }
}
