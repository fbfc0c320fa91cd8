// Read-only totals
#![allow(non_snake_case)]
use dioxus::prelude::*;

use super::FormSection;
use crate::state::app_state::AppState;

#[component]
pub fn Summary() -> Element {
    let state = use_context::<Signal<AppState>>();
    let per_person = state.read().formatted_per_person();
    let grand_total = state.read().formatted_grand_total();

    rsx! {
        FormSection {
            header: "Amount per person",
            div { id: "per-person", style: "padding: 12px 0;", "{per_person}" }
        }
        FormSection {
            header: "Total amount",
            div { id: "grand-total", style: "padding: 12px 0;", "{grand_total}" }
        }
    }
}
