// Grouped form section with an optional caption above it
#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::config::theme::ThemePalette;

#[component]
pub fn FormSection(header: Option<String>, children: Element) -> Element {
    let palette = use_context::<ThemePalette>();
    let header_text = header.unwrap_or_default();

    rsx! {
        section {
            style: "margin: 0 16px 24px 16px;",
            if !header_text.is_empty() {
                div {
                    style: "font-size: 0.8em; text-transform: uppercase; color: {palette.muted}; margin: 0 0 6px 12px;",
                    "{header_text}"
                }
            }
            div {
                style: "background-color: {palette.section_background}; border-radius: 10px; padding: 4px 12px;",
                {children}
            }
        }
    }
}
