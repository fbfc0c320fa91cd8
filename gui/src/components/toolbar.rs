// Keyboard toolbar, shown while the amount field has focus
#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::config::theme::ThemePalette;
use crate::state::app_state::AppState;

#[component]
pub fn KeyboardToolbar() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let palette = use_context::<ThemePalette>();

    rsx! {
        div {
            style: "position: fixed; left: 0; right: 0; bottom: 0; display: flex; justify-content: flex-end; padding: 8px 16px; background-color: {palette.section_background}; border-top: 1px solid {palette.border};",
            button {
                // keep focus in the field until the click lands
                prevent_default: "onmousedown",
                style: "border: none; background: transparent; color: {palette.primary}; font-size: 1em; font-weight: bold; cursor: pointer;",
                onclick: move |_| {
                    state.write().dismiss_keyboard();
                    // the state is already dismissed; losing DOM focus is best effort
                    let blur = eval("document.activeElement && document.activeElement.blur();");
                    spawn(async move {
                        if let Err(e) = blur.join().await {
                            tracing::debug!("Could not blur the amount field: {:?}", e);
                        }
                    });
                },
                "Done"
            }
        }
    }
}
