pub mod models;
pub mod utils;

// Data shared between the calculator and the GUI.
// Nothing here depends on Dioxus so it can be tested headless.
