// GUI main entry point using Dioxus
#![allow(non_snake_case)] // Common for Dioxus components

use anyhow::Context;
use dioxus::prelude::*;
use dioxus_desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};

mod app;
mod components;
mod config;
mod state;

use app::App;
use config::AppConfig;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    tracing::info!("Starting WeSplit (Dioxus Desktop)...");

    let app_config = AppConfig::load().context("Failed to load configuration")?;
    tracing::info!(
        "Loaded configuration version {} (party size offset {}).",
        app_config.version,
        app_config.calculator.party_size_offset
    );

    let desktop_config = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(app_config.app.title.clone())
            .with_inner_size(LogicalSize::new(
                f64::from(app_config.app.window_width),
                f64::from(app_config.app.window_height),
            )),
    );

    // App reads the config back out with use_context
    LaunchBuilder::desktop()
        .with_cfg(desktop_config)
        .with_context(app_config)
        .launch(App);

    tracing::info!("WeSplit finished.");
    Ok(())
}
