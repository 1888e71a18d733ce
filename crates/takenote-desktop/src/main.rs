//! TakeNote Desktop Application
//!
//! A plain-text notes app with folders, categories and periodic saving.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod services;
mod state;
mod temp_state;
mod theme;

use std::path::PathBuf;

use dioxus::desktop::{Config, WindowBuilder};
use takenote_core::config::AppConfig;
use takenote_core::shell::APP_NAME;
use tracing_subscriber::EnvFilter;

/// Optional path of a JSON config file
const ENV_CONFIG: &str = "TAKENOTE_CONFIG";

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config_path = std::env::var_os(ENV_CONFIG).map(PathBuf::from);
    let config = AppConfig::load(config_path.as_deref());
    let config_error = config.as_ref().err().map(ToString::to_string);
    let config = config.unwrap_or_default();

    // RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("takenote=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Some(error) = config_error {
        tracing::error!("Invalid configuration, using defaults: {}", error);
    }
    tracing::info!("Starting {APP_NAME}...");

    let window = WindowBuilder::new().with_title(APP_NAME);
    dioxus::LaunchBuilder::new()
        .with_cfg(Config::new().with_window(window))
        .with_context(config)
        .launch(app::App);
}
