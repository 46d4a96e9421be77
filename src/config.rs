//! Runtime Configuration
//!
//! Resolves the API base from the `DASHBOARD_API_BASE` build-time variable,
//! falling back to the page origin.

use dashboard_core::AppConfig;
use leptos::prelude::*;

pub fn load_config() -> AppConfig {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();

    AppConfig::resolve(option_env!("DASHBOARD_API_BASE"), &origin).unwrap_or_else(|e| {
        tracing::error!(error = %e, "invalid API configuration, using defaults");
        AppConfig::default()
    })
}

/// Get the app configuration from context
pub fn use_config() -> AppConfig {
    expect_context::<AppConfig>()
}
