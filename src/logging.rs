//! Browser Logging
//!
//! Routes `tracing` events to the browser console. The level can be raised
//! from devtools by setting `localStorage.dashboard_log_level`.

use std::sync::Once;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;

use crate::storage::BrowserStorage;

const LOG_LEVEL_KEY: &str = "dashboard_log_level";

static INIT: Once = Once::new();

/// Install the panic hook and console subscriber. Safe to call more than once.
pub fn init() {
    INIT.call_once(|| {
        console_error_panic_hook::set_once();

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(MakeWebConsoleWriter::new())
            .without_time(); // no std::time on wasm

        let level = stored_level().unwrap_or(LevelFilter::WARN);
        tracing_subscriber::registry()
            .with(level)
            .with(fmt_layer)
            .init();
    });
}

fn stored_level() -> Option<LevelFilter> {
    let raw = BrowserStorage::local().get(LOG_LEVEL_KEY)?;
    parse_level(&raw)
}

fn parse_level(raw: &str) -> Option<LevelFilter> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), Some(LevelFilter::DEBUG));
        assert_eq!(parse_level(" INFO "), Some(LevelFilter::INFO));
        assert_eq!(parse_level("verbose"), None);
    }
}
