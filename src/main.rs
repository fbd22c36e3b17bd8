//! Far Away Frontend Entry Point

mod app;
mod components;
mod config;
mod dialog;
mod error;
mod logging;
mod models;
mod packing_list;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use log::LevelFilter;

/// Install logging before reading config so config warnings are shown,
/// then switch to the configured level
fn init_config(load: impl FnOnce() -> AppConfig) -> AppConfig {
    logging::init(LevelFilter::Info);
    let config = load();
    logging::init(logging::parse_level(&config.log_level));
    config
}

fn main() {
    console_error_panic_hook::set_once();

    let config = init_config(AppConfig::load);
    log::info!("starting {}", config.title);

    mount_to_body(move || view! { <App config=config /> });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::Ordering;

    #[test]
    fn test_invalid_config_warning_is_logged() {
        let _guard = logging::LEVEL_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let before = logging::WARNINGS.load(Ordering::SeqCst);

        let config = init_config(|| AppConfig::from_embedded(Some("not json")));

        assert_eq!(config, AppConfig::default());
        assert!(logging::WARNINGS.load(Ordering::SeqCst) > before);
        assert_eq!(log::max_level(), LevelFilter::Info);
    }

    #[test]
    fn test_configured_level_applied_after_load() {
        let _guard = logging::LEVEL_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        let config = init_config(|| AppConfig::from_embedded(Some(r#"{"log_level": "error"}"#)));

        assert_eq!(config.log_level, "error");
        assert_eq!(log::max_level(), LevelFilter::Error);
    }
}
