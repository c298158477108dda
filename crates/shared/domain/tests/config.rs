use cp3_domain::config::{AppConfig, LoggingConfig, StoreConfig, WindowConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let store = StoreConfig::default();
    assert_eq!(store.url, "http://localhost:54321");
    assert!(store.api_key.is_empty());
    assert_eq!(store.timeout_seconds, 30);

    let window = WindowConfig::default();
    assert_eq!(window.title, "Registrarse");

    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "info");
    assert!(logging.console);
    assert!(logging.directory.is_none());
}

#[test]
fn app_config_deserializes_partial_sections() {
    let raw = json!({
        "store": { "url": "https://demo.supabase.co", "api_key": "anon" },
        "logging": { "level": "debug", "directory": "/tmp/cp3" }
    });

    let cfg: AppConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.store.url, "https://demo.supabase.co");
    assert_eq!(cfg.store.api_key, "anon");
    assert_eq!(cfg.store.timeout_seconds, 30);
    assert_eq!(cfg.logging.level, "debug");
    assert_eq!(cfg.logging.directory, Some(std::path::PathBuf::from("/tmp/cp3")));
    assert_eq!(cfg.window.width, 960.0);
}

#[test]
fn app_config_clones_share_until_mutated() {
    let original = AppConfig::default();
    let mut copy = original.clone();
    copy.store.api_key = "changed".to_owned();

    assert!(original.store.api_key.is_empty());
    assert_eq!(copy.store.api_key, "changed");
}
