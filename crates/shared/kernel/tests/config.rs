use cp3_kernel::config::{ConfigError, load_app_config};
use std::fs;
use tempfile::tempdir;

#[test]
fn explicit_file_is_loaded() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("register.toml");
    fs::write(
        &file,
        r#"
[store]
url = "https://demo.supabase.co"
api_key = "anon-key"
timeout_seconds = 5

[window]
title = "Comprar"
"#,
    )?;

    let cfg = load_app_config(Some(&file))?;
    assert_eq!(cfg.store.url, "https://demo.supabase.co");
    assert_eq!(cfg.store.api_key, "anon-key");
    assert_eq!(cfg.store.timeout_seconds, 5);
    assert_eq!(cfg.window.title, "Comprar");
    assert_eq!(cfg.logging.level, "info");
    Ok(())
}

#[test]
fn missing_explicit_file_is_an_error() {
    let err = load_app_config(Some("/definitely/not/here/register.toml")).expect_err("missing");
    assert!(matches!(err, ConfigError::Config { context: Some(_), .. }));
}
