//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files.

use std::io::Write;
use std::path::PathBuf;

use datelog_domain::{BackendConfig, DateLogError};
use datelog_infra::config;
use tempfile::NamedTempFile;

fn write_config(contents: &str, extension: &str) -> PathBuf {
    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file.write_all(contents.as_bytes()).expect("Failed to write to temp file");

    let path = temp_file.path().with_extension(extension);
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");
    path
}

#[test]
fn test_load_supabase_config_from_json_file() {
    let path = write_config(
        r#"{
            "server": { "bind_address": "0.0.0.0:3001" },
            "backend": {
                "kind": "supabase",
                "url": "https://abc.supabase.co/",
                "anon_key": "anon-key-123",
                "timeout_seconds": 10
            },
            "logging": { "level": "debug", "json": true }
        }"#,
        "json",
    );

    let config = config::load_from_file(Some(path.clone())).expect("config from JSON file");
    std::fs::remove_file(path).ok();

    assert_eq!(config.server.bind_address, "0.0.0.0:3001");
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json);
    match &config.backend {
        BackendConfig::Supabase(supabase) => {
            assert_eq!(supabase.url, "https://abc.supabase.co/");
            assert_eq!(supabase.anon_key, "anon-key-123");
            assert_eq!(supabase.timeout_seconds, 10);
        }
        other => panic!("expected supabase backend, got {:?}", other),
    }
    assert!(config::validate(&config).is_ok());
}

#[test]
fn test_load_memory_config_from_toml_file() {
    let path = write_config(
        r#"
[server]
bind_address = "127.0.0.1:3002"

[backend]
kind = "memory"

[backend.tokens]
"dev-token" = "dev-user"
"#,
        "toml",
    );

    let config = config::load_from_file(Some(path.clone())).expect("config from TOML file");
    std::fs::remove_file(path).ok();

    assert_eq!(config.server.bind_address, "127.0.0.1:3002");
    assert_eq!(config.logging.level, "info");
    match &config.backend {
        BackendConfig::Memory(memory) => {
            assert_eq!(memory.tokens.get("dev-token").map(String::as_str), Some("dev-user"));
        }
        other => panic!("expected memory backend, got {:?}", other),
    }
}

#[test]
fn test_load_config_with_minimal_fields() {
    let path = write_config(r#"{ "backend": { "kind": "memory" } }"#, "json");

    let config = config::load_from_file(Some(path.clone())).expect("minimal config");
    std::fs::remove_file(path).ok();

    assert_eq!(config.server.bind_address, "127.0.0.1:3001");
    assert!(!config.logging.json);
    assert!(matches!(config.backend, BackendConfig::Memory(ref m) if m.tokens.is_empty()));
}

#[test]
fn test_missing_backend_is_rejected() {
    let path = write_config(r#"{ "server": { "bind_address": "127.0.0.1:3001" } }"#, "json");

    let result = config::load_from_file(Some(path.clone()));
    std::fs::remove_file(path).ok();

    assert!(matches!(result, Err(DateLogError::Config(_))));
}

#[test]
fn test_unknown_backend_kind_is_rejected() {
    let path = write_config(r#"{ "backend": { "kind": "sqlite" } }"#, "json");

    let result = config::load_from_file(Some(path.clone()));
    std::fs::remove_file(path).ok();

    assert!(matches!(result, Err(DateLogError::Config(msg)) if msg.contains("JSON")));
}

#[test]
fn test_anon_key_is_never_serialized() {
    let path = write_config(
        r#"{ "backend": { "kind": "supabase", "url": "https://abc.supabase.co", "anon_key": "s3cret" } }"#,
        "json",
    );

    let config = config::load_from_file(Some(path.clone())).expect("config");
    std::fs::remove_file(path).ok();

    let rendered = serde_json::to_string(&config).expect("serialize config");
    assert!(!rendered.contains("s3cret"));
}
