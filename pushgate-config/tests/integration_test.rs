//! Integration tests for pushgate-config

use pushgate_config::*;
use std::env;
use std::io::Write;

#[test]
fn test_service_loads_files_in_order() {
    let mut json = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(json, r#"{{"host": "https://json.example", "api_path": "/v1"}}"#).unwrap();

    let mut toml = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(toml, r#"host = "https://toml.example""#).unwrap();

    let service = ConfigService::builder()
        .add_file_auto(json.path())
        .add_file(toml.path(), FileFormat::Toml)
        .build()
        .unwrap();

    assert_eq!(service.get::<String>("host").unwrap(), "https://toml.example");
    assert_eq!(service.get::<String>("api_path").unwrap(), "/v1");
    assert_eq!(service.get_optional::<String>("url").unwrap(), None);
}

#[test]
fn test_environment_overrides_files() {
    let mut toml = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(toml, r#"access_token = "from-file""#).unwrap();

    unsafe {
        env::set_var("PGCFGTEST_ACCESS_TOKEN", "from-env");
    }

    let service = ConfigService::builder()
        .with_prefix("PGCFGTEST")
        .add_file_auto(toml.path())
        .load_env()
        .build()
        .unwrap();

    assert_eq!(service.get::<String>("access_token").unwrap(), "from-env");

    unsafe {
        env::remove_var("PGCFGTEST_ACCESS_TOKEN");
    }
}

#[test]
fn test_unknown_extension_is_rejected() {
    let file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();

    let result = ConfigService::builder().add_file_auto(file.path()).build();
    assert!(matches!(result, Err(ConfigError::LoadError(_))));
}

#[test]
fn test_missing_file_is_an_error() {
    let result = ConfigService::builder()
        .add_file("/definitely/not/here.json", FileFormat::Json)
        .build();
    assert!(matches!(result, Err(ConfigError::LoadError(_))));
}

#[test]
fn test_env_loader_with_prefix() {
    let loader = EnvLoader::new(Some("PGLOADERTEST".to_string()));

    unsafe {
        env::set_var("PGLOADERTEST_URL", "https://override.example/push");
    }

    let result = loader.load_var("url");
    assert_eq!(result.unwrap(), "https://override.example/push");
    assert_eq!(loader.load()["url"], "https://override.example/push");

    unsafe {
        env::remove_var("PGLOADERTEST_URL");
    }
}

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidValue {
        key: "ttl".to_string(),
        message: "expected u32".to_string(),
    };
    let display = format!("{}", err);
    assert!(display.contains("ttl"));
    assert!(display.contains("expected u32"));
}
