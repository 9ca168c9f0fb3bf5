use std::io::Write;
use tempfile::NamedTempFile;

use agolabel::catalog::{Catalog, StringCatalog};
use agolabel::util::config::AppConfig;

#[test]
fn test_load_full_config() {
    let mut catalog_file = NamedTempFile::new().unwrap();
    catalog_file.write_all(b"just_now = \"now\"\n").unwrap();

    let toml = format!(
        r#"
[catalog]
path = "{}"

[format]
date_pattern = "%Y-%m-%d"
locale = "de_DE"
normalize_seconds = false
"#,
        catalog_file.path().display()
    );
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(toml.as_bytes()).unwrap();

    let config = AppConfig::load(Some(f.path())).unwrap();
    assert_eq!(config.catalog.path.as_deref(), Some(catalog_file.path()));
    assert_eq!(config.format.date_pattern, "%Y-%m-%d");
    assert_eq!(config.format.locale, "de_DE");
    assert!(!config.format.normalize_seconds);

    let catalog = config.load_catalog().unwrap();
    assert_eq!(catalog.just_now(), "now");
}

#[test]
fn test_load_partial_config_uses_defaults() {
    let toml = r#"
[format]
locale = "fr_FR"
"#;
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(toml.as_bytes()).unwrap();

    let config = AppConfig::load(Some(f.path())).unwrap();
    assert_eq!(config.format.locale, "fr_FR");
    assert_eq!(config.format.date_pattern, "%d %b %Y");
    assert!(config.format.normalize_seconds);
    assert!(config.catalog.path.is_none());
}

#[test]
fn test_load_empty_config_uses_all_defaults() {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(b"").unwrap();

    let config = AppConfig::load(Some(f.path())).unwrap();
    assert_eq!(config.format.locale, "en_US");
    assert_eq!(config.load_catalog().unwrap(), Catalog::default());
}

#[test]
fn test_load_nonexistent_file_fails() {
    let result = AppConfig::load(Some(std::path::Path::new("/nonexistent/path/config.toml")));
    assert!(result.is_err());
}

#[test]
fn test_load_invalid_toml_fails() {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(b"this is not [valid toml {{").unwrap();

    let result = AppConfig::load(Some(f.path()));
    assert!(result.is_err());
}

#[test]
fn test_missing_catalog_file_fails() {
    let toml = r#"
[catalog]
path = "/nonexistent/catalog.toml"
"#;
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(toml.as_bytes()).unwrap();

    let config = AppConfig::load(Some(f.path())).unwrap();
    let err = config.load_catalog().unwrap_err();
    assert!(err.to_string().contains("Failed to load catalog"));
}

#[test]
fn test_default_config() {
    let config = AppConfig::default();
    assert!(config.catalog.path.is_none());
    assert_eq!(config.format.date_pattern, "%d %b %Y");
    assert_eq!(config.format.locale, "en_US");
    assert!(config.format.normalize_seconds);
    assert!(config.log_dir().ends_with("logs"));
}
