use sql_query_transpiler::config::{Config, DefaultsConfig};

#[test]
fn test_default_config() {
    let config = Config::default();

    assert!(config.defaults.read_dialect.is_none());
    assert!(config.defaults.write_dialect.is_none());
    assert!(config.defaults.dialect.is_none());
    assert!(config.defaults.format.is_none());
}

#[test]
fn test_defaults_config_with_values() {
    let defaults = DefaultsConfig {
        read_dialect:  Some("mysql".to_string()),
        write_dialect: Some("postgresql".to_string()),
        dialect:       None,
        format:        Some("json".to_string())
    };

    assert_eq!(defaults.read_dialect.as_deref(), Some("mysql"));
    assert_eq!(defaults.write_dialect.as_deref(), Some("postgresql"));
    assert_eq!(defaults.format.as_deref(), Some("json"));
}

#[test]
fn test_parse_config_from_toml() {
    let config: Config = toml::from_str(
        r#"
        [defaults]
        read_dialect = "sqlite"
        format = "yaml"
        "#
    )
    .unwrap();

    assert_eq!(config.defaults.read_dialect.as_deref(), Some("sqlite"));
    assert!(config.defaults.write_dialect.is_none());
    assert_eq!(config.defaults.format.as_deref(), Some("yaml"));
}

#[test]
fn test_parse_config_without_defaults_section() {
    let config: Config = toml::from_str("").unwrap();
    assert!(config.defaults.read_dialect.is_none());
}

#[test]
fn test_parse_config_rejects_invalid_toml() {
    let result: Result<Config, _> = toml::from_str("[defaults\nread_dialect = ");
    assert!(result.is_err());
}

#[test]
fn test_config_clone() {
    let mut config = Config::default();
    config.defaults.dialect = Some("hive".to_string());
    let cloned = config.clone();
    assert_eq!(cloned.defaults.dialect.as_deref(), Some("hive"));
}

#[test]
fn test_config_debug() {
    let config = Config::default();
    let debug = format!("{:?}", config);
    assert!(debug.contains("Config"));
}
