use figment::{
    Figment,
    providers::{Format, Toml},
};

use crate::AppConfig;

const MINIMAL: &str = r#"
    app_name = "product-catalog"
    app_env = "development"

    [server]
    host = "0.0.0.0"
    port = 3550

    [store]

    [telemetry]
"#;

fn load_from_str(toml: &str) -> AppConfig {
    Figment::new()
        .merge(Toml::string(toml))
        .extract()
        .expect("config should deserialize")
}

#[test]
fn test_defaults_apply() {
    let config = load_from_str(MINIMAL);

    assert_eq!(config.server.port, 3550);
    assert_eq!(config.server.extra_latency_ms, None);
    assert_eq!(config.store.table_name, "Products");
    assert_eq!(config.store.region, None);
    assert_eq!(config.store.endpoint_url, None);
    assert_eq!(config.telemetry.log_level, "info");
    assert!(config.is_development());
    assert!(!config.is_production());
}

#[test]
fn test_explicit_values_override_defaults() {
    let config = load_from_str(
        r#"
        app_name = "product-catalog"
        app_env = "production"

        [server]
        host = "0.0.0.0"
        port = 4000
        extra_latency_ms = 250

        [store]
        table_name = "CatalogProducts"
        region = "eu-west-1"
        endpoint_url = "http://localhost:8000"

        [telemetry]
        log_level = "debug"
    "#,
    );

    assert_eq!(config.server.extra_latency_ms, Some(250));
    assert_eq!(config.store.table_name, "CatalogProducts");
    assert_eq!(config.store.region.as_deref(), Some("eu-west-1"));
    assert_eq!(config.store.endpoint_url.as_deref(), Some("http://localhost:8000"));
    assert_eq!(config.telemetry.log_level, "debug");
    assert!(config.is_production());
}

#[test]
fn test_later_layer_wins() {
    let config: AppConfig = Figment::new()
        .merge(Toml::string(MINIMAL))
        .merge(Toml::string("[server]\nhost = \"127.0.0.1\"\nport = 3551"))
        .extract()
        .expect("config should deserialize");

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 3551);
    // 未被覆盖的键保持原值
    assert_eq!(config.app_name, "product-catalog");
}
