//! Integration tests for configuration loading.

use std::collections::HashMap;

use global_catalog::{CatalogConfig, ConfigError, GlobalCatalog, ServiceUrl};

fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn test_hyphenated_service_name_maps_to_variable_prefix() {
    let config = CatalogConfig::from_lookup(
        "my-catalog",
        lookup_from(&[
            ("MY_CATALOG_AUTH_TYPE", "BASIC"),
            ("MY_CATALOG_USERNAME", "apikey"),
            ("MY_CATALOG_PASSWORD", "s3cret"),
            ("MY_CATALOG_URL", "https://catalog.example.com/api/v1/"),
        ]),
    )
    .unwrap();

    assert_eq!(config.service_name(), "my-catalog");
    assert_eq!(config.authenticator().auth_type(), "basic");
    assert_eq!(config.service_url().as_ref(), "https://catalog.example.com/api/v1");
}

#[test]
fn test_credentials_never_appear_in_debug_output() {
    let config = CatalogConfig::from_lookup(
        "global_catalog",
        lookup_from(&[
            ("GLOBAL_CATALOG_AUTH_TYPE", "bearerToken"),
            ("GLOBAL_CATALOG_BEARER_TOKEN", "very-secret-token"),
        ]),
    )
    .unwrap();

    assert!(!format!("{config:?}").contains("very-secret-token"));
}

#[test]
fn test_empty_values_count_as_unset() {
    let result = CatalogConfig::from_lookup(
        "global_catalog",
        lookup_from(&[
            ("GLOBAL_CATALOG_AUTH_TYPE", "bearertoken"),
            ("GLOBAL_CATALOG_BEARER_TOKEN", ""),
        ]),
    );

    assert!(matches!(
        result,
        Err(ConfigError::MissingRequiredField {
            field: "bearer_token"
        })
    ));
}

#[test]
fn test_client_uses_configured_url_until_replaced() {
    let config = CatalogConfig::from_lookup(
        "global_catalog",
        lookup_from(&[("GLOBAL_CATALOG_AUTH_TYPE", "noauth")]),
    )
    .unwrap();
    let mut catalog = GlobalCatalog::new(&config);

    assert_eq!(
        catalog.service_url().as_ref(),
        "https://globalcatalog.cloud.ibm.com/api/v1"
    );

    catalog.set_service_url(ServiceUrl::new("https://private.globalcatalog.cloud.ibm.com/api/v1").unwrap());

    assert_eq!(
        catalog.service_url().as_ref(),
        "https://private.globalcatalog.cloud.ibm.com/api/v1"
    );
}

#[test]
fn test_explicit_url_overrides_environment_url() {
    let vars = [
        ("GLOBAL_CATALOG_AUTH_TYPE", "noauth"),
        ("GLOBAL_CATALOG_URL", "https://from-env.example.com/api/v1"),
    ];

    let overridden = CatalogConfig::from_lookup_with_url(
        "global_catalog",
        Some(ServiceUrl::new("https://explicit.example.com/api/v1").unwrap()),
        lookup_from(&vars),
    )
    .unwrap();
    let from_env =
        CatalogConfig::from_lookup_with_url("global_catalog", None, lookup_from(&vars)).unwrap();

    assert_eq!(
        overridden.service_url().as_ref(),
        "https://explicit.example.com/api/v1"
    );
    assert_eq!(
        from_env.service_url().as_ref(),
        "https://from-env.example.com/api/v1"
    );
}
