use std::io::Write;

use pretty_assertions::assert_eq;
use quote_server::ServerConfig;
use quote_server::config::{ConfigError, DEFAULT_PORT};

#[test]
fn empty_file_gives_defaults() {
    let config = ServerConfig::from_toml_str("").unwrap();

    assert_eq!(config, ServerConfig::default());
    assert_eq!(config.server.port, DEFAULT_PORT);
    assert_eq!(config.pricing.base_cents, 15000);
    assert!(config.checkout.endpoint.is_none());
    assert!(config.jobs.program.is_none());
}

#[test]
fn partial_tables_keep_other_defaults() {
    let config = ServerConfig::from_toml_str(
        r#"
        [server]
        port = 8080

        [pricing]
        base_cents = 20000
        powershell_cents = 2500

        [checkout]
        endpoint = "https://payments.example.com/sessions"
        "#,
    )
    .unwrap();

    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.bind, "0.0.0.0");
    assert_eq!(config.pricing.base_cents, 20000);
    assert_eq!(config.pricing.powershell_cents, 2500);
    assert_eq!(config.pricing.per_os_cents, 1000);
    assert_eq!(config.checkout.currency, "usd");
    assert_eq!(
        config.checkout.endpoint.as_deref(),
        Some("https://payments.example.com/sessions")
    );
}

#[test]
fn redirect_urls_follow_site_url() {
    let config = ServerConfig::from_toml_str(
        r#"
        [site]
        url = "https://scripts.example.com/"
        "#,
    )
    .unwrap();

    assert_eq!(
        config.site.success_url(),
        "https://scripts.example.com/success?session_id={CHECKOUT_SESSION_ID}"
    );
    assert_eq!(config.site.cancel_url(), "https://scripts.example.com/cancelled");
}

#[test]
fn reads_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[jobs]\nprogram = \"celery\"\nworking_dir = \"/srv/worker\"").unwrap();

    let config = ServerConfig::load(Some(file.path())).unwrap();

    assert_eq!(config.jobs.program.as_deref(), Some("celery"));
    assert_eq!(config.jobs.args.len(), 4);
    assert_eq!(
        config.jobs.working_dir.as_deref(),
        Some(std::path::Path::new("/srv/worker"))
    );
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");

    let err = ServerConfig::load(Some(&missing)).unwrap_err();

    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = ServerConfig::from_toml_str("[server\nport = 1").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn pricing_that_overflows_is_rejected() {
    // Each value fits on its own; their sum does not.
    let err = ServerConfig::from_toml_str(
        r#"
        [pricing]
        base_cents = 9223372036854775807
        packaging_cents = 9223372036854775807
        "#,
    )
    .unwrap_err();

    assert!(matches!(err, ConfigError::PricingOverflow));
}

#[test]
fn per_os_surcharge_is_checked_for_every_platform() {
    // Fits once, overflows when charged for all three platforms.
    let err = ServerConfig::from_toml_str(
        r#"
        [pricing]
        per_os_cents = 9000000000000000000
        "#,
    )
    .unwrap_err();

    assert!(matches!(err, ConfigError::PricingOverflow));
}

#[test]
fn large_but_safe_pricing_is_accepted() {
    let config = ServerConfig::from_toml_str(
        r#"
        [pricing]
        base_cents = 1000000000000
        "#,
    )
    .unwrap();

    assert_eq!(config.pricing.max_quote_cents(), Some(1_000_000_009_500));
}

#[test]
fn timeouts_default_and_must_be_positive() {
    let config = ServerConfig::default();
    assert_eq!(config.checkout.timeout_secs, 15);
    assert_eq!(config.jobs.timeout_secs, 30);

    let err = ServerConfig::from_toml_str("[jobs]\ntimeout_secs = 0").unwrap_err();
    assert!(matches!(err, ConfigError::ZeroJobTimeout));

    let err = ServerConfig::from_toml_str("[checkout]\ntimeout_secs = 0").unwrap_err();
    assert!(matches!(err, ConfigError::ZeroCheckoutTimeout));
}

#[test]
fn socket_addr_rejects_hostnames() {
    let mut config = ServerConfig::default();
    config.server.bind = "localhost".to_string();

    assert!(matches!(config.socket_addr(), Err(ConfigError::BindAddress(_))));

    config.server.bind = "127.0.0.1".to_string();
    assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:3000");
}
