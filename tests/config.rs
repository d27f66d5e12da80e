use std::fs;
use std::time::Duration;

use solar_explorer::solar_config::{ConfigError, ExplorerConfig, load_config, load_or_default};

#[test]
fn shipped_config_matches_defaults() {
    let config = load_config("configs/explorer.toml").expect("shipped config");
    let defaults = ExplorerConfig::default();
    assert_eq!(config.gateway.bind, defaults.gateway.bind);
    assert_eq!(config.gateway.horizons_url, defaults.gateway.horizons_url);
    assert_eq!(config.gateway.apod_url, "https://api.nasa.gov/planetary/apod");
    assert_eq!(config.gateway.cache_ttl(), Duration::from_secs(3600));
    assert_eq!(config.gateway.request_spacing(), Duration::from_secs(1));
    assert_eq!(config.gateway.retry_attempts, 3);
    assert_eq!(config.render.width, defaults.render.width);
    assert_eq!(config.render.orbit_points, 200);
    assert_eq!(config.render.camera_position, [20.0, 20.0, 20.0]);
}

#[test]
fn partial_yaml_keeps_remaining_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("explorer.yaml");
    fs::write(
        &path,
        "gateway:\n  bind: 0.0.0.0:8080\n  retry_attempts: 5\nrender:\n  width: 640\n",
    )
    .expect("write yaml");

    let config = load_config(&path).expect("yaml config");
    assert_eq!(config.gateway.bind, "0.0.0.0:8080");
    assert_eq!(config.gateway.retry_attempts, 5);
    assert_eq!(config.gateway.api_key_env, "NASA_API_KEY");
    assert_eq!(config.render.width, 640);
    assert_eq!(config.render.height, 720);
}

#[test]
fn toml_is_chosen_by_extension() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("explorer.toml");
    fs::write(&path, "[render]\nscale = 2.5\nframe_rate = 30\n").expect("write toml");

    let config = load_config(&path).expect("toml config");
    assert_eq!(config.render.scale, 2.5);
    assert_eq!(config.render.frame_rate, 30);
    assert_eq!(config.gateway.request_timeout(), Duration::from_secs(30));
}

#[test]
fn invalid_files_report_their_format() {
    let dir = tempfile::tempdir().expect("tempdir");
    let toml_path = dir.path().join("bad.toml");
    fs::write(&toml_path, "[render\nwidth = ").expect("write toml");
    assert!(matches!(load_config(&toml_path), Err(ConfigError::Toml(_))));

    let yaml_path = dir.path().join("bad.yaml");
    fs::write(&yaml_path, "render: [1, 2").expect("write yaml");
    assert!(matches!(load_config(&yaml_path), Err(ConfigError::Parse(_))));

    let missing = dir.path().join("missing.yaml");
    assert!(matches!(load_config(&missing), Err(ConfigError::Io(_))));
}

#[test]
fn no_path_means_defaults() {
    let config = load_or_default(None).expect("defaults");
    assert_eq!(config.gateway.retry_base_delay(), Duration::from_secs(1));
    assert_eq!(config.render.damping_factor, 0.05);
}

#[test]
fn api_key_absent_when_variable_unset() {
    let mut config = ExplorerConfig::default().gateway;
    config.api_key_env = "SOLAR_EXPLORER_TEST_UNSET_KEY".to_string();
    assert_eq!(config.api_key(), None);
}
