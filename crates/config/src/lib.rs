//! Configuration models and loaders for the Solar Explorer.

use std::fs::File;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Top-level configuration manifest.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ExplorerConfig {
    pub gateway: GatewayConfig,
    pub render: RenderConfig,
}

/// Settings for the HTTP gateway and its upstream services.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GatewayConfig {
    pub bind: String,
    pub neo_feed_url: String,
    pub neo_lookup_url: String,
    pub horizons_url: String,
    pub apod_url: String,
    /// Name of the environment variable holding the NASA API key.
    pub api_key_env: String,
    pub cache_ttl_secs: u64,
    /// Pause between consecutive Horizons requests in one batch.
    pub request_spacing_ms: u64,
    /// Total attempts per Horizons request, including the first.
    pub retry_attempts: u32,
    pub retry_base_delay_ms: u64,
    pub request_timeout_secs: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
            neo_feed_url: "https://api.nasa.gov/neo/rest/v1/feed".to_string(),
            neo_lookup_url: "https://api.nasa.gov/neo/rest/v1/neo".to_string(),
            horizons_url: "https://ssd.jpl.nasa.gov/api/horizons.api".to_string(),
            apod_url: "https://api.nasa.gov/planetary/apod".to_string(),
            api_key_env: "NASA_API_KEY".to_string(),
            cache_ttl_secs: 60 * 60,
            request_spacing_ms: 1_000,
            retry_attempts: 3,
            retry_base_delay_ms: 1_000,
            request_timeout_secs: 30,
        }
    }
}

impl GatewayConfig {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn request_spacing(&self) -> Duration {
        Duration::from_millis(self.request_spacing_ms)
    }

    pub fn retry_base_delay(&self) -> Duration {
        Duration::from_millis(self.retry_base_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Read the API key from the configured environment variable.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

/// Settings for the 3D scene renderer.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// Multiplier from AU to scene units.
    pub scale: f64,
    pub orbit_points: usize,
    pub fov_deg: f64,
    pub near: f64,
    pub far: f64,
    pub camera_position: [f64; 3],
    pub damping_factor: f64,
    pub frame_rate: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            scale: 4.0,
            orbit_points: 200,
            fov_deg: 45.0,
            near: 0.1,
            far: 1000.0,
            camera_position: [20.0, 20.0, 20.0],
            damping_factor: 0.05,
            frame_rate: 60,
        }
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load an explorer configuration from a TOML (`.toml`) or YAML file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ExplorerConfig, ConfigError> {
    load_record(path)
}

/// Load the configuration at `path` if given, otherwise return defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<ExplorerConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => Ok(ExplorerConfig::default()),
    }
}

fn load_record<T, P>(path: P) -> Result<T, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}
