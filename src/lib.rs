//! Solar Explorer: heliocentric planet positions, a headless 3D renderer, and a
//! gateway that sanitizes NASA NEO and JPL Horizons data.
//!
//! The workspace crates are re-exported here so the binaries and integration
//! tests share a single entry point.

use std::sync::Once;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

pub use solar_config;
pub use solar_core;
pub use solar_ephemeris;
pub use solar_export;
pub use solar_gateway;
pub use solar_orbits;
pub use solar_render;

static INIT_LOGGER: Once = Once::new();

/// Install the `env_logger` backend once per process; `RUST_LOG` overrides the `info` default.
pub fn init_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or("info"),
        )
        .try_init();
    });
}

/// Parse a CLI date: `YYYY-MM-DD` (midnight UTC) or a full RFC 3339 timestamp.
pub fn parse_instant(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(day) => Ok(day.and_time(NaiveTime::MIN).and_utc()),
        Err(_) => DateTime::parse_from_rfc3339(raw).map(|dt| dt.with_timezone(&Utc)),
    }
}

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
