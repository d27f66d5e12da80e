//! HTTP gateway between the Solar Explorer front end and the NASA / JPL services.
//!
//! Upstream responses are reduced to typed payloads before they reach a client,
//! and the NASA credential only ever travels on outbound requests.

pub mod apod;
pub mod cache;
pub mod horizons;
pub mod neo;
pub mod retry;
pub mod routes;
pub mod service;
pub mod upstream;

use std::sync::Arc;

use log::info;
use solar_ephemeris::Planet;
use thiserror::Error;

pub use apod::AstronomyPicture;
pub use cache::ResponseCache;
pub use horizons::{HorizonsParseError, OrbitalState, PlanetEphemeris};
pub use neo::{NearEarthObject, NeoFeed, OrbitalElements};
pub use retry::RetryPolicy;
pub use routes::router;
pub use service::Gateway;
pub use upstream::{ReqwestUpstream, Upstream, UpstreamError, UpstreamRequest};

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
    #[error("upstream failed after {attempts} attempts: {source}")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        source: UpstreamError,
    },
    #[error("unexpected upstream payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("failed to parse Horizons data for {planet}: {source}")]
    Parse {
        planet: Planet,
        #[source]
        source: HorizonsParseError,
    },
    #[error("invalid date `{0}`, expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("invalid object id `{0}`")]
    InvalidId(String),
}

/// Serve the gateway routes on `listener` until the server stops.
pub async fn serve<U: Upstream>(
    listener: tokio::net::TcpListener,
    gateway: Arc<Gateway<U>>,
) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("gateway listening on http://{addr}");
    }
    axum::serve(listener, router(gateway)).await
}
