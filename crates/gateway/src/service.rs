//! Gateway operations, independent of the HTTP layer.

use chrono::NaiveDate;
use log::{info, warn};
use solar_config::GatewayConfig;
use solar_ephemeris::Planet;

use crate::GatewayError;
use crate::apod::{self, AstronomyPicture};
use crate::cache::ResponseCache;
use crate::horizons::{self, PlanetEphemeris};
use crate::neo::{self, NeoFeed, NeoLookup, OrbitalElements};
use crate::retry::{RetryPolicy, fetch_with_retry};
use crate::upstream::Upstream;

pub struct Gateway<U> {
    upstream: U,
    config: GatewayConfig,
    api_key: String,
    positions_cache: ResponseCache<Vec<PlanetEphemeris>>,
}

impl<U: Upstream> Gateway<U> {
    pub fn new(upstream: U, config: GatewayConfig, api_key: Option<String>) -> Self {
        if api_key.is_none() {
            warn!(
                "environment variable {} is not set; NASA requests will be rejected upstream",
                config.api_key_env
            );
        }
        Self {
            upstream,
            positions_cache: ResponseCache::new(config.cache_ttl()),
            api_key: api_key.unwrap_or_default(),
            config,
        }
    }

    /// Build a gateway reading the API key from the configured environment variable.
    pub fn from_config(upstream: U, config: GatewayConfig) -> Self {
        let api_key = config.api_key();
        Self::new(upstream, config, api_key)
    }

    pub fn upstream(&self) -> &U {
        &self.upstream
    }

    pub fn positions_cache(&self) -> &ResponseCache<Vec<PlanetEphemeris>> {
        &self.positions_cache
    }

    /// NEO feed for a single day, reduced to the public fields.
    pub async fn near_earth_objects(&self, date: &str) -> Result<NeoFeed, GatewayError> {
        parse_date(date)?;
        let request = neo::feed_request(&self.config.neo_feed_url, date, &self.api_key);
        let body = self.upstream.fetch(&request).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Astronomy Picture of the Day for `date`, reduced to the public fields.
    pub async fn astronomy_picture(&self, date: &str) -> Result<AstronomyPicture, GatewayError> {
        parse_date(date)?;
        let request = apod::apod_request(&self.config.apod_url, date, &self.api_key);
        let body = self.upstream.fetch(&request).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Orbital elements of one NEO, with the orbiting body taken from its first close approach.
    pub async fn orbital_elements(&self, id: &str) -> Result<OrbitalElements, GatewayError> {
        if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(GatewayError::InvalidId(id.to_string()));
        }
        let request = neo::lookup_request(&self.config.neo_lookup_url, id, &self.api_key);
        let body = self.upstream.fetch(&request).await?;
        let lookup: NeoLookup = serde_json::from_str(&body)?;
        Ok(lookup.into())
    }

    /// Horizons state vectors for all planets, fetched one at a time.
    ///
    /// The batch is all-or-nothing and only complete batches are cached, keyed by
    /// the raw `date` string.
    pub async fn planet_positions(&self, date: &str) -> Result<Vec<PlanetEphemeris>, GatewayError> {
        if let Some(cached) = self.positions_cache.get(date) {
            info!("planet positions for {date} served from cache");
            return Ok(cached);
        }
        let day = parse_date(date)?;

        let policy = RetryPolicy {
            attempts: self.config.retry_attempts,
            base_delay: self.config.retry_base_delay(),
        };
        let mut batch = Vec::with_capacity(Planet::ALL.len());
        for planet in Planet::ALL {
            if !batch.is_empty() {
                tokio::time::sleep(self.config.request_spacing()).await;
            }
            let request = horizons::vectors_request(&self.config.horizons_url, planet, day);
            let text = fetch_with_retry(&self.upstream, &request, policy).await?;
            let state = horizons::parse_vectors(&text)
                .map_err(|source| GatewayError::Parse { planet, source })?;
            batch.push(PlanetEphemeris {
                planet,
                orbital_data: vec![state],
            });
        }

        self.positions_cache.insert(date, batch.clone());
        info!("cached planet positions for {date}");
        Ok(batch)
    }
}

pub(crate) fn parse_date(date: &str) -> Result<NaiveDate, GatewayError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| GatewayError::InvalidDate(date.to_string()))
}
