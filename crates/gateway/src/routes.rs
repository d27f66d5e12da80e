//! HTTP surface of the gateway.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::NaiveTime;
use log::error;
use serde::{Deserialize, Serialize};
use solar_ephemeris::PlanetPosition;
use solar_orbits::{DEFAULT_ORBIT_SAMPLES, MAX_ORBIT_SAMPLES, solar_system};

use crate::GatewayError;
use crate::apod::AstronomyPicture;
use crate::horizons::PlanetEphemeris;
use crate::neo::{NeoFeed, OrbitalElements};
use crate::service::{Gateway, parse_date};
use crate::upstream::Upstream;

const NEO_FEED_FAILURE: &str = "Failed to fetch near-earth objects";
const ORBIT_FAILURE: &str = "Failed to fetch orbital data";
const APOD_FAILURE: &str = "Failed to fetch astronomy picture";
const CALCULATION_FAILURE: &str = "Failed to calculate planet positions";

#[derive(Debug, Deserialize)]
pub struct DateQuery {
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CalculatedQuery {
    pub date: Option<String>,
    pub orbit_points: Option<usize>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Client-facing error. Internal detail is logged and replaced by a generic message.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal(&'static str),
}

impl ApiError {
    fn missing(name: &str) -> Self {
        let mut label = name.to_string();
        if let Some(first) = label.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        Self::BadRequest(format!("{label} parameter is required"))
    }

    /// Map a gateway failure, logging it and keeping only a generic message for 5xx.
    fn from_gateway(message: &'static str) -> impl FnOnce(GatewayError) -> ApiError {
        move |err| match err {
            GatewayError::InvalidDate(_) | GatewayError::InvalidId(_) => {
                ApiError::BadRequest(err.to_string())
            }
            other => {
                error!("{message}: {other}");
                ApiError::Internal(message)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            Self::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message.to_string()),
        };
        (status, Json(ErrorBody { error })).into_response()
    }
}

pub fn router<U: Upstream>(gateway: Arc<Gateway<U>>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/near-earth-objects", get(near_earth_objects::<U>))
        .route("/near-earth-objects/{id}/orbit", get(orbit::<U>))
        .route("/planets/positions", get(planet_positions::<U>))
        .route("/planets/calculated", get(calculated_positions))
        .route("/apod", get(astronomy_picture::<U>))
        .with_state(gateway)
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn near_earth_objects<U: Upstream>(
    State(gateway): State<Arc<Gateway<U>>>,
    Query(query): Query<DateQuery>,
) -> Result<Json<NeoFeed>, ApiError> {
    let date = query.date.ok_or_else(|| ApiError::missing("date"))?;
    let feed = gateway
        .near_earth_objects(&date)
        .await
        .map_err(ApiError::from_gateway(NEO_FEED_FAILURE))?;
    Ok(Json(feed))
}

async fn orbit<U: Upstream>(
    State(gateway): State<Arc<Gateway<U>>>,
    Path(id): Path<String>,
) -> Result<Json<OrbitalElements>, ApiError> {
    let elements = gateway
        .orbital_elements(&id)
        .await
        .map_err(ApiError::from_gateway(ORBIT_FAILURE))?;
    Ok(Json(elements))
}

async fn planet_positions<U: Upstream>(
    State(gateway): State<Arc<Gateway<U>>>,
    Query(query): Query<DateQuery>,
) -> Result<Json<Vec<PlanetEphemeris>>, ApiError> {
    let date = query.date.ok_or_else(|| ApiError::missing("date"))?;
    let positions = gateway
        .planet_positions(&date)
        .await
        .map_err(ApiError::from_gateway(ORBIT_FAILURE))?;
    Ok(Json(positions))
}

async fn astronomy_picture<U: Upstream>(
    State(gateway): State<Arc<Gateway<U>>>,
    Query(query): Query<DateQuery>,
) -> Result<Json<AstronomyPicture>, ApiError> {
    let date = query.date.ok_or_else(|| ApiError::missing("date"))?;
    let picture = gateway
        .astronomy_picture(&date)
        .await
        .map_err(ApiError::from_gateway(APOD_FAILURE))?;
    Ok(Json(picture))
}

async fn calculated_positions(
    Query(query): Query<CalculatedQuery>,
) -> Result<Json<Vec<PlanetPosition>>, ApiError> {
    let date = query.date.ok_or_else(|| ApiError::missing("date"))?;
    let day = parse_date(&date).map_err(ApiError::from_gateway(CALCULATION_FAILURE))?;
    let orbit_points = query.orbit_points.unwrap_or(DEFAULT_ORBIT_SAMPLES);
    if orbit_points > MAX_ORBIT_SAMPLES {
        return Err(ApiError::BadRequest(format!(
            "orbit_points must not exceed {MAX_ORBIT_SAMPLES}"
        )));
    }
    let instant = day.and_time(NaiveTime::MIN).and_utc();
    let positions = tokio::task::spawn_blocking(move || solar_system(instant, orbit_points))
        .await
        .map_err(|err| {
            error!("{CALCULATION_FAILURE}: {err}");
            ApiError::Internal(CALCULATION_FAILURE)
        })?;
    Ok(Json(positions))
}
