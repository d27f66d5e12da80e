//! NASA NeoWs payloads.
//!
//! The structs below are the public contract: upstream JSON is deserialized into
//! them, which drops every field not listed here, and they are re-serialized as is.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::upstream::{API_KEY_PARAM, UpstreamRequest};

/// Orbiting body reported when the lookup carries no close-approach record.
pub const DEFAULT_ORBITING_BODY: &str = "SUN";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeoFeed {
    pub element_count: u64,
    pub near_earth_objects: BTreeMap<String, Vec<NearEarthObject>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearEarthObject {
    pub id: String,
    pub name: String,
    pub estimated_diameter: EstimatedDiameters,
    pub is_potentially_hazardous_asteroid: bool,
    pub close_approach_data: Vec<CloseApproach>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatedDiameters {
    pub kilometers: DiameterRange,
    pub meters: DiameterRange,
    pub miles: DiameterRange,
    pub feet: DiameterRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiameterRange {
    pub estimated_diameter_min: f64,
    pub estimated_diameter_max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloseApproach {
    pub close_approach_date: String,
    #[serde(default)]
    pub close_approach_date_full: Option<String>,
    pub epoch_date_close_approach: i64,
    pub relative_velocity: RelativeVelocity,
    pub miss_distance: MissDistance,
    pub orbiting_body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelativeVelocity {
    pub kilometers_per_second: String,
    pub kilometers_per_hour: String,
    pub miles_per_hour: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissDistance {
    pub astronomical: String,
    pub lunar: String,
    pub kilometers: String,
    pub miles: String,
}

/// Orbital elements of a single NEO, as exposed to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    pub orbit_id: String,
    pub eccentricity: String,
    pub semi_major_axis: String,
    pub inclination: String,
    pub orbital_period: String,
    pub perihelion_distance: String,
    pub aphelion_distance: String,
    pub orbit_class: OrbitClass,
    pub orbiting_body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitClass {
    pub orbit_class_type: String,
    pub orbit_class_description: String,
    pub orbit_class_range: String,
}

/// Subset of the NeoWs lookup payload needed to build [`OrbitalElements`].
#[derive(Debug, Deserialize)]
pub struct NeoLookup {
    pub orbital_data: LookupOrbitalData,
    #[serde(default)]
    pub close_approach_data: Vec<LookupApproach>,
}

#[derive(Debug, Deserialize)]
pub struct LookupOrbitalData {
    pub orbit_id: String,
    pub eccentricity: String,
    pub semi_major_axis: String,
    pub inclination: String,
    pub orbital_period: String,
    pub perihelion_distance: String,
    pub aphelion_distance: String,
    pub orbit_class: OrbitClass,
}

#[derive(Debug, Deserialize)]
pub struct LookupApproach {
    #[serde(default)]
    pub orbiting_body: Option<String>,
}

impl From<NeoLookup> for OrbitalElements {
    fn from(lookup: NeoLookup) -> Self {
        let orbiting_body = lookup
            .close_approach_data
            .into_iter()
            .next()
            .and_then(|approach| approach.orbiting_body)
            .unwrap_or_else(|| DEFAULT_ORBITING_BODY.to_string());
        let data = lookup.orbital_data;
        Self {
            orbit_id: data.orbit_id,
            eccentricity: data.eccentricity,
            semi_major_axis: data.semi_major_axis,
            inclination: data.inclination,
            orbital_period: data.orbital_period,
            perihelion_distance: data.perihelion_distance,
            aphelion_distance: data.aphelion_distance,
            orbit_class: data.orbit_class,
            orbiting_body,
        }
    }
}

/// Feed request covering the single day `date`.
pub fn feed_request(base_url: &str, date: &str, api_key: &str) -> UpstreamRequest {
    UpstreamRequest::new(base_url)
        .param("start_date", date)
        .param("end_date", date)
        .param(API_KEY_PARAM, api_key)
}

/// Lookup request for one NEO by id.
pub fn lookup_request(base_url: &str, id: &str, api_key: &str) -> UpstreamRequest {
    UpstreamRequest::new(format!("{}/{}", base_url.trim_end_matches('/'), id))
        .param(API_KEY_PARAM, api_key)
}
