//! Heliocentric planetary ephemeris built on the VSOP87 planetary theory.
//!
//! Positions are evaluated with the rectangular VSOP87A series (heliocentric,
//! ecliptic and equinox of J2000.0) and optionally rotated into the J2000 mean
//! equator. Every call is pure: the same planet and instant always produce the
//! same vector.

use chrono::{DateTime, Utc};
use serde::Serialize;
use solar_core::constants::OBLIQUITY_J2000_DEG;
use solar_core::time::julian_ephemeris_day;
use solar_core::units::au_to_km;
use solar_core::vector::Vector3;
use thiserror::Error;
use vsop87::{RectangularCoordinates, vsop87a};

pub mod catalog;

pub use catalog::{PLANET_CATALOG, Planet, PlanetDescriptor, Rgb, SUN_COLOR};

/// Errors surfaced at the ephemeris input boundary.
#[derive(Debug, Error)]
pub enum EphemerisError {
    #[error("unknown planet `{name}`")]
    UnknownPlanet { name: String },
}

/// Reference frame of returned Cartesian vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferenceFrame {
    /// Ecliptic and equinox of J2000.0 (native VSOP87A frame).
    EclipticJ2000,
    /// Mean equator and equinox of J2000.0.
    #[default]
    EquatorialJ2000,
}

/// Heliocentric position of a planet, with optional sampled orbit path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetPosition {
    pub planet: Planet,
    /// Position in astronomical units.
    pub position: Vector3,
    /// Position in kilometres.
    pub position_km: Vector3,
    /// Distance from the Sun in astronomical units.
    pub distance_from_sun: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orbit_points: Option<Vec<Vector3>>,
}

/// Heliocentric position of `planet` at `instant`, in AU, J2000 mean equator.
pub fn position(planet: Planet, instant: DateTime<Utc>) -> Vector3 {
    position_in(planet, instant, ReferenceFrame::default())
}

/// Heliocentric position of `planet` at `instant`, in AU, in the requested frame.
pub fn position_in(planet: Planet, instant: DateTime<Utc>, frame: ReferenceFrame) -> Vector3 {
    position_at_jde(planet, julian_ephemeris_day(instant), frame)
}

/// Heliocentric position at a Julian Ephemeris Day (TT), in AU.
pub fn position_at_jde(planet: Planet, jde: f64, frame: ReferenceFrame) -> Vector3 {
    let ecliptic = ecliptic_position(planet, jde);
    match frame {
        ReferenceFrame::EclipticJ2000 => ecliptic,
        ReferenceFrame::EquatorialJ2000 => ecliptic_to_equatorial(ecliptic),
    }
}

/// Positions of every planet at `instant`, in catalog order, without orbit paths.
pub fn planet_positions(instant: DateTime<Utc>) -> Vec<PlanetPosition> {
    Planet::ALL
        .into_iter()
        .map(|planet| {
            let position = position(planet, instant);
            PlanetPosition {
                planet,
                position,
                position_km: Vector3::new(
                    au_to_km(position.x),
                    au_to_km(position.y),
                    au_to_km(position.z),
                ),
                distance_from_sun: position.norm(),
                orbit_points: None,
            }
        })
        .collect()
}

fn ecliptic_position(planet: Planet, jde: f64) -> Vector3 {
    let coords: RectangularCoordinates = match planet {
        Planet::Mercury => vsop87a::mercury(jde),
        Planet::Venus => vsop87a::venus(jde),
        Planet::Earth => vsop87a::earth(jde),
        Planet::Mars => vsop87a::mars(jde),
        Planet::Jupiter => vsop87a::jupiter(jde),
        Planet::Saturn => vsop87a::saturn(jde),
        Planet::Uranus => vsop87a::uranus(jde),
        Planet::Neptune => vsop87a::neptune(jde),
    };
    Vector3::new(coords.x, coords.y, coords.z)
}

/// Rotate an ecliptic J2000 vector about the x-axis into the J2000 mean equator.
pub fn ecliptic_to_equatorial(v: Vector3) -> Vector3 {
    let (sin_e, cos_e) = OBLIQUITY_J2000_DEG.to_radians().sin_cos();
    Vector3::new(v.x, v.y * cos_e - v.z * sin_e, v.y * sin_e + v.z * cos_e)
}
