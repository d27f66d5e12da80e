//! Orbit path sampling over one sidereal period and full solar-system snapshots.
use chrono::{DateTime, Utc};
use solar_core::time::julian_ephemeris_day;
use solar_core::vector::Vector3;
use solar_ephemeris::{self as ephemeris, Planet, PlanetPosition, ReferenceFrame};

/// Default number of samples per orbit path.
pub const DEFAULT_ORBIT_SAMPLES: usize = 200;

/// Largest sample count accepted from user input.
pub const MAX_ORBIT_SAMPLES: usize = 2_000;

/// Sidereal period used when a body is missing from [`ORBITAL_PERIODS_DAYS`].
pub const EARTH_PERIOD_DAYS: f64 = 365.26;

/// Approximate sidereal orbital periods, in days.
pub const ORBITAL_PERIODS_DAYS: &[(Planet, f64)] = &[
    (Planet::Mercury, 87.97),
    (Planet::Venus, 224.7),
    (Planet::Earth, EARTH_PERIOD_DAYS),
    (Planet::Mars, 686.98),
    (Planet::Jupiter, 4332.59),
    (Planet::Saturn, 10759.22),
    (Planet::Uranus, 30688.5),
    (Planet::Neptune, 60195.0),
];

/// Sidereal orbital period of `planet` in days, falling back to Earth's.
pub fn orbital_period_days(planet: Planet) -> f64 {
    ORBITAL_PERIODS_DAYS
        .iter()
        .find(|(p, _)| *p == planet)
        .map(|(_, days)| *days)
        .unwrap_or(EARTH_PERIOD_DAYS)
}

/// Sample `sample_count` equally spaced positions over one orbital period starting
/// at `reference`, then repeat the first sample so the polyline closes.
///
/// Returns `sample_count + 1` points, or none when `sample_count` is zero.
pub fn sample_path(planet: Planet, reference: DateTime<Utc>, sample_count: usize) -> Vec<Vector3> {
    let period = orbital_period_days(planet);
    let jde0 = julian_ephemeris_day(reference);

    let mut path = Vec::with_capacity(sample_count.saturating_add(1));
    for i in 0..sample_count {
        let jde = jde0 + (i as f64 / sample_count as f64) * period;
        path.push(ephemeris::position_at_jde(
            planet,
            jde,
            ReferenceFrame::EquatorialJ2000,
        ));
    }
    if let Some(first) = path.first().copied() {
        path.push(first);
    }
    path
}

/// Positions of all planets at `instant`, each with a sampled orbit path.
pub fn solar_system(instant: DateTime<Utc>, sample_count: usize) -> Vec<PlanetPosition> {
    ephemeris::planet_positions(instant)
        .into_iter()
        .map(|position| PlanetPosition {
            orbit_points: Some(sample_path(position.planet, instant, sample_count)),
            ..position
        })
        .collect()
}
