use chrono::{TimeZone, Utc};
use solar_explorer::solar_core::constants::OBLIQUITY_J2000_DEG;
use solar_explorer::solar_ephemeris::{
    PLANET_CATALOG, Planet, ReferenceFrame, catalog, planet_positions, position, position_in,
};

#[test]
fn every_planet_has_a_finite_nonzero_position() {
    let instants = [
        Utc.with_ymd_and_hms(1900, 1, 1, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 2, 29, 6, 30, 0).unwrap(),
        Utc.with_ymd_and_hms(2100, 12, 31, 23, 59, 59).unwrap(),
    ];
    for instant in instants {
        for planet in Planet::ALL {
            let p = position(planet, instant);
            assert!(p.is_finite(), "{planet} at {instant} not finite: {p:?}");
            assert!(p.norm() > 0.1, "{planet} at {instant} too close to the Sun");
        }
    }
}

#[test]
fn earth_stays_near_one_au() {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    for day in (0..365).step_by(15) {
        let instant = start + chrono::Duration::days(day);
        let r = position(Planet::Earth, instant).norm();
        assert!((0.98..1.02).contains(&r), "Earth at {r} AU on day {day}");
    }
}

#[test]
fn distances_follow_planet_order() {
    let instant = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let positions = planet_positions(instant);
    assert_eq!(positions.len(), 8);
    let mercury = positions[0].distance_from_sun;
    let neptune = positions[7].distance_from_sun;
    assert!((0.30..0.47).contains(&mercury));
    assert!((29.0..31.0).contains(&neptune));
    for p in &positions {
        assert!((p.position.norm() - p.distance_from_sun).abs() < 1e-12);
        assert!((p.position_km.x - p.position.x * 149_597_870.7).abs() < 1e-3);
        assert!(p.orbit_points.is_none());
    }
}

#[test]
fn earth_sits_opposite_the_december_sun() {
    // Nine days after the December solstice the Earth is just past 90 degrees
    // of heliocentric ecliptic longitude, and on the ecliptic itself.
    let instant = Utc.with_ymd_and_hms(2023, 12, 31, 0, 0, 0).unwrap();
    let p = position_in(Planet::Earth, instant, ReferenceFrame::EclipticJ2000);
    let longitude = p.y.atan2(p.x).to_degrees();
    assert!((97.5..100.0).contains(&longitude), "longitude = {longitude}");
    assert!(p.z.abs() < 1e-3, "z = {}", p.z);
}

#[test]
fn equatorial_frame_tilts_ecliptic_by_obliquity() {
    let instant = Utc.with_ymd_and_hms(2024, 3, 20, 0, 0, 0).unwrap();
    let ecl = position_in(Planet::Earth, instant, ReferenceFrame::EclipticJ2000);
    let eq = position_in(Planet::Earth, instant, ReferenceFrame::EquatorialJ2000);
    let (sin_e, cos_e) = OBLIQUITY_J2000_DEG.to_radians().sin_cos();
    assert_eq!(ecl.x, eq.x);
    assert!((eq.y - (ecl.y * cos_e - ecl.z * sin_e)).abs() < 1e-12);
    assert!((eq.z - (ecl.y * sin_e + ecl.z * cos_e)).abs() < 1e-12);
    assert!((eq.norm() - ecl.norm()).abs() < 1e-12);
    assert_eq!(eq, position(Planet::Earth, instant));
}

#[test]
fn planet_names_parse_case_insensitively() {
    assert_eq!("Mars".parse::<Planet>().unwrap(), Planet::Mars);
    assert_eq!(" NEPTUNE ".parse::<Planet>().unwrap(), Planet::Neptune);
    let err = "pluto".parse::<Planet>().unwrap_err();
    assert!(err.to_string().contains("pluto"));
}

#[test]
fn catalog_covers_every_planet_in_order() {
    assert_eq!(PLANET_CATALOG.len(), Planet::ALL.len());
    for planet in Planet::ALL {
        assert_eq!(catalog::entry(planet).planet, planet);
    }
    assert_eq!(catalog::entry(Planet::Earth).color.hex(), "#4B0082");
    assert_eq!(catalog::entry(Planet::Jupiter).relative_size, 11.21);
}
