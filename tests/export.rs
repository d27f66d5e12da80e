use chrono::{TimeZone, Utc};
use solar_explorer::solar_export::positions::{write_csv, write_json, writer_for_path};
use solar_explorer::solar_orbits::solar_system;

fn snapshot() -> Vec<solar_explorer::solar_ephemeris::PlanetPosition> {
    solar_system(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(), 8)
}

#[test]
fn csv_has_header_and_one_row_per_planet() {
    let mut out = Vec::new();
    write_csv(&mut out, &snapshot()).expect("csv");
    let text = String::from_utf8(out).expect("utf8");
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 9);
    assert_eq!(
        lines[0],
        "planet,color,relative_size,x_au,y_au,z_au,x_km,y_km,z_km,distance_au,orbit_points"
    );
    assert!(lines[1].starts_with("mercury,#A0522D,0.383,"));
    assert!(lines[3].starts_with("earth,#4B0082,1.0,"));
    assert!(lines[8].starts_with("neptune,"));
    assert!(lines.iter().skip(1).all(|line| line.ends_with(",9")));
}

#[test]
fn json_uses_camel_case_fields() {
    let mut out = Vec::new();
    write_json(&mut out, &snapshot()).expect("json");
    let value: serde_json::Value = serde_json::from_slice(&out).expect("valid json");
    let planets = value.as_array().expect("array");

    assert_eq!(planets.len(), 8);
    let mars = &planets[3];
    assert_eq!(mars["planet"], "mars");
    assert!(mars["distanceFromSun"].as_f64().unwrap() > 1.3);
    assert!(mars["positionKm"]["x"].is_f64());
    assert_eq!(mars["orbitPoints"].as_array().unwrap().len(), 9);
    assert!(out.ends_with(b"\n"));
}

#[test]
fn writer_creates_parent_directories() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("a").join("b").join("positions.csv");
    {
        let mut writer = writer_for_path(&path).expect("writer");
        write_csv(&mut *writer, &snapshot()).expect("csv");
    }
    let text = std::fs::read_to_string(&path).expect("read back");
    assert_eq!(text.lines().count(), 9);
}
