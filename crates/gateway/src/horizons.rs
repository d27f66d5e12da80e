//! JPL Horizons vector-table requests and text parsing.

use chrono::NaiveDate;
use serde::Serialize;
use solar_core::units::km_to_au;
use solar_core::vector::Vector3;
use solar_ephemeris::Planet;
use thiserror::Error;

use crate::upstream::UpstreamRequest;

const START_MARKER: &str = "$$SOE";
const END_MARKER: &str = "$$EOE";

#[derive(Debug, Error, PartialEq)]
pub enum HorizonsParseError {
    #[error("missing `{0}` marker")]
    MissingMarker(&'static str),
    #[error("missing {0} line after `$$SOE`")]
    MissingLine(&'static str),
    #[error("{line} line has {found} values, expected 3")]
    MissingComponent { line: &'static str, found: usize },
    #[error("invalid number `{value}` in {line} line")]
    InvalidNumber { line: &'static str, value: String },
}

/// Position (AU) and velocity (km/day) from one ephemeris record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrbitalState {
    pub position: Vector3,
    pub velocity: Vector3,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetEphemeris {
    pub planet: Planet,
    pub orbital_data: Vec<OrbitalState>,
}

/// Horizons COMMAND code for a planet.
pub fn body_code(planet: Planet) -> &'static str {
    match planet {
        Planet::Mercury => "199",
        Planet::Venus => "299",
        Planet::Earth => "399",
        Planet::Mars => "499",
        Planet::Jupiter => "599",
        Planet::Saturn => "699",
        Planet::Uranus => "799",
        Planet::Neptune => "899",
    }
}

/// Heliocentric vector-table request spanning the day before `date` up to `date`.
pub fn vectors_request(base_url: &str, planet: Planet, date: NaiveDate) -> UpstreamRequest {
    let day_before = date.pred_opt().unwrap_or(date);
    UpstreamRequest::new(base_url)
        .param("format", "text")
        .param("COMMAND", body_code(planet))
        .param("EPHEM_TYPE", "VECTORS")
        .param("CENTER", "500@10")
        .param("START_TIME", day_before.format("%Y-%m-%d").to_string())
        .param("STOP_TIME", date.format("%Y-%m-%d").to_string())
        .param("STEP_SIZE", "1d")
        .param("QUANTITIES", "2")
        .param("OUT_UNITS", "KM-D")
}

/// Parse the first record of a Horizons vector table.
///
/// Layout is fixed: the line after `$$SOE` holds the date, the next one
/// `X = .. Y = .. Z = ..` and the one after `VX= .. VY= .. VZ= ..`. Values are
/// taken in order of appearance; the labels themselves are not checked.
pub fn parse_vectors(text: &str) -> Result<OrbitalState, HorizonsParseError> {
    let lines: Vec<&str> = text.lines().collect();
    let start = lines
        .iter()
        .position(|line| line.contains(START_MARKER))
        .ok_or(HorizonsParseError::MissingMarker(START_MARKER))?
        + 1;
    let end = lines
        .iter()
        .position(|line| line.contains(END_MARKER))
        .ok_or(HorizonsParseError::MissingMarker(END_MARKER))?;

    let record_line = |offset: usize, name: &'static str| {
        let idx = start + offset;
        if idx < end {
            lines
                .get(idx)
                .copied()
                .ok_or(HorizonsParseError::MissingLine(name))
        } else {
            Err(HorizonsParseError::MissingLine(name))
        }
    };

    let position = labelled_values(record_line(1, "position")?, "position")?;
    let velocity = labelled_values(record_line(2, "velocity")?, "velocity")?;

    Ok(OrbitalState {
        position: Vector3::new(
            km_to_au(position[0]),
            km_to_au(position[1]),
            km_to_au(position[2]),
        ),
        velocity: Vector3::from(velocity),
    })
}

/// Values following each `LABEL =` token on a line.
fn labelled_values(line: &str, name: &'static str) -> Result<[f64; 3], HorizonsParseError> {
    let values: Vec<&str> = line
        .split('=')
        .skip(1)
        .filter_map(|segment| segment.split_whitespace().next())
        .collect();
    if values.len() < 3 {
        return Err(HorizonsParseError::MissingComponent {
            line: name,
            found: values.len(),
        });
    }
    let mut out = [0.0; 3];
    for (slot, raw) in out.iter_mut().zip(&values) {
        *slot = raw.parse().map_err(|_| HorizonsParseError::InvalidNumber {
            line: name,
            value: raw.to_string(),
        })?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
*******************************************************************************
Ephemeris / API_USER
$$SOE
2460309.500000000 = A.D. 2023-Dec-31 00:00:00.0000 TDB
 X =-2.561205676611523E+07 Y = 1.449566112140087E+08 Z =-3.437386286796816E+03
 VX=-2.576179702841544E+06 VY=-4.568233887115452E+05 VZ= 8.943172470097930E+01
2460310.500000000 = A.D. 2024-Jan-01 00:00:00.0000 TDB
 X =-2.818217566893011E+07 Y = 1.444830283839571E+08 Z =-3.372099339932203E+03
 VX=-2.564123838506812E+06 VY=-4.902290180426405E+05 VZ= 8.793012296140195E+01
$$EOE
*******************************************************************************
";

    #[test]
    fn parses_first_record_with_negative_values() {
        let state = parse_vectors(SAMPLE).expect("sample parses");
        assert!((state.position.x - (-2.561205676611523e7 / 149_597_870.7)).abs() < 1e-12);
        assert!((state.position.y - 1.449566112140087e8 / 149_597_870.7).abs() < 1e-12);
        assert_eq!(state.velocity.x, -2.576179702841544e6);
        assert_eq!(state.velocity.z, 8.943172470097930e1);
    }

    #[test]
    fn missing_end_marker_is_an_error() {
        let truncated = SAMPLE.replace("$$EOE", "");
        assert_eq!(
            parse_vectors(&truncated),
            Err(HorizonsParseError::MissingMarker("$$EOE"))
        );
    }

    #[test]
    fn record_cut_short_before_end_marker() {
        let text = "$$SOE\n2460309.5 = A.D. 2023-Dec-31\n$$EOE\n";
        assert_eq!(
            parse_vectors(text),
            Err(HorizonsParseError::MissingLine("position"))
        );
    }

    #[test]
    fn garbage_number_is_reported() {
        let text = "$$SOE\ndate\n X = abc Y = 1 Z = 2\n VX= 1 VY= 2 VZ= 3\n$$EOE\n";
        assert!(matches!(
            parse_vectors(text),
            Err(HorizonsParseError::InvalidNumber { line: "position", .. })
        ));
    }

    #[test]
    fn request_spans_previous_day() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let request = vectors_request("https://example.test/horizons", Planet::Mars, date);
        assert_eq!(request.query_value("COMMAND"), Some("499"));
        assert_eq!(request.query_value("START_TIME"), Some("2024-02-29"));
        assert_eq!(request.query_value("STOP_TIME"), Some("2024-03-01"));
        assert_eq!(request.query_value("CENTER"), Some("500@10"));
    }
}
