//! Export helpers for CSV and JSON artifacts.

pub mod positions {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use solar_ephemeris::{PlanetPosition, catalog};
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum ExportError {
        #[error("I/O error: {0}")]
        Io(#[from] io::Error),
        #[error("CSV error: {0}")]
        Csv(#[from] csv::Error),
        #[error("JSON error: {0}")]
        Json(#[from] serde_json::Error),
    }

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Flat CSV row; orbit paths are summarised by their point count.
    #[derive(Debug, Serialize)]
    struct Record<'a> {
        planet: &'a str,
        color: String,
        relative_size: f64,
        x_au: f64,
        y_au: f64,
        z_au: f64,
        x_km: f64,
        y_km: f64,
        z_km: f64,
        distance_au: f64,
        orbit_points: usize,
    }

    /// Write one CSV row per planet, with a header.
    pub fn write_csv(writer: &mut dyn Write, positions: &[PlanetPosition]) -> Result<(), ExportError> {
        let mut csv = csv::Writer::from_writer(writer);
        for position in positions {
            let descriptor = catalog::entry(position.planet);
            csv.serialize(Record {
                planet: position.planet.name(),
                color: descriptor.color.hex(),
                relative_size: descriptor.relative_size,
                x_au: position.position.x,
                y_au: position.position.y,
                z_au: position.position.z,
                x_km: position.position_km.x,
                y_km: position.position_km.y,
                z_km: position.position_km.z,
                distance_au: position.distance_from_sun,
                orbit_points: position.orbit_points.as_ref().map_or(0, Vec::len),
            })?;
        }
        csv.flush()?;
        Ok(())
    }

    /// Write the positions as a pretty-printed JSON array.
    pub fn write_json(writer: &mut dyn Write, positions: &[PlanetPosition]) -> Result<(), ExportError> {
        to_writer_pretty(&mut *writer, positions)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}
