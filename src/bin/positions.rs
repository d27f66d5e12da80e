use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use solar_explorer::solar_ephemeris::{PlanetPosition, catalog};
use solar_explorer::solar_export::positions::{write_csv, write_json, writer_for_path};
use solar_explorer::solar_orbits::{DEFAULT_ORBIT_SAMPLES, MAX_ORBIT_SAMPLES, solar_system};
use solar_explorer::{init_logging, parse_instant};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Csv,
    Json,
}

/// Heliocentric positions of the eight planets at a given date.
#[derive(Parser, Debug)]
#[command(author, version, about = "Planet positions (VSOP87, equatorial J2000, AU)")]
struct Cli {
    /// Date as YYYY-MM-DD or RFC 3339 (defaults to now)
    #[arg(long)]
    date: Option<String>,

    /// Samples per orbit path (0 leaves orbit paths empty)
    #[arg(long, default_value_t = DEFAULT_ORBIT_SAMPLES)]
    orbit_points: usize,

    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Output file (use '-' for stdout)
    #[arg(long, default_value = "-")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    if cli.orbit_points > MAX_ORBIT_SAMPLES {
        bail!(
            "--orbit-points must not exceed {MAX_ORBIT_SAMPLES}, got {}",
            cli.orbit_points
        );
    }

    let instant = match cli.date.as_deref() {
        Some(raw) => parse_instant(raw).with_context(|| format!("invalid --date `{raw}`"))?,
        None => chrono::Utc::now(),
    };
    let positions = solar_system(instant, cli.orbit_points);
    log::info!("computed {} planet positions for {instant}", positions.len());

    let mut writer = writer_for_path(&cli.output)
        .with_context(|| format!("failed to open {}", cli.output.display()))?;
    match cli.format {
        Format::Table => write_table(&mut *writer, &positions)?,
        Format::Csv => write_csv(&mut *writer, &positions)?,
        Format::Json => write_json(&mut *writer, &positions)?,
    }
    Ok(())
}

fn write_table(writer: &mut dyn Write, positions: &[PlanetPosition]) -> anyhow::Result<()> {
    writeln!(
        writer,
        "{:<8} {:>8} {:>12} {:>12} {:>12} {:>10}",
        "planet", "color", "x_au", "y_au", "z_au", "dist_au"
    )?;
    for p in positions {
        writeln!(
            writer,
            "{:<8} {:>8} {:>12.6} {:>12.6} {:>12.6} {:>10.6}",
            p.planet.label(),
            catalog::entry(p.planet).color.hex(),
            p.position.x,
            p.position.y,
            p.position.z,
            p.distance_from_sun
        )?;
    }
    writer.flush()?;
    Ok(())
}
