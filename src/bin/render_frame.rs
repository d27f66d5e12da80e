use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use log::info;
use solar_explorer::solar_config::load_or_default;
use solar_explorer::solar_render::{FrameLoop, OffscreenSurface, SolarSystem};
use solar_explorer::{init_logging, parse_instant};

/// Render the solar system at a date into a PNG file, without a window.
#[derive(Parser, Debug)]
#[command(author, version, about = "Headless solar-system frame renderer")]
struct Cli {
    /// Explorer configuration (TOML or YAML); defaults apply when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Date as YYYY-MM-DD or RFC 3339 (defaults to now)
    #[arg(long)]
    date: Option<String>,

    /// Output PNG path
    #[arg(long, default_value = "artifacts/solar_system.png")]
    output: PathBuf,

    /// Frame width in pixels (overrides config)
    #[arg(long)]
    width: Option<u32>,

    /// Frame height in pixels (overrides config)
    #[arg(long)]
    height: Option<u32>,

    /// Frames to run through the loop before saving the last one
    #[arg(long, default_value_t = 1)]
    frames: u64,

    /// Camera azimuth change queued per frame, in degrees
    #[arg(long, default_value_t = 0.0)]
    spin: f64,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut settings = load_or_default(cli.config.as_deref())
        .context("failed to load explorer configuration")?
        .render;
    if let Some(width) = cli.width {
        settings.width = width;
    }
    if let Some(height) = cli.height {
        settings.height = height;
    }
    if settings.width == 0 || settings.height == 0 {
        bail!("frame size must be non-zero, got {}x{}", settings.width, settings.height);
    }

    let instant = match cli.date.as_deref() {
        Some(raw) => parse_instant(raw).with_context(|| format!("invalid --date `{raw}`"))?,
        None => chrono::Utc::now(),
    };

    let (surface, handle) = OffscreenSurface::new(settings.width, settings.height);
    let frame_rate = settings.frame_rate;
    let mut view = SolarSystem::new(Box::new(surface), settings);
    view.update_planets(instant);

    let frame_loop = FrameLoop::new(frame_rate).with_max_frames(cli.frames.max(1));
    if cli.spin != 0.0 {
        view.controls_mut()
            .rotate(cli.spin.to_radians() * cli.frames.max(1) as f64, 0.0);
    }
    let rendered = frame_loop.run(&mut view)?;

    let frame = handle
        .last_frame()
        .context("no frame was presented to the surface")?;
    frame
        .save_png(&cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    view.dispose();

    info!(
        "rendered {rendered} frame(s) for {instant} to {}",
        cli.output.display()
    );
    Ok(())
}
