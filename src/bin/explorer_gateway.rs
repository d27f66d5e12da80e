use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use solar_explorer::init_logging;
use solar_explorer::solar_config::load_or_default;
use solar_explorer::solar_gateway::{Gateway, ReqwestUpstream, serve};

/// HTTP gateway for NASA NeoWs and JPL Horizons data.
#[derive(Parser, Debug)]
#[command(author, version, about = "Solar Explorer API gateway")]
struct Cli {
    /// Explorer configuration (TOML or YAML); defaults apply when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Listen address, e.g. 0.0.0.0:3000 (overrides config)
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut settings = load_or_default(cli.config.as_deref())
        .context("failed to load explorer configuration")?
        .gateway;
    if let Some(bind) = cli.bind {
        settings.bind = bind;
    }

    let upstream = ReqwestUpstream::new(settings.request_timeout())
        .context("failed to build HTTP client")?;
    let listener = tokio::net::TcpListener::bind(&settings.bind)
        .await
        .with_context(|| format!("failed to bind {}", settings.bind))?;
    let gateway = Arc::new(Gateway::from_config(upstream, settings));

    serve(listener, gateway).await.context("gateway server failed")?;
    Ok(())
}
