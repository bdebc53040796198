//! addressbook-server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`) layered under
//! `ADDRESSBOOK_*` environment variables, opens the SQLite store, and serves
//! the JSON API over HTTP.

use std::path::PathBuf;

use addressbook_server::{ServerConfig, app, open_store};
use anyhow::Context as _;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Address book JSON API server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let server_cfg = ServerConfig::load(&cli.config)
    .with_context(|| format!("failed to load configuration from {:?}", cli.config))?;

  let database = server_cfg
    .database()
    .context("failed to resolve database location")?;
  tracing::info!(environment = ?server_cfg.environment, ?database, "opening store");

  let store = open_store(&database)
    .await
    .with_context(|| format!("failed to open store at {database:?}"))?;

  let address = server_cfg.address();
  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app(store)).await.context("server error")?;

  Ok(())
}
