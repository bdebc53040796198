//! Process wiring for the address-book HTTP service: configuration, store
//! opening and the middleware stack around [`addressbook_api::api_router`].

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use addressbook_store_sqlite::SqliteStore;
use axum::Router;
use serde::Deserialize;
use thiserror::Error;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Prefix for configuration environment variables, e.g.
/// `ADDRESSBOOK_DATABASE_PATH`.
pub const ENV_PREFIX: &str = "ADDRESSBOOK";

#[derive(Debug, Error)]
pub enum Error {
  #[error("configuration error: {0}")]
  Config(#[from] config::ConfigError),

  #[error("database_path must be set in the {0:?} environment")]
  MissingDatabasePath(Environment),

  #[error("store error: {0}")]
  Store(#[from] addressbook_store_sqlite::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Deployment profile; decides where the database lives when no explicit
/// path is configured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
  #[default]
  Development,
  Testing,
  Production,
}

/// Where the SQLite database is opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Database {
  InMemory,
  File(PathBuf),
}

/// Runtime server configuration, deserialised from `config.toml` and
/// `ADDRESSBOOK_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:          String,
  pub port:          u16,
  #[serde(default)]
  pub environment:   Environment,
  /// `:memory:` selects an in-memory database.
  pub database_path: Option<PathBuf>,
}

impl ServerConfig {
  /// Layer the optional TOML file at `path` under the environment.
  pub fn load(path: &Path) -> Result<Self> {
    let settings = config::Config::builder()
      .set_default("host", "127.0.0.1")?
      .set_default("port", 5000_i64)?
      .add_source(config::File::from(path.to_path_buf()).required(false))
      .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
      .build()?;

    Ok(settings.try_deserialize()?)
  }

  /// Resolve the database location for this profile.
  pub fn database(&self) -> Result<Database> {
    match (&self.database_path, self.environment) {
      (Some(p), _) if p.as_os_str() == ":memory:" => Ok(Database::InMemory),
      (Some(p), _) => Ok(Database::File(p.clone())),
      (None, Environment::Development) => {
        Ok(Database::File(PathBuf::from("address_book_development.db")))
      }
      (None, Environment::Testing) => Ok(Database::InMemory),
      (None, env @ Environment::Production) => Err(Error::MissingDatabasePath(env)),
    }
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── Wiring ───────────────────────────────────────────────────────────────────

pub async fn open_store(database: &Database) -> Result<SqliteStore> {
  let store = match database {
    Database::InMemory => SqliteStore::open_in_memory().await?,
    Database::File(path) => SqliteStore::open(path).await?,
  };
  Ok(store)
}

/// The API router wrapped in request tracing and permissive CORS.
pub fn app(store: SqliteStore) -> Router {
  addressbook_api::api_router(Arc::new(store))
    .layer(CorsLayer::permissive())
    .layer(TraceLayer::new_for_http())
}
