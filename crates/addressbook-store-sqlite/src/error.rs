//! Error type for `addressbook-store-sqlite`.

use addressbook_core::StoreError;
use rusqlite::ffi;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] addressbook_core::Error),

  #[error("database error: {0}")]
  Database(tokio_rusqlite::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Constraint failures are lifted into the core taxonomy; anything else
/// stays a database error.
impl From<tokio_rusqlite::Error> for Error {
  fn from(e: tokio_rusqlite::Error) -> Self {
    if let tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(
      ref failure,
      ref message,
    )) = e
    {
      let column = message
        .as_deref()
        .and_then(|m| m.rsplit(": ").next())
        .unwrap_or_default()
        .to_owned();

      match failure.extended_code {
        ffi::SQLITE_CONSTRAINT_UNIQUE => {
          return Self::Core(addressbook_core::Error::UniqueConstraintViolation(
            column,
          ));
        }
        ffi::SQLITE_CONSTRAINT_NOTNULL => {
          return Self::Core(addressbook_core::Error::NotNullViolation(column));
        }
        _ => {}
      }
    }
    Self::Database(e)
  }
}

impl StoreError for Error {
  fn as_core(&self) -> Option<&addressbook_core::Error> {
    match self {
      Self::Core(e) => Some(e),
      _ => None,
    }
  }
}
