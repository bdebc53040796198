//! Error types for `addressbook-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("user not found: {0}")]
  UserNotFound(i64),

  #[error("contact not found: {0}")]
  ContactNotFound(i64),

  /// A unique index rejected the write. Carries the offending column.
  #[error("UNIQUE constraint failed: {0}")]
  UniqueConstraintViolation(String),

  /// A required column reached the store as `NULL`. Validation should make
  /// this unreachable from the HTTP layer.
  #[error("NOT NULL constraint failed: {0}")]
  NotNullViolation(String),
}

/// Implemented by backend error types so that callers can recognise the
/// core taxonomy without depending on a concrete backend.
pub trait StoreError: std::error::Error + Send + Sync + 'static {
  /// The core error this backend error wraps, if any.
  fn as_core(&self) -> Option<&Error>;
}

impl StoreError for Error {
  fn as_core(&self) -> Option<&Error> { Some(self) }
}
