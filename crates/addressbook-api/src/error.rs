//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Every failure is rendered with the same body:
//! `{"success": false, "error": <status>, "errors": [<message>, ...]}`.

use addressbook_core::StoreError;
use axum::{
  Json,
  extract::rejection::PathRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {}", .0.join("; "))]
  BadRequest(Vec<String>),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  pub fn user_not_found(id: i64) -> Self {
    Self::NotFound(format!("user with id: '{id}' not found"))
  }

  pub fn email_not_found(email: &str) -> Self {
    Self::NotFound(format!("user with email: '{email}' not found"))
  }

  /// Unknown contacts are reported as 400, unlike unknown users.
  pub fn contact_not_found(id: i64) -> Self {
    Self::BadRequest(vec![format!("contact with id: '{id}' not found")])
  }

  /// Translate a backend error at the handler boundary. Constraint
  /// violations a caller can fix become 400s; everything else is a 500.
  pub fn from_store<E: StoreError>(e: E) -> Self {
    match e.as_core() {
      Some(addressbook_core::Error::UniqueConstraintViolation(column)) => {
        let field = column.rsplit('.').next().unwrap_or(column.as_str());
        tracing::warn!(%column, "unique constraint rejected write");
        Self::BadRequest(vec![format!("{field} is already taken")])
      }
      Some(addressbook_core::Error::UserNotFound(id)) => Self::user_not_found(*id),
      Some(addressbook_core::Error::ContactNotFound(id)) => {
        Self::contact_not_found(*id)
      }
      _ => Self::Store(Box::new(e)),
    }
  }

  pub fn status(&self) -> StatusCode {
    match self {
      Self::NotFound(_) => StatusCode::NOT_FOUND,
      Self::BadRequest(_) => StatusCode::BAD_REQUEST,
      Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

impl From<PathRejection> for ApiError {
  fn from(rejection: PathRejection) -> Self {
    Self::BadRequest(vec![rejection.body_text()])
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    let errors = match self {
      Self::NotFound(m) => vec![m],
      Self::BadRequest(ms) => ms,
      Self::Store(e) => {
        // NotNullViolation lands here too: validation should have caught it.
        tracing::error!(error = %e, "store failure");
        vec!["internal server error".to_owned()]
      }
    };
    let body = json!({
      "success": false,
      "error":   status.as_u16(),
      "errors":  errors,
    });
    (status, Json(body)).into_response()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn unique_violation_names_the_field() {
    let err = ApiError::from_store(
      addressbook_core::Error::UniqueConstraintViolation("users.email".into()),
    );
    assert!(matches!(&err, ApiError::BadRequest(ms) if ms == &["email is already taken"]));
  }

  #[test]
  fn not_null_violation_is_internal() {
    let err = ApiError::from_store(addressbook_core::Error::NotNullViolation(
      "users.email".into(),
    ));
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
  }

  #[test]
  fn missing_rows_keep_their_asymmetry() {
    assert_eq!(
      ApiError::from_store(addressbook_core::Error::UserNotFound(3)).status(),
      StatusCode::NOT_FOUND
    );
    assert_eq!(
      ApiError::from_store(addressbook_core::Error::ContactNotFound(3)).status(),
      StatusCode::BAD_REQUEST
    );
  }
}
