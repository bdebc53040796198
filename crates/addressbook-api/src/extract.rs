//! Extractors whose rejections render as [`ApiError`] bodies instead of
//! axum's plain-text defaults.

use addressbook_core::validate::{Record, Schema, Validated};
use axum::{
  body::Bytes,
  extract::{FromRequest, FromRequestParts, Request},
};
use serde_json::{Map, Value};

use crate::error::ApiError;

/// A JSON object request body.
///
/// The body is parsed whatever the `Content-Type` header says. Only the
/// fields a [`Schema`] declares are ever read; other keys are ignored.
#[derive(Debug, Clone, Default)]
pub struct JsonBody(pub Map<String, Value>);

impl<S> FromRequest<S> for JsonBody
where
  S: Send + Sync,
{
  type Rejection = ApiError;

  async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
    let bytes = Bytes::from_request(req, state)
      .await
      .map_err(|e| ApiError::BadRequest(vec![e.body_text()]))?;

    serde_json::from_slice(&bytes).map(Self).map_err(|e| {
      ApiError::BadRequest(vec![format!(
        "Failed to parse the request body as a JSON object: {e}"
      )])
    })
  }
}

impl JsonBody {
  /// Pick out the fields `schema` declares. A string is a value and `null`
  /// counts as absent; any other JSON type on a declared field is rejected.
  pub fn record(&self, schema: &Schema) -> Result<Record, ApiError> {
    let mut record = Record::new();
    let mut errors = Vec::new();

    for field in schema.fields() {
      match self.0.get(field.name) {
        None | Some(Value::Null) => {}
        Some(Value::String(s)) => {
          record.insert(field.name.to_owned(), Some(s.clone()));
        }
        Some(_) => errors.push(format!("'{}' must be a string", field.name)),
      }
    }

    if errors.is_empty() { Ok(record) } else { Err(ApiError::BadRequest(errors)) }
  }

  /// [`Self::record`] followed by [`Schema::validate`].
  pub fn validate(&self, schema: &Schema) -> Result<Validated, ApiError> {
    schema
      .validate(&self.record(schema)?)
      .map_err(ApiError::BadRequest)
  }
}

/// Path parameter extractor; a non-numeric id is a 400.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct Path<T>(pub T);
