//! Handler for `POST /login`.
//!
//! Looks a user up by email. This is not authentication: no credential is
//! checked, the endpoint only resolves an email to its user record.

use std::sync::Arc;

use addressbook_core::{
  store::AddressBookStore,
  validate,
};
use axum::{Json, extract::State};

use crate::{
  error::ApiError,
  extract::JsonBody,
  payload::{Envelope, UserPayload, success},
};

/// `POST /login`, body: `{"email": "..."}`
pub async fn handler<S>(
  State(store): State<Arc<S>>,
  body: JsonBody,
) -> Result<Json<Envelope<UserPayload>>, ApiError>
where
  S: AddressBookStore,
{
  let values = body.validate(&validate::LOGIN)?;
  let email = values.get("email").unwrap_or_default();

  let user = store
    .find_user_by_email(email)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| ApiError::email_not_found(email))?;

  tracing::debug!(user_id = user.id, "login lookup");
  Ok(success(UserPayload::from(user)))
}
