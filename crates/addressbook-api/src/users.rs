//! Handlers for `/users` endpoints.
//!
//! | Method   | Path          | Notes |
//! |----------|---------------|-------|
//! | `POST`   | `/users`      | Body: `{email, first_name, last_name}`; 201 |
//! | `GET`    | `/users/{id}` | 404 if not found |
//! | `PATCH`  | `/users/{id}` | Any subset of the create fields |
//! | `DELETE` | `/users/{id}` | 204; contacts go with the user |

use std::sync::Arc;

use addressbook_core::{
  store::AddressBookStore,
  user::{NewUser, User},
  validate,
};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::{
  error::ApiError,
  extract::{JsonBody, Path},
  payload::{Envelope, UserPayload, success},
};

/// Fetch a user or fail with 404.
pub(crate) async fn load_user<S>(store: &S, id: i64) -> Result<User, ApiError>
where
  S: AddressBookStore,
{
  store
    .get_user(id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| ApiError::user_not_found(id))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /users`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  body: JsonBody,
) -> Result<impl IntoResponse, ApiError>
where
  S: AddressBookStore,
{
  let values = body.validate(&validate::USER_CREATE)?;

  let user = store
    .create_user(NewUser::from(&values))
    .await
    .map_err(ApiError::from_store)?;

  tracing::info!(user_id = user.id, "user created");
  Ok((StatusCode::CREATED, success(UserPayload::from(user))))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /users/{id}`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Envelope<UserPayload>>, ApiError>
where
  S: AddressBookStore,
{
  let user = load_user(store.as_ref(), id).await?;
  Ok(success(UserPayload::from(user)))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PATCH /users/{id}`: only the fields present in the body change.
pub async fn update<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
  body: JsonBody,
) -> Result<Json<Envelope<UserPayload>>, ApiError>
where
  S: AddressBookStore,
{
  let mut user = load_user(store.as_ref(), id).await?;
  let changes = body.validate(&validate::USER_UPDATE)?;

  user.apply(&changes);
  let user = store
    .update_user(&user)
    .await
    .map_err(ApiError::from_store)?;

  tracing::info!(user_id = user.id, "user updated");
  Ok(success(UserPayload::from(user)))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /users/{id}`
pub async fn delete<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError>
where
  S: AddressBookStore,
{
  let user = load_user(store.as_ref(), id).await?;
  store
    .delete_user(&user)
    .await
    .map_err(ApiError::from_store)?;

  tracing::info!(user_id = id, "user deleted");
  Ok(StatusCode::NO_CONTENT)
}
