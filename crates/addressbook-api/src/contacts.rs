//! Handlers for `/users/{id}/contacts` endpoints.
//!
//! | Method   | Path                             | Notes |
//! |----------|----------------------------------|-------|
//! | `GET`    | `/users/{id}/contacts`           | Possibly empty list |
//! | `POST`   | `/users/{id}/contacts`           | 201 + contact |
//! | `GET`    | `/users/{id}/contacts/{cid}`     | |
//! | `PATCH`  | `/users/{id}/contacts/{cid}`     | Only present fields change |
//! | `DELETE` | `/users/{id}/contacts/{cid}`     | 204 |
//!
//! An unknown user is a 404. An unknown contact, or one owned by a different
//! user, is a 400 with an explanatory message.

use std::sync::Arc;

use addressbook_core::{
  contact::{Contact, ContactFields},
  store::AddressBookStore,
  user::User,
  validate,
};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::{
  error::ApiError,
  extract::{JsonBody, Path},
  payload::{ContactList, ContactPayload, Envelope, success},
  users::load_user,
};

/// Fetch a contact owned by `user`, or fail with 400.
async fn load_contact<S>(
  store: &S,
  user: &User,
  contact_id: i64,
) -> Result<Contact, ApiError>
where
  S: AddressBookStore,
{
  store
    .get_contact(contact_id)
    .await
    .map_err(ApiError::from_store)?
    .filter(|c| c.user_id == user.id)
    .ok_or_else(|| ApiError::contact_not_found(contact_id))
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /users/{id}/contacts`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Path(user_id): Path<i64>,
) -> Result<Json<Envelope<ContactList>>, ApiError>
where
  S: AddressBookStore,
{
  let user = load_user(store.as_ref(), user_id).await?;
  let contacts = store
    .list_contacts(user.id)
    .await
    .map_err(ApiError::from_store)?;

  Ok(success(ContactList {
    contacts: contacts.into_iter().map(ContactPayload::from).collect(),
  }))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /users/{id}/contacts`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Path(user_id): Path<i64>,
  body: JsonBody,
) -> Result<impl IntoResponse, ApiError>
where
  S: AddressBookStore,
{
  let user = load_user(store.as_ref(), user_id).await?;
  let values = body.validate(&validate::CONTACT_CREATE)?;

  let contact = store
    .create_contact(&user, ContactFields::from(&values))
    .await
    .map_err(ApiError::from_store)?;

  tracing::info!(user_id, contact_id = contact.id, "contact created");
  Ok((StatusCode::CREATED, success(ContactPayload::from(contact))))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /users/{id}/contacts/{cid}`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path((user_id, contact_id)): Path<(i64, i64)>,
) -> Result<Json<Envelope<ContactPayload>>, ApiError>
where
  S: AddressBookStore,
{
  let user = load_user(store.as_ref(), user_id).await?;
  let contact = load_contact(store.as_ref(), &user, contact_id).await?;
  Ok(success(ContactPayload::from(contact)))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PATCH /users/{id}/contacts/{cid}`
pub async fn update<S>(
  State(store): State<Arc<S>>,
  Path((user_id, contact_id)): Path<(i64, i64)>,
  body: JsonBody,
) -> Result<Json<Envelope<ContactPayload>>, ApiError>
where
  S: AddressBookStore,
{
  let user = load_user(store.as_ref(), user_id).await?;
  let mut contact = load_contact(store.as_ref(), &user, contact_id).await?;
  let changes = body.validate(&validate::CONTACT_UPDATE)?;

  contact.apply(&changes);
  let contact = store
    .update_contact(&contact)
    .await
    .map_err(ApiError::from_store)?;

  tracing::info!(user_id, contact_id, "contact updated");
  Ok(success(ContactPayload::from(contact)))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /users/{id}/contacts/{cid}`
pub async fn delete<S>(
  State(store): State<Arc<S>>,
  Path((user_id, contact_id)): Path<(i64, i64)>,
) -> Result<StatusCode, ApiError>
where
  S: AddressBookStore,
{
  let user = load_user(store.as_ref(), user_id).await?;
  let contact = load_contact(store.as_ref(), &user, contact_id).await?;
  store
    .delete_contact(&contact)
    .await
    .map_err(ApiError::from_store)?;

  tracing::info!(user_id, contact_id, "contact deleted");
  Ok(StatusCode::NO_CONTENT)
}
