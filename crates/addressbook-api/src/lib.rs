//! JSON REST API for the address book.
//!
//! Exposes an axum [`Router`] backed by any
//! [`addressbook_core::store::AddressBookStore`]. The store handle is passed
//! in explicitly and shared by every handler; nothing else is kept between
//! requests. CORS, tracing middleware and transport are the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = addressbook_api::api_router(Arc::new(store));
//! ```

pub mod contacts;
pub mod error;
pub mod extract;
pub mod login;
pub mod payload;
pub mod users;

use std::sync::Arc;

use addressbook_core::store::AddressBookStore;
use axum::{
  Router,
  routing::{get, post},
};

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: AddressBookStore + 'static,
{
  Router::new()
    .route("/", get(index))
    // Users
    .route("/users", post(users::create::<S>))
    .route(
      "/users/{id}",
      get(users::get_one::<S>)
        .patch(users::update::<S>)
        .delete(users::delete::<S>),
    )
    .route("/login", post(login::handler::<S>))
    // Contacts
    .route(
      "/users/{id}/contacts",
      get(contacts::list::<S>).post(contacts::create::<S>),
    )
    .route(
      "/users/{id}/contacts/{contact_id}",
      get(contacts::get_one::<S>)
        .patch(contacts::update::<S>)
        .delete(contacts::delete::<S>),
    )
    .with_state(store)
}

/// `GET /`: liveness check.
async fn index() -> &'static str { "address book api" }
