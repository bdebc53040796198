//! The `AddressBookStore` trait.
//!
//! The trait is implemented by storage backends (e.g.
//! `addressbook-store-sqlite`). The HTTP layer depends on this abstraction,
//! not on any concrete backend, and receives the store handle explicitly.

use std::future::Future;

use crate::{
  contact::{Contact, ContactFields},
  error::StoreError,
  user::{NewUser, User},
};

/// Abstraction over an address-book backend.
///
/// Lookups return `Ok(None)` for unknown ids. Uniqueness and non-null
/// constraints are enforced by the backend and surface through
/// [`StoreError::as_core`].
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait AddressBookStore: Send + Sync {
  type Error: StoreError;

  // ── Users ─────────────────────────────────────────────────────────────

  /// Insert a new user and return it with its assigned id.
  ///
  /// Fails with `UniqueConstraintViolation` if the email is taken and with
  /// `NotNullViolation` if any field is `None`.
  fn create_user(
    &self,
    input: NewUser,
  ) -> impl Future<Output = Result<User, Self::Error>> + Send + '_;

  fn get_user(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + '_;

  /// Exact match on the stored (trimmed) email.
  fn find_user_by_email<'a>(
    &'a self,
    email: &'a str,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + 'a;

  /// Persist in-place changes to a loaded user. `updated_at` is set by the
  /// store; the returned value is the row as stored.
  fn update_user<'a>(
    &'a self,
    user: &'a User,
  ) -> impl Future<Output = Result<User, Self::Error>> + Send + 'a;

  /// Delete a user and, by cascade, every contact it owns.
  fn delete_user<'a>(
    &'a self,
    user: &'a User,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  // ── Contacts ──────────────────────────────────────────────────────────

  /// Insert a contact owned by `user`. Fields are normalised first; absent
  /// fields take their default (or `NULL`).
  fn create_contact<'a>(
    &'a self,
    user: &'a User,
    fields: ContactFields,
  ) -> impl Future<Output = Result<Contact, Self::Error>> + Send + 'a;

  /// Look up a contact by id regardless of owner; ownership is the
  /// caller's concern.
  fn get_contact(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// All contacts owned by `user_id`, ordered by id.
  fn list_contacts(
    &self,
    user_id: i64,
  ) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + '_;

  fn update_contact<'a>(
    &'a self,
    contact: &'a Contact,
  ) -> impl Future<Output = Result<Contact, Self::Error>> + Send + 'a;

  fn delete_contact<'a>(
    &'a self,
    contact: &'a Contact,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}
