//! Response payloads.
//!
//! Successful responses carry `"success": true` next to the record's fields.

use addressbook_core::{contact::Contact, user::User};
use axum::Json;
use serde::Serialize;

/// Adds the `success` flag to a payload.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
  pub success: bool,
  #[serde(flatten)]
  pub data:    T,
}

pub fn success<T: Serialize>(data: T) -> Json<Envelope<T>> {
  Json(Envelope { success: true, data })
}

#[derive(Debug, Serialize)]
pub struct UserPayload {
  pub id:         i64,
  pub first_name: String,
  pub last_name:  String,
  pub email:      String,
}

impl From<User> for UserPayload {
  fn from(u: User) -> Self {
    Self {
      id:         u.id,
      first_name: u.first_name,
      last_name:  u.last_name,
      email:      u.email,
    }
  }
}

#[derive(Debug, Serialize)]
pub struct ContactPayload {
  pub id:               i64,
  pub first_name:       String,
  pub last_name:        String,
  pub group:            String,
  pub phone_number:     Option<String>,
  pub street_address:   String,
  pub street_address_2: Option<String>,
  pub city:             String,
  pub state:            String,
  pub zipcode:          String,
}

impl From<Contact> for ContactPayload {
  fn from(c: Contact) -> Self {
    Self {
      id:               c.id,
      first_name:       c.first_name,
      last_name:        c.last_name,
      group:            c.group,
      phone_number:     c.phone_number,
      street_address:   c.street_address,
      street_address_2: c.street_address_2,
      city:             c.city,
      state:            c.state,
      zipcode:          c.zipcode,
    }
  }
}

/// Body of `GET /users/{id}/contacts`; entries carry no `success` flag.
#[derive(Debug, Serialize)]
pub struct ContactList {
  pub contacts: Vec<ContactPayload>,
}
