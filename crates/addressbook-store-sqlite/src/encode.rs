//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! All timestamps are stored as RFC 3339 strings.

use addressbook_core::{contact::Contact, user::User};
use chrono::{DateTime, Utc};

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Raw row types ───────────────────────────────────────────────────────────

/// Column list matching [`RawUser::from_row`].
pub const USER_COLUMNS: &str =
  "id, email, first_name, last_name, created_at, updated_at";

/// Column list matching [`RawContact::from_row`].
pub const CONTACT_COLUMNS: &str = r#"id, user_id, first_name, last_name, "group",
  phone_number, street_address, street_address_2, city, state, zipcode,
  created_at, updated_at"#;

/// Raw strings read directly from a `users` row.
pub struct RawUser {
  pub id:         i64,
  pub email:      String,
  pub first_name: String,
  pub last_name:  String,
  pub created_at: String,
  pub updated_at: String,
}

impl RawUser {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:         row.get(0)?,
      email:      row.get(1)?,
      first_name: row.get(2)?,
      last_name:  row.get(3)?,
      created_at: row.get(4)?,
      updated_at: row.get(5)?,
    })
  }

  pub fn into_user(self) -> Result<User> {
    Ok(User {
      id:         self.id,
      email:      self.email,
      first_name: self.first_name,
      last_name:  self.last_name,
      created_at: decode_dt(&self.created_at)?,
      updated_at: decode_dt(&self.updated_at)?,
    })
  }
}

/// Raw strings read directly from a `contacts` row.
pub struct RawContact {
  pub id:               i64,
  pub user_id:          i64,
  pub first_name:       String,
  pub last_name:        String,
  pub group:            String,
  pub phone_number:     Option<String>,
  pub street_address:   String,
  pub street_address_2: Option<String>,
  pub city:             String,
  pub state:            String,
  pub zipcode:          String,
  pub created_at:       String,
  pub updated_at:       String,
}

impl RawContact {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:               row.get(0)?,
      user_id:          row.get(1)?,
      first_name:       row.get(2)?,
      last_name:        row.get(3)?,
      group:            row.get(4)?,
      phone_number:     row.get(5)?,
      street_address:   row.get(6)?,
      street_address_2: row.get(7)?,
      city:             row.get(8)?,
      state:            row.get(9)?,
      zipcode:          row.get(10)?,
      created_at:       row.get(11)?,
      updated_at:       row.get(12)?,
    })
  }

  pub fn into_contact(self) -> Result<Contact> {
    Ok(Contact {
      id:               self.id,
      user_id:          self.user_id,
      first_name:       self.first_name,
      last_name:        self.last_name,
      group:            self.group,
      phone_number:     self.phone_number,
      street_address:   self.street_address,
      street_address_2: self.street_address_2,
      city:             self.city,
      state:            self.state,
      zipcode:          self.zipcode,
      created_at:       decode_dt(&self.created_at)?,
      updated_at:       decode_dt(&self.updated_at)?,
    })
  }
}
