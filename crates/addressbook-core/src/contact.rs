//! Contacts: address-book entries owned by a [`crate::user::User`].

use chrono::{DateTime, Utc};

use crate::validate::{Validated, normalize};

/// Group assigned to a contact created without one.
pub const DEFAULT_GROUP: &str = "friend";

/// A persisted contact. `user_id` never changes after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
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
  pub created_at:       DateTime<Utc>,
  pub updated_at:       DateTime<Utc>,
}

impl Contact {
  /// Overwrite the fields present in `changes`. There is no way to clear an
  /// optional field: blank values never make it through validation.
  pub fn apply(&mut self, changes: &Validated) {
    for (name, value) in changes.iter() {
      let value = value.to_owned();
      match name {
        "first_name" => self.first_name = value,
        "last_name" => self.last_name = value,
        "group" => self.group = value,
        "phone_number" => self.phone_number = Some(value),
        "street_address" => self.street_address = value,
        "street_address_2" => self.street_address_2 = Some(value),
        "city" => self.city = value,
        "state" => self.state = value,
        "zipcode" => self.zipcode = value,
        _ => {}
      }
    }
  }
}

/// Input to [`crate::store::AddressBookStore::create_contact`].
///
/// Any field may be `None`; the store fills `group` with [`DEFAULT_GROUP`]
/// and rejects missing required columns with
/// [`crate::Error::NotNullViolation`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
  pub first_name:       Option<String>,
  pub last_name:        Option<String>,
  pub group:            Option<String>,
  pub phone_number:     Option<String>,
  pub street_address:   Option<String>,
  pub street_address_2: Option<String>,
  pub city:             Option<String>,
  pub state:            Option<String>,
  pub zipcode:          Option<String>,
}

impl ContactFields {
  /// Trim every field; blank values become `None`.
  pub fn normalized(self) -> Self {
    let n = |v: Option<String>| normalize(v.as_deref());
    Self {
      first_name:       n(self.first_name),
      last_name:        n(self.last_name),
      group:            n(self.group),
      phone_number:     n(self.phone_number),
      street_address:   n(self.street_address),
      street_address_2: n(self.street_address_2),
      city:             n(self.city),
      state:            n(self.state),
      zipcode:          n(self.zipcode),
    }
  }
}

impl From<&Validated> for ContactFields {
  fn from(v: &Validated) -> Self {
    let get = |name: &str| v.get(name).map(str::to_owned);
    Self {
      first_name:       get("first_name"),
      last_name:        get("last_name"),
      group:            get("group"),
      phone_number:     get("phone_number"),
      street_address:   get("street_address"),
      street_address_2: get("street_address_2"),
      city:             get("city"),
      state:            get("state"),
      zipcode:          get("zipcode"),
    }
  }
}
