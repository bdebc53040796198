//! Users, the owners of contacts.

use chrono::{DateTime, Utc};

use crate::validate::{Validated, normalize};

/// A persisted user. `email` is unique across all users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
  pub id:         i64,
  pub email:      String,
  pub first_name: String,
  pub last_name:  String,
  /// Set by the store on insert.
  pub created_at: DateTime<Utc>,
  /// Set by the store on every update.
  pub updated_at: DateTime<Utc>,
}

impl User {
  /// Overwrite the fields present in `changes`; everything else is left as
  /// it was. Call [`crate::store::AddressBookStore::update_user`] to persist.
  pub fn apply(&mut self, changes: &Validated) {
    for (name, value) in changes.iter() {
      let value = value.to_owned();
      match name {
        "email" => self.email = value,
        "first_name" => self.first_name = value,
        "last_name" => self.last_name = value,
        _ => {}
      }
    }
  }
}

/// Input to [`crate::store::AddressBookStore::create_user`].
///
/// Fields are trimmed on construction and blank values become `None`; the
/// store rejects a `None` with [`crate::Error::NotNullViolation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
  pub email:      Option<String>,
  pub first_name: Option<String>,
  pub last_name:  Option<String>,
}

impl NewUser {
  pub fn new(
    email: Option<&str>,
    first_name: Option<&str>,
    last_name: Option<&str>,
  ) -> Self {
    Self {
      email:      normalize(email),
      first_name: normalize(first_name),
      last_name:  normalize(last_name),
    }
  }
}

impl From<&Validated> for NewUser {
  fn from(v: &Validated) -> Self {
    Self::new(v.get("email"), v.get("first_name"), v.get("last_name"))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::validate::{Record, USER_UPDATE};

  #[test]
  fn new_user_trims_and_nulls_blanks() {
    let u = NewUser::new(Some(" jc@example.com"), Some("  joshua  "), Some("   "));
    assert_eq!(u.email.as_deref(), Some("jc@example.com"));
    assert_eq!(u.first_name.as_deref(), Some("joshua"));
    assert_eq!(u.last_name, None);
  }

  #[test]
  fn apply_only_touches_present_fields() {
    let now = Utc::now();
    let mut user = User {
      id:         1,
      email:      "jc@example.com".into(),
      first_name: "joshua".into(),
      last_name:  "carey".into(),
      created_at: now,
      updated_at: now,
    };

    let mut r = Record::new();
    r.insert("email".into(), Some("jbridges@example.com".into()));
    user.apply(&USER_UPDATE.validate(&r).unwrap());

    assert_eq!(user.email, "jbridges@example.com");
    assert_eq!(user.first_name, "joshua");
    assert_eq!(user.last_name, "carey");
  }
}
