//! [`SqliteStore`], the SQLite implementation of [`AddressBookStore`].

use std::path::Path;

use addressbook_core::{
  contact::{Contact, ContactFields, DEFAULT_GROUP},
  store::AddressBookStore,
  user::{NewUser, User},
};
use chrono::Utc;
use rusqlite::OptionalExtension as _;

use crate::{
  encode::{CONTACT_COLUMNS, RawContact, RawUser, USER_COLUMNS, encode_dt},
  schema::SCHEMA,
  Error, Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// An address book backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted. Every
/// statement runs as its own implicit transaction.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, mainly for tests.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    tracing::debug!("sqlite schema initialised");
    Ok(())
  }
}

// ─── AddressBookStore impl ───────────────────────────────────────────────────

impl AddressBookStore for SqliteStore {
  type Error = Error;

  // ── Users ─────────────────────────────────────────────────────────────────

  async fn create_user(&self, input: NewUser) -> Result<User> {
    let NewUser { email, first_name, last_name } = input;
    let at_str = encode_dt(Utc::now());
    let sql = format!(
      "INSERT INTO users (email, first_name, last_name, created_at, updated_at)
       VALUES (?1, ?2, ?3, ?4, ?4)
       RETURNING {USER_COLUMNS}"
    );

    let raw: RawUser = self
      .conn
      .call(move |conn| {
        Ok(conn.query_row(
          &sql,
          rusqlite::params![email, first_name, last_name, at_str],
          RawUser::from_row,
        )?)
      })
      .await?;

    raw.into_user()
  }

  async fn get_user(&self, id: i64) -> Result<Option<User>> {
    let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?1");

    let raw: Option<RawUser> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(&sql, rusqlite::params![id], RawUser::from_row)
            .optional()?,
        )
      })
      .await?;

    raw.map(RawUser::into_user).transpose()
  }

  async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
    let email = email.to_owned();
    let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE email = ?1");

    let raw: Option<RawUser> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(&sql, rusqlite::params![email], RawUser::from_row)
            .optional()?,
        )
      })
      .await?;

    raw.map(RawUser::into_user).transpose()
  }

  async fn update_user(&self, user: &User) -> Result<User> {
    let id         = user.id;
    let email      = user.email.clone();
    let first_name = user.first_name.clone();
    let last_name  = user.last_name.clone();
    let at_str     = encode_dt(Utc::now());
    let sql = format!(
      "UPDATE users
       SET email = ?1, first_name = ?2, last_name = ?3, updated_at = ?4
       WHERE id = ?5
       RETURNING {USER_COLUMNS}"
    );

    let raw: Option<RawUser> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &sql,
              rusqlite::params![email, first_name, last_name, at_str, id],
              RawUser::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw
      .ok_or(addressbook_core::Error::UserNotFound(id))?
      .into_user()
  }

  async fn delete_user(&self, user: &User) -> Result<()> {
    let id = user.id;

    let affected = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM users WHERE id = ?1", rusqlite::params![id])?)
      })
      .await?;

    if affected == 0 {
      return Err(addressbook_core::Error::UserNotFound(id).into());
    }
    Ok(())
  }

  // ── Contacts ──────────────────────────────────────────────────────────────

  async fn create_contact(
    &self,
    user:   &User,
    fields: ContactFields,
  ) -> Result<Contact> {
    let ContactFields {
      first_name,
      last_name,
      group,
      phone_number,
      street_address,
      street_address_2,
      city,
      state,
      zipcode,
    } = fields.normalized();
    let user_id = user.id;
    let group   = group.unwrap_or_else(|| DEFAULT_GROUP.to_owned());
    let at_str  = encode_dt(Utc::now());
    let sql = format!(
      r#"INSERT INTO contacts (
           user_id, first_name, last_name, "group", phone_number,
           street_address, street_address_2, city, state, zipcode,
           created_at, updated_at
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?11)
         RETURNING {CONTACT_COLUMNS}"#
    );

    let raw: RawContact = self
      .conn
      .call(move |conn| {
        Ok(conn.query_row(
          &sql,
          rusqlite::params![
            user_id,
            first_name,
            last_name,
            group,
            phone_number,
            street_address,
            street_address_2,
            city,
            state,
            zipcode,
            at_str,
          ],
          RawContact::from_row,
        )?)
      })
      .await?;

    raw.into_contact()
  }

  async fn get_contact(&self, id: i64) -> Result<Option<Contact>> {
    let sql = format!("SELECT {CONTACT_COLUMNS} FROM contacts WHERE id = ?1");

    let raw: Option<RawContact> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(&sql, rusqlite::params![id], RawContact::from_row)
            .optional()?,
        )
      })
      .await?;

    raw.map(RawContact::into_contact).transpose()
  }

  async fn list_contacts(&self, user_id: i64) -> Result<Vec<Contact>> {
    let sql = format!(
      "SELECT {CONTACT_COLUMNS} FROM contacts WHERE user_id = ?1 ORDER BY id"
    );

    let raws: Vec<RawContact> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params![user_id], RawContact::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawContact::into_contact).collect()
  }

  async fn update_contact(&self, contact: &Contact) -> Result<Contact> {
    let id = contact.id;
    let c  = contact.clone();
    let at_str = encode_dt(Utc::now());
    let sql = format!(
      r#"UPDATE contacts
         SET first_name = ?1, last_name = ?2, "group" = ?3, phone_number = ?4,
             street_address = ?5, street_address_2 = ?6, city = ?7,
             state = ?8, zipcode = ?9, updated_at = ?10
         WHERE id = ?11
         RETURNING {CONTACT_COLUMNS}"#
    );

    let raw: Option<RawContact> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &sql,
              rusqlite::params![
                c.first_name,
                c.last_name,
                c.group,
                c.phone_number,
                c.street_address,
                c.street_address_2,
                c.city,
                c.state,
                c.zipcode,
                at_str,
                c.id,
              ],
              RawContact::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw
      .ok_or(addressbook_core::Error::ContactNotFound(id))?
      .into_contact()
  }

  async fn delete_contact(&self, contact: &Contact) -> Result<()> {
    let id = contact.id;

    let affected = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM contacts WHERE id = ?1", rusqlite::params![id])?)
      })
      .await?;

    if affected == 0 {
      return Err(addressbook_core::Error::ContactNotFound(id).into());
    }
    Ok(())
  }
}
