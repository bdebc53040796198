//! SQL schema for the address-book SQLite store.
//!
//! Executed once at connection startup. Schema evolution is out of scope;
//! `PRAGMA user_version` records the layout for whoever needs it later.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = r#"
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS users (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    email       TEXT NOT NULL UNIQUE,
    first_name  TEXT NOT NULL,
    last_name   TEXT NOT NULL,
    created_at  TEXT NOT NULL,   -- RFC 3339 UTC; server-assigned
    updated_at  TEXT NOT NULL
);

-- Removing a user removes every contact it owns.
CREATE TABLE IF NOT EXISTS contacts (
    id                INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id           INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    first_name        TEXT NOT NULL,
    last_name         TEXT NOT NULL,
    "group"           TEXT NOT NULL DEFAULT 'friend',
    phone_number      TEXT,
    street_address    TEXT NOT NULL,
    street_address_2  TEXT,
    city              TEXT NOT NULL,
    state             TEXT NOT NULL,
    zipcode           TEXT NOT NULL,
    created_at        TEXT NOT NULL,
    updated_at        TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS contacts_user_idx ON contacts(user_id);

PRAGMA user_version = 1;
"#;
