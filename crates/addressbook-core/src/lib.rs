//! Core types and trait definitions for the address book.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it.

pub mod contact;
pub mod error;
pub mod store;
pub mod user;
pub mod validate;

pub use error::{Error, StoreError};
