//! Field validation for submitted records.
//!
//! Every resource declares an ordered [`Schema`]. Validation walks the whole
//! schema and reports every failing field, in declaration order, rather than
//! stopping at the first one.

use std::collections::HashMap;

use thiserror::Error;

/// A submitted record: field name to raw value. `None` (a JSON `null`) is
/// treated exactly like an absent key.
pub type Record = HashMap<String, Option<String>>;

// ─── Single field ────────────────────────────────────────────────────────────

/// Why a single field was rejected. The display strings are returned to API
/// callers verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
  #[error("required '{0}' parameter is blank")]
  Blank(String),

  #[error("required '{0}' parameter is missing")]
  Missing(String),
}

/// Check one field of `record`.
///
/// - present and non-blank: `Ok(Some(trimmed))`
/// - present but blank: [`FieldError::Blank`], whether or not it may be missing
/// - absent: `Ok(None)` if `missing_ok`, otherwise [`FieldError::Missing`]
pub fn check_field(
  record: &Record,
  name: &str,
  missing_ok: bool,
) -> Result<Option<String>, FieldError> {
  match record.get(name).and_then(Option::as_deref) {
    Some(raw) => match normalize(Some(raw)) {
      Some(value) => Ok(Some(value)),
      None => Err(FieldError::Blank(name.to_owned())),
    },
    None if missing_ok => Ok(None),
    None => Err(FieldError::Missing(name.to_owned())),
  }
}

/// Trim surrounding whitespace; blank values become `None`.
pub fn normalize(value: Option<&str>) -> Option<String> {
  value
    .map(str::trim)
    .filter(|v| !v.is_empty())
    .map(str::to_owned)
}

// ─── Schema ──────────────────────────────────────────────────────────────────

/// One declared field of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
  pub name:     &'static str,
  pub required: bool,
}

impl FieldSpec {
  pub const fn required(name: &'static str) -> Self {
    Self { name, required: true }
  }

  pub const fn optional(name: &'static str) -> Self {
    Self { name, required: false }
  }
}

/// An ordered list of fields consulted by [`Schema::validate`].
#[derive(Debug, Clone, Copy)]
pub struct Schema(&'static [FieldSpec]);

impl Schema {
  pub const fn new(fields: &'static [FieldSpec]) -> Self { Self(fields) }

  pub fn fields(&self) -> &'static [FieldSpec] { self.0 }

  /// Validate every declared field. Returns all error messages, in schema
  /// order, if any field fails.
  pub fn validate(&self, record: &Record) -> Result<Validated, Vec<String>> {
    let mut values = Vec::new();
    let mut errors = Vec::new();

    for field in self.0 {
      match check_field(record, field.name, !field.required) {
        Ok(Some(value)) => values.push((field.name, value)),
        Ok(None) => {}
        Err(e) => errors.push(e.to_string()),
      }
    }

    if errors.is_empty() {
      Ok(Validated { values })
    } else {
      Err(errors)
    }
  }
}

/// The trimmed, non-blank values that passed validation, in schema order.
/// Optional fields that were absent are simply not present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validated {
  values: Vec<(&'static str, String)>,
}

impl Validated {
  pub fn get(&self, name: &str) -> Option<&str> {
    self
      .values
      .iter()
      .find(|(n, _)| *n == name)
      .map(|(_, v)| v.as_str())
  }

  pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
    self.values.iter().map(|(n, v)| (*n, v.as_str()))
  }
}

// ─── Declared schemas ────────────────────────────────────────────────────────

pub const USER_CREATE: Schema = Schema::new(&[
  FieldSpec::required("email"),
  FieldSpec::required("first_name"),
  FieldSpec::required("last_name"),
]);

pub const USER_UPDATE: Schema = Schema::new(&[
  FieldSpec::optional("first_name"),
  FieldSpec::optional("last_name"),
  FieldSpec::optional("email"),
]);

pub const LOGIN: Schema = Schema::new(&[FieldSpec::required("email")]);

pub const CONTACT_CREATE: Schema = Schema::new(&[
  FieldSpec::required("first_name"),
  FieldSpec::required("last_name"),
  FieldSpec::optional("group"),
  FieldSpec::optional("phone_number"),
  FieldSpec::required("street_address"),
  FieldSpec::optional("street_address_2"),
  FieldSpec::required("city"),
  FieldSpec::required("state"),
  FieldSpec::required("zipcode"),
]);

pub const CONTACT_UPDATE: Schema = Schema::new(&[
  FieldSpec::optional("first_name"),
  FieldSpec::optional("last_name"),
  FieldSpec::optional("group"),
  FieldSpec::optional("phone_number"),
  FieldSpec::optional("street_address"),
  FieldSpec::optional("street_address_2"),
  FieldSpec::optional("city"),
  FieldSpec::optional("state"),
  FieldSpec::optional("zipcode"),
]);

#[cfg(test)]
mod tests {
  use super::*;

  fn record(pairs: &[(&str, Option<&str>)]) -> Record {
    pairs
      .iter()
      .map(|(k, v)| ((*k).to_owned(), v.map(str::to_owned)))
      .collect()
  }

  #[test]
  fn present_value_is_trimmed() {
    let r = record(&[("first_name", Some("  joshua  "))]);
    assert_eq!(
      check_field(&r, "first_name", false),
      Ok(Some("joshua".to_owned()))
    );
  }

  #[test]
  fn whitespace_only_is_blank_even_when_optional() {
    let r = record(&[("group", Some(" \t "))]);
    let err = check_field(&r, "group", true).unwrap_err();
    assert_eq!(err.to_string(), "required 'group' parameter is blank");
  }

  #[test]
  fn absent_required_field_is_missing() {
    let err = check_field(&Record::new(), "email", false).unwrap_err();
    assert_eq!(err.to_string(), "required 'email' parameter is missing");
  }

  #[test]
  fn absent_optional_field_is_none() {
    assert_eq!(check_field(&Record::new(), "email", true), Ok(None));
  }

  #[test]
  fn null_counts_as_absent() {
    let r = record(&[("email", None)]);
    assert_eq!(check_field(&r, "email", true), Ok(None));
    assert!(matches!(
      check_field(&r, "email", false),
      Err(FieldError::Missing(_))
    ));
  }

  #[test]
  fn schema_accumulates_errors_in_declared_order() {
    let r = record(&[
      ("last_name", Some("")),
      ("city", Some("Denver")),
      ("state", Some("  ")),
    ]);
    let errors = CONTACT_CREATE.validate(&r).unwrap_err();
    assert_eq!(errors, vec![
      "required 'first_name' parameter is missing",
      "required 'last_name' parameter is blank",
      "required 'street_address' parameter is missing",
      "required 'state' parameter is blank",
      "required 'zipcode' parameter is missing",
    ]);
  }

  #[test]
  fn schema_keeps_only_present_values() {
    let r = record(&[
      ("email", Some(" jc@example.com ")),
      ("nickname", Some("jc")),
    ]);
    let v = USER_UPDATE.validate(&r).unwrap();
    assert_eq!(v.get("email"), Some("jc@example.com"));
    assert_eq!(v.get("first_name"), None);
    assert_eq!(v.get("nickname"), None);
    assert_eq!(v.iter().count(), 1);
  }

  #[test]
  fn empty_update_is_valid() {
    assert_eq!(CONTACT_UPDATE.validate(&Record::new()).unwrap().iter().count(), 0);
  }
}
