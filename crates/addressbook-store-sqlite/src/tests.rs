//! Integration tests for `SqliteStore` against an in-memory database.

use addressbook_core::{
  StoreError as _,
  contact::ContactFields,
  store::AddressBookStore,
  user::{NewUser, User},
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn new_user(email: &str) -> NewUser {
  NewUser::new(Some(email), Some("joshua"), Some("carey"))
}

fn contact_fields() -> ContactFields {
  ContactFields {
    first_name: Some("darrel".into()),
    last_name: Some("wadsworth".into()),
    group: Some("friend".into()),
    phone_number: Some("999-999-9999".into()),
    street_address: Some("45321 example way".into()),
    city: Some("Denver".into()),
    state: Some("Colorado".into()),
    zipcode: Some("80000".into()),
    ..Default::default()
  }
}

async fn user_with_contact(s: &SqliteStore) -> User {
  let user = s.create_user(new_user("jc@example.com")).await.unwrap();
  s.create_contact(&user, contact_fields()).await.unwrap();
  user
}

// ─── Users ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_and_get_user() {
  let s = store().await;

  let user = s.create_user(new_user("jc@example.com")).await.unwrap();
  assert!(user.id > 0);
  assert_eq!(user.created_at, user.updated_at);

  let fetched = s.get_user(user.id).await.unwrap().unwrap();
  assert_eq!(fetched, user);
}

#[tokio::test]
async fn create_user_trims_fields() {
  let s = store().await;

  let user = s
    .create_user(NewUser::new(
      Some(" jc@example.com "),
      Some("  joshua  "),
      Some("carey\n"),
    ))
    .await
    .unwrap();

  assert_eq!(user.email, "jc@example.com");
  assert_eq!(user.first_name, "joshua");
  assert_eq!(user.last_name, "carey");
}

#[tokio::test]
async fn get_user_missing_returns_none() {
  let s = store().await;
  assert!(s.get_user(9999).await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_email_is_unique_violation() {
  let s = store().await;
  s.create_user(new_user("a@example.com")).await.unwrap();

  let err = s
    .create_user(new_user("  a@example.com "))
    .await
    .unwrap_err();
  assert!(
    matches!(
      err.as_core(),
      Some(addressbook_core::Error::UniqueConstraintViolation(col)) if col == "users.email"
    ),
    "unexpected error: {err}"
  );
}

#[tokio::test]
async fn concurrent_duplicate_emails_admit_one() {
  let s = store().await;

  let (a, b) = tokio::join!(
    s.create_user(new_user("a@example.com")),
    s.create_user(new_user("a@example.com")),
  );

  let (ok, err) = match (a, b) {
    (Ok(user), Err(e)) | (Err(e), Ok(user)) => (user, e),
    (a, b) => panic!("expected one success and one failure: {a:?} {b:?}"),
  };
  assert_eq!(ok.email, "a@example.com");
  assert!(
    matches!(
      err.as_core(),
      Some(addressbook_core::Error::UniqueConstraintViolation(col)) if col == "users.email"
    ),
    "unexpected error: {err}"
  );
  assert_eq!(s.find_user_by_email("a@example.com").await.unwrap(), Some(ok));
}

#[tokio::test]
async fn blank_field_is_not_null_violation() {
  let s = store().await;

  let err = s
    .create_user(NewUser::new(Some("a@example.com"), Some("   "), Some("carey")))
    .await
    .unwrap_err();
  assert!(
    matches!(
      err.as_core(),
      Some(addressbook_core::Error::NotNullViolation(col)) if col == "users.first_name"
    ),
    "unexpected error: {err}"
  );
}

#[tokio::test]
async fn find_user_by_email() {
  let s = store().await;
  let user = s.create_user(new_user("jpwizard")).await.unwrap();

  let found = s.find_user_by_email("jpwizard").await.unwrap();
  assert_eq!(found.map(|u| u.id), Some(user.id));

  assert!(s.find_user_by_email("nobody@example.com").await.unwrap().is_none());
}

#[tokio::test]
async fn update_user_persists_changes() {
  let s = store().await;
  let mut user = s.create_user(new_user("jc@example.com")).await.unwrap();

  user.email = "jbridges@example.com".into();
  let updated = s.update_user(&user).await.unwrap();
  assert_eq!(updated.email, "jbridges@example.com");
  assert_eq!(updated.first_name, "joshua");
  assert!(updated.updated_at >= updated.created_at);

  let fetched = s.get_user(user.id).await.unwrap().unwrap();
  assert_eq!(fetched.email, "jbridges@example.com");
}

#[tokio::test]
async fn update_user_to_taken_email_is_unique_violation() {
  let s = store().await;
  s.create_user(new_user("taken@example.com")).await.unwrap();
  let mut user = s.create_user(new_user("jc@example.com")).await.unwrap();

  user.email = "taken@example.com".into();
  let err = s.update_user(&user).await.unwrap_err();
  assert!(matches!(
    err.as_core(),
    Some(addressbook_core::Error::UniqueConstraintViolation(_))
  ));
}

#[tokio::test]
async fn delete_user_twice_reports_not_found() {
  let s = store().await;
  let user = s.create_user(new_user("jc@example.com")).await.unwrap();

  s.delete_user(&user).await.unwrap();
  assert!(s.get_user(user.id).await.unwrap().is_none());

  let err = s.delete_user(&user).await.unwrap_err();
  assert!(matches!(
    err.as_core(),
    Some(addressbook_core::Error::UserNotFound(id)) if *id == user.id
  ));
}

#[tokio::test]
async fn delete_user_cascades_to_contacts() {
  let s = store().await;
  let user = user_with_contact(&s).await;
  let contacts = s.list_contacts(user.id).await.unwrap();
  assert_eq!(contacts.len(), 1);

  s.delete_user(&user).await.unwrap();

  assert!(s.list_contacts(user.id).await.unwrap().is_empty());
  assert!(s.get_contact(contacts[0].id).await.unwrap().is_none());
}

// ─── Contacts ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_contact_defaults_group_and_nulls_optionals() {
  let s = store().await;
  let user = s.create_user(new_user("jc@example.com")).await.unwrap();

  let fields = ContactFields {
    group: None,
    phone_number: Some("   ".into()),
    ..contact_fields()
  };
  let contact = s.create_contact(&user, fields).await.unwrap();

  assert_eq!(contact.user_id, user.id);
  assert_eq!(contact.group, "friend");
  assert_eq!(contact.phone_number, None);
  assert_eq!(contact.street_address_2, None);
  assert_eq!(contact.first_name, "darrel");
}

#[tokio::test]
async fn create_contact_without_required_field_is_not_null_violation() {
  let s = store().await;
  let user = s.create_user(new_user("jc@example.com")).await.unwrap();

  let fields = ContactFields { city: Some(" ".into()), ..contact_fields() };
  let err = s.create_contact(&user, fields).await.unwrap_err();
  assert!(matches!(
    err.as_core(),
    Some(addressbook_core::Error::NotNullViolation(col)) if col == "contacts.city"
  ));
}

#[tokio::test]
async fn list_contacts_is_scoped_and_ordered() {
  let s = store().await;
  let alice = s.create_user(new_user("alice@example.com")).await.unwrap();
  let bob = s.create_user(new_user("bob@example.com")).await.unwrap();

  let first = s.create_contact(&alice, contact_fields()).await.unwrap();
  s.create_contact(&bob, contact_fields()).await.unwrap();
  let second = s.create_contact(&alice, contact_fields()).await.unwrap();

  let ids: Vec<i64> = s
    .list_contacts(alice.id)
    .await
    .unwrap()
    .into_iter()
    .map(|c| c.id)
    .collect();
  assert_eq!(ids, vec![first.id, second.id]);
}

#[tokio::test]
async fn list_contacts_empty() {
  let s = store().await;
  let user = s.create_user(new_user("jc@example.com")).await.unwrap();
  assert!(s.list_contacts(user.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn update_contact_persists_changes() {
  let s = store().await;
  let user = s.create_user(new_user("jc@example.com")).await.unwrap();
  let mut contact = s.create_contact(&user, contact_fields()).await.unwrap();

  contact.street_address = "the bat cave".into();
  contact.street_address_2 = Some("unit 2".into());
  s.update_contact(&contact).await.unwrap();

  let fetched = s.get_contact(contact.id).await.unwrap().unwrap();
  assert_eq!(fetched.street_address, "the bat cave");
  assert_eq!(fetched.street_address_2.as_deref(), Some("unit 2"));
  assert_eq!(fetched.city, "Denver");
  assert_eq!(fetched.user_id, user.id);
}

#[tokio::test]
async fn delete_contact_then_again_reports_not_found() {
  let s = store().await;
  let user = s.create_user(new_user("jc@example.com")).await.unwrap();
  let contact = s.create_contact(&user, contact_fields()).await.unwrap();

  s.delete_contact(&contact).await.unwrap();
  assert!(s.get_contact(contact.id).await.unwrap().is_none());

  let err = s.delete_contact(&contact).await.unwrap_err();
  assert!(matches!(
    err.as_core(),
    Some(addressbook_core::Error::ContactNotFound(_))
  ));
  // The owner is untouched.
  assert!(s.get_user(user.id).await.unwrap().is_some());
}
