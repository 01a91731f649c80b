// tests/construct_tests.rs
mod common;

use chrono::Utc;
use common::*;
use serde_json::json;
use user_record::{is_uuid_v4, PresencePolicy, RecordError, User, UserConstructor, UserInput, USER_SCHEMA};

#[test]
fn test_name_only_input_is_defaulted() {
  setup_tracing();
  let ctor = UserConstructor::new();

  let before = Utc::now();
  let user = ctor.construct_from_value(&json!({"name": "Alice"})).unwrap();
  let after = Utc::now();

  assert!(is_uuid_v4(&user.id), "generated id is not uuid v4: {}", user.id);
  assert_eq!(user.name.as_deref(), Some("Alice"));
  assert_eq!(user.first_name, None);
  assert_eq!(user.last_name, None);
  assert_eq!(user.email, None);
  assert_eq!(user.password, None);
  assert!(within_now(user.created_at, before, after));
  assert!(within_now(user.updated_at, before, after));
}

#[test]
fn test_supplied_fields_preserved_and_extras_dropped() {
  setup_tracing();
  let ctor = UserConstructor::new();
  let t0 = t0();

  let input = json!({
    "id": "abc-123",
    "createdAt": t0.to_rfc3339(),
    "email": "a@b.com",
    "extra": "ignored"
  });

  let before = Utc::now();
  let user = ctor.construct_from_value(&input).unwrap();
  let after = Utc::now();

  assert_eq!(user.id, "abc-123");
  assert_eq!(user.created_at, t0);
  assert_eq!(user.email.as_deref(), Some("a@b.com"));
  assert!(within_now(user.updated_at, before, after));
  assert_ne!(user.updated_at, t0);

  let serialized = serde_json::to_value(&user).unwrap();
  let obj = serialized.as_object().unwrap();
  assert!(!obj.contains_key("extra"));
  assert!(obj.keys().all(|k| USER_SCHEMA.is_declared(k)));
}

#[test]
fn test_supplied_updated_at_is_discarded() {
  setup_tracing();
  let (ctor, clock, _) = deterministic_constructor(PresencePolicy::Loose, &["id-1"]);
  let stale = t0();

  let user = ctor
    .construct_from_value(&json!({"updatedAt": stale.to_rfc3339(), "createdAt": stale.to_rfc3339()}))
    .unwrap();

  assert_eq!(user.created_at, stale);
  assert_eq!(user.updated_at, clock.current());
}

#[test]
fn test_empty_string_id_policy() {
  setup_tracing();
  let (loose, _, _) = deterministic_constructor(PresencePolicy::Loose, &["generated"]);
  let user = loose.construct_from_value(&json!({"id": ""})).unwrap();
  assert_eq!(user.id, "generated");

  let (strict, _, generator) = deterministic_constructor(PresencePolicy::Strict, &["generated"]);
  let user = strict.construct_from_value(&json!({"id": ""})).unwrap();
  assert_eq!(user.id, "");
  assert_eq!(generator.remaining(), 1);
}

#[test]
fn test_epoch_created_at_policy() {
  setup_tracing();
  let (loose, clock, _) = deterministic_constructor(PresencePolicy::Loose, &["a"]);
  let user = loose.construct_from_value(&json!({"createdAt": 0})).unwrap();
  assert_eq!(user.created_at, clock.current());

  let (strict, _, _) = deterministic_constructor(PresencePolicy::Strict, &["a"]);
  let user = strict.construct_from_value(&json!({"createdAt": 0})).unwrap();
  assert_eq!(user.created_at.timestamp_millis(), 0);
}

#[test]
fn test_missing_non_key_fields_are_not_errors() {
  setup_tracing();
  let ctor = UserConstructor::new();
  let user = ctor.construct_from_value(&json!({})).unwrap();
  assert!(user.email.is_none());
  assert!(is_uuid_v4(&user.id));

  let serialized = serde_json::to_value(&user).unwrap();
  for field in USER_SCHEMA.required_fields() {
    assert!(serialized.get(field.name).is_some(), "required field {} missing", field.name);
  }
  assert!(serialized.get("email").is_none());
}

#[test]
fn test_exhausted_id_source_is_fatal() {
  setup_tracing();
  let (ctor, _, _) = deterministic_constructor(PresencePolicy::Loose, &[]);
  let result = ctor.construct_from_value(&json!({"name": "Bob"}));
  match result {
    Err(RecordError::IdGeneration { message }) => assert!(message.contains("exhausted")),
    other => panic!("Expected RecordError::IdGeneration, got {:?}", other),
  }
}

#[test]
fn test_document_round_trip_through_legacy_id() {
  setup_tracing();
  let (ctor, clock, _) = deterministic_constructor(PresencePolicy::Loose, &["doc-1"]);
  let user = ctor.construct(UserInput::new().name("Carol").password("s3cret")).unwrap();

  let document = user.to_document().unwrap();
  assert_eq!(document["_id"], "doc-1");

  clock.advance(chrono::Duration::hours(1));
  let reloaded = ctor.construct_from_map(&document).unwrap();
  assert_eq!(reloaded.id, "doc-1");
  assert_eq!(reloaded.created_at, user.created_at);
  assert_eq!(reloaded.password.as_deref(), Some("s3cret"));
  assert_eq!(reloaded.updated_at, user.updated_at + chrono::Duration::hours(1));
}

#[test]
fn test_user_from_input_uses_system_sources() {
  setup_tracing();
  let user = User::from_input(UserInput::new().first_name("Dana").last_name("Scully")).unwrap();
  assert!(is_uuid_v4(&user.id));
  assert_eq!(user.first_name.as_deref(), Some("Dana"));
  assert_eq!(user.created_at, user.updated_at);
}
