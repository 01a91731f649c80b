// user_record/src/constructor/mod.rs

//! Construct-and-normalize for User records.
//!
//! Every path into a [`User`] goes through [`UserConstructor::construct`]:
//!  - undeclared input keys are projected away,
//!  - an absent `id` is replaced by a generated identifier,
//!  - an absent `createdAt` is set to now,
//!  - `updatedAt` is always set to now.
//!
//! What "absent" means is governed by [`PresencePolicy`].

pub mod policy;

pub use policy::PresencePolicy;

use crate::error::{RecordError, RecordResult};
use crate::model::input::json_type_name;
use crate::model::{User, UserInput};
use crate::sources::{Clock, IdGenerator, SystemClock, UuidV4Generator};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;
use tracing::{event, instrument, Level};

#[derive(Clone)]
pub struct UserConstructor {
  clock: Arc<dyn Clock>,
  ids: Arc<dyn IdGenerator>,
  policy: PresencePolicy,
}

impl UserConstructor {
  /// System clock, random UUID v4 identifiers, loose presence checks.
  pub fn new() -> Self {
    Self {
      clock: Arc::new(SystemClock),
      ids: Arc::new(UuidV4Generator),
      policy: PresencePolicy::default(),
    }
  }

  pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
    self.clock = clock;
    self
  }

  pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
    self.ids = ids;
    self
  }

  pub fn with_presence_policy(mut self, policy: PresencePolicy) -> Self {
    self.policy = policy;
    self
  }

  pub fn presence_policy(&self) -> PresencePolicy {
    self.policy
  }

  /// Normalizes a typed partial input into a full record.
  ///
  /// Source failures propagate unchanged; no partial record is returned.
  #[instrument(name = "UserConstructor::construct", skip_all, fields(policy = %self.policy), err(Display))]
  pub fn construct(&self, input: UserInput) -> RecordResult<User> {
    let now = self.clock.now()?;

    let id = match input.id {
      Some(id) if !self.policy.id_is_absent(Some(id.as_str())) => id,
      _ => {
        let generated = self.ids.generate()?;
        event!(Level::DEBUG, id = %generated, "Generated identifier for record.");
        generated
      }
    };

    let created_at = match input.created_at {
      Some(ts) if !self.policy.timestamp_is_absent(Some(&ts)) => ts,
      _ => now,
    };

    let user = User {
      id,
      name: input.name,
      first_name: input.first_name,
      last_name: input.last_name,
      email: input.email,
      password: input.password,
      created_at,
      updated_at: now,
    };
    event!(Level::TRACE, record = ?user, "Record normalized.");
    Ok(user)
  }

  /// Projects a string-keyed mapping onto the schema, then constructs.
  pub fn construct_from_map(&self, map: &Map<String, Value>) -> RecordResult<User> {
    let input = UserInput::from_map(map, self.policy)?;
    self.construct(input)
  }

  pub fn construct_from_value(&self, value: &Value) -> RecordResult<User> {
    match value {
      Value::Object(map) => self.construct_from_map(map),
      other => Err(RecordError::InputNotObject {
        found: json_type_name(other).to_string(),
      }),
    }
  }

  pub fn construct_from_json(&self, raw: &str) -> RecordResult<User> {
    let value: Value = serde_json::from_str(raw)?;
    self.construct_from_value(&value)
  }

  /// Runs an existing record through normalization again. Identity and
  /// creation time are carried over; `updated_at` is refreshed.
  pub fn renormalize(&self, user: User) -> RecordResult<User> {
    self.construct(user.to_input())
  }
}

impl Default for UserConstructor {
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Debug for UserConstructor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("UserConstructor")
      .field("policy", &self.policy)
      .finish_non_exhaustive()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::sources::{is_uuid_v4, FixedClock, SequenceIdGenerator};
  use chrono::{Duration, TimeZone, Utc};
  use serde_json::json;

  fn fixed(policy: PresencePolicy) -> (UserConstructor, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::new(Utc.with_ymd_and_hms(2025, 5, 5, 10, 0, 0).unwrap()));
    let ctor = UserConstructor::new()
      .with_clock(clock.clone())
      .with_id_generator(Arc::new(SequenceIdGenerator::new(["gen-1", "gen-2"])))
      .with_presence_policy(policy);
    (ctor, clock)
  }

  #[test]
  fn empty_input_is_fully_defaulted() {
    let (ctor, clock) = fixed(PresencePolicy::Loose);
    let user = ctor.construct(UserInput::new()).unwrap();
    assert_eq!(user.id, "gen-1");
    assert_eq!(user.created_at, clock.current());
    assert_eq!(user.updated_at, clock.current());
    assert_eq!(user.name, None);
  }

  #[test]
  fn empty_id_is_replaced_only_under_loose_policy() {
    let (loose, _) = fixed(PresencePolicy::Loose);
    assert_eq!(loose.construct(UserInput::new().id("")).unwrap().id, "gen-1");

    let (strict, _) = fixed(PresencePolicy::Strict);
    assert_eq!(strict.construct(UserInput::new().id("")).unwrap().id, "");
  }

  #[test]
  fn supplied_created_at_is_kept_even_in_the_future() {
    let (ctor, clock) = fixed(PresencePolicy::Loose);
    let future = clock.current() + Duration::days(365);
    let user = ctor.construct(UserInput::new().created_at(future)).unwrap();
    assert_eq!(user.created_at, future);
    assert!(user.created_at > user.updated_at);
  }

  #[test]
  fn exhausted_id_source_propagates() {
    let (ctor, _) = fixed(PresencePolicy::Loose);
    ctor.construct(UserInput::new()).unwrap();
    ctor.construct(UserInput::new()).unwrap();
    let err = ctor.construct(UserInput::new()).unwrap_err();
    assert!(err.is_source_failure());
  }

  #[test]
  fn supplied_id_does_not_consume_the_generator() {
    let ids = Arc::new(SequenceIdGenerator::new(["only"]));
    let ctor = UserConstructor::new().with_id_generator(ids.clone());
    ctor.construct(UserInput::new().id("abc-123")).unwrap();
    assert_eq!(ids.remaining(), 1);
  }

  #[test]
  fn renormalize_refreshes_only_updated_at() {
    let (ctor, clock) = fixed(PresencePolicy::Loose);
    let first = ctor.construct(UserInput::new().email("a@b.com")).unwrap();
    clock.advance(Duration::minutes(5));
    let second = ctor.renormalize(first.clone()).unwrap();
    assert_eq!(second.id, first.id);
    assert_eq!(second.created_at, first.created_at);
    assert_eq!(second.email, first.email);
    assert_eq!(second.updated_at, first.updated_at + Duration::minutes(5));
  }

  #[test]
  fn non_object_values_are_rejected() {
    let ctor = UserConstructor::new();
    let err = ctor.construct_from_value(&json!(["name", "Alice"])).unwrap_err();
    assert!(matches!(err, RecordError::InputNotObject { ref found } if found == "array"));
    assert!(matches!(ctor.construct_from_json("{not json"), Err(RecordError::Json(_))));
  }

  #[test]
  fn default_constructor_generates_uuids() {
    let user = UserConstructor::default().construct_from_json(r#"{"name": "Alice"}"#).unwrap();
    assert!(is_uuid_v4(&user.id));
    assert_eq!(format!("{:?}", UserConstructor::default()), "UserConstructor { policy: Loose, .. }");
  }
}
