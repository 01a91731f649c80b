// src/lib.rs

//! user-record: construct-and-normalize for User records.
//!
//! A [`User`] is built from partial input by [`UserConstructor`], which:
//!  - drops input keys that are not declared in [`USER_SCHEMA`],
//!  - generates a UUID v4 `id` when none is supplied,
//!  - stamps `createdAt` when none is supplied,
//!  - always stamps `updatedAt`.
//!
//! Time and identifiers come from injectable [`Clock`] and [`IdGenerator`]
//! sources so tests can pin them down. Persistence and schema exposure are
//! left to callers; they read the static [`USER_SCHEMA`] descriptor instead of
//! annotations on the record type.

pub mod constructor;
pub mod error;
pub mod model;
pub mod schema;
pub mod sources;

// --- Re-exports for the Public API ---

pub use crate::constructor::{PresencePolicy, UserConstructor};
pub use crate::error::{RecordError, RecordResult};
pub use crate::model::{User, UserInput};
pub use crate::schema::{EntitySchema, FieldDescriptor, FieldKind, USER_SCHEMA};
pub use crate::sources::{is_uuid_v4, Clock, FixedClock, IdGenerator, SequenceIdGenerator, SystemClock, UuidV4Generator};
