// user_record/src/sources/mod.rs

//! Injectable time and identifier sources used by the record constructor.
//!
//! Production code uses [`SystemClock`] and [`UuidV4Generator`]. Tests swap in
//! [`FixedClock`] and [`SequenceIdGenerator`] to get deterministic records.

pub mod clock;
pub mod id_gen;

pub use clock::{Clock, FixedClock, SystemClock};
pub use id_gen::{is_uuid_v4, IdGenerator, SequenceIdGenerator, UuidV4Generator};
