// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;
use tracing::Level;
use user_record::{FixedClock, PresencePolicy, SequenceIdGenerator, UserConstructor};

/// Wall-clock tolerance for records built against the system clock.
pub const NOW_TOLERANCE_MS: i64 = 1_000;

pub fn t0() -> DateTime<Utc> {
  Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap()
}

pub fn within_now(ts: DateTime<Utc>, before: DateTime<Utc>, after: DateTime<Utc>) -> bool {
  ts >= before - chrono::Duration::milliseconds(NOW_TOLERANCE_MS)
    && ts <= after + chrono::Duration::milliseconds(NOW_TOLERANCE_MS)
}

/// Constructor pinned to a fixed instant and a short id sequence.
pub fn deterministic_constructor(
  policy: PresencePolicy,
  ids: &[&str],
) -> (UserConstructor, Arc<FixedClock>, Arc<SequenceIdGenerator>) {
  let clock = Arc::new(FixedClock::new(Utc.with_ymd_and_hms(2024, 7, 1, 9, 30, 0).unwrap()));
  let generator = Arc::new(SequenceIdGenerator::new(ids.iter().copied()));
  let ctor = UserConstructor::new()
    .with_clock(clock.clone())
    .with_id_generator(generator.clone())
    .with_presence_policy(policy);
  (ctor, clock, generator)
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
