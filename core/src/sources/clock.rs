// user_record/src/sources/clock.rs
use crate::error::RecordResult;
use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;

/// Source of the current wall-clock time.
pub trait Clock: Send + Sync {
  fn now(&self) -> RecordResult<DateTime<Utc>>;
}

/// Reads the system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn now(&self) -> RecordResult<DateTime<Utc>> {
    Ok(Utc::now())
  }
}

/// A clock that only moves when told to.
///
/// Lock is held for the duration of a single call only.
#[derive(Debug)]
pub struct FixedClock {
  instant: Mutex<DateTime<Utc>>,
}

impl FixedClock {
  pub fn new(instant: DateTime<Utc>) -> Self {
    Self {
      instant: Mutex::new(instant),
    }
  }

  pub fn set(&self, instant: DateTime<Utc>) {
    *self.instant.lock() = instant;
  }

  /// Moves the clock forward by `by`. An overflowing step leaves the clock
  /// where it was.
  pub fn advance(&self, by: Duration) {
    let mut guard = self.instant.lock();
    if let Some(next) = guard.checked_add_signed(by) {
      *guard = next;
    }
  }

  pub fn current(&self) -> DateTime<Utc> {
    *self.instant.lock()
  }
}

impl Clock for FixedClock {
  fn now(&self) -> RecordResult<DateTime<Utc>> {
    Ok(self.current())
  }
}
