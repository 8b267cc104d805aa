mod manual_clock;

use std::fmt::Debug;

use chrono::{DateTime, Utc};

pub use manual_clock::ManualClock;

/// Source of wall-clock time for account and transaction timestamps.
pub trait Clock: Debug + Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
