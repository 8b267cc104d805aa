use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, TimeDelta, Utc};

use crate::clock::Clock;

/// A clock that only moves when told to.
///
/// Useful wherever timestamps need to be deterministic, e.g. asserting on the
/// `timestamp` of a recorded transaction.
#[derive(Debug)]
pub struct ManualClock {
    current: Mutex<DateTime<Utc>>
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            current: Mutex::new(start)
        }
    }

    pub fn set(&self, time: DateTime<Utc>) {
        *self.lock() = time;
    }

    pub fn advance(&self, delta: TimeDelta) {
        let mut current = self.lock();
        *current += delta;
    }

    fn lock(&self) -> MutexGuard<'_, DateTime<Utc>> {
        //NOTE: A poisoned lock still holds a valid timestamp, so keep using it
        self.current.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.lock()
    }
}
