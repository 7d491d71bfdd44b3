// tests/support/mocks/time.rs
use chrono::{DateTime, Duration, Utc};
use quill_core::application::ports::time::Clock;
use std::sync::Mutex;

/// Deterministic clock: every `now()` returns a time one second later than
/// the previous call, so records created in sequence sort unambiguously.
pub struct SteppingClock {
    current: Mutex<DateTime<Utc>>,
}

impl SteppingClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            current: Mutex::new(start),
        }
    }

    /// Jump the clock to an absolute instant (e.g. a specific month for
    /// archive grouping); stepping continues from there.
    pub fn set(&self, instant: DateTime<Utc>) {
        *self.current.lock().unwrap() = instant;
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let mut current = self.current.lock().unwrap();
        let result = *current;
        *current += Duration::seconds(1);
        result
    }
}
