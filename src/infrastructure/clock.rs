use crate::domain::ports::Clock;
use chrono::{DateTime, Utc};

/// Wall-clock adapter used outside of tests.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
