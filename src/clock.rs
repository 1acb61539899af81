//! Time source for session and turn timestamps

use std::sync::{Arc, Mutex};

use chrono::{Local, NaiveDateTime, TimeDelta};

/// Wall-clock source. The session reads it at game start and on every end-turn record.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Local time of the machine
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Manually driven clock for scenarios and tests. Clones share the same time.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Arc<Mutex<NaiveDateTime>>,
}

impl FixedClock {
    pub fn new(at: NaiveDateTime) -> Self {
        Self {
            now: Arc::new(Mutex::new(at)),
        }
    }

    /// Move time forward
    pub fn advance(&self, by: TimeDelta) {
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *now += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Whole seconds between two instants, rounded to nearest with ties to even
pub fn elapsed_secs(since: NaiveDateTime, now: NaiveDateTime) -> i64 {
    let ms = (now - since).num_milliseconds();
    (ms as f64 / 1000.0).round_ties_even() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2016, 7, 18)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_fixed_clock_shared_between_clones() {
        let clock = FixedClock::new(noon());
        let handle = clock.clone();
        handle.advance(TimeDelta::seconds(30));
        assert_eq!(clock.now(), noon() + TimeDelta::seconds(30));
    }

    #[test]
    fn test_elapsed_rounds_to_nearest_second() {
        let start = noon();
        assert_eq!(elapsed_secs(start, start + TimeDelta::milliseconds(1499)), 1);
        assert_eq!(elapsed_secs(start, start + TimeDelta::milliseconds(1500)), 2);
        assert_eq!(elapsed_secs(start, start + TimeDelta::milliseconds(2500)), 2);
        assert_eq!(elapsed_secs(start, start + TimeDelta::milliseconds(2501)), 3);
        assert_eq!(elapsed_secs(start, start), 0);
    }
}
