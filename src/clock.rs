use chrono::{NaiveDate, Utc};

/// Source of "today" for warranty evaluation.
///
/// Injected through `AppState` rather than read inside the domain code so
/// handlers stay deterministic under test.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Wall-clock calendar dates in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// A clock pinned to one date, for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_returns_pinned_date() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(FixedClock(d).today(), d);
    }

    #[test]
    fn test_system_clock_is_stable_within_a_call() {
        // Two immediate reads land on the same calendar date outside of a
        // midnight rollover; the weaker claim that both parse as real dates
        // is all this can assert deterministically.
        let clock = SystemClock;
        let a = clock.today();
        let b = clock.today();
        assert!((b - a).num_days() <= 1);
    }
}
