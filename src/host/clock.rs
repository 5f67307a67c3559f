use crate::models::time_of_day::TimeOfDay;

pub trait Clock {
    fn now(&self) -> TimeOfDay;
}

/// Local wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> TimeOfDay {
        TimeOfDay::now_local()
    }
}

/// Always answers the same time; used by `--at` and in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub TimeOfDay);

impl Clock for FixedClock {
    fn now(&self) -> TimeOfDay {
        self.0
    }
}
