use chrono::{Local, NaiveDateTime};

pub(crate) trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock in the local zone.
pub(crate) struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

#[cfg(test)]
pub(crate) struct FixedClock(pub NaiveDateTime);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// The date given on the command line, or the clock's current time.
pub(crate) fn resolve_date(given: Option<NaiveDateTime>, clock: &impl Clock) -> NaiveDateTime {
    given.unwrap_or_else(|| clock.now())
}
