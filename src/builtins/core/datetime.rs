//! This module implements `DateTime`, the calendar view of a `TimePoint`.

use core::fmt;

use crate::{
    builtins::core::{date::Date, instant::TimePoint, time::Timestamp},
    period, Days,
};

/// Splits a `TimePoint` into the `Date` it falls on and its `Timestamp`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime {
    point: TimePoint,
}

impl DateTime {
    #[inline]
    #[must_use]
    pub const fn new(point: TimePoint) -> Self {
        Self { point }
    }

    /// Combines a date and a time of day into a `DateTime`.
    #[must_use]
    pub fn from_date_and_time(date: Date, time: Timestamp) -> Self {
        Self::new(TimePoint::new(date.epoch_days()) + time.since_midnight())
    }

    #[inline]
    #[must_use]
    pub const fn time_point(&self) -> TimePoint {
        self.point
    }

    /// Returns the date, flooring toward the start of the timeline.
    #[must_use]
    pub fn date(&self) -> Date {
        let days: Days = self.point.time_since_epoch().floor::<period::Day>();
        Date::from_epoch_days(days)
    }

    /// Returns the time since the start of `date()`.
    #[must_use]
    pub fn time(&self) -> Timestamp {
        Timestamp::new(self.point.time_since_epoch())
    }
}

impl From<TimePoint> for DateTime {
    fn from(value: TimePoint) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}", self.date(), self.time())
    }
}
