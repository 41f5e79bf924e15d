//! This module implements `TimePoint`, an absolute position on the timeline.

use core::ops::{Add, AddAssign, Sub, SubAssign};

use crate::{
    builtins::core::duration::{period, Duration, Period},
    Seconds,
};

/// Seconds since the epoch, 1970-01-01T00:00:00.
///
/// Unlike `Timestamp`, a `TimePoint` is never wrapped and may be negative.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimePoint(Seconds);

impl TimePoint {
    /// The epoch itself.
    pub const EPOCH: Self = Self(Seconds::ZERO);

    /// Creates a `TimePoint` at `since_epoch` from the epoch.
    #[must_use]
    pub fn new<P: Period>(since_epoch: Duration<P>) -> Self {
        Self(since_epoch.cast())
    }

    /// Returns the seconds since the epoch.
    #[inline]
    #[must_use]
    pub const fn time_since_epoch(&self) -> Seconds {
        self.0
    }

    /// Moves forward one second.
    #[inline]
    pub fn increment(&mut self) {
        self.0.increment();
    }

    /// Moves back one second.
    #[inline]
    pub fn decrement(&mut self) {
        self.0.decrement();
    }
}

impl<P: Period> From<Duration<P>> for TimePoint {
    fn from(value: Duration<P>) -> Self {
        Self::new(value)
    }
}

impl<P: Period> Add<Duration<P>> for TimePoint {
    type Output = Self;

    fn add(self, rhs: Duration<P>) -> Self::Output {
        Self(self.0 + rhs.cast::<period::Second>())
    }
}

impl<P: Period> Add<TimePoint> for Duration<P> {
    type Output = TimePoint;

    fn add(self, rhs: TimePoint) -> Self::Output {
        rhs + self
    }
}

impl<P: Period> Sub<Duration<P>> for TimePoint {
    type Output = Self;

    fn sub(self, rhs: Duration<P>) -> Self::Output {
        Self(self.0 - rhs.cast::<period::Second>())
    }
}

impl Sub for TimePoint {
    type Output = Seconds;

    fn sub(self, rhs: Self) -> Self::Output {
        self.0 - rhs.0
    }
}

impl<P: Period> AddAssign<Duration<P>> for TimePoint {
    fn add_assign(&mut self, rhs: Duration<P>) {
        *self = *self + rhs;
    }
}

impl<P: Period> SubAssign<Duration<P>> for TimePoint {
    fn sub_assign(&mut self, rhs: Duration<P>) {
        *self = *self - rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::TimePoint;
    use crate::{Days, Hours, Minutes, Seconds, Years};

    fn at(seconds: i64) -> TimePoint {
        TimePoint::new(Seconds::new(seconds))
    }

    #[test]
    fn time_since_epoch() {
        assert_eq!(at(0).time_since_epoch(), Seconds::new(0));
        assert_eq!(at(42).time_since_epoch(), Seconds::new(42));
        assert_eq!(TimePoint::new(Days::new(1)), at(86_400));
        assert_eq!(TimePoint::EPOCH, TimePoint::default());
    }

    #[test]
    fn ordering() {
        assert!(at(10) < at(20));
        assert!(at(20) > at(10));
        assert_eq!(at(10), at(10));
        assert!(at(-1) < TimePoint::EPOCH);
    }

    #[test]
    fn increment_and_decrement() {
        let mut point = at(10);
        point.increment();
        assert_eq!(point, at(11));
        point.decrement();
        point.decrement();
        assert_eq!(point, at(9));
    }

    #[test]
    fn add_and_subtract_durations() {
        assert_eq!(at(100) + Seconds::new(20), at(120));
        assert_eq!(at(100) + Minutes::new(1), at(160));
        assert_eq!(Seconds::new(15) + at(30), at(45));
        assert_eq!(at(100) - Seconds::new(40), at(60));
        // Never wrapped.
        assert_eq!(at(0) - Seconds::new(1), at(-1));
        assert_eq!(at(0) + Days::new(2), at(172_800));

        let mut point = at(0);
        point += Hours::new(1);
        point -= Minutes::new(1);
        assert_eq!(point, at(3540));
    }

    #[test]
    fn huge_durations_saturate() {
        assert_eq!(at(1) + Seconds::new(i64::MAX), at(i64::MAX));
        assert_eq!(at(-1) - Seconds::new(i64::MAX), at(i64::MIN));
        assert_eq!(at(0) + Years::new(i64::MAX / 10), at(i64::MAX));

        let mut point = at(i64::MAX);
        point.increment();
        assert_eq!(point, at(i64::MAX));
        assert_eq!(at(i64::MIN) - at(1), Seconds::new(i64::MIN));
    }

    #[test]
    fn difference() {
        assert_eq!(at(200) - at(50), Seconds::new(150));
        assert_eq!(at(50) - at(200), Seconds::new(-150));
    }
}
