//! This module implements `Timestamp`, a time of day.

use alloc::string::{String, ToString};
use core::{
    fmt,
    ops::{Add, AddAssign, Sub, SubAssign},
};

use crate::{
    builtins::core::duration::{Duration, Period},
    formatting::FormattableTime,
    Hours, Minutes, Seconds, SECONDS_PER_DAY,
};

/// Seconds since local midnight.
///
/// The value always lies in `[0, 86400)`. Every constructor and every
/// arithmetic operation wraps around midnight without tracking a day carry.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(Seconds);

impl Timestamp {
    #[inline]
    fn normalize(seconds: i64) -> Seconds {
        let mut rem = seconds % SECONDS_PER_DAY;
        if rem < 0 {
            rem += SECONDS_PER_DAY;
        }
        Seconds::new(rem)
    }

    /// Returns the seconds a duration moves a time of day, in `[0, 86400)`.
    ///
    /// Computed in `i128` so that counts near the `i64` bounds wrap exactly.
    #[inline]
    fn day_offset<P: Period>(duration: Duration<P>) -> i64 {
        let seconds = i128::from(duration.count()) * i128::from(P::SECONDS);
        seconds.rem_euclid(i128::from(SECONDS_PER_DAY)) as i64
    }

    fn formattable(&self) -> FormattableTime {
        FormattableTime {
            hour: self.hours().count() as u8,
            minute: self.minutes().count() as u8,
            second: self.seconds().count() as u8,
        }
    }
}

impl Timestamp {
    /// Creates a `Timestamp` from any duration, wrapping it into a single day.
    #[must_use]
    pub fn new<P: Period>(since_midnight: Duration<P>) -> Self {
        Self(Seconds::new(Self::day_offset(since_midnight)))
    }

    /// Creates a `Timestamp` from hours, minutes and seconds.
    ///
    /// The fields are summed before wrapping, so `25:00:00` becomes `01:00:00`.
    #[must_use]
    pub fn from_hms(hours: Hours, minutes: Minutes, seconds: Seconds) -> Self {
        Self::new(hours + minutes + seconds)
    }

    /// Returns the seconds since midnight.
    #[inline]
    #[must_use]
    pub const fn since_midnight(&self) -> Seconds {
        self.0
    }

    /// Returns the whole hours since midnight.
    #[inline]
    #[must_use]
    pub fn hours(&self) -> Hours {
        self.0.floor()
    }

    /// Returns the whole minutes past the hour.
    #[inline]
    #[must_use]
    pub fn minutes(&self) -> Minutes {
        (self.0 - self.hours()).floor()
    }

    /// Returns the seconds past the minute.
    #[inline]
    #[must_use]
    pub fn seconds(&self) -> Seconds {
        self.0 - self.hours() - self.minutes()
    }

    /// Renders the time as `HH:MM:SS`.
    #[must_use]
    pub fn hh_mm_ss(&self) -> String {
        self.formattable().to_string()
    }

    /// Moves forward one second, wrapping past midnight.
    pub fn increment(&mut self) {
        *self = *self + Seconds::new(1);
    }

    /// Moves back one second, wrapping before midnight.
    pub fn decrement(&mut self) {
        *self = *self - Seconds::new(1);
    }
}

impl<P: Period> From<Duration<P>> for Timestamp {
    fn from(value: Duration<P>) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.formattable(), f)
    }
}

impl<P: Period> Add<Duration<P>> for Timestamp {
    type Output = Self;

    fn add(self, rhs: Duration<P>) -> Self::Output {
        Self(Self::normalize(self.0.count() + Self::day_offset(rhs)))
    }
}

impl<P: Period> Add<Timestamp> for Duration<P> {
    type Output = Timestamp;

    fn add(self, rhs: Timestamp) -> Self::Output {
        rhs + self
    }
}

impl<P: Period> Sub<Duration<P>> for Timestamp {
    type Output = Self;

    fn sub(self, rhs: Duration<P>) -> Self::Output {
        Self(Self::normalize(self.0.count() - Self::day_offset(rhs)))
    }
}

/// The difference between two times of day is not wrapped.
impl Sub for Timestamp {
    type Output = Seconds;

    fn sub(self, rhs: Self) -> Self::Output {
        self.0 - rhs.0
    }
}

impl<P: Period> AddAssign<Duration<P>> for Timestamp {
    fn add_assign(&mut self, rhs: Duration<P>) {
        *self = *self + rhs;
    }
}

impl<P: Period> SubAssign<Duration<P>> for Timestamp {
    fn sub_assign(&mut self, rhs: Duration<P>) {
        *self = *self - rhs;
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::Timestamp;
    use crate::{Days, Hours, Minutes, Seconds, Years};

    fn at(seconds: i64) -> Timestamp {
        Timestamp::new(Seconds::new(seconds))
    }

    #[test]
    fn normalization() {
        assert_eq!(at(86_400), at(0));
        assert_eq!(at(-1), at(86_399));
        assert_eq!(at(86_400 * 2 + 42), at(42));
        assert_eq!(at(-86_400 * 3 - 1).since_midnight(), Seconds::new(86_399));
        assert_eq!(Timestamp::new(Days::new(5)), at(0));
        assert_eq!(Timestamp::from(Hours::new(-1)), at(82_800));
        assert_eq!(
            Timestamp::from_hms(Hours::new(25), Minutes::new(0), Seconds::new(0)),
            at(3600)
        );
    }

    #[test]
    fn increment_and_decrement_wrap() {
        let mut t = at(86_399);
        t.increment();
        assert_eq!(t, at(0));
        t.decrement();
        assert_eq!(t, at(86_399));

        let mut t = at(10);
        t.increment();
        assert_eq!(t, at(11));
        t.decrement();
        t.decrement();
        assert_eq!(t, at(9));
    }

    #[test]
    fn add_duration() {
        assert_eq!(at(86_300) + Seconds::new(200), at(100));
        assert_eq!(at(100) + Minutes::new(1), at(160));
        assert_eq!(Minutes::new(1) + at(10), at(70));
        assert_eq!(at(100) + Days::new(3), at(100));

        let mut t = at(0);
        t += Hours::new(25);
        assert_eq!(t, at(3600));
    }

    #[test]
    fn subtract_duration() {
        assert_eq!(at(100) - Seconds::new(200), at(86_300));
        assert_eq!(at(0) - Seconds::new(1), at(86_399));

        let mut t = at(0);
        t -= Minutes::new(1);
        assert_eq!(t, at(86_340));
    }

    #[test]
    fn huge_durations_wrap_exactly() {
        assert_eq!(at(1) + Seconds::new(i64::MAX), at(55_808));
        assert_eq!(at(5) - Seconds::new(i64::MAX), at(30_598));
        assert_eq!(at(0) + Years::new(i64::MAX / 10), at(12_960));
        assert_eq!(Timestamp::new(Years::new(-(i64::MAX / 10))), at(73_440));
        assert_eq!(Timestamp::new(Seconds::new(i64::MIN)).since_midnight(), Seconds::new(30_592));

        let mut t = at(86_399);
        t += Days::new(i64::MAX);
        assert_eq!(t, at(86_399));
        t -= Hours::new(i64::MIN);
        assert_eq!(t, at(28_799));
    }

    #[test]
    fn difference_is_not_wrapped() {
        assert_eq!(at(100) - at(40), Seconds::new(60));
        assert_eq!(at(40) - at(100), Seconds::new(-60));
    }

    #[test]
    fn accessors() {
        let t = Timestamp::from_hms(Hours::new(1), Minutes::new(2), Seconds::new(3));
        assert_eq!(t.hours(), Hours::new(1));
        assert_eq!(t.minutes(), Minutes::new(2));
        assert_eq!(t.seconds(), Seconds::new(3));

        let t = at(86_399);
        assert_eq!(t.hours(), Hours::new(23));
        assert_eq!(t.minutes(), Minutes::new(59));
        assert_eq!(t.seconds(), Seconds::new(59));
    }

    #[test]
    fn formatting() {
        let t = Timestamp::from_hms(Hours::new(1), Minutes::new(2), Seconds::new(3));
        assert_eq!(t.hh_mm_ss(), "01:02:03");
        assert_eq!(at(0).hh_mm_ss(), "00:00:00");
        assert_eq!(at(86_399).hh_mm_ss(), "23:59:59");
        assert_eq!(at(43_200).to_string(), "12:00:00");
    }
}
