//! This module implements `Date` and any directly related algorithms.

use alloc::string::{String, ToString};
use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops::{Add, AddAssign, Sub, SubAssign},
};

use crate::{
    builtins::core::{
        calendar::{Day, Month, Weekday, Year},
        duration::{period, DatePeriod, Duration},
    },
    error::ErrorMessage,
    formatting::FormattableDate,
    iso::IsoDate,
    Days, TemporalError, TemporalResult,
};

/// A day of the proleptic Gregorian calendar.
///
/// A `Date` is a count of days since 1970-01-01. The year, month and day
/// are derived from that count and kept in sync with it on every change.
///
/// ```rust
/// use lines_temporal::{Date, Day, Days, Month, Weekday, Year};
///
/// let date = Date::try_new(Year::new(2024), Month::new(2), Day::new(29)).unwrap();
/// assert_eq!((date + Days::new(1)).yyyy_mm_dd(), "2024-03-01");
/// assert_eq!(date.weekday(), Weekday::Thursday);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Date {
    epoch_days: Days,
    iso: IsoDate,
}

// ==== Private API ====

impl Date {
    /// Replaces the day count and refreshes the calendar fields.
    fn set_epoch_days(&mut self, epoch_days: Days) {
        self.epoch_days = epoch_days;
        self.iso = IsoDate::from_epoch_days(epoch_days.count());
    }

    fn formattable(&self) -> FormattableDate {
        FormattableDate(self.iso.year, self.iso.month, self.iso.day)
    }
}

// ==== Public API ====

impl Date {
    /// Creates a `Date` from a count of days since the epoch.
    ///
    /// Every count is accepted.
    #[must_use]
    pub fn from_epoch_days(epoch_days: Days) -> Self {
        Self {
            epoch_days,
            iso: IsoDate::from_epoch_days(epoch_days.count()),
        }
    }

    /// Creates a `Date` from a year, month and day.
    ///
    /// Fails with an invalid argument error when the fields do not name a
    /// day of the Gregorian calendar.
    pub fn try_new(year: Year, month: Month, day: Day) -> TemporalResult<Self> {
        let iso = IsoDate::new_unchecked(year.get(), month.get(), day.get());
        if !iso.is_valid() {
            return Err(
                TemporalError::invalid_argument().with_enum(ErrorMessage::InvalidCalendarDate)
            );
        }
        Ok(Self {
            epoch_days: Days::new(iso.to_epoch_days()),
            iso,
        })
    }

    /// Returns the days since the epoch.
    #[inline]
    #[must_use]
    pub const fn epoch_days(&self) -> Days {
        self.epoch_days
    }

    #[inline]
    #[must_use]
    pub const fn year(&self) -> Year {
        Year::new(self.iso.year)
    }

    #[inline]
    #[must_use]
    pub const fn month(&self) -> Month {
        Month::new(self.iso.month)
    }

    #[inline]
    #[must_use]
    pub const fn day(&self) -> Day {
        Day::new(self.iso.day)
    }

    /// Returns the day of the week.
    ///
    /// The epoch, 1970-01-01, was a Thursday.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        let index = (self.epoch_days.count().rem_euclid(7) + 3) % 7;
        Weekday::from_index(index as u8)
    }

    /// Renders the date as `YYYY-MM-DD`.
    #[must_use]
    pub fn yyyy_mm_dd(&self) -> String {
        self.formattable().to_string()
    }

    /// Moves to the following day.
    pub fn increment(&mut self) {
        self.set_epoch_days(self.epoch_days + Days::new(1));
    }

    /// Moves to the preceding day.
    pub fn decrement(&mut self) {
        self.set_epoch_days(self.epoch_days - Days::new(1));
    }
}

// ==== Trait impls ====

impl Default for Date {
    fn default() -> Self {
        Self::from_epoch_days(Days::ZERO)
    }
}

impl From<Days> for Date {
    fn from(value: Days) -> Self {
        Self::from_epoch_days(value)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.formattable(), f)
    }
}

impl PartialEq for Date {
    fn eq(&self, other: &Self) -> bool {
        self.epoch_days == other.epoch_days
    }
}

impl Eq for Date {}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Date {
    fn cmp(&self, other: &Self) -> Ordering {
        self.epoch_days.cmp(&other.epoch_days)
    }
}

impl Hash for Date {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.epoch_days.hash(state);
    }
}

// Durations are truncated to whole days before they are applied.
impl<P: DatePeriod> Add<Duration<P>> for Date {
    type Output = Self;

    fn add(self, rhs: Duration<P>) -> Self::Output {
        Self::from_epoch_days(self.epoch_days + rhs.cast::<period::Day>())
    }
}

impl<P: DatePeriod> Add<Date> for Duration<P> {
    type Output = Date;

    fn add(self, rhs: Date) -> Self::Output {
        rhs + self
    }
}

impl<P: DatePeriod> Sub<Duration<P>> for Date {
    type Output = Self;

    fn sub(self, rhs: Duration<P>) -> Self::Output {
        Self::from_epoch_days(self.epoch_days - rhs.cast::<period::Day>())
    }
}

impl Sub for Date {
    type Output = Days;

    fn sub(self, rhs: Self) -> Self::Output {
        self.epoch_days - rhs.epoch_days
    }
}

impl<P: DatePeriod> AddAssign<Duration<P>> for Date {
    fn add_assign(&mut self, rhs: Duration<P>) {
        self.set_epoch_days(self.epoch_days + rhs.cast::<period::Day>());
    }
}

impl<P: DatePeriod> SubAssign<Duration<P>> for Date {
    fn sub_assign(&mut self, rhs: Duration<P>) {
        self.set_epoch_days(self.epoch_days - rhs.cast::<period::Day>());
    }
}
