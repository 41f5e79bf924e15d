//! The calendar field types `Year`, `Month`, `Day` and `Weekday`.
//!
//! `Month` and `Day` are weak invariant types. Arithmetic is applied to the
//! raw value without normalization, so a value may leave its nominal range.
//! Callers check `ok()` before trusting one.

use core::{
    fmt,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

use crate::{iso, Days, Months, Years};

/// A proleptic Gregorian year.
///
/// Every value except `i32::MIN` is a valid year.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(i32);

impl Year {
    /// Creates a new `Year`.
    #[inline]
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the raw year.
    #[inline]
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Returns whether this is a valid year.
    #[inline]
    #[must_use]
    pub const fn ok(self) -> bool {
        self.0 != i32::MIN
    }

    /// Returns whether this year is a Gregorian leap year.
    #[inline]
    #[must_use]
    pub const fn is_leap(self) -> bool {
        iso::is_leap_year(self.0)
    }

    /// Moves to the following year.
    #[inline]
    pub fn increment(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    /// Moves to the preceding year.
    #[inline]
    pub fn decrement(&mut self) {
        self.0 = self.0.wrapping_sub(1);
    }
}

impl From<Year> for i32 {
    fn from(value: Year) -> Self {
        value.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Neg for Year {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(self.0.wrapping_neg())
    }
}

impl Add<Years> for Year {
    type Output = Self;

    fn add(self, rhs: Years) -> Self::Output {
        Self(i64::from(self.0).wrapping_add(rhs.count()) as i32)
    }
}

impl Add<Year> for Years {
    type Output = Year;

    fn add(self, rhs: Year) -> Self::Output {
        rhs + self
    }
}

impl Sub<Years> for Year {
    type Output = Self;

    fn sub(self, rhs: Years) -> Self::Output {
        Self(i64::from(self.0).wrapping_sub(rhs.count()) as i32)
    }
}

impl Sub for Year {
    type Output = Years;

    fn sub(self, rhs: Self) -> Self::Output {
        Years::new(i64::from(self.0) - i64::from(rhs.0))
    }
}

impl AddAssign<Years> for Year {
    fn add_assign(&mut self, rhs: Years) {
        *self = *self + rhs;
    }
}

impl SubAssign<Years> for Year {
    fn sub_assign(&mut self, rhs: Years) {
        *self = *self - rhs;
    }
}

// Implements a weak invariant field over a `u8` along with its arithmetic.
macro_rules! weak_field {
    ($(#[$meta:meta])* $name:ident, $duration:ty, $max:literal) => {
        $(#[$meta])*
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u8);

        impl $name {
            #[doc = concat!("Creates a new `", stringify!($name), "` without validation.")]
            #[inline]
            #[must_use]
            pub const fn new(value: u8) -> Self {
                Self(value)
            }

            /// Returns the raw value.
            #[inline]
            #[must_use]
            pub const fn get(self) -> u8 {
                self.0
            }

            #[doc = concat!("Returns whether the value lies in `1..=", stringify!($max), "`.")]
            #[inline]
            #[must_use]
            pub const fn ok(self) -> bool {
                1 <= self.0 && self.0 <= $max
            }

            /// Adds one to the raw value, wrapping modulo 256.
            #[inline]
            pub fn increment(&mut self) {
                self.0 = self.0.wrapping_add(1);
            }

            /// Subtracts one from the raw value, wrapping modulo 256.
            #[inline]
            pub fn decrement(&mut self) {
                self.0 = self.0.wrapping_sub(1);
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        // The raw value wraps modulo 256 and is not range checked.
        impl Add<$duration> for $name {
            type Output = Self;

            fn add(self, rhs: $duration) -> Self::Output {
                Self(i64::from(self.0).wrapping_add(rhs.count()) as u8)
            }
        }

        impl Add<$name> for $duration {
            type Output = $name;

            fn add(self, rhs: $name) -> Self::Output {
                rhs + self
            }
        }

        impl Sub<$duration> for $name {
            type Output = Self;

            fn sub(self, rhs: $duration) -> Self::Output {
                Self(i64::from(self.0).wrapping_sub(rhs.count()) as u8)
            }
        }

        impl Sub for $name {
            type Output = $duration;

            fn sub(self, rhs: Self) -> Self::Output {
                <$duration>::new(i64::from(self.0) - i64::from(rhs.0))
            }
        }

        impl AddAssign<$duration> for $name {
            fn add_assign(&mut self, rhs: $duration) {
                *self = *self + rhs;
            }
        }

        impl SubAssign<$duration> for $name {
            fn sub_assign(&mut self, rhs: $duration) {
                *self = *self - rhs;
            }
        }
    };
}

weak_field!(
    /// A month of the year, nominally `1..=12`.
    Month,
    Months,
    12
);

weak_field!(
    /// A day of the month, nominally `1..=31`.
    ///
    /// `ok()` does not know which month the day belongs to.
    Day,
    Days,
    31
);

/// A day of the week, indexed from Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
    Monday = 0,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Maps an index onto a weekday, wrapping every seven days.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        match index % 7 {
            0 => Self::Monday,
            1 => Self::Tuesday,
            2 => Self::Wednesday,
            3 => Self::Thursday,
            4 => Self::Friday,
            5 => Self::Saturday,
            _ => Self::Sunday,
        }
    }

    /// Returns the index of this weekday, where Monday is zero.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::{Day, Month, Weekday, Year};
    use crate::{Days, Months, Years};

    #[test]
    fn year_validity() {
        assert!(Year::new(i32::MAX).ok());
        assert!(Year::new(0).ok());
        assert!(!Year::new(i32::MIN).ok());
        assert_eq!(i32::from(Year::new(2026)), 2026);
    }

    #[test]
    fn leap_years() {
        assert!(Year::new(2024).is_leap());
        assert!(!Year::new(2022).is_leap());
        assert!(Year::new(2000).is_leap());
        assert!(!Year::new(1900).is_leap());
    }

    #[test]
    fn year_arithmetic() {
        let mut year = Year::new(2026);
        year.increment();
        assert_eq!(year, Year::new(2027));
        year.decrement();
        year.decrement();
        assert_eq!(year, Year::new(2025));

        assert_eq!(Year::new(2026) + Years::new(2), Year::new(2028));
        assert_eq!(Year::new(2026) - Years::new(2), Year::new(2024));
        assert_eq!(Year::new(2026) - Year::new(2024), Years::new(2));
        assert_eq!(Years::new(2) + Year::new(2026), Year::new(2028));

        let mut year = Year::new(2026);
        year += Years::new(2);
        assert_eq!(year, Year::new(2028));
        year -= Years::new(2);
        assert_eq!(year, Year::new(2026));
        assert_eq!(-year, Year::new(-2026));
        assert!(Year::new(2025) < Year::new(2026));
        assert_ne!(Year::new(0), Year::new(-1));
    }

    #[test]
    fn year_arithmetic_wraps_at_the_bounds() {
        let mut year = Year::new(i32::MAX);
        year.increment();
        assert_eq!(year, Year::new(i32::MIN));
        year.decrement();
        assert_eq!(year, Year::new(i32::MAX));
        assert_eq!(-Year::new(i32::MIN), Year::new(i32::MIN));
        assert_eq!(Year::new(0) + Years::new(i64::MAX), Year::new(-1));
        assert_eq!(Year::new(0) - Years::new(i64::MIN), Year::new(0));
    }

    #[test]
    fn month_is_a_weak_invariant() {
        let mut month = Month::new(13);
        assert!(!month.ok());
        month.decrement();
        assert!(month.ok());
        assert_eq!(u8::from(month), 12);

        // Out of range results are kept as is.
        let month = Month::new(11) + Months::new(3);
        assert_eq!(month.get(), 14);
        assert!(!month.ok());
        assert!(!Month::new(0).ok());
        assert_eq!(Month::new(1) - Months::new(2), Month::new(u8::MAX));
    }

    #[test]
    fn month_arithmetic() {
        assert_eq!(Month::new(10) + Months::new(2), Month::new(12));
        assert_eq!(Month::new(12) - Months::new(2), Month::new(10));
        assert_eq!(Month::new(12) - Month::new(11), Months::new(1));
        assert_eq!(Months::new(2) + Month::new(10), Month::new(12));

        let mut month = Month::new(10);
        month += Months::new(2);
        assert_eq!(month, Month::new(12));
        month -= Months::new(2);
        assert_eq!(month, Month::new(10));
        assert!(Month::new(1) < Month::new(12));
    }

    #[test]
    fn day_is_a_weak_invariant() {
        let mut day = Day::new(32);
        assert!(!day.ok());
        day.decrement();
        assert!(day.ok());
        assert_eq!(u8::from(day), 31);
        assert!(!(Day::new(31) + Days::new(1)).ok());
    }

    #[test]
    fn day_arithmetic() {
        let mut day = Day::new(30);
        day.increment();
        assert_eq!(day, Day::new(31));

        assert_eq!(Day::new(29) + Days::new(2), Day::new(31));
        assert_eq!(Day::new(31) - Days::new(2), Day::new(29));
        assert_eq!(Day::new(31) - Day::new(30), Days::new(1));
        assert_eq!(Days::new(2) + Day::new(29), Day::new(31));

        let mut day = Day::new(29);
        day += Days::new(2);
        assert_eq!(day, Day::new(31));
        day -= Days::new(2);
        assert_eq!(day, Day::new(29));
    }

    #[test]
    fn weekday_indices() {
        assert_eq!(Weekday::from_index(0), Weekday::Monday);
        assert_eq!(Weekday::from_index(3), Weekday::Thursday);
        assert_eq!(Weekday::from_index(6), Weekday::Sunday);
        assert_eq!(Weekday::from_index(7), Weekday::Monday);
        assert_eq!(Weekday::Sunday.index(), 6);
    }
}
