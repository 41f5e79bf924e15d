//! This module implements `Duration` along with its periods and conversions.
//!
//! A `Duration<P>` is a signed count of units, where the period `P` states
//! how many base seconds one unit represents. The linear periods (second,
//! minute, hour, day, week) are exact. The calendar periods (month, year) use
//! the nominal Gregorian averages of 30.436875 and 365.2425 days.
//!
//! Arithmetic between two periods happens in the finer of the two: the
//! coarser operand is truncated into the finer period first.
//!
//! ```rust
//! use lines_temporal::{Days, Minutes, Months, Seconds};
//!
//! assert_eq!(Minutes::new(1) + Seconds::new(2), Seconds::new(62));
//! assert_eq!(Days::new(16).round::<lines_temporal::period::Month>(), Months::new(1));
//! ```

use core::{
    cmp::Ordering,
    fmt,
    hash::Hash,
    marker::PhantomData,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use num_traits::ToPrimitive;

use crate::{
    error::ErrorMessage,
    rounding::{self, PeriodRounder, RoundingMode},
    TemporalError, TemporalResult,
};


/// The number of base seconds one unit of a `Duration` represents.
pub trait Period: fmt::Debug + Default + Clone + Copy + PartialEq + Eq + Hash + 'static {
    /// Base seconds per unit.
    const SECONDS: i64;
    /// The plural unit name used when debug printing.
    const NAME: &'static str;
}

/// A period that is at least as coarse as a day.
///
/// Only these durations can be applied to a `Date`.
pub trait DatePeriod: Period {}

/// Selects the finer period of `Self` and `Rhs`.
///
/// Mixed period arithmetic results in `Output`.
pub trait Finer<Rhs: Period>: Period {
    type Output: Period;
}

impl<P: Period> Finer<P> for P {
    type Output = P;
}

pub mod period {
    //! The period markers for the predefined durations.

    use super::{DatePeriod, Period};

    macro_rules! period {
        ($(#[$meta:meta])* $name:ident, $seconds:expr, $plural:literal) => {
            $(#[$meta])*
            #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
            pub struct $name;

            impl Period for $name {
                const SECONDS: i64 = $seconds;
                const NAME: &'static str = $plural;
            }
        };
    }

    period!(
        /// One second.
        Second, 1, "Seconds"
    );
    period!(
        /// Sixty seconds.
        Minute, 60, "Minutes"
    );
    period!(
        /// Sixty minutes.
        Hour, 3_600, "Hours"
    );
    period!(
        /// Twenty-four hours.
        Day, 86_400, "Days"
    );
    period!(
        /// Seven days.
        Week, 604_800, "Weeks"
    );
    period!(
        /// One twelfth of a nominal Gregorian year.
        Month, 2_629_746, "Months"
    );
    period!(
        /// 365.2425 days.
        Year, 31_556_952, "Years"
    );

    impl DatePeriod for Day {}
    impl DatePeriod for Week {}
    impl DatePeriod for Month {}
    impl DatePeriod for Year {}

    // Generates `Finer` for every pair, given a list ordered from finest to coarsest.
    macro_rules! impl_finer {
        () => {};
        ($fine:ident $(, $coarse:ident)*) => {
            $(
                impl super::Finer<$coarse> for $fine {
                    type Output = $fine;
                }
                impl super::Finer<$fine> for $coarse {
                    type Output = $fine;
                }
            )*
            impl_finer!($($coarse),*);
        };
    }

    impl_finer!(Second, Minute, Hour, Day, Week, Month, Year);
}

/// A duration in seconds.
pub type Seconds = Duration<period::Second>;
/// A duration in minutes.
pub type Minutes = Duration<period::Minute>;
/// A duration in hours.
pub type Hours = Duration<period::Hour>;
/// A duration in days.
pub type Days = Duration<period::Day>;
/// A duration in weeks.
pub type Weeks = Duration<period::Week>;
/// A duration in nominal months.
pub type Months = Duration<period::Month>;
/// A duration in nominal years.
pub type Years = Duration<period::Year>;

/// A signed count of units of the period `P`.
#[derive(Default, Clone, Copy, Hash)]
pub struct Duration<P: Period> {
    count: i64,
    period: PhantomData<P>,
}

// ==== Public API ====

impl<P: Period> Duration<P> {
    /// The zero length duration.
    pub const ZERO: Self = Self::new(0);

    /// Creates a new `Duration` of `count` units.
    #[inline]
    #[must_use]
    pub const fn new(count: i64) -> Self {
        Self {
            count,
            period: PhantomData,
        }
    }

    /// Returns the number of units.
    #[inline]
    #[must_use]
    pub const fn count(&self) -> i64 {
        self.count
    }

    /// Returns the base seconds per unit.
    #[inline]
    #[must_use]
    pub const fn period(&self) -> i64 {
        P::SECONDS
    }

    /// Returns whether this duration has a count of zero.
    #[inline]
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.count == 0
    }

    /// Adds one unit in place, saturating at `i64::MAX`.
    #[inline]
    pub fn increment(&mut self) {
        self.count = self.count.saturating_add(1);
    }

    /// Subtracts one unit in place, saturating at `i64::MIN`.
    #[inline]
    pub fn decrement(&mut self) {
        self.count = self.count.saturating_sub(1);
    }

    /// Converts into the period `To`, truncating toward zero.
    #[inline]
    #[must_use]
    pub fn cast<To: Period>(self) -> Duration<To> {
        self.round_with_mode(RoundingMode::Trunc)
    }

    /// Converts into the greatest multiple of `To` that does not exceed `self`.
    #[inline]
    #[must_use]
    pub fn floor<To: Period>(self) -> Duration<To> {
        self.round_with_mode(RoundingMode::Floor)
    }

    /// Converts into the least multiple of `To` that is not less than `self`.
    #[inline]
    #[must_use]
    pub fn ceil<To: Period>(self) -> Duration<To> {
        self.round_with_mode(RoundingMode::Ceil)
    }

    /// Converts into the nearest multiple of `To`, resolving ties toward an
    /// even count.
    #[inline]
    #[must_use]
    pub fn round<To: Period>(self) -> Duration<To> {
        self.round_with_mode(RoundingMode::HalfEven)
    }

    /// Converts into the period `To` with the provided `RoundingMode`.
    #[must_use]
    pub fn round_with_mode<To: Period>(self, mode: RoundingMode) -> Duration<To> {
        Duration::new(PeriodRounder::new(self.count, P::SECONDS, To::SECONDS).round(mode))
    }

    /// Divides by a scalar, truncating toward zero.
    ///
    /// Fails with an invalid argument error when `rhs` is zero.
    pub fn checked_div(self, rhs: i64) -> TemporalResult<Self> {
        if rhs == 0 {
            return Err(TemporalError::invalid_argument().with_enum(ErrorMessage::DivisionByZero));
        }
        Ok(Self::new(self.count.wrapping_div(rhs)))
    }

    /// In place variant of `checked_div`. `self` is untouched on failure.
    pub fn checked_div_assign(&mut self, rhs: i64) -> TemporalResult<()> {
        *self = self.checked_div(rhs)?;
        Ok(())
    }

    /// Returns the remainder of dividing by a scalar.
    ///
    /// Fails with an invalid argument error when `rhs` is zero.
    pub fn checked_rem(self, rhs: i64) -> TemporalResult<Self> {
        if rhs == 0 {
            return Err(TemporalError::invalid_argument().with_enum(ErrorMessage::ModuloByZero));
        }
        Ok(Self::new(self.count.wrapping_rem(rhs)))
    }

    /// In place variant of `checked_rem`. `self` is untouched on failure.
    pub fn checked_rem_assign(&mut self, rhs: i64) -> TemporalResult<()> {
        *self = self.checked_rem(rhs)?;
        Ok(())
    }

    /// Returns how many whole `rhs` fit into `self`, counted in the finer of
    /// the two periods.
    ///
    /// Fails with an invalid argument error when `rhs` is zero.
    pub fn checked_div_duration<Q: Period>(self, rhs: Duration<Q>) -> TemporalResult<i64>
    where
        P: Finer<Q>,
    {
        if rhs.is_zero() {
            return Err(TemporalError::invalid_argument().with_enum(ErrorMessage::DivisionByZero));
        }
        let (lhs, rhs) = rounding::in_finer(self.count, P::SECONDS, rhs.count, Q::SECONDS);
        Ok(lhs.wrapping_div(rhs))
    }

    /// Returns the remainder of dividing by `rhs` in the finer of the two
    /// periods.
    ///
    /// Fails with an invalid argument error when `rhs` is zero.
    pub fn checked_rem_duration<Q: Period>(
        self,
        rhs: Duration<Q>,
    ) -> TemporalResult<Duration<<P as Finer<Q>>::Output>>
    where
        P: Finer<Q>,
    {
        if rhs.is_zero() {
            return Err(TemporalError::invalid_argument().with_enum(ErrorMessage::ModuloByZero));
        }
        let (lhs, rhs) = rounding::in_finer(self.count, P::SECONDS, rhs.count, Q::SECONDS);
        Ok(Duration::new(lhs.wrapping_rem(rhs)))
    }

    /// In place variant of `checked_rem_duration` for a divisor that is at
    /// least as coarse as `self`.
    pub fn checked_rem_duration_assign<Q: Period>(
        &mut self,
        rhs: Duration<Q>,
    ) -> TemporalResult<()>
    where
        P: Finer<Q, Output = P>,
    {
        *self = self.checked_rem_duration(rhs)?;
        Ok(())
    }

    /// Creates a `Duration` from a `core::time::Duration`, truncating any
    /// fraction of a unit.
    ///
    /// Values that exceed the `i64` range saturate.
    #[must_use]
    pub fn from_core(duration: core::time::Duration) -> Self {
        let seconds = duration.as_secs().to_i64().unwrap_or(i64::MAX);
        Seconds::new(seconds).cast()
    }

    /// Converts into a `core::time::Duration`.
    ///
    /// Fails with an invalid argument error for negative durations.
    pub fn try_to_core(self) -> TemporalResult<core::time::Duration> {
        let seconds = self.cast::<period::Second>().count;
        seconds
            .to_u64()
            .map(core::time::Duration::from_secs)
            .ok_or(TemporalError::invalid_argument().with_enum(ErrorMessage::NegativeCoreDuration))
    }
}

// ==== Trait impls ====

impl<P: Period> fmt::Debug for Duration<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(P::NAME).field(&self.count).finish()
    }
}

impl<P: Period, Q: Period> PartialEq<Duration<Q>> for Duration<P> {
    fn eq(&self, other: &Duration<Q>) -> bool {
        rounding::compare(self.count, P::SECONDS, other.count, Q::SECONDS) == Ordering::Equal
    }
}

impl<P: Period> Eq for Duration<P> {}

impl<P: Period, Q: Period> PartialOrd<Duration<Q>> for Duration<P> {
    fn partial_cmp(&self, other: &Duration<Q>) -> Option<Ordering> {
        Some(rounding::compare(
            self.count,
            P::SECONDS,
            other.count,
            Q::SECONDS,
        ))
    }
}

impl<P: Period> Ord for Duration<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.count.cmp(&other.count)
    }
}

// Arithmetic saturates at the `i64` bounds, like rescaling does.
impl<P: Period> Neg for Duration<P> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(self.count.saturating_neg())
    }
}

impl<P: Finer<Q>, Q: Period> Add<Duration<Q>> for Duration<P> {
    type Output = Duration<<P as Finer<Q>>::Output>;

    fn add(self, rhs: Duration<Q>) -> Self::Output {
        let (lhs, rhs) = rounding::in_finer(self.count, P::SECONDS, rhs.count, Q::SECONDS);
        Duration::new(lhs.saturating_add(rhs))
    }
}

impl<P: Finer<Q>, Q: Period> Sub<Duration<Q>> for Duration<P> {
    type Output = Duration<<P as Finer<Q>>::Output>;

    fn sub(self, rhs: Duration<Q>) -> Self::Output {
        let (lhs, rhs) = rounding::in_finer(self.count, P::SECONDS, rhs.count, Q::SECONDS);
        Duration::new(lhs.saturating_sub(rhs))
    }
}

// Compound assignment keeps the receiver's period, so it only accepts a
// right hand side that is at least as coarse.
impl<P: Finer<Q, Output = P>, Q: Period> AddAssign<Duration<Q>> for Duration<P> {
    fn add_assign(&mut self, rhs: Duration<Q>) {
        *self = *self + rhs;
    }
}

impl<P: Finer<Q, Output = P>, Q: Period> SubAssign<Duration<Q>> for Duration<P> {
    fn sub_assign(&mut self, rhs: Duration<Q>) {
        *self = *self - rhs;
    }
}

impl<P: Period> Mul<i64> for Duration<P> {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self::Output {
        Self::new(self.count.saturating_mul(rhs))
    }
}

impl<P: Period> Mul<Duration<P>> for i64 {
    type Output = Duration<P>;

    fn mul(self, rhs: Duration<P>) -> Self::Output {
        rhs * self
    }
}

impl<P: Period> MulAssign<i64> for Duration<P> {
    fn mul_assign(&mut self, rhs: i64) {
        self.count = self.count.saturating_mul(rhs);
    }
}
