//! Proleptic Gregorian calendar equations.
//!
//! Conversions between epoch days and a year/month/day triple follow Cassio
//! Neri and Lorenz Schneider's [Euclidean affine functions and their
//! application to calendar algorithms][eaf-calendar-algorithms].
//!
//! ## Shift window
//!
//! The algorithms operate on an unsigned computational rata die, so the
//! epoch is shifted forward by a whole number of 400 year cycles. A shift of
//! 5_368_710 cycles places the full `i32` year range in the non-negative
//! domain, which is enough for every `Year` a caller can construct.
//!
//! [eaf-calendar-algorithms]: https://onlinelibrary.wiley.com/doi/full/10.1002/spe.3172

pub(crate) const EPOCH_COMPUTATIONAL_RATA_DIE: i64 = 719_468;
pub(crate) const DAYS_IN_A_400Y_CYCLE: i64 = 146_097;

const SHIFT_CONSTANT: i64 = 5_368_710;
const RATA_DIE_SHIFT: i64 = SHIFT_CONSTANT * DAYS_IN_A_400Y_CYCLE + EPOCH_COMPUTATIONAL_RATA_DIE;

/// Epoch days of `i32::MAX-12-31`, the last day with an `i32` year.
pub(crate) const MAX_EPOCH_DAYS: i64 = IsoDate::new_unchecked(i32::MAX, 12, 31).to_epoch_days();
/// Epoch days of the first day of `i32::MIN + 1`, the earliest valid year.
pub(crate) const MIN_EPOCH_DAYS: i64 = IsoDate::new_unchecked(i32::MIN + 1, 1, 1).to_epoch_days();

/// A year, month and day record in the proleptic Gregorian calendar.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl IsoDate {
    /// Creates a new `IsoDate` without any validation.
    #[inline]
    pub(crate) const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Returns whether the triple names a day of the Gregorian calendar.
    #[inline]
    pub(crate) fn is_valid(self) -> bool {
        is_valid_date(self.year, self.month, self.day)
    }

    /// Breaks epoch days down into a year, month and day.
    ///
    /// Epoch days outside of `MIN_EPOCH_DAYS..=MAX_EPOCH_DAYS` are clamped
    /// to the nearest bound.
    pub(crate) fn from_epoch_days(epoch_days: i64) -> Self {
        let epoch_days = epoch_days.clamp(MIN_EPOCH_DAYS, MAX_EPOCH_DAYS);
        let rata_die = epoch_days + RATA_DIE_SHIFT;
        debug_assert!(rata_die >= 0);

        // Century
        let n_one = 4 * rata_die + 3;
        let century = n_one.div_euclid(DAYS_IN_A_400Y_CYCLE);
        // Year of century
        let n_two = n_one.rem_euclid(DAYS_IN_A_400Y_CYCLE) | 3;
        let year_of_century = n_two.div_euclid(1461);
        let day_of_year = (n_two - 1461 * year_of_century).div_euclid(4);
        // Month and day
        let n_three = 2141 * day_of_year + 197_913;
        let computational_month = n_three.div_euclid(65_536);
        let day = n_three.rem_euclid(65_536).div_euclid(2141) + 1;

        let j = i64::from(day_of_year >= 306);
        let year = 100 * century + year_of_century + j - 400 * SHIFT_CONSTANT;
        let month = computational_month - 12 * j;

        Self::new_unchecked(year as i32, month as u8, day as u8)
    }

    /// Returns the epoch days for this date.
    ///
    /// Month and day are not validated; out of range values roll over in the
    /// same way the equations do.
    pub(crate) const fn to_epoch_days(self) -> i64 {
        let j = (self.month <= 2) as i64;
        let computational_year = self.year as i64 + 400 * SHIFT_CONSTANT - j;
        let computational_month = self.month as i64 + 12 * j;
        let computational_day = self.day as i64 - 1;
        let century = computational_year.div_euclid(100);

        let y_star = (1461 * computational_year).div_euclid(4) - century + century.div_euclid(4);
        let m_star = (979 * computational_month - 2919).div_euclid(32);
        y_star + m_star + computational_day - RATA_DIE_SHIFT
    }
}

/// Returns whether `year` is a Gregorian leap year.
#[inline]
pub(crate) const fn is_leap_year(year: i32) -> bool {
    if year % 400 == 0 {
        return true;
    }
    if year % 100 == 0 {
        return false;
    }
    year % 4 == 0
}

/// Returns the number of days in `month` of `year`, or zero for months
/// outside of 1-12.
#[inline]
pub(crate) const fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Determines if the month and day are valid for the given year.
#[inline]
pub(crate) fn is_valid_date(year: i32, month: u8, day: u8) -> bool {
    if year == i32::MIN || !(1..=12).contains(&month) {
        return false;
    }
    (1..=days_in_month(year, month)).contains(&day)
}
