//! Implementation of period rounding functionality
//!
//! Durations carry their period as a count of base seconds per unit. Moving a
//! count from one period to another is a rescale by `from / to`, which for the
//! calendar periods is not an integer ratio. All comparisons between two
//! periods happen in the finer of the two, after truncating the coarser count
//! into it.

use core::cmp::Ordering;

use num_traits::ToPrimitive;

/// The rounding applied when moving a duration into a coarser period.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round toward zero.
    Trunc,
    /// Round toward negative infinity.
    Floor,
    /// Round toward positive infinity.
    Ceil,
    /// Round to the nearest unit, resolving ties toward the even count.
    #[default]
    HalfEven,
}

/// Rescales `count` units of `from` seconds into units of `to` seconds,
/// truncating toward zero.
///
/// Results outside of the `i64` range saturate.
#[inline]
pub(crate) fn rescale(count: i64, from: i64, to: i64) -> i64 {
    if from == to {
        return count;
    }
    let wide = i128::from(count) * i128::from(from) / i128::from(to);
    wide.to_i64().unwrap_or(if wide < 0 { i64::MIN } else { i64::MAX })
}

/// Returns both counts expressed in the finer of the two periods.
#[inline]
pub(crate) fn in_finer(lhs: i64, lhs_period: i64, rhs: i64, rhs_period: i64) -> (i64, i64) {
    match lhs_period.cmp(&rhs_period) {
        Ordering::Greater => (rescale(lhs, lhs_period, rhs_period), rhs),
        Ordering::Less => (lhs, rescale(rhs, rhs_period, lhs_period)),
        Ordering::Equal => (lhs, rhs),
    }
}

/// Compares two counts of possibly different periods in the finer period.
#[inline]
pub(crate) fn compare(lhs: i64, lhs_period: i64, rhs: i64, rhs_period: i64) -> Ordering {
    let (lhs, rhs) = in_finer(lhs, lhs_period, rhs, rhs_period);
    lhs.cmp(&rhs)
}

/// Rounds a count of one period into another period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PeriodRounder {
    count: i64,
    from: i64,
    to: i64,
}

impl PeriodRounder {
    #[inline]
    pub(crate) const fn new(count: i64, from: i64, to: i64) -> Self {
        Self { count, from, to }
    }

    #[inline]
    pub(crate) fn round(&self, mode: RoundingMode) -> i64 {
        match mode {
            RoundingMode::Trunc => self.truncate(),
            RoundingMode::Floor => self.floor(),
            RoundingMode::Ceil => self.ceil(),
            RoundingMode::HalfEven => self.half_even(),
        }
    }

    fn truncate(&self) -> i64 {
        rescale(self.count, self.from, self.to)
    }

    fn floor(&self) -> i64 {
        let truncated = self.truncate();
        // Truncation moves negative values up, never past the true floor by more than one.
        if compare(truncated, self.to, self.count, self.from) == Ordering::Greater {
            return truncated.saturating_sub(1);
        }
        truncated
    }

    fn ceil(&self) -> i64 {
        let truncated = self.truncate();
        if compare(truncated, self.to, self.count, self.from) == Ordering::Less {
            return truncated.saturating_add(1);
        }
        truncated
    }

    fn half_even(&self) -> i64 {
        let lower = self.floor();
        let upper = lower.saturating_add(1);

        // d1 = x - r1 and d2 = r2 - x, both in the finer period.
        let (x, r1) = in_finer(self.count, self.from, lower, self.to);
        let (r2, x_again) = in_finer(upper, self.to, self.count, self.from);
        let d1 = x.saturating_sub(r1);
        let d2 = r2.saturating_sub(x_again);

        match d1.cmp(&d2) {
            Ordering::Less => lower,
            Ordering::Greater => upper,
            Ordering::Equal if lower & 1 == 0 => lower,
            Ordering::Equal => upper,
        }
    }
}
