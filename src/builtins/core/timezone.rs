//! This module implements `TimeZone`, a fixed offset from UTC.

use crate::{builtins::core::duration::Period, Duration, Hours, Seconds};

/// A fixed offset from UTC, in seconds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeZone {
    offset: Seconds,
}

impl TimeZone {
    /// The UTC time zone.
    pub const UTC: Self = Self {
        offset: Seconds::ZERO,
    };

    /// Creates a `TimeZone` from any offset duration.
    #[must_use]
    pub fn new<P: Period>(offset: Duration<P>) -> Self {
        Self {
            offset: offset.cast(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn from_seconds(offset: Seconds) -> Self {
        Self { offset }
    }

    #[inline]
    #[must_use]
    pub fn from_hours(offset: Hours) -> Self {
        Self::new(offset)
    }

    /// Returns the offset from UTC.
    #[inline]
    #[must_use]
    pub const fn offset(&self) -> Seconds {
        self.offset
    }
}
