//! This module implements `ZonedTime`, a `TimePoint` paired with a `TimeZone`.

use crate::builtins::core::{instant::TimePoint, timezone::TimeZone};

/// A system `TimePoint` observed from a `TimeZone`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZonedTime {
    point: TimePoint,
    zone: TimeZone,
}

impl ZonedTime {
    #[inline]
    #[must_use]
    pub const fn new(point: TimePoint, zone: TimeZone) -> Self {
        Self { point, zone }
    }

    /// Returns the system time shifted by the zone's offset.
    #[inline]
    #[must_use]
    pub fn get_local_time(&self) -> TimePoint {
        self.point + self.zone.offset()
    }

    /// Returns the system time unchanged.
    #[inline]
    #[must_use]
    pub const fn get_sys_time(&self) -> TimePoint {
        self.point
    }

    #[inline]
    #[must_use]
    pub const fn time_zone(&self) -> TimeZone {
        self.zone
    }
}
