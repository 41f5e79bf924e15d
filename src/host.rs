//! Trait definitions for accessing values from the host environment.
//!
//! The value types in this crate never read the environment. A clock is built
//! on top of these hooks instead, so any source of time can be injected.

use crate::{TemporalResult, TimePoint, TimeZone};

/// The `HostClock` trait defines an accessor to the host's clock.
pub trait HostClock {
    fn get_host_epoch_seconds(&self) -> TemporalResult<TimePoint>;
}

/// The `HostTimeZone` trait defines the host's time zone.
pub trait HostTimeZone {
    fn get_host_time_zone(&self) -> TemporalResult<TimeZone>;
}

/// `HostHooks` marks whether a trait implements the required host hooks with some
/// system methods.
pub trait HostHooks: HostClock + HostTimeZone {
    fn get_system_time_point(&self) -> TemporalResult<TimePoint> {
        self.get_host_epoch_seconds()
    }

    fn get_system_time_zone(&self) -> TemporalResult<TimeZone> {
        self.get_host_time_zone()
    }
}

// Implement empty providers

impl HostClock for () {
    fn get_host_epoch_seconds(&self) -> TemporalResult<TimePoint> {
        Ok(TimePoint::EPOCH)
    }
}

impl HostTimeZone for () {
    fn get_host_time_zone(&self) -> TemporalResult<TimeZone> {
        Ok(TimeZone::UTC)
    }
}

impl HostHooks for () {}
