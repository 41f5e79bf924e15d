use crate::builtins::core::now::UtcClock;
use crate::error::ErrorMessage;
use crate::host::HostClock;
use crate::host::HostHooks;
use crate::host::HostTimeZone;
use crate::Seconds;
use crate::TemporalError;
use crate::TemporalResult;
use crate::TimePoint;
use crate::TimeZone;

#[cfg(feature = "sys-local")]
use crate::builtins::core::now::LocalClock;

use web_time::{SystemTime, UNIX_EPOCH};

/// The entry point for clocks backed by the host system.
pub struct System;

impl System {
    /// Get a [`UtcClock`] backed by the [`UtcHostSystem`].
    pub fn utc_clock() -> UtcClock<UtcHostSystem> {
        UtcClock::new(UtcHostSystem)
    }

    /// Get a [`LocalClock`] backed by the [`LocalHostSystem`], which reads
    /// the host's current UTC offset.
    #[cfg(feature = "sys-local")]
    pub fn local_clock() -> LocalClock<LocalHostSystem> {
        LocalClock::new(LocalHostSystem)
    }
}

/// A UTC host system implementation that will return the current time
/// with a UTC time zone.
///
/// This implementation is backed by [`std::time::SystemTime`].
#[derive(Debug, Default, Clone, Copy)]
pub struct UtcHostSystem;

impl HostHooks for UtcHostSystem {}

impl HostClock for UtcHostSystem {
    fn get_host_epoch_seconds(&self) -> TemporalResult<TimePoint> {
        get_system_seconds()
    }
}

impl HostTimeZone for UtcHostSystem {
    fn get_host_time_zone(&self) -> TemporalResult<TimeZone> {
        Ok(TimeZone::UTC)
    }
}

/// A local host system implementation that will return the current time
/// with the system's current UTC offset.
///
/// This implementation is backed by [`std::time::SystemTime`] and [`chrono::Local`].
#[cfg(feature = "sys-local")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalHostSystem;

#[cfg(feature = "sys-local")]
impl HostHooks for LocalHostSystem {}

#[cfg(feature = "sys-local")]
impl HostClock for LocalHostSystem {
    fn get_host_epoch_seconds(&self) -> TemporalResult<TimePoint> {
        get_system_seconds()
    }
}

#[cfg(feature = "sys-local")]
impl HostTimeZone for LocalHostSystem {
    fn get_host_time_zone(&self) -> TemporalResult<TimeZone> {
        get_system_timezone()
    }
}

/// Returns the difference between the host's local and UTC wall clocks.
#[cfg(feature = "sys-local")]
#[inline]
pub(crate) fn get_system_timezone() -> TemporalResult<TimeZone> {
    let now = chrono::Local::now();
    let offset = (now.naive_local() - now.naive_utc()).num_seconds();
    crate::temporal_assert!(
        offset.abs() < crate::SECONDS_PER_DAY,
        "Host UTC offset out of range: {offset}"
    );
    Ok(TimeZone::from_seconds(Seconds::new(offset)))
}

/// Returns the system time in seconds.
pub(crate) fn get_system_seconds() -> TemporalResult<TimePoint> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| {
            #[cfg(feature = "log")]
            log::error!("System time is before the Unix epoch");
            TemporalError::general(ErrorMessage::SystemTimeUnavailable.to_str())
        })
        .map(|d| TimePoint::new(Seconds::from_core(d)))
}
