//! The clock component
//!
//! A [`Clock`] reads the current `TimePoint` from a set of host hooks. The
//! value types never call a clock themselves, so tests can substitute a fixed
//! snapshot built with [`NowBuilder`].

use crate::{
    error::ErrorMessage,
    host::{HostClock, HostHooks, HostTimeZone},
    TemporalError, TemporalResult,
};

use super::{
    date::Date, datetime::DateTime, instant::TimePoint, time::Timestamp, timezone::TimeZone,
    zoneddatetime::ZonedTime,
};

/// A source of the current time.
pub trait Clock {
    /// Returns the current `TimePoint`.
    fn now(&self) -> TemporalResult<TimePoint>;

    /// Returns the time elapsed since the most recent midnight.
    fn since_midnight(&self) -> TemporalResult<Timestamp> {
        Ok(DateTime::new(self.now()?).time())
    }

    /// Returns the current date.
    fn today(&self) -> TemporalResult<Date> {
        Ok(DateTime::new(self.now()?).date())
    }
}

/// A clock that reports local time along with the zone it is observed from.
pub trait ZonedClock: Clock {
    fn current_zone(&self) -> TemporalResult<TimeZone>;
}

/// A clock reporting UTC time.
#[derive(Debug, Default, Clone, Copy)]
pub struct UtcClock<H> {
    host: H,
}

impl<H: HostClock> UtcClock<H> {
    pub const fn new(host: H) -> Self {
        Self { host }
    }
}

impl<H: HostClock> Clock for UtcClock<H> {
    fn now(&self) -> TemporalResult<TimePoint> {
        self.host.get_host_epoch_seconds()
    }
}

/// A clock reporting the host's local time.
///
/// Local time is the host's UTC time shifted by the host's zone offset.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalClock<H> {
    host: H,
}

impl<H: HostHooks> LocalClock<H> {
    pub const fn new(host: H) -> Self {
        Self { host }
    }
}

impl<H: HostHooks> Clock for LocalClock<H> {
    fn now(&self) -> TemporalResult<TimePoint> {
        // The zone is resolved before the clock is read.
        let zone = self.host.get_system_time_zone()?;
        let point = self.host.get_system_time_point()?;
        Ok(ZonedTime::new(point, zone).get_local_time())
    }
}

impl<H: HostHooks> ZonedClock for LocalClock<H> {
    fn current_zone(&self) -> TemporalResult<TimeZone> {
        self.host.get_system_time_zone()
    }
}

#[derive(Debug, Default)]
pub struct NowBuilder {
    clock: Option<TimePoint>,
    zone: Option<TimeZone>,
}

impl NowBuilder {
    pub fn with_system_time_point(mut self, point: TimePoint) -> Self {
        self.clock = Some(point);
        self
    }

    pub fn with_system_zone(mut self, zone: TimeZone) -> Self {
        self.zone = Some(zone);
        self
    }

    pub fn build(self) -> Now {
        Now {
            clock: self.clock,
            zone: self.zone.unwrap_or_default(),
        }
    }
}

/// A snapshot of host values, usable as the host of any clock.
#[derive(Debug, Clone, Copy)]
pub struct Now {
    clock: Option<TimePoint>,
    zone: TimeZone,
}

impl HostClock for Now {
    fn get_host_epoch_seconds(&self) -> TemporalResult<TimePoint> {
        self.clock
            .ok_or(TemporalError::general(ErrorMessage::SystemClockUnavailable.to_str()))
    }
}

impl HostTimeZone for Now {
    fn get_host_time_zone(&self) -> TemporalResult<TimeZone> {
        Ok(self.zone)
    }
}

impl HostHooks for Now {}

#[cfg(test)]
mod tests {
    use super::{Clock, LocalClock, NowBuilder, UtcClock, ZonedClock};
    use crate::{
        error::ErrorKind, Date, Day, Hours, Minutes, Month, Seconds, TimePoint, TimeZone, Timestamp,
        Year,
    };

    // 2028-01-01T23:30:00Z
    const POINT: i64 = 1_830_382_200;

    fn snapshot(zone: TimeZone) -> super::Now {
        NowBuilder::default()
            .with_system_time_point(TimePoint::new(Seconds::new(POINT)))
            .with_system_zone(zone)
            .build()
    }

    #[test]
    fn utc_clock_reads_host() {
        let clock = UtcClock::new(snapshot(TimeZone::from_hours(Hours::new(2))));
        assert_eq!(clock.now().unwrap(), TimePoint::new(Seconds::new(POINT)));
        assert_eq!(
            clock.today().unwrap(),
            Date::try_new(Year::new(2028), Month::new(1), Day::new(1)).unwrap()
        );
        assert_eq!(
            clock.since_midnight().unwrap(),
            Timestamp::from_hms(Hours::new(23), Minutes::new(30), Seconds::new(0))
        );
    }

    #[test]
    fn local_clock_applies_zone() {
        let zone = TimeZone::from_hours(Hours::new(2));
        let clock = LocalClock::new(snapshot(zone));
        assert_eq!(clock.current_zone().unwrap(), zone);
        assert_eq!(
            clock.now().unwrap(),
            TimePoint::new(Seconds::new(POINT)) + Hours::new(2)
        );
        assert_eq!(clock.today().unwrap().yyyy_mm_dd(), "2028-01-02");
        assert_eq!(clock.since_midnight().unwrap().hh_mm_ss(), "01:30:00");
    }

    #[test]
    fn missing_clock_is_an_error() {
        let now = NowBuilder::default().build();
        let err = UtcClock::new(now).now().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Generic);
        assert_eq!(err.message(), "system clock unavailable");
        assert_eq!(LocalClock::new(now).current_zone().unwrap(), TimeZone::UTC);
    }

    #[test]
    fn empty_host_is_the_epoch() {
        let clock = LocalClock::new(());
        assert_eq!(clock.now().unwrap(), TimePoint::EPOCH);
        assert_eq!(clock.today().unwrap().yyyy_mm_dd(), "1970-01-01");
        assert_eq!(clock.current_zone().unwrap(), TimeZone::UTC);
    }
}
