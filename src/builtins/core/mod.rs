//! The primary temporal components.
//!
//! Durations carry their unit in the type, and every calendar and clock type
//! is built on top of them.

pub mod calendar;
pub mod duration;
pub mod timezone;

pub(crate) mod date;
pub(crate) mod datetime;
pub(crate) mod instant;
pub(crate) mod time;
pub(crate) mod zoneddatetime;

pub(crate) mod now;

#[doc(inline)]
pub use now::{Clock, LocalClock, Now, NowBuilder, UtcClock, ZonedClock};

#[doc(inline)]
pub use calendar::{Day, Month, Weekday, Year};
#[doc(inline)]
pub use date::Date;
#[doc(inline)]
pub use datetime::DateTime;
#[doc(inline)]
pub use duration::{
    period, DatePeriod, Days, Duration, Finer, Hours, Minutes, Months, Period, Seconds, Weeks,
    Years,
};
#[doc(inline)]
pub use instant::TimePoint;
#[doc(inline)]
pub use time::Timestamp;
#[doc(inline)]
pub use timezone::TimeZone;
#[doc(inline)]
pub use zoneddatetime::ZonedTime;
