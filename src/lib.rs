//! The `lines_temporal` crate is a unit safe temporal arithmetic library.
//!
//! Durations carry their period in the type, so mixing units is checked at
//! compile time and always resolves to the finer of the two.
//!
//! ```rust
//! use lines_temporal::{Date, Day, Days, Minutes, Month, Seconds, Weekday, Year};
//!
//! // Mixed units resolve to the finer period.
//! let total = Minutes::new(1) + Seconds::new(2);
//! assert_eq!(total, Seconds::new(62));
//!
//! // Dates are validated on construction from fields.
//! let date = Date::try_new(Year::new(2028), Month::new(1), Day::new(1)).unwrap();
//! assert_eq!(date.weekday(), Weekday::Saturday);
//! assert_eq!((date - Days::new(1)).yyyy_mm_dd(), "2027-12-31");
//! assert!(Date::try_new(Year::new(2023), Month::new(2), Day::new(29)).is_err());
//! ```
//!
//! The current time is only ever read through a [`Clock`]. The `sys`
//! feature provides clocks backed by the host system, and any other source
//! can be injected with the [`host`] traits.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::too_many_lines,
    clippy::missing_errors_doc,
    clippy::option_if_let_else,

    // Field arithmetic wraps on purpose.
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
)]

extern crate alloc;
extern crate core;

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod host;

#[cfg(feature = "sys")]
pub(crate) mod sys;

mod builtins;
mod formatting;
mod iso;

#[doc(hidden)]
pub(crate) mod rounding;

#[doc(inline)]
pub use error::TemporalError;

/// The `lines_temporal` result type
pub type TemporalResult<T> = Result<T, TemporalError>;

pub use crate::builtins::{
    calendar::{Day, Month, Weekday, Year},
    duration::{period, DatePeriod, Finer, Period},
    Date, DateTime, Days, Duration, Hours, Minutes, Months, Seconds, TimePoint, TimeZone,
    Timestamp, Weeks, Years, ZonedTime,
};

pub use crate::rounding::RoundingMode;

pub mod now {
    //! Clocks and the host snapshots they read from.
    pub use crate::builtins::{Clock, LocalClock, Now, NowBuilder, UtcClock, ZonedClock};

    #[cfg(feature = "sys-local")]
    pub use crate::sys::LocalHostSystem;
    #[cfg(feature = "sys")]
    pub use crate::sys::{System, UtcHostSystem};
}

pub use crate::now::{Clock, ZonedClock};

#[doc(hidden)]
#[macro_export]
macro_rules! temporal_assert {
    ($condition:expr $(,)*) => {
        if !$condition {
            return Err(TemporalError::assert());
        }
    };
    ($condition:expr, $($args:tt)+) => {
        if !$condition {
            #[cfg(feature = "log")]
            log::error!($($args)+);
            return Err(TemporalError::assert());
        }
    };
}

// Relevant numeric constants
/// Seconds per day constant: 86,400
pub const SECONDS_PER_DAY: i64 = 24 * 60 * 60;
