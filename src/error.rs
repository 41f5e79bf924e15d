//! This module implements `TemporalError`.

use alloc::borrow::Cow;
use core::fmt;

/// `TemporalError`'s error type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Error.
    #[default]
    Generic,
    /// An argument was outside of the operation's domain.
    InvalidArgument,
    /// Assert
    Assert,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => "Error",
            Self::InvalidArgument => "InvalidArgument",
            Self::Assert => "ImplementationError",
        }
        .fmt(f)
    }
}

/// The error type for `lines_temporal`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemporalError {
    kind: ErrorKind,
    msg: Cow<'static, str>,
}

impl TemporalError {
    #[inline]
    #[must_use]
    const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: Cow::Borrowed(""),
        }
    }

    /// Create a generic error
    #[inline]
    #[must_use]
    pub fn general<S>(msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self::new(ErrorKind::Generic).with_message(msg)
    }

    /// Create an invalid argument error.
    #[inline]
    #[must_use]
    pub const fn invalid_argument() -> Self {
        Self::new(ErrorKind::InvalidArgument)
    }

    /// Creates an assertion error
    #[inline]
    #[must_use]
    #[cfg_attr(debug_assertions, track_caller)]
    pub(crate) const fn assert() -> Self {
        #[cfg(not(debug_assertions))]
        {
            Self::new(ErrorKind::Assert)
        }
        #[cfg(debug_assertions)]
        Self {
            kind: ErrorKind::Assert,
            msg: Cow::Borrowed(core::panic::Location::caller().file()),
        }
    }

    /// Add a message to the error.
    #[inline]
    #[must_use]
    pub fn with_message<S>(mut self, msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        self.msg = msg.into();
        self
    }

    /// Add a message enum to the error.
    #[inline]
    #[must_use]
    pub(crate) fn with_enum(mut self, msg: ErrorMessage) -> Self {
        self.msg = Cow::Borrowed(msg.to_str());
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// Extracts the error message.
    #[inline]
    #[must_use]
    pub fn into_message(self) -> Cow<'static, str> {
        self.msg
    }
}

impl fmt::Display for TemporalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        let msg = self.msg.trim();
        if !msg.is_empty() {
            write!(f, ": {msg}")?;
        }

        Ok(())
    }
}

impl core::error::Error for TemporalError {}

/// The error message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorMessage {
    // Arithmetic
    DivisionByZero,
    ModuloByZero,
    NegativeCoreDuration,

    // Calendar
    InvalidCalendarDate,

    // Host
    SystemClockUnavailable,
    SystemTimeUnavailable,
}

impl ErrorMessage {
    pub(crate) const fn to_str(self) -> &'static str {
        match self {
            Self::DivisionByZero => "Duration division by zero.",
            Self::ModuloByZero => "Duration modulo by zero.",
            Self::NegativeCoreDuration => {
                "Negative durations cannot be represented as a core::time::Duration."
            }
            Self::InvalidCalendarDate => {
                "Year, month and day do not denote a valid Gregorian calendar date."
            }
            Self::SystemClockUnavailable => "system clock unavailable",
            Self::SystemTimeUnavailable => "Error fetching system time",
        }
    }
}
