//! `Writeable` renderers for the textual forms of dates and times of day.

use writeable::{impl_display_with_writeable, LengthHint, Writeable};

/// Writes a date as `{year}-{month:02}-{day:02}`.
///
/// The year is written without padding, with a leading `-` when negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FormattableDate(pub i32, pub u8, pub u8);

impl Writeable for FormattableDate {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        self.0.write_to(sink)?;
        sink.write_char('-')?;
        write_padded_u8(self.1, sink)?;
        sink.write_char('-')?;
        write_padded_u8(self.2, sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        self.0.writeable_length_hint() + padded_length(self.1) + padded_length(self.2) + 2
    }
}

/// Writes a time of day as `HH:MM:SS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FormattableTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl Writeable for FormattableTime {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        write_padded_u8(self.hour, sink)?;
        sink.write_char(':')?;
        write_padded_u8(self.minute, sink)?;
        sink.write_char(':')?;
        write_padded_u8(self.second, sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        padded_length(self.hour) + padded_length(self.minute) + padded_length(self.second) + 2
    }
}

impl_display_with_writeable!(FormattableDate);
impl_display_with_writeable!(FormattableTime);

fn write_padded_u8<W: core::fmt::Write + ?Sized>(num: u8, sink: &mut W) -> core::fmt::Result {
    if num < 10 {
        sink.write_char('0')?;
    }
    num.write_to(sink)
}

fn padded_length(num: u8) -> LengthHint {
    if num < 10 {
        return LengthHint::exact(2);
    }
    num.writeable_length_hint()
}
