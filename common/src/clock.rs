//! Wall-clock time as delivered by the host, and its split into BCD digits.

use crate::grid::DigitField;

/// Broken-down local time.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WallTime {
    /// Hour of day, 0-23.
    pub hour: u8,
    /// Minute, 0-59.
    pub minute: u8,
    /// Second, 0-59 (60 on a leap second).
    pub second: u8,
    /// Day of month, 1-31.
    pub day: u8,
    /// Month, 0-11 (0 = January).
    pub month0: u8,
    /// Day of week, 0-6 (0 = Sunday).
    pub weekday: u8,
}

impl WallTime {
    /// Time of day on an unspecified date (Sunday, January 1st).
    pub const fn hms(
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Self {
        Self {
            hour,
            minute,
            second,
            day: 1,
            month0: 0,
            weekday: 0,
        }
    }

    /// Replace the calendar date.
    pub const fn with_date(
        mut self,
        day: u8,
        month0: u8,
        weekday: u8,
    ) -> Self {
        self.day = day;
        self.month0 = month0;
        self.weekday = weekday;
        self
    }
}

/// User's clock display preference, as configured on the host.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockStyle {
    /// 1-12 hours.
    TwelveHour,
    /// 0-23 hours.
    #[default]
    TwentyFourHour,
}

impl ClockStyle {
    /// The other style.
    pub const fn toggle(self) -> Self {
        match self {
            Self::TwelveHour => Self::TwentyFourHour,
            Self::TwentyFourHour => Self::TwelveHour,
        }
    }
}

/// Hour as it should be displayed for `style`.
///
/// 24-hour style passes the hour through. 12-hour style reduces modulo 12 and shows 0 as 12.
pub const fn display_hour(
    hour: u8,
    style: ClockStyle,
) -> u8 {
    match style {
        ClockStyle::TwentyFourHour => hour,
        ClockStyle::TwelveHour => match hour % 12 {
            0 => 12,
            h => h,
        },
    }
}

/// The six decimal digits shown by the watchface.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeDigits {
    pub hour_tens: u8,
    pub hour_units: u8,
    pub minute_tens: u8,
    pub minute_units: u8,
    pub second_tens: u8,
    pub second_units: u8,
}

impl TimeDigits {
    /// Split `time` into digits, applying the clock style to the hour.
    pub const fn new(
        time: &WallTime,
        style: ClockStyle,
    ) -> Self {
        let hour = display_hour(time.hour, style);
        Self {
            hour_tens: hour / 10,
            hour_units: hour % 10,
            minute_tens: time.minute / 10,
            minute_units: time.minute % 10,
            second_tens: time.second / 10,
            second_units: time.second % 10,
        }
    }

    /// Digit belonging to `field`.
    pub const fn field(
        &self,
        field: DigitField,
    ) -> u8 {
        match field {
            DigitField::HourTens => self.hour_tens,
            DigitField::HourUnits => self.hour_units,
            DigitField::MinuteTens => self.minute_tens,
            DigitField::MinuteUnits => self.minute_units,
            DigitField::SecondTens => self.second_tens,
            DigitField::SecondUnits => self.second_units,
        }
    }
}
