//! Status text formatting: date line, battery percentage and seconds digits.
//!
//! All text goes into fixed-capacity `heapless::String`s sized for the longest output,
//! so the buffers are reused every frame without allocation.

use heapless::String;

use crate::clock::WallTime;

/// Capacity of the date line. Longest output is `"Tues, Sep 30"`.
pub const DATE_TEXT_LEN: usize = 13;

/// Capacity of the battery text. Longest output is `"100%"`.
pub const CHARGE_TEXT_LEN: usize = 5;

/// Date line buffer.
pub type DateText = String<DATE_TEXT_LEN>;

/// Battery text buffer.
pub type ChargeText = String<CHARGE_TEXT_LEN>;

/// Single digit buffer.
pub type DigitText = String<1>;

/// Day-of-week names, Sunday first, with their trailing comma.
pub const DAYS_OF_WEEK: [&str; 7] = ["Sun,", "Mon,", "Tues,", "Wed,", "Thu,", "Fri,", "Sat,"];

/// Month abbreviations, January first.
pub const MONTHS_OF_YEAR: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

// =============================================================================
// Battery State
// =============================================================================

/// Battery report delivered by the host.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryChargeState {
    /// Charge level, 0-100.
    pub charge_percent: u8,
    /// Whether a charger is connected.
    pub is_plugged: bool,
    /// Whether the battery is currently charging.
    pub is_charging: bool,
}

impl BatteryChargeState {
    /// Discharging at `charge_percent`.
    pub const fn discharging(charge_percent: u8) -> Self {
        Self {
            charge_percent,
            is_plugged: false,
            is_charging: false,
        }
    }

    /// Plugged in and charging at `charge_percent`.
    pub const fn charging(charge_percent: u8) -> Self {
        Self {
            charge_percent,
            is_plugged: true,
            is_charging: true,
        }
    }

    /// Whether the watchface should report a full battery regardless of the percentage.
    ///
    /// A charger that is connected but no longer charging means the battery topped off.
    pub const fn is_full(&self) -> bool { self.charge_percent >= 100 || (self.is_plugged && !self.is_charging) }
}

impl Default for BatteryChargeState {
    fn default() -> Self { Self::discharging(100) }
}

// =============================================================================
// Formatting
// =============================================================================

#[inline]
const fn ascii_digit(value: u8) -> char { (b'0' + value % 10) as char }

/// Write `"<Day>, <Mon> <DD>"` into `out`, replacing its contents.
///
/// Day of month is always two digits. Out-of-range weekday or month indices wrap.
pub fn format_date(
    time: &WallTime,
    out: &mut DateText,
) {
    out.clear();
    out.push_str(DAYS_OF_WEEK[time.weekday as usize % DAYS_OF_WEEK.len()]).ok();
    out.push(' ').ok();
    out.push_str(MONTHS_OF_YEAR[time.month0 as usize % MONTHS_OF_YEAR.len()]).ok();
    out.push(' ').ok();
    out.push(ascii_digit(time.day / 10)).ok();
    out.push(ascii_digit(time.day)).ok();
}

/// Write the battery percentage into `out`, replacing its contents.
///
/// - Full (`>= 100`, or plugged but not charging): `"100%"`
/// - Empty (`0`): `"0%"`
/// - Otherwise two digits: `"45%"`, `"05%"`
pub fn format_battery(
    state: &BatteryChargeState,
    out: &mut ChargeText,
) {
    out.clear();
    if state.is_full() {
        out.push_str("100").ok();
    } else if state.charge_percent == 0 {
        out.push('0').ok();
    } else {
        out.push(ascii_digit(state.charge_percent / 10)).ok();
        out.push(ascii_digit(state.charge_percent)).ok();
    }
    out.push('%').ok();
}

/// Write a single decimal digit into `out`, replacing its contents.
pub fn format_digit(
    digit: u8,
    out: &mut DigitText,
) {
    out.clear();
    out.push(ascii_digit(digit)).ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn battery(state: BatteryChargeState) -> ChargeText {
        let mut out = ChargeText::new();
        format_battery(&state, &mut out);
        out
    }

    fn date(time: WallTime) -> DateText {
        let mut out = DateText::new();
        format_date(&time, &mut out);
        out
    }

    #[test]
    fn test_battery_plain_values() {
        assert_eq!(battery(BatteryChargeState::discharging(100)).as_str(), "100%");
        assert_eq!(battery(BatteryChargeState::discharging(0)).as_str(), "0%");
        assert_eq!(battery(BatteryChargeState::discharging(45)).as_str(), "45%");
    }

    #[test]
    fn test_battery_single_digit_is_zero_padded() {
        assert_eq!(battery(BatteryChargeState::discharging(5)).as_str(), "05%");
    }

    #[test]
    fn test_battery_plugged_not_charging_reads_full() {
        let state = BatteryChargeState {
            charge_percent: 87,
            is_plugged: true,
            is_charging: false,
        };
        assert_eq!(battery(state).as_str(), "100%");
    }

    #[test]
    fn test_battery_charging_shows_percent() {
        assert_eq!(battery(BatteryChargeState::charging(87)).as_str(), "87%");
    }

    #[test]
    fn test_battery_over_range_clamps() {
        assert_eq!(battery(BatteryChargeState::discharging(150)).as_str(), "100%");
    }

    #[test]
    fn test_battery_buffer_is_replaced() {
        let mut out = ChargeText::new();
        format_battery(&BatteryChargeState::discharging(100), &mut out);
        format_battery(&BatteryChargeState::discharging(0), &mut out);
        assert_eq!(out.as_str(), "0%");
    }

    #[test]
    fn test_date_format() {
        let time = WallTime::hms(9, 0, 0).with_date(5, 0, 0);
        assert_eq!(date(time).as_str(), "Sun, Jan 05");
    }

    #[test]
    fn test_date_longest_fits() {
        let time = WallTime::hms(9, 0, 0).with_date(30, 8, 2);
        let text = date(time);
        assert_eq!(text.as_str(), "Tues, Sep 30");
        assert!(text.len() < DATE_TEXT_LEN);
    }

    #[test]
    fn test_date_every_weekday_and_month_fits() {
        for weekday in 0..7 {
            for month0 in 0..12 {
                let text = date(WallTime::default().with_date(31, month0, weekday));
                assert!(text.ends_with(" 31"), "{text}");
            }
        }
    }

    #[test]
    fn test_format_digit() {
        let mut out = DigitText::new();
        format_digit(7, &mut out);
        assert_eq!(out.as_str(), "7");
        format_digit(0, &mut out);
        assert_eq!(out.as_str(), "0");
    }
}
