//! Serial day-count date conversion
//!
//! Spreadsheet cells store dates as a floating-point day count relative to a
//! fixed epoch. In the default (1900) system day 0 is 1899-12-30; workbooks
//! saved in the 1904 system count from an epoch 1462 days later. The
//! fractional part of a serial is the time of day.

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};

use crate::error::{Error, Result};

/// Days between the 1900-system epoch (1899-12-30) and the 1904-system
/// epoch (1904-01-01).
pub const DATE_1904_OFFSET: i64 = 1462;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Day 0 of the default (1900) date system.
fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1899, 12, 30).unwrap()
}

fn out_of_range() -> Error {
    Error::Conversion {
        from: "number",
        to: "date-time",
    }
}

/// Convert a serial day count to a date-time.
///
/// `date_1904` selects the 1904 epoch (the serial is shifted by
/// [`DATE_1904_OFFSET`] days before conversion). Fails when the serial is
/// not finite or falls outside the representable calendar range.
pub fn datetime_from_serial(serial: f64, date_1904: bool) -> Result<NaiveDateTime> {
    if !serial.is_finite() {
        return Err(out_of_range());
    }

    let serial = if date_1904 {
        serial + DATE_1904_OFFSET as f64
    } else {
        serial
    };

    let days = serial.floor();
    let seconds = ((serial - days) * SECONDS_PER_DAY).round() as i64;

    let days = Duration::try_days(days as i64).ok_or_else(out_of_range)?;
    let date = epoch().checked_add_signed(days).ok_or_else(out_of_range)?;

    date.and_hms_opt(0, 0, 0)
        .unwrap()
        .checked_add_signed(Duration::seconds(seconds))
        .ok_or_else(out_of_range)
}

/// Convert a date-time to a serial day count in the default (1900) system.
pub fn serial_from_datetime(datetime: &NaiveDateTime) -> f64 {
    let days = (datetime.date() - epoch()).num_days() as f64;
    let seconds = datetime.time().num_seconds_from_midnight() as f64;
    days + seconds / SECONDS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd_hms(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_serial_to_date() {
        assert_eq!(
            datetime_from_serial(1.0, false).unwrap(),
            ymd_hms(1899, 12, 31, 0, 0, 0)
        );
        assert_eq!(
            datetime_from_serial(44_927.0, false).unwrap(),
            ymd_hms(2023, 1, 1, 0, 0, 0)
        );
        assert_eq!(
            datetime_from_serial(44_958.0, false).unwrap(),
            ymd_hms(2023, 2, 1, 0, 0, 0)
        );
    }

    #[test]
    fn test_serial_time_fraction() {
        assert_eq!(
            datetime_from_serial(44_958.5, false).unwrap(),
            ymd_hms(2023, 2, 1, 12, 0, 0)
        );
        assert_eq!(
            datetime_from_serial(44_958.75, false).unwrap(),
            ymd_hms(2023, 2, 1, 18, 0, 0)
        );
    }

    #[test]
    fn test_serial_1904_system() {
        // The 1904 system shifts the same serial exactly 1462 days forward.
        let base = datetime_from_serial(44_958.0, false).unwrap();
        let shifted = datetime_from_serial(44_958.0, true).unwrap();
        assert_eq!(shifted - base, Duration::days(DATE_1904_OFFSET));
        assert_eq!(shifted, ymd_hms(2027, 2, 2, 0, 0, 0));

        // Serial 0 in the 1904 system is the 1904 epoch itself.
        assert_eq!(
            datetime_from_serial(0.0, true).unwrap(),
            ymd_hms(1904, 1, 1, 0, 0, 0)
        );
    }

    #[test]
    fn test_serial_out_of_range() {
        assert!(datetime_from_serial(f64::NAN, false).is_err());
        assert!(datetime_from_serial(f64::INFINITY, false).is_err());
        assert!(datetime_from_serial(1e18, false).is_err());
    }

    #[test]
    fn test_datetime_to_serial() {
        assert_eq!(serial_from_datetime(&ymd_hms(1899, 12, 30, 0, 0, 0)), 0.0);
        assert_eq!(serial_from_datetime(&ymd_hms(2023, 2, 1, 0, 0, 0)), 44_958.0);
        assert_eq!(
            serial_from_datetime(&ymd_hms(2023, 2, 1, 18, 0, 0)),
            44_958.75
        );
    }

    #[test]
    fn test_round_trip() {
        let dt = ymd_hms(2014, 3, 8, 6, 30, 15);
        let serial = serial_from_datetime(&dt);
        assert_eq!(datetime_from_serial(serial, false).unwrap(), dt);
    }
}
