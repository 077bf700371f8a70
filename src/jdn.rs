//! Gregorian calendar to Julian Day Number conversion.
//!
//! The Julian Day Number (JDN) is a continuous day count and serves as the
//! calendar-agnostic pivot for weekday computation and day arithmetic.
//! JDN 2451545 is January 1, 2000 (proleptic Gregorian).
//!
//! ## Supported range
//!
//! Dates from March 21, 622 (1 Farvardin of Jalali year 1) through
//! December 31, 9999, i.e. JDN [`MIN_JDN`] to [`MAX_JDN`]. Over this span
//! the Jalali and Hijri converters are exact and every result fits its
//! field types. Validating functions reject anything outside it with
//! [`DateError::InvalidDate`].

use crate::error::{Calendar, DateError};

/// Earliest supported Gregorian date, 1 Farvardin 1 AP
pub const MIN_DATE: (i32, u32, u32) = (622, 3, 21);
/// Latest supported Gregorian date
pub const MAX_DATE: (i32, u32, u32) = (9999, 12, 31);

/// Julian Day Number of [`MIN_DATE`]
pub const MIN_JDN: i64 = 1_948_320;
/// Julian Day Number of [`MAX_DATE`]
pub const MAX_JDN: i64 = 5_373_484;

/// Days in each month for non-leap years
const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns true if the given Gregorian year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Returns the number of days in a Gregorian month.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, DateError> {
    if !(1..=12).contains(&month) {
        return Err(DateError::InvalidMonth {
            calendar: Calendar::Gregorian,
            month,
        });
    }
    Ok(month_length(year, month))
}

/// Month length without range checking; `month` must be 1-12.
pub(crate) fn month_length(year: i32, month: u32) -> u32 {
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS_IN_MONTH[(month - 1) as usize]
    }
}

pub(crate) fn validate(year: i32, month: u32, day: u32) -> Result<(), DateError> {
    let in_range = (MIN_DATE..=MAX_DATE).contains(&(year, month, day));
    if !in_range || !(1..=12).contains(&month) || day < 1 || day > month_length(year, month) {
        return Err(DateError::InvalidDate {
            calendar: Calendar::Gregorian,
            year,
            month,
            day,
        });
    }
    Ok(())
}

/// Convert a Gregorian date to its Julian Day Number.
///
/// # Errors
/// Returns [`DateError::InvalidDate`] if the month is outside 1-12, the
/// day exceeds that month's length, or the date is outside
/// [`MIN_DATE`]..=[`MAX_DATE`].
pub fn gregorian_to_jdn(year: i32, month: u32, day: u32) -> Result<i64, DateError> {
    validate(year, month, day)?;
    Ok(to_jdn(year, month, day))
}

/// Fliegel & Van Flandern. Divisions truncate toward zero, which the
/// `(m - 14) / 12` term relies on.
pub(crate) fn to_jdn(year: i32, month: u32, day: u32) -> i64 {
    let (y, m, d) = (year as i64, month as i64, day as i64);
    (1461 * (y + 4800 + (m - 14) / 12)) / 4 + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
        - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
        + d
        - 32075
}

/// Convert a Julian Day Number back to a Gregorian `(year, month, day)`.
///
/// Not range checked. `jdn` must be non-negative, earlier day numbers
/// produce meaningless output; [`crate::GregorianDate::from_jdn`] is the
/// checked form.
pub fn jdn_to_gregorian(jdn: i64) -> (i32, u32, u32) {
    let f = jdn + 1401 + (((4 * jdn + 274277) / 146097) * 3) / 4 - 38;
    let e = 4 * f + 3;
    let g = (e % 1461) / 4;
    let h = 5 * g + 2;
    let day = (h % 153) / 5 + 1;
    let month = (h / 153 + 2) % 12 + 1;
    let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
    (year as i32, month as u32, day as u32)
}

/// Day of the week for a Julian Day Number: 0 = Sunday, ..., 6 = Saturday.
pub fn gregorian_weekday(jdn: i64) -> u32 {
    (jdn + 1).rem_euclid(7) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_leap_year() {
        assert!(!is_leap_year(1900)); // Not a leap year (divisible by 100 but not 400)
        assert!(is_leap_year(2000)); // Leap year (divisible by 400)
        assert!(is_leap_year(2024)); // Leap year (divisible by 4)
        assert!(!is_leap_year(2023)); // Not a leap year
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), Ok(29));
        assert_eq!(days_in_month(2023, 2), Ok(28));
        assert_eq!(days_in_month(2024, 1), Ok(31));
        assert_eq!(days_in_month(2024, 4), Ok(30));
        assert!(days_in_month(2024, 13).is_err());
    }

    #[test]
    fn test_known_jdn() {
        assert_eq!(gregorian_to_jdn(2000, 1, 1), Ok(2_451_545));
        assert_eq!(gregorian_to_jdn(1858, 11, 17), Ok(2_400_001));
        assert_eq!(jdn_to_gregorian(2_451_545), (2000, 1, 1));
    }

    #[test]
    fn test_rejects_invalid_dates() {
        assert!(gregorian_to_jdn(2023, 2, 29).is_err());
        assert!(gregorian_to_jdn(2024, 0, 1).is_err());
        assert!(gregorian_to_jdn(2024, 4, 31).is_err());
        assert!(gregorian_to_jdn(2024, 4, 0).is_err());
        assert!(gregorian_to_jdn(1900, 2, 29).is_err());
        assert!(gregorian_to_jdn(2000, 2, 29).is_ok());
    }

    #[test]
    fn test_supported_range() {
        assert_eq!(gregorian_to_jdn(622, 3, 21), Ok(MIN_JDN));
        assert_eq!(gregorian_to_jdn(9999, 12, 31), Ok(MAX_JDN));
        assert_eq!(jdn_to_gregorian(MIN_JDN), MIN_DATE);
        assert_eq!(jdn_to_gregorian(MAX_JDN), MAX_DATE);
        assert!(gregorian_to_jdn(622, 3, 20).is_err());
        assert!(gregorian_to_jdn(10000, 1, 1).is_err());
        assert!(gregorian_to_jdn(i32::MIN, 1, 1).is_err());
        assert!(gregorian_to_jdn(i32::MAX, 1, 1).is_err());
    }

    #[test]
    fn test_weekday() {
        // January 1, 2000 was a Saturday
        assert_eq!(gregorian_weekday(2_451_545), 6);
        // March 20, 2024 was a Wednesday
        assert_eq!(gregorian_weekday(to_jdn(2024, 3, 20)), 3);
    }

    #[test]
    fn test_roundtrip_1800_to_2200() {
        let start = to_jdn(1800, 1, 1);
        let end = to_jdn(2200, 12, 31);
        for jdn in start..=end {
            let (y, m, d) = jdn_to_gregorian(jdn);
            assert_eq!(to_jdn(y, m, d), jdn, "Roundtrip failed for {}-{}-{}", y, m, d);
        }
    }
}
