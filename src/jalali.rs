//! Gregorian ↔ Jalali (Persian solar) calendar conversion
//!
//! The conversion counts days from a fixed epoch directly instead of going
//! through the Julian Day Number. Elapsed days are partitioned into 33-year
//! cycles (12053 days, 8 leap years each), 4-year cycles (1461 days) and
//! single years. Within a Jalali year the first six months have 31 days,
//! so day 186 of the year is 1 Mehr.
//!
//! Both directions use truncating integer division, which is exact only
//! for non-negative day counts. Dates are therefore limited to
//! [`MIN_DATE`] (1 Farvardin 1, = March 21, 622) through [`MAX_DATE`]
//! (= December 31, 9999), the image of the Gregorian range in
//! [`crate::jdn`]. Validating functions reject anything outside it.
//!
//! ## Leap years
//!
//! [`is_leap_year`] reports the 33-year arithmetic cycle that this
//! converter counts with, so it decides whether 30 Esfand exists for
//! conversion purposes. The month-length utility in
//! [`crate::calendar::days_in_month`] uses a different, 128-year
//! approximation; the two disagree in a handful of years (1403/1404,
//! 1436/1437 and 1469/1470 in the current era).

use crate::error::{Calendar, DateError};

/// Cumulative days before each Gregorian month in a common year
const GREGORIAN_DAYS_BEFORE_MONTH: [i64; 12] =
    [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Days in a 33-year Jalali cycle
const DAYS_PER_33_YEARS: i64 = 12053;
/// Days in a 4-year cycle (one leap year)
const DAYS_PER_4_YEARS: i64 = 1461;
/// Days in 400 Gregorian years
const DAYS_PER_400_YEARS: i64 = 146097;
/// Days in a Gregorian century without a 400-year leap day
const DAYS_PER_100_YEARS: i64 = 36524;

/// Earliest supported Jalali date
pub const MIN_DATE: (i32, u32, u32) = (1, 1, 1);
/// Latest supported Jalali date, the day of [`crate::jdn::MAX_DATE`]
pub const MAX_DATE: (i32, u32, u32) = (9378, 10, 10);

/// Offset from Jalali year numbers to the converter's internal year count
const JALALI_YEAR_SHIFT: i32 = 1595;

/// Convert a Gregorian date to a Jalali date.
///
/// # Arguments
/// * `year` - Gregorian year
/// * `month` - Gregorian month (1-12)
/// * `day` - Gregorian day (1-31)
///
/// # Returns
/// A tuple of (jalali_year, jalali_month, jalali_day)
///
/// # Errors
/// Returns [`DateError::InvalidDate`] if the Gregorian date does not exist.
pub fn gregorian_to_jalali(
    year: i32,
    month: u32,
    day: u32,
) -> Result<(i32, u32, u32), DateError> {
    crate::jdn::validate(year, month, day)?;
    Ok(to_jalali(year, month, day))
}

/// Convert a Jalali date to a Gregorian date.
///
/// # Returns
/// A tuple of (gregorian_year, gregorian_month, gregorian_day)
///
/// # Errors
/// Returns [`DateError::InvalidDate`] if the month is outside 1-12, the
/// day exceeds [`month_length`], or the date is outside
/// [`MIN_DATE`]..=[`MAX_DATE`].
pub fn jalali_to_gregorian(
    year: i32,
    month: u32,
    day: u32,
) -> Result<(i32, u32, u32), DateError> {
    validate(year, month, day)?;
    Ok(to_gregorian(year, month, day))
}

/// Returns true if Esfand has 30 days in `year` under the converter's
/// 33-year cycle.
pub fn is_leap_year(year: i32) -> bool {
    let r = (year as i64 + JALALI_YEAR_SHIFT as i64).rem_euclid(33);
    r % 4 == 0 && r != 32
}

/// Returns the number of days in a Jalali month as the converter counts
/// them.
pub fn month_length(year: i32, month: u32) -> Result<u32, DateError> {
    if !(1..=12).contains(&month) {
        return Err(DateError::InvalidMonth {
            calendar: Calendar::Jalali,
            month,
        });
    }
    Ok(length_of(year, month))
}

fn length_of(year: i32, month: u32) -> u32 {
    match month {
        1..=6 => 31,
        7..=11 => 30,
        _ if is_leap_year(year) => 30,
        _ => 29,
    }
}

pub(crate) fn validate(year: i32, month: u32, day: u32) -> Result<(), DateError> {
    let in_range = (MIN_DATE..=MAX_DATE).contains(&(year, month, day));
    if !in_range || !(1..=12).contains(&month) || day < 1 || day > length_of(year, month) {
        return Err(DateError::InvalidDate {
            calendar: Calendar::Jalali,
            year,
            month,
            day,
        });
    }
    Ok(())
}

/// Gregorian to Jalali without validation.
pub(crate) fn to_jalali(year: i32, month: u32, day: u32) -> (i32, u32, u32) {
    let gy = year as i64;
    // Leap days are counted up to the end of February of `gy2 - 1`
    let gy2 = if month > 2 { gy + 1 } else { gy };

    let mut days = 355_666 + 365 * gy + (gy2 + 3) / 4 - (gy2 + 99) / 100
        + (gy2 + 399) / 400
        + day as i64
        + GREGORIAN_DAYS_BEFORE_MONTH[(month - 1) as usize];

    let mut jy = -(JALALI_YEAR_SHIFT as i64) + 33 * (days / DAYS_PER_33_YEARS);
    days %= DAYS_PER_33_YEARS;

    jy += 4 * (days / DAYS_PER_4_YEARS);
    days %= DAYS_PER_4_YEARS;

    // The leap year sits at the start of each 4-year group
    if days > 365 {
        jy += (days - 1) / 365;
        days = (days - 1) % 365;
    }

    let (jm, jd) = if days < 186 {
        (1 + days / 31, 1 + days % 31)
    } else {
        (7 + (days - 186) / 30, 1 + (days - 186) % 30)
    };

    (jy as i32, jm as u32, jd as u32)
}

/// Jalali to Gregorian without validation.
pub(crate) fn to_gregorian(year: i32, month: u32, day: u32) -> (i32, u32, u32) {
    let jy = (year + JALALI_YEAR_SHIFT) as i64;
    let jm = month as i64;

    let day_of_year = if jm < 7 {
        (jm - 1) * 31
    } else {
        (jm - 7) * 30 + 186
    };

    let mut days = -355_668 + 365 * jy + (jy / 33) * 8 + ((jy % 33) + 3) / 4
        + day as i64
        + day_of_year;

    let mut gy = 400 * (days / DAYS_PER_400_YEARS);
    days %= DAYS_PER_400_YEARS;

    if days > DAYS_PER_100_YEARS {
        days -= 1;
        gy += 100 * (days / DAYS_PER_100_YEARS);
        days %= DAYS_PER_100_YEARS;
        if days >= 365 {
            days += 1;
        }
    }

    gy += 4 * (days / DAYS_PER_4_YEARS);
    days %= DAYS_PER_4_YEARS;

    if days > 365 {
        gy += (days - 1) / 365;
        days = (days - 1) % 365;
    }

    let gy = gy as i32;
    let mut gd = (days + 1) as u32;
    let mut gm = 1u32;
    while gm < 12 && gd > crate::jdn::month_length(gy, gm) {
        gd -= crate::jdn::month_length(gy, gm);
        gm += 1;
    }

    (gy, gm, gd)
}
