//! Hijri (Islamic) calendar conversion
//!
//! This module implements conversion from Gregorian to Hijri dates using
//! the tabular Islamic calendar (30-year cycle of 10631 days) on top of an
//! astronomical Julian Day Number.
//!
//! ## Calibration
//!
//! The tabular calendar runs ahead of or behind the observed religious
//! calendar by a day or two depending on the region. A calibration offset
//! in days is added to the Julian Day Number before the cycle is resolved;
//! the default [`HIJRI_CALIBRATION_OFFSET`] is tuned to Iranian official
//! observance around 1445-1446 AH. It is a point calibration and may drift
//! over long spans.
//!
//! ## No inverse
//!
//! Only Gregorian → Hijri is provided. The calibration is a one-way
//! correction, so a Hijri → Gregorian function would silently disagree with
//! this one on some dates.
//!
//! ```compile_fail
//! let hijri = taqvim::GregorianDate::new(2025, 3, 31).unwrap().to_hijri();
//! let _ = hijri.to_gregorian();
//! ```

use crate::error::DateError;
use crate::options::HIJRI_CALIBRATION_OFFSET;

/// Julian Day Number of 1 Muharram 1 AH (astronomical epoch)
const EPOCH_ASTRO: i64 = 1_948_084;

/// Days in a 30-year Hijri cycle
const DAYS_PER_CYCLE: f64 = 10631.0;

/// Convert a Gregorian date to Hijri using the default calibration offset.
///
/// # Arguments
/// * `year` - Gregorian year
/// * `month` - Gregorian month (1-12)
/// * `day` - Gregorian day (1-31)
///
/// # Returns
/// A tuple of (hijri_year, hijri_month, hijri_day)
///
/// # Example
/// ```
/// use taqvim::hijri::gregorian_to_hijri;
///
/// // Eid al-Fitr 1446
/// assert_eq!(gregorian_to_hijri(2025, 3, 31), Ok((1446, 10, 1)));
/// ```
pub fn gregorian_to_hijri(
    year: i32,
    month: u32,
    day: u32,
) -> Result<(i32, u32, u32), DateError> {
    gregorian_to_hijri_with_offset(year, month, day, HIJRI_CALIBRATION_OFFSET)
}

/// Convert a Gregorian date to Hijri, adding `offset` days to the Julian
/// Day Number before resolving the lunar cycle.
pub fn gregorian_to_hijri_with_offset(
    year: i32,
    month: u32,
    day: u32,
    offset: i32,
) -> Result<(i32, u32, u32), DateError> {
    crate::jdn::validate(year, month, day)?;
    Ok(to_hijri(year, month, day, offset))
}

/// Gregorian to Hijri without validation.
pub(crate) fn to_hijri(year: i32, month: u32, day: u32, offset: i32) -> (i32, u32, u32) {
    jdn_to_hijri(astronomical_jdn(year, month, day) + offset as i64)
}

/// Julian Day Number by the astronomical formula.
///
/// Dates up to October 4, 1582 are taken as Julian calendar dates and later
/// ones as Gregorian, so for modern dates this agrees with
/// [`crate::jdn::gregorian_to_jdn`]. The date is not validated.
pub fn astronomical_jdn(year: i32, month: u32, day: u32) -> i64 {
    let mut y = year as i64;
    let mut m = month as i64;
    let d = day as i64;

    // March-based year so the leap day falls at the end
    if m < 3 {
        y -= 1;
        m += 12;
    }

    let a = y.div_euclid(100);
    let gregorian = y > 1582 || (y == 1582 && (m > 10 || (m == 10 && d > 4)));
    let b = if gregorian { 2 - a + a.div_euclid(4) } else { 0 };

    (365.25 * (y + 4716) as f64).floor() as i64
        + (30.6001 * (m + 1) as f64).floor() as i64
        + d
        + b
        - 1524
}

/// Convert a (calibrated) Julian Day Number to a Hijri date.
///
/// The month is clamped into 1-12. A computed month of 13 occurs on the
/// 355th day of tabular leap years (e.g. 2024-07-07, which becomes
/// 1445-12-30); a month of 0 has not been observed but is clamped to 1
/// all the same.
///
/// Not range checked. Years beyond `i32` saturate; inputs derived from
/// the supported Gregorian range stay far inside it.
pub fn jdn_to_hijri(jd: i64) -> (i32, u32, u32) {
    // Mean length of a Hijri year
    let iyear = DAYS_PER_CYCLE / 30.0;

    // Shift parameter for alignment
    let shift1 = 8.01 / 60.0;

    // Days since Hijri epoch
    let z = (jd - EPOCH_ASTRO) as f64;

    let cyc = (z / DAYS_PER_CYCLE).floor();
    let z = z - DAYS_PER_CYCLE * cyc;

    // Year within the cycle
    let j = ((z - shift1) / iyear).floor();
    let iy = 30.0 * cyc + j;

    // Remaining days within the year
    let z = z - (j * iyear + shift1).floor();

    let im = ((z + 28.5001) / 29.5).floor().clamp(1.0, 12.0);
    let id = z - (29.5001 * im - 29.0).floor();

    (iy as i32, im as u32, id as u32)
}
