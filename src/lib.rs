//! taqvim - Gregorian, Jalali and Hijri calendar conversion
//!
//! This crate converts dates between the Gregorian civil calendar, the
//! Jalali (Persian solar) calendar and the tabular Hijri (Islamic lunar)
//! calendar, and classifies Jalali dates as Iranian official holidays.
//!
//! Everything is pure integer (and, for Hijri, floating point) arithmetic
//! over immutable tables, so all functions are safe to call from any thread.
//!
//! # Examples
//!
//! ```
//! use taqvim::{GregorianDate, JalaliDate};
//!
//! let nowruz = JalaliDate::new(1400, 1, 1).unwrap();
//! assert_eq!(nowruz.to_gregorian(), GregorianDate::new(2021, 3, 21).unwrap());
//!
//! let date: JalaliDate = "1404/01/11".parse().unwrap();
//! assert_eq!(taqvim::format_jalali(&date), "11 Farvardin 1404");
//! assert_eq!(taqvim::holiday_name_default(&date), Some("Eid al-Fitr"));
//! ```

pub mod calendar;
pub mod date;
pub mod error;
pub mod hijri;
pub mod holidays;
pub mod jalali;
pub mod jdn;
pub mod options;

mod locale;

pub use calendar::{days_in_month, format_hijri, format_jalali, month_view, DayCell, MonthView};
pub use date::{GregorianDate, HijriDate, JalaliDate, Weekday};
pub use error::{Calendar, DateError, ParseError};
pub use holidays::{holiday_name, is_holiday, Holiday, HolidayKind, HolidayRecord};
pub use locale::Locale;
pub use options::{CalendarOptions, HIJRI_CALIBRATION_OFFSET};

/// Returns true if `date` is a holiday, computing its weekday.
pub fn is_holiday_default(date: &JalaliDate) -> bool {
    holidays::is_holiday(date, date.weekday())
}

/// Holiday name for `date`, computing its weekday.
pub fn holiday_name_default(date: &JalaliDate) -> Option<&'static str> {
    holidays::holiday_name(date, date.weekday())
}

/// Parse a Gregorian `YYYY-MM-DD` string into a Jalali date.
///
/// Convenience wrapper around [`GregorianDate`]'s `FromStr`.
///
/// # Example
/// ```
/// assert_eq!(
///     taqvim::jalali_from_gregorian_str("2024-03-20").unwrap().to_string(),
///     "1403/01/01"
/// );
/// ```
pub fn jalali_from_gregorian_str(input: &str) -> Result<JalaliDate, ParseError> {
    Ok(input.parse::<GregorianDate>()?.to_jalali())
}
