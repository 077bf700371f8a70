//! Holiday classification for Jalali dates.
//!
//! A day is off when it is a Friday, a fixed solar holiday, or a fixed
//! lunar holiday once converted to Hijri. When several apply, the label
//! shown is the solar name first, then the lunar name, then "Friday".

mod tables;

pub use tables::{lunar_holiday, solar_holiday, HolidayRecord, LUNAR_HOLIDAYS, SOLAR_HOLIDAYS};

use crate::date::{JalaliDate, Weekday};
use crate::error::DateError;
use crate::options::{CalendarOptions, HIJRI_CALIBRATION_OFFSET};

/// Label used when the only reason for a holiday is the weekly rest day.
pub const FRIDAY: &str = "Friday";

/// Which rule made a day a holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HolidayKind {
    /// Fixed date in the Jalali calendar
    Solar,
    /// Fixed date in the Hijri calendar
    Lunar,
    /// Friday
    Weekly,
}

/// A resolved holiday: its winning rule and display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Holiday {
    pub kind: HolidayKind,
    pub name: &'static str,
}

/// Returns true if `date` is a holiday.
///
/// `weekday` is supplied by the caller (0 = Saturday convention); use
/// [`JalaliDate::weekday`] to compute it.
pub fn is_holiday(date: &JalaliDate, weekday: Weekday) -> bool {
    is_holiday_at(date, weekday, HIJRI_CALIBRATION_OFFSET)
}

/// [`is_holiday`] with an explicit Hijri calibration offset.
pub fn is_holiday_with(date: &JalaliDate, weekday: Weekday, opts: &CalendarOptions) -> bool {
    is_holiday_at(date, weekday, opts.hijri_offset)
}

/// Display name of the holiday on `date`, or `None` for a working day.
///
/// # Example
/// ```
/// use taqvim::holidays::holiday_name;
/// use taqvim::{JalaliDate, Weekday};
///
/// // Nowruz 1404 fell on a Friday; the solar name wins
/// let nowruz = JalaliDate::new(1404, 1, 1).unwrap();
/// assert_eq!(holiday_name(&nowruz, Weekday::Friday), Some("Nowruz"));
/// ```
pub fn holiday_name(date: &JalaliDate, weekday: Weekday) -> Option<&'static str> {
    holiday(date, weekday).map(|h| h.name)
}

/// [`holiday_name`] with an explicit Hijri calibration offset.
pub fn holiday_name_with(
    date: &JalaliDate,
    weekday: Weekday,
    opts: &CalendarOptions,
) -> Option<&'static str> {
    holiday_with(date, weekday, opts).map(|h| h.name)
}

/// The holiday on `date` together with the rule that named it.
pub fn holiday(date: &JalaliDate, weekday: Weekday) -> Option<Holiday> {
    holiday_at(date, weekday, HIJRI_CALIBRATION_OFFSET)
}

/// [`holiday`] with an explicit Hijri calibration offset.
pub fn holiday_with(
    date: &JalaliDate,
    weekday: Weekday,
    opts: &CalendarOptions,
) -> Option<Holiday> {
    holiday_at(date, weekday, opts.hijri_offset)
}

/// [`is_holiday`] over raw integers.
///
/// # Errors
/// Returns an error if the Jalali date or the weekday index is invalid.
pub fn is_holiday_ymd(year: i32, month: u32, day: u32, weekday: u32) -> Result<bool, DateError> {
    let date = JalaliDate::new(year, month, day)?;
    Ok(is_holiday(&date, Weekday::from_index(weekday)?))
}

/// [`holiday_name`] over raw integers.
///
/// # Errors
/// Returns an error if the Jalali date or the weekday index is invalid.
pub fn holiday_name_ymd(
    year: i32,
    month: u32,
    day: u32,
    weekday: u32,
) -> Result<Option<&'static str>, DateError> {
    let date = JalaliDate::new(year, month, day)?;
    Ok(holiday_name(&date, Weekday::from_index(weekday)?))
}

/// Every holiday in Jalali month `month` of `year`, in day order.
///
/// Weekdays are computed by the engine rather than supplied.
pub fn month_holidays(year: i32, month: u32) -> Result<Vec<(JalaliDate, Holiday)>, DateError> {
    month_holidays_with(year, month, &CalendarOptions::default())
}

/// [`month_holidays`] with explicit options.
pub fn month_holidays_with(
    year: i32,
    month: u32,
    opts: &CalendarOptions,
) -> Result<Vec<(JalaliDate, Holiday)>, DateError> {
    let length = crate::jalali::month_length(year, month)?;
    let mut weekday = JalaliDate::new(year, month, 1)?.weekday();
    let mut found = Vec::new();

    for day in 1..=length {
        let date = JalaliDate::new(year, month, day)?;
        if let Some(h) = holiday_at(&date, weekday, opts.hijri_offset) {
            found.push((date, h));
        }
        weekday = weekday.succ();
    }

    Ok(found)
}

fn is_holiday_at(date: &JalaliDate, weekday: Weekday, offset: i32) -> bool {
    let hijri = date.to_hijri_with(offset);
    weekday.is_friday()
        || solar_holiday(date.month(), date.day()).is_some()
        || lunar_holiday(hijri.month(), hijri.day()).is_some()
}

pub(crate) fn holiday_at(date: &JalaliDate, weekday: Weekday, offset: i32) -> Option<Holiday> {
    if let Some(name) = solar_holiday(date.month(), date.day()) {
        return Some(Holiday {
            kind: HolidayKind::Solar,
            name,
        });
    }

    let hijri = date.to_hijri_with(offset);
    if let Some(name) = lunar_holiday(hijri.month(), hijri.day()) {
        return Some(Holiday {
            kind: HolidayKind::Lunar,
            name,
        });
    }

    if weekday.is_friday() {
        return Some(Holiday {
            kind: HolidayKind::Weekly,
            name: FRIDAY,
        });
    }

    None
}
