//! Month lengths, weekdays and human-readable rendering for Jalali dates.

use crate::date::{GregorianDate, HijriDate, JalaliDate, Weekday};
use crate::error::{Calendar, DateError};
use crate::holidays::{self, Holiday};
use crate::locale::Locale;
use crate::options::CalendarOptions;

/// Returns true if Esfand has 30 days in `year` by the 128-year
/// approximation `((year + 38) * 31) % 128 <= 30`.
///
/// This is not the rule the converter counts with (see
/// [`crate::jalali::is_leap_year`]); the two differ in a few years.
pub fn is_leap_year_approx(year: i32) -> bool {
    ((year as i64 + 38) * 31).rem_euclid(128) <= 30
}

/// Number of days in a Jalali month: 31 for months 1-6, 30 for 7-11 and
/// 29 or 30 for Esfand per [`is_leap_year_approx`].
///
/// [`JalaliDate`] validates against [`crate::jalali::month_length`]
/// instead, so `JalaliDate::new(1403, 12, 30)` succeeds although this
/// returns 29 for that month.
///
/// # Errors
/// Returns [`DateError::InvalidMonth`] if `month` is outside 1-12.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, DateError> {
    match month {
        1..=6 => Ok(31),
        7..=11 => Ok(30),
        12 if is_leap_year_approx(year) => Ok(30),
        12 => Ok(29),
        _ => Err(DateError::InvalidMonth {
            calendar: Calendar::Jalali,
            month,
        }),
    }
}

/// Day of the week of a Jalali date (0 = Saturday convention).
pub fn day_of_week(date: &JalaliDate) -> Weekday {
    date.weekday()
}

/// [`day_of_week`] over raw integers, returning the regional index.
///
/// # Example
/// ```
/// use taqvim::calendar::day_of_week_ymd;
///
/// // 1 Farvardin 1403 = Wednesday, March 20, 2024
/// assert_eq!(day_of_week_ymd(1403, 1, 1), Ok(4));
/// ```
pub fn day_of_week_ymd(year: i32, month: u32, day: u32) -> Result<u32, DateError> {
    Ok(JalaliDate::new(year, month, day)?.weekday().index())
}

/// Renders `"{day} {month name} {year}"` with English month names.
pub fn format_jalali(date: &JalaliDate) -> String {
    format_jalali_with(date, &Locale::default())
}

/// Renders `"{day} {month name} {year}"` with the Jalali month names of
/// `locale`.
pub fn format_jalali_with(date: &JalaliDate, locale: &Locale) -> String {
    format!(
        "{} {} {}",
        date.day(),
        locale.jalali_month_names[(date.month() - 1) as usize],
        date.year()
    )
}

/// Renders `"{day} {Hijri month name} {year}"` with English month names.
pub fn format_hijri(date: &HijriDate) -> String {
    format_hijri_with(date, &Locale::default())
}

/// Renders `"{day} {Hijri month name} {year}"` with the Hijri month names
/// of `locale`.
pub fn format_hijri_with(date: &HijriDate, locale: &Locale) -> String {
    format!(
        "{} {} {}",
        date.day(),
        locale.hijri_month_names[(date.month() - 1) as usize],
        date.year()
    )
}

/// One day of a [`MonthView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub jalali: JalaliDate,
    pub gregorian: GregorianDate,
    pub hijri: HijriDate,
    pub weekday: Weekday,
    pub holiday: Option<Holiday>,
}

impl DayCell {
    pub fn is_holiday(&self) -> bool {
        self.holiday.is_some()
    }
}

/// Every day of a Jalali month with its parallel dates and holiday status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    pub month_name: &'static str,
    pub first_weekday: Weekday,
    pub days: Vec<DayCell>,
}

impl MonthView {
    /// Cells grouped into Saturday-first weeks, padded with `None` before
    /// the first day and after the last.
    pub fn weeks(&self) -> Vec<[Option<&DayCell>; 7]> {
        let mut weeks = Vec::new();
        let mut week = [None; 7];

        for cell in &self.days {
            let column = cell.weekday.index() as usize;
            week[column] = Some(cell);
            if column == 6 {
                weeks.push(week);
                week = [None; 7];
            }
        }
        if week.iter().any(Option::is_some) {
            weeks.push(week);
        }

        weeks
    }
}

/// Builds the view of Jalali month `month` of `year` with default options.
pub fn month_view(year: i32, month: u32) -> Result<MonthView, DateError> {
    month_view_with(year, month, &CalendarOptions::default())
}

/// Builds the view of a Jalali month.
///
/// The month is as long as the converter counts it, so 30 Esfand appears
/// exactly when it can be converted.
pub fn month_view_with(
    year: i32,
    month: u32,
    opts: &CalendarOptions,
) -> Result<MonthView, DateError> {
    let length = crate::jalali::month_length(year, month)?;
    let first = JalaliDate::new(year, month, 1)?;
    let first_weekday = first.weekday();

    let mut days = Vec::with_capacity(length as usize);
    let mut weekday = first_weekday;
    for day in 1..=length {
        let jalali = JalaliDate::new(year, month, day)?;
        let gregorian = jalali.to_gregorian();
        days.push(DayCell {
            jalali,
            gregorian,
            hijri: gregorian.to_hijri_with(opts.hijri_offset),
            weekday,
            holiday: holidays::holiday_at(&jalali, weekday, opts.hijri_offset),
        });
        weekday = weekday.succ();
    }

    Ok(MonthView {
        year,
        month,
        month_name: opts.locale.jalali_month_names[(month - 1) as usize],
        first_weekday,
        days,
    })
}
