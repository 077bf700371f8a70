//! Calendar date value types.
//!
//! [`GregorianDate`] and [`JalaliDate`] can only be constructed valid and
//! inside the supported range ([`crate::jdn::MIN_DATE`] through
//! [`crate::jdn::MAX_DATE`]), so conversions between them never fail.
//! [`HijriDate`] is produced by conversion only.

use std::fmt;
use std::str::FromStr;

use crate::error::{DateError, ParseError};
use crate::options::HIJRI_CALIBRATION_OFFSET;
use crate::{hijri, jalali, jdn};

/// Maps a Gregorian weekday (0 = Sunday) to the regional index (0 = Saturday).
const GREGORIAN_TO_REGIONAL: [u32; 7] = [1, 2, 3, 4, 5, 6, 0];

/// Day of the week, numbered from Saturday as in the Iranian week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Weekday {
    Saturday = 0,
    Sunday = 1,
    Monday = 2,
    Tuesday = 3,
    Wednesday = 4,
    Thursday = 5,
    Friday = 6,
}

impl Weekday {
    const ALL: [Weekday; 7] = [
        Weekday::Saturday,
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Weekday from its regional index (0 = Saturday ... 6 = Friday).
    pub fn from_index(index: u32) -> Result<Self, DateError> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(DateError::InvalidWeekday { index })
    }

    /// Weekday from a Gregorian-convention index (0 = Sunday ... 6 = Saturday).
    pub fn from_gregorian_index(index: u32) -> Result<Self, DateError> {
        let regional = GREGORIAN_TO_REGIONAL
            .get(index as usize)
            .ok_or(DateError::InvalidWeekday { index })?;
        Self::from_index(*regional)
    }

    /// Regional index, 0 = Saturday.
    pub fn index(self) -> u32 {
        self as u32
    }

    pub fn is_friday(self) -> bool {
        self == Weekday::Friday
    }

    /// The following day.
    pub fn succ(self) -> Self {
        Self::ALL[(self.index() as usize + 1) % 7]
    }
}

/// A date in the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "(i32, u32, u32)", into = "(i32, u32, u32)")
)]
pub struct GregorianDate {
    year: i32,
    month: u32,
    day: u32,
}

impl GregorianDate {
    /// Creates a validated Gregorian date.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidDate`] if the month is outside 1-12,
    /// the day does not exist in that month, or the date is outside the
    /// supported range.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        jdn::validate(year, month, day)?;
        Ok(GregorianDate { year, month, day })
    }

    /// Creates a date from a Julian Day Number.
    ///
    /// # Errors
    /// Returns [`DateError::JdnOutOfRange`] unless `jdn` lies within
    /// [`jdn::MIN_JDN`]..=[`jdn::MAX_JDN`].
    pub fn from_jdn(jdn: i64) -> Result<Self, DateError> {
        if !(jdn::MIN_JDN..=jdn::MAX_JDN).contains(&jdn) {
            return Err(DateError::JdnOutOfRange { jdn });
        }
        let (year, month, day) = jdn::jdn_to_gregorian(jdn);
        Ok(GregorianDate { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn to_jdn(&self) -> i64 {
        jdn::to_jdn(self.year, self.month, self.day)
    }

    /// Day of the week in the regional convention.
    pub fn weekday(&self) -> Weekday {
        let regional = GREGORIAN_TO_REGIONAL[jdn::gregorian_weekday(self.to_jdn()) as usize];
        Weekday::ALL[regional as usize]
    }

    pub fn to_jalali(&self) -> JalaliDate {
        let (year, month, day) = jalali::to_jalali(self.year, self.month, self.day);
        JalaliDate { year, month, day }
    }

    /// Hijri date using the default calibration offset.
    pub fn to_hijri(&self) -> HijriDate {
        self.to_hijri_with(HIJRI_CALIBRATION_OFFSET)
    }

    /// Hijri date with an explicit calibration offset in days.
    pub fn to_hijri_with(&self, offset: i32) -> HijriDate {
        let (year, month, day) = hijri::to_hijri(self.year, self.month, self.day, offset);
        HijriDate { year, month, day }
    }
}

/// A date in the Jalali (Persian solar) calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "(i32, u32, u32)", into = "(i32, u32, u32)")
)]
pub struct JalaliDate {
    year: i32,
    month: u32,
    day: u32,
}

impl JalaliDate {
    /// Creates a validated Jalali date.
    ///
    /// 30 Esfand is accepted in the leap years of the converter's 33-year
    /// cycle (see [`jalali::is_leap_year`]). Dates outside
    /// [`jalali::MIN_DATE`]..=[`jalali::MAX_DATE`] are rejected.
    ///
    /// # Example
    /// ```
    /// use taqvim::JalaliDate;
    ///
    /// let nowruz = JalaliDate::new(1404, 1, 1).unwrap();
    /// assert_eq!(nowruz.to_gregorian().to_string(), "2025-03-21");
    /// assert!(JalaliDate::new(1404, 7, 31).is_err());
    /// ```
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        jalali::validate(year, month, day)?;
        Ok(JalaliDate { year, month, day })
    }

    /// Creates a date from a Julian Day Number.
    ///
    /// # Errors
    /// Returns [`DateError::JdnOutOfRange`] under the same bounds as
    /// [`GregorianDate::from_jdn`].
    pub fn from_jdn(jdn: i64) -> Result<Self, DateError> {
        Ok(GregorianDate::from_jdn(jdn)?.to_jalali())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn to_gregorian(&self) -> GregorianDate {
        let (year, month, day) = jalali::to_gregorian(self.year, self.month, self.day);
        GregorianDate { year, month, day }
    }

    pub fn to_jdn(&self) -> i64 {
        self.to_gregorian().to_jdn()
    }

    /// Day of the week, computed through the Gregorian date.
    pub fn weekday(&self) -> Weekday {
        self.to_gregorian().weekday()
    }

    /// Hijri date using the default calibration offset.
    pub fn to_hijri(&self) -> HijriDate {
        self.to_gregorian().to_hijri()
    }

    /// Hijri date with an explicit calibration offset in days.
    pub fn to_hijri_with(&self, offset: i32) -> HijriDate {
        self.to_gregorian().to_hijri_with(offset)
    }

    /// Jalali date for a chrono calendar date.
    ///
    /// # Errors
    /// Returns [`DateError::InvalidDate`] if `date` is outside the
    /// supported range.
    #[cfg(feature = "chrono")]
    pub fn from_naive_date(date: chrono::NaiveDate) -> Result<Self, DateError> {
        Ok(GregorianDate::try_from(date)?.to_jalali())
    }
}

/// A date in the tabular Hijri (Islamic lunar) calendar.
///
/// There is deliberately no way back to Gregorian; see [`crate::hijri`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(into = "(i32, u32, u32)"))]
pub struct HijriDate {
    year: i32,
    month: u32,
    day: u32,
}

impl HijriDate {
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl From<GregorianDate> for JalaliDate {
    fn from(date: GregorianDate) -> Self {
        date.to_jalali()
    }
}

impl From<JalaliDate> for GregorianDate {
    fn from(date: JalaliDate) -> Self {
        date.to_gregorian()
    }
}

impl TryFrom<(i32, u32, u32)> for GregorianDate {
    type Error = DateError;

    fn try_from((year, month, day): (i32, u32, u32)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

impl TryFrom<(i32, u32, u32)> for JalaliDate {
    type Error = DateError;

    fn try_from((year, month, day): (i32, u32, u32)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

impl From<GregorianDate> for (i32, u32, u32) {
    fn from(date: GregorianDate) -> Self {
        (date.year, date.month, date.day)
    }
}

impl From<JalaliDate> for (i32, u32, u32) {
    fn from(date: JalaliDate) -> Self {
        (date.year, date.month, date.day)
    }
}

impl From<HijriDate> for (i32, u32, u32) {
    fn from(date: HijriDate) -> Self {
        (date.year, date.month, date.day)
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl fmt::Display for JalaliDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

impl fmt::Display for HijriDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for GregorianDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_ymd(s)?;
        Ok(Self::new(year, month, day)?)
    }
}

impl FromStr for JalaliDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_ymd(s)?;
        Ok(Self::new(year, month, day)?)
    }
}

/// Splits `YYYY/MM/DD` or `YYYY-MM-DD` into its numeric parts.
fn parse_ymd(input: &str) -> Result<(i32, u32, u32), ParseError> {
    let malformed = || ParseError::Malformed {
        input: input.to_string(),
    };

    let trimmed = input.trim();
    let separator = if trimmed.contains('/') { '/' } else { '-' };
    let mut parts = trimmed.split(separator);

    let (Some(year), Some(month), Some(day), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(malformed());
    };

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(year) || !all_digits(month) || !all_digits(day) {
        return Err(malformed());
    }

    Ok((
        year.parse().map_err(|_| malformed())?,
        month.parse().map_err(|_| malformed())?,
        day.parse().map_err(|_| malformed())?,
    ))
}

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDate> for GregorianDate {
    type Error = DateError;

    /// Fails for dates chrono can represent but this crate does not support.
    fn try_from(date: chrono::NaiveDate) -> Result<Self, Self::Error> {
        use chrono::Datelike;
        Self::new(date.year(), date.month(), date.day())
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<GregorianDate> for chrono::NaiveDate {
    type Error = DateError;

    /// Does not fail for dates in the supported range.
    fn try_from(date: GregorianDate) -> Result<Self, Self::Error> {
        chrono::NaiveDate::from_ymd_opt(date.year, date.month, date.day).ok_or(
            DateError::InvalidDate {
                calendar: crate::error::Calendar::Gregorian,
                year: date.year,
                month: date.month,
                day: date.day,
            },
        )
    }
}
