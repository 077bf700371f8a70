//! Error types for date construction and parsing.

use std::fmt;

use thiserror::Error;

/// The calendar a rejected date was expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Calendar {
    Gregorian,
    Jalali,
    Hijri,
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Calendar::Gregorian => "Gregorian",
            Calendar::Jalali => "Jalali",
            Calendar::Hijri => "Hijri",
        })
    }
}

/// Errors raised when calendar coordinates fall outside their domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("invalid {calendar} date: {year}-{month}-{day}")]
    InvalidDate {
        calendar: Calendar,
        year: i32,
        month: u32,
        day: u32,
    },

    #[error("invalid {calendar} month: {month} (expected 1-12)")]
    InvalidMonth { calendar: Calendar, month: u32 },

    #[error("day number {jdn} is outside the supported range")]
    JdnOutOfRange { jdn: i64 },

    #[error("invalid weekday index: {index} (expected 0-6)")]
    InvalidWeekday { index: u32 },
}

/// Errors that can occur when parsing a textual date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("malformed date '{input}': expected YYYY/MM/DD or YYYY-MM-DD")]
    Malformed { input: String },

    #[error(transparent)]
    Date(#[from] DateError),
}
