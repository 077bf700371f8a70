//! Conversion options and configuration.

use crate::locale::Locale;

/// Default days added to the Julian Day Number before the Hijri cycle is
/// resolved.
///
/// This is an empirical point calibration against Iranian official
/// observance: with `-1`, 1 Shawwal 1446 falls on 2025-03-31 and
/// 10 Dhu al-Hijjah 1445 on 2024-06-17. Accuracy away from those dates is
/// not guaranteed; adjust through [`CalendarOptions::hijri_offset`] if
/// drift is observed.
pub const HIJRI_CALIBRATION_OFFSET: i32 = -1;

/// Options for conversion, holiday classification and formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarOptions {
    /// Calibration offset applied to the Hijri conversion.
    pub hijri_offset: i32,
    /// Names used when rendering dates.
    pub locale: Locale,
}

impl Default for CalendarOptions {
    fn default() -> Self {
        CalendarOptions {
            hijri_offset: HIJRI_CALIBRATION_OFFSET,
            locale: Locale::default(),
        }
    }
}

impl CalendarOptions {
    /// Default options with a different Hijri calibration offset.
    pub fn with_hijri_offset(hijri_offset: i32) -> Self {
        CalendarOptions {
            hijri_offset,
            ..Self::default()
        }
    }
}
