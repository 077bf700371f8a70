//! Built-in locale data.

use crate::date::Weekday;

/// Display names for calendar months and weekdays.
///
/// Weekday names are ordered Saturday first, matching [`Weekday::index`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    pub jalali_month_names: [&'static str; 12],
    pub hijri_month_names: [&'static str; 12],
    pub weekday_names: [&'static str; 7],
}

impl Default for Locale {
    fn default() -> Self {
        Self::en()
    }
}

impl Locale {
    /// English transliteration.
    pub fn en() -> Self {
        Locale {
            jalali_month_names: [
                "Farvardin",
                "Ordibehesht",
                "Khordad",
                "Tir",
                "Mordad",
                "Shahrivar",
                "Mehr",
                "Aban",
                "Azar",
                "Dey",
                "Bahman",
                "Esfand",
            ],
            hijri_month_names: [
                "Muharram",
                "Safar",
                "Rabi' al-Awwal",
                "Rabi' al-Thani",
                "Jumada al-Awwal",
                "Jumada al-Thani",
                "Rajab",
                "Sha'ban",
                "Ramadan",
                "Shawwal",
                "Dhu al-Qi'dah",
                "Dhu al-Hijjah",
            ],
            weekday_names: [
                "Saturday",
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
            ],
        }
    }

    /// Persian script.
    pub fn fa() -> Self {
        Locale {
            jalali_month_names: [
                "فروردین",
                "اردیبهشت",
                "خرداد",
                "تیر",
                "مرداد",
                "شهریور",
                "مهر",
                "آبان",
                "آذر",
                "دی",
                "بهمن",
                "اسفند",
            ],
            hijri_month_names: [
                "محرم",
                "صفر",
                "ربیع‌الاول",
                "ربیع‌الثانی",
                "جمادی‌الاول",
                "جمادی‌الثانی",
                "رجب",
                "شعبان",
                "رمضان",
                "شوال",
                "ذی‌القعده",
                "ذی‌الحجه",
            ],
            weekday_names: [
                "شنبه",
                "یکشنبه",
                "دوشنبه",
                "سه‌شنبه",
                "چهارشنبه",
                "پنجشنبه",
                "جمعه",
            ],
        }
    }

    /// Name of Jalali month `month` (1 = Farvardin), or `None` outside 1-12.
    pub fn jalali_month_name(&self, month: u32) -> Option<&'static str> {
        month_index(month).map(|i| self.jalali_month_names[i])
    }

    /// Name of Hijri month `month` (1 = Muharram), or `None` outside 1-12.
    pub fn hijri_month_name(&self, month: u32) -> Option<&'static str> {
        month_index(month).map(|i| self.hijri_month_names[i])
    }

    pub fn weekday_name(&self, weekday: Weekday) -> &'static str {
        self.weekday_names[weekday.index() as usize]
    }
}

fn month_index(month: u32) -> Option<usize> {
    if (1..=12).contains(&month) {
        Some((month - 1) as usize)
    } else {
        None
    }
}
