//! Fixed-date holiday tables.
//!
//! Both tables are keyed by (month, day) only and kept sorted so lookups can
//! binary search. Moveable observances (elections and the like) are not
//! represented.

/// A holiday recurring on the same month and day every year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HolidayRecord {
    pub month: u32,
    pub day: u32,
    pub name: &'static str,
}

const fn record(month: u32, day: u32, name: &'static str) -> HolidayRecord {
    HolidayRecord { month, day, name }
}

/// Official holidays fixed in the Jalali calendar.
pub static SOLAR_HOLIDAYS: &[HolidayRecord] = &[
    record(1, 1, "Nowruz"),
    record(1, 2, "Nowruz"),
    record(1, 3, "Nowruz"),
    record(1, 4, "Nowruz"),
    record(1, 12, "Islamic Republic Day"),
    record(1, 13, "Nature Day"),
    record(3, 14, "Demise of Imam Khomeini"),
    record(3, 15, "15 Khordad Uprising"),
    record(11, 22, "Islamic Revolution Victory Day"),
    record(12, 29, "Oil Industry Nationalization Day"),
];

/// Religious holidays fixed in the Hijri calendar.
pub static LUNAR_HOLIDAYS: &[HolidayRecord] = &[
    record(1, 9, "Tasua"),
    record(1, 10, "Ashura"),
    record(2, 20, "Arbaeen"),
    record(2, 28, "Demise of the Prophet and Martyrdom of Imam Hasan"),
    record(2, 30, "Martyrdom of Imam Reza"),
    record(3, 8, "Martyrdom of Imam Hasan al-Askari"),
    record(3, 17, "Birth of the Prophet and Imam Sadiq"),
    record(6, 3, "Martyrdom of Fatimah al-Zahra"),
    record(7, 13, "Birth of Imam Ali"),
    record(7, 27, "Mab'ath"),
    record(8, 15, "Birth of Imam Mahdi"),
    record(9, 21, "Martyrdom of Imam Ali"),
    record(10, 1, "Eid al-Fitr"),
    record(10, 2, "Eid al-Fitr Holiday"),
    record(10, 25, "Martyrdom of Imam Sadiq"),
    record(12, 10, "Eid al-Adha"),
    record(12, 18, "Eid al-Ghadir"),
];

/// Name of the solar holiday on Jalali `month`/`day`, if any.
pub fn solar_holiday(month: u32, day: u32) -> Option<&'static str> {
    lookup(SOLAR_HOLIDAYS, month, day)
}

/// Name of the lunar holiday on Hijri `month`/`day`, if any.
pub fn lunar_holiday(month: u32, day: u32) -> Option<&'static str> {
    lookup(LUNAR_HOLIDAYS, month, day)
}

fn lookup(table: &'static [HolidayRecord], month: u32, day: u32) -> Option<&'static str> {
    table
        .binary_search_by_key(&(month, day), |r| (r.month, r.day))
        .ok()
        .map(|i| table[i].name)
}
