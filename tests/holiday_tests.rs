use taqvim::holidays::{
    holiday, holiday_name, is_holiday, month_holidays, month_holidays_with, FRIDAY,
    LUNAR_HOLIDAYS, SOLAR_HOLIDAYS,
};
use taqvim::{CalendarOptions, HolidayKind, JalaliDate, Weekday};

fn jalali(y: i32, m: u32, d: u32) -> JalaliDate {
    JalaliDate::new(y, m, d).unwrap()
}

#[test]
fn test_solar_holiday_on_friday_keeps_solar_name() {
    // 22 Bahman 1400 fell on a Friday
    let date = jalali(1400, 11, 22);
    assert_eq!(date.weekday(), Weekday::Friday);
    assert!(is_holiday(&date, Weekday::Friday));
    assert_eq!(
        holiday_name(&date, Weekday::Friday),
        Some("Islamic Revolution Victory Day")
    );
}

#[test]
fn test_synthetic_friday_on_solar_holiday() {
    // Any solar holiday labelled with a Friday weekday still reports its own name
    for record in SOLAR_HOLIDAYS {
        let date = jalali(1403, record.month, record.day);
        assert!(is_holiday(&date, Weekday::Friday));
        assert_eq!(holiday_name(&date, Weekday::Friday), Some(record.name));
    }
}

#[test]
fn test_boolean_agrees_with_name() {
    for month in 1..=12 {
        let length = taqvim::jalali::month_length(1403, month).unwrap();
        for day in 1..=length {
            let date = jalali(1403, month, day);
            for index in 0..7 {
                let weekday = Weekday::from_index(index).unwrap();
                assert_eq!(
                    is_holiday(&date, weekday),
                    holiday_name(&date, weekday).is_some(),
                    "{} weekday {}",
                    date,
                    index
                );
            }
        }
    }
}

#[test]
fn test_every_friday_is_a_holiday() {
    let date = jalali(1403, 8, 5);
    assert!(!is_holiday(&date, Weekday::Thursday));
    assert!(is_holiday(&date, Weekday::Friday));
    assert_eq!(holiday_name(&date, Weekday::Friday), Some(FRIDAY));
}

#[test]
fn test_lunar_and_solar_collision() {
    // 29 Esfand 1404 is also 1 Shawwal 1447 and a Friday
    let date = jalali(1404, 12, 29);
    assert_eq!(date.to_hijri().to_string(), "1447/10/01");
    let h = holiday(&date, date.weekday()).unwrap();
    assert_eq!(h.kind, HolidayKind::Solar);
    assert_eq!(h.name, "Oil Industry Nationalization Day");
}

#[test]
fn test_name_lookup_is_idempotent() {
    let date = jalali(1404, 1, 11);
    let first = holiday_name(&date, Weekday::Monday);
    for _ in 0..100 {
        assert_eq!(holiday_name(&date, Weekday::Monday), first);
    }
    assert_eq!(first, Some("Eid al-Fitr"));
}

#[test]
fn test_month_holidays_esfand_1403() {
    let found = month_holidays(1403, 12).unwrap();
    let summary: Vec<(u32, HolidayKind)> = found.iter().map(|(d, h)| (d.day(), h.kind)).collect();
    assert_eq!(
        summary,
        vec![
            (3, HolidayKind::Weekly),
            (10, HolidayKind::Weekly),
            (17, HolidayKind::Weekly),
            (24, HolidayKind::Weekly),
            (29, HolidayKind::Solar),
        ]
    );
}

#[test]
fn test_month_holidays_rejects_bad_month() {
    assert!(month_holidays(1403, 0).is_err());
    assert!(month_holidays_with(1403, 13, &CalendarOptions::default()).is_err());
}

#[test]
fn test_tables_cover_core_observances() {
    assert_eq!(SOLAR_HOLIDAYS.iter().filter(|r| r.name == "Nowruz").count(), 4);
    assert!(LUNAR_HOLIDAYS.iter().any(|r| (r.month, r.day) == (12, 10)));
}
