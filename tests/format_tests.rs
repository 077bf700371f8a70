use taqvim::calendar::{format_hijri_with, format_jalali_with};
use taqvim::{format_hijri, format_jalali, GregorianDate, JalaliDate, Locale};

#[test]
fn test_format_jalali() {
    let date = JalaliDate::new(1404, 1, 1).unwrap();
    assert_eq!(format_jalali(&date), "1 Farvardin 1404");
    assert_eq!(format_jalali_with(&date, &Locale::fa()), "1 فروردین 1404");
}

#[test]
fn test_format_every_month() {
    let names = Locale::en().jalali_month_names;
    for month in 1..=12 {
        let date = JalaliDate::new(1403, month, 1).unwrap();
        assert_eq!(
            format_jalali(&date),
            format!("1 {} 1403", names[(month - 1) as usize])
        );
    }
}

#[test]
fn test_format_hijri() {
    let hijri = GregorianDate::new(2024, 7, 16).unwrap().to_hijri();
    assert_eq!(format_hijri(&hijri), "9 Muharram 1446");
    assert_eq!(format_hijri_with(&hijri, &Locale::fa()), "9 محرم 1446");
}

#[test]
fn test_display_and_parse_agree() {
    let date = JalaliDate::new(1403, 12, 30).unwrap();
    assert_eq!(date.to_string().parse::<JalaliDate>(), Ok(date));
    let g = date.to_gregorian();
    assert_eq!(g.to_string().parse::<GregorianDate>(), Ok(g));
}

#[test]
fn test_jalali_from_gregorian_str() {
    assert_eq!(
        taqvim::jalali_from_gregorian_str("2025-03-21").unwrap(),
        JalaliDate::new(1404, 1, 1).unwrap()
    );
    assert!(taqvim::jalali_from_gregorian_str("2025/13/01").is_err());
}
