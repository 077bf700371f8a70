use taqvim::{jalali, jdn, Calendar, DateError, GregorianDate, JalaliDate, ParseError};

#[test]
fn test_invalid_date_display() {
    let err = JalaliDate::new(1403, 7, 31).unwrap_err();
    assert_eq!(
        err,
        DateError::InvalidDate {
            calendar: Calendar::Jalali,
            year: 1403,
            month: 7,
            day: 31,
        }
    );
    assert_eq!(format!("{}", err), "invalid Jalali date: 1403-7-31");
}

#[test]
fn test_invalid_month_display() {
    let err = taqvim::days_in_month(1403, 13).unwrap_err();
    let msg = format!("{}", err);
    assert!(msg.contains("Jalali"));
    assert!(msg.contains("13"));
}

#[test]
fn test_invalid_weekday_display() {
    let err = DateError::InvalidWeekday { index: 9 };
    assert!(format!("{}", err).contains("9"));
}

#[test]
fn test_parse_error_display() {
    let err = "13/40".parse::<JalaliDate>().unwrap_err();
    let msg = format!("{}", err);
    assert!(msg.contains("'13/40'"));
    assert!(msg.contains("YYYY/MM/DD"));
}

#[test]
fn test_parse_error_wraps_date_error() {
    let err = "2023-02-29".parse::<taqvim::GregorianDate>().unwrap_err();
    assert!(matches!(
        err,
        ParseError::Date(DateError::InvalidDate {
            calendar: Calendar::Gregorian,
            ..
        })
    ));
    assert_eq!(format!("{}", err), "invalid Gregorian date: 2023-2-29");
}

#[test]
fn test_gregorian_range_bounds() {
    assert!(GregorianDate::new(622, 3, 21).is_ok());
    assert!(GregorianDate::new(9999, 12, 31).is_ok());
    assert_eq!(
        GregorianDate::new(622, 3, 20),
        Err(DateError::InvalidDate {
            calendar: Calendar::Gregorian,
            year: 622,
            month: 3,
            day: 20,
        })
    );
    assert!(GregorianDate::new(10000, 1, 1).is_err());
    assert!(GregorianDate::new(-2000, 1, 1).is_err());
    assert!(GregorianDate::new(i32::MIN, 1, 1).is_err());
    assert!(GregorianDate::new(i32::MAX, 12, 31).is_err());
}

#[test]
fn test_jalali_range_bounds() {
    assert!(JalaliDate::new(1, 1, 1).is_ok());
    assert!(JalaliDate::new(9378, 10, 10).is_ok());
    assert_eq!(
        JalaliDate::new(0, 12, 29),
        Err(DateError::InvalidDate {
            calendar: Calendar::Jalali,
            year: 0,
            month: 12,
            day: 29,
        })
    );
    assert!(JalaliDate::new(9378, 10, 11).is_err());
    assert!(JalaliDate::new(-1000, 1, 1).is_err());
    assert!(JalaliDate::new(i32::MAX, 12, 1).is_err());
    assert!(JalaliDate::new(i32::MAX, 1, 1).is_err());
    assert!(JalaliDate::new(i32::MIN, 12, 1).is_err());
}

#[test]
fn test_range_ends_map_onto_each_other() {
    let first = JalaliDate::new(1, 1, 1).unwrap();
    assert_eq!(first.to_gregorian().to_string(), "0622-03-21");
    assert_eq!(first.to_jdn(), jdn::MIN_JDN);

    let last = GregorianDate::new(9999, 12, 31).unwrap();
    assert_eq!(last.to_jalali().to_string(), "9378/10/10");
    assert_eq!(last.to_jdn(), jdn::MAX_JDN);

    assert_eq!(
        jalali::jalali_to_gregorian(jalali::MIN_DATE.0, jalali::MIN_DATE.1, jalali::MIN_DATE.2),
        Ok(jdn::MIN_DATE)
    );
    assert_eq!(
        jalali::gregorian_to_jalali(jdn::MAX_DATE.0, jdn::MAX_DATE.1, jdn::MAX_DATE.2),
        Ok(jalali::MAX_DATE)
    );
}

#[test]
fn test_from_jdn_out_of_range() {
    assert_eq!(
        GregorianDate::from_jdn(jdn::MAX_JDN + 1),
        Err(DateError::JdnOutOfRange {
            jdn: jdn::MAX_JDN + 1
        })
    );
    assert!(JalaliDate::from_jdn(0).is_err());
    let err = GregorianDate::from_jdn(-5).unwrap_err();
    assert_eq!(format!("{}", err), "day number -5 is outside the supported range");
}

#[test]
fn test_out_of_range_text_is_rejected() {
    assert!(matches!(
        "0010/01/01".parse::<GregorianDate>(),
        Err(ParseError::Date(DateError::InvalidDate { .. }))
    ));
    assert!(matches!(
        "2147483647/12/01".parse::<JalaliDate>(),
        Err(ParseError::Date(DateError::InvalidDate { .. }))
    ));
}
