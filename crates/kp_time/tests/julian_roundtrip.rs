//! Property tests: civil instant → Julian Day → civil instant.

use kp_time::{
    CivilDate, CivilDateTime, TimeOfDay, days_in_month, instant_to_julian_day,
    julian_day_to_instant,
};
use proptest::prelude::*;

fn civil_date(years: std::ops::Range<i32>) -> impl Strategy<Value = (i32, u32, u32)> {
    (years, 1u32..=12).prop_flat_map(|(y, m)| (Just(y), Just(m), 1..=days_in_month(y, m)))
}

proptest! {
    #[test]
    fn gregorian_round_trip(
        (year, month, day) in civil_date(1600..2600),
        secs in 0u32..86_400,
    ) {
        let time = TimeOfDay::from_seconds(secs).unwrap();
        let dt = CivilDateTime::new(CivilDate::new(year, month, day).unwrap(), time, 0.0).unwrap();
        let back = CivilDateTime::from_julian_day(dt.to_julian_day(), 0.0).unwrap();
        prop_assert_eq!(back.date, dt.date);
        prop_assert!((back.time.seconds_of_day() - secs as f64).abs() < 0.01,
            "{} vs {}", back.time, dt.time);
    }

    #[test]
    fn julian_calendar_round_trip((year, month, day) in civil_date(800..1500)) {
        let jd = instant_to_julian_day(year, month, day, 12, 0, 0.0, 0.0);
        let (y, m, d, h) = julian_day_to_instant(jd);
        prop_assert_eq!((y, m, d), (year, month, day));
        prop_assert!((h - 12.0).abs() < 1e-6);
    }

    #[test]
    fn offset_round_trip(
        (year, month, day) in civil_date(1900..2100),
        secs in 0u32..86_400,
        half_hours in -24i32..=28,
    ) {
        let offset = half_hours as f64 * 0.5;
        let time = TimeOfDay::from_seconds(secs).unwrap();
        let date = CivilDate::new(year, month, day).unwrap();
        let dt = CivilDateTime::new(date, time, offset).unwrap();
        let back = CivilDateTime::from_julian_day(dt.to_julian_day(), offset).unwrap();
        prop_assert_eq!(back.date, dt.date);
        prop_assert!((back.time.seconds_of_day() - secs as f64).abs() < 0.01);
    }

    #[test]
    fn consecutive_days_differ_by_one(
        (year, month, day) in civil_date(1600..2600),
    ) {
        let jd = instant_to_julian_day(year, month, day, 0, 0, 0.0, 0.0);
        let next = jd + 1.0;
        let (y, m, d, _) = julian_day_to_instant(next);
        let expected = if day < days_in_month(year, month) {
            (year, month, day + 1)
        } else if month < 12 {
            (year, month + 1, 1)
        } else {
            (year + 1, 1, 1)
        };
        prop_assert_eq!((y, m, d), expected);
    }
}
