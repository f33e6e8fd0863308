//! Civil calendar dates, clock times and zoned instants.
//!
//! These types validate their fields on construction and parse the textual
//! layouts accepted at the engine boundary: `YYYY-MM-DD`, `HH:MM[:SS]` and the
//! combined `YYYY-MM-DDTHH:MM[:SS]` (a space is accepted in place of `T`).

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Timelike, Utc};
use serde::Serialize;

use crate::error::TimeError;
use crate::julian::{
    instant_to_julian_day, is_gregorian_date, is_julian_leap_year, is_leap_year,
    julian_day_to_instant,
};

/// Seconds in one civil day.
pub const SECONDS_PER_DAY: u32 = 86_400;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Number of days in a month, under the Julian calendar before October 1582
/// and the Gregorian calendar from then on.
///
/// October 1582 counts 31 days even though the 5th to the 14th were skipped;
/// [`CivilDate::new`] rejects those.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    let leap = if is_gregorian_date(year, month, 31) {
        is_leap_year(year)
    } else {
        is_julian_leap_year(year)
    };
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if leap => 29,
        2 => 28,
        _ => 0,
    }
}

/// Validate a UTC offset in hours east of Greenwich.
pub fn validate_utc_offset(hours: f64) -> Result<f64, TimeError> {
    if hours.is_finite() && (-14.0..=14.0).contains(&hours) {
        Ok(hours)
    } else {
        Err(TimeError::OutOfRange {
            field: "utc offset",
            value: hours,
        })
    }
}

/// A calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CivilDate {
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::OutOfRange {
                field: "month",
                value: month as f64,
            });
        }
        let valid = if is_gregorian_date(year, month, day) {
            NaiveDate::from_ymd_opt(year, month, day).is_some()
        } else {
            // 1582-10-05 through 1582-10-14 never happened.
            let skipped = year == 1582 && month == 10 && day >= 5;
            day >= 1 && day <= days_in_month(year, month) && !skipped
        };
        if !valid {
            return Err(TimeError::OutOfRange {
                field: "day",
                value: day as f64,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Julian Day of local midnight at the given UTC offset.
    pub fn midnight_julian_day(&self, utc_offset_hours: f64) -> f64 {
        instant_to_julian_day(self.year, self.month, self.day, 0, 0, 0.0, utc_offset_hours)
    }
}

impl FromStr for CivilDate {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || TimeError::InvalidFormat {
            what: "date",
            input: s.to_string(),
            expected: "YYYY-MM-DD",
        };
        let s_trim = s.trim();
        // A leading '-' belongs to the year, not to the separator.
        let (sign, body) = match s_trim.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, s_trim),
        };
        let mut parts = body.split('-');
        let (Some(y), Some(m), Some(d), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(bad());
        };
        let year: i32 = parse_digits(y).ok_or_else(bad)?;
        let month: u32 = parse_digits(m).ok_or_else(bad)?;
        let day: u32 = parse_digits(d).ok_or_else(bad)?;
        Self::new(sign * year, month, day)
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// A wall-clock time within one civil day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl TimeOfDay {
    pub const MIDNIGHT: Self = Self {
        hour: 0,
        minute: 0,
        second: 0.0,
    };

    pub fn new(hour: u32, minute: u32, second: f64) -> Result<Self, TimeError> {
        if hour >= 24 {
            return Err(TimeError::OutOfRange {
                field: "hour",
                value: hour as f64,
            });
        }
        if minute >= 60 {
            return Err(TimeError::OutOfRange {
                field: "minute",
                value: minute as f64,
            });
        }
        if !(second.is_finite() && (0.0..60.0).contains(&second)) {
            return Err(TimeError::OutOfRange {
                field: "second",
                value: second,
            });
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// Build from whole seconds after midnight (0..86400).
    pub fn from_seconds(seconds: u32) -> Result<Self, TimeError> {
        if seconds >= SECONDS_PER_DAY {
            return Err(TimeError::OutOfRange {
                field: "seconds of day",
                value: seconds as f64,
            });
        }
        Ok(Self {
            hour: seconds / 3600,
            minute: (seconds % 3600) / 60,
            second: (seconds % 60) as f64,
        })
    }

    /// Seconds elapsed since midnight.
    pub fn seconds_of_day(&self) -> f64 {
        self.hour as f64 * 3600.0 + self.minute as f64 * 60.0 + self.second
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || TimeError::InvalidFormat {
            what: "time",
            input: s.to_string(),
            expected: "HH:MM or HH:MM:SS",
        };
        let parts: Vec<&str> = s.trim().split(':').collect();
        let (h, m, sec) = match parts.as_slice() {
            [h, m] => (*h, *m, None),
            [h, m, sec] => (*h, *m, Some(*sec)),
            _ => return Err(bad()),
        };
        let hour: u32 = parse_digits(h).ok_or_else(bad)?;
        let minute: u32 = parse_digits(m).ok_or_else(bad)?;
        let second = match sec {
            Some(text) => parse_seconds(text).ok_or_else(bad)?,
            None => 0.0,
        };
        Self::new(hour, minute, second)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hour,
            self.minute,
            self.second.floor() as u32
        )
    }
}

/// A civil date and time at a fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CivilDateTime {
    pub date: CivilDate,
    pub time: TimeOfDay,
    /// Hours east of Greenwich.
    pub utc_offset_hours: f64,
}

impl CivilDateTime {
    pub fn new(date: CivilDate, time: TimeOfDay, utc_offset_hours: f64) -> Result<Self, TimeError> {
        Ok(Self {
            date,
            time,
            utc_offset_hours: validate_utc_offset(utc_offset_hours)?,
        })
    }

    /// Parse `YYYY-MM-DDTHH:MM[:SS]` (or with a space separator) at an offset.
    pub fn parse(s: &str, utc_offset_hours: f64) -> Result<Self, TimeError> {
        let trimmed = s.trim();
        let Some((d, t)) = trimmed
            .split_once('T')
            .or_else(|| trimmed.split_once(' '))
        else {
            return Err(TimeError::InvalidFormat {
                what: "date-time",
                input: s.to_string(),
                expected: "YYYY-MM-DDTHH:MM[:SS]",
            });
        };
        Self::new(d.parse()?, t.parse()?, utc_offset_hours)
    }

    /// Julian Day (UT) of this instant.
    pub fn to_julian_day(&self) -> f64 {
        instant_to_julian_day(
            self.date.year,
            self.date.month,
            self.date.day,
            self.time.hour,
            self.time.minute,
            self.time.second,
            self.utc_offset_hours,
        )
    }

    /// Civil date-time at `utc_offset_hours` for a Julian Day (UT).
    ///
    /// The time of day is rounded to whole milliseconds, carrying into the
    /// next day when it rounds up to midnight.
    pub fn from_julian_day(jd: f64, utc_offset_hours: f64) -> Result<Self, TimeError> {
        if !jd.is_finite() {
            return Err(TimeError::OutOfRange {
                field: "julian day",
                value: jd,
            });
        }
        let offset = validate_utc_offset(utc_offset_hours)?;
        let shifted = jd + offset / 24.0 + 0.5;
        let mut day_number = shifted.floor();
        let mut millis = ((shifted - day_number) * MILLIS_PER_DAY).round();
        if millis >= MILLIS_PER_DAY {
            day_number += 1.0;
            millis -= MILLIS_PER_DAY;
        }
        let (year, month, day, _) = julian_day_to_instant(day_number - 0.5);
        let ms = millis as u64;
        let secs = (ms / 1000) as u32;
        let time = TimeOfDay {
            hour: secs / 3600,
            minute: (secs % 3600) / 60,
            second: (secs % 60) as f64 + (ms % 1000) as f64 / 1000.0,
        };
        Ok(Self {
            date: CivilDate { year, month, day },
            time,
            utc_offset_hours: offset,
        })
    }

    /// Current wall-clock time at a UTC offset, truncated to whole seconds.
    pub fn now(utc_offset_hours: f64) -> Result<Self, TimeError> {
        let offset = validate_utc_offset(utc_offset_hours)?;
        let shifted = Utc::now() + chrono::Duration::seconds((offset * 3600.0).round() as i64);
        let naive = shifted.naive_utc();
        Self::new(
            CivilDate::new(naive.year(), naive.month(), naive.day())?,
            TimeOfDay::new(naive.hour(), naive.minute(), naive.second() as f64)?,
            offset,
        )
    }
}

impl fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total_minutes = (self.utc_offset_hours * 60.0).round() as i64;
        let sign = if total_minutes < 0 { '-' } else { '+' };
        let abs = total_minutes.abs();
        write!(
            f,
            "{}T{}{}{:02}:{:02}",
            self.date,
            self.time,
            sign,
            abs / 60,
            abs % 60
        )
    }
}

fn parse_digits<T: FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn parse_seconds(s: &str) -> Option<f64> {
    let (whole, frac) = match s.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (s, None),
    };
    parse_digits::<u32>(whole)?;
    if let Some(f) = frac {
        parse_digits::<u32>(f)?;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_follow_the_calendar_in_force() {
        // Julian leap day before the cutover, Gregorian rules after it.
        assert!(CivilDate::new(1500, 2, 29).is_ok());
        assert!(CivilDate::new(1700, 2, 29).is_err());
        assert!(CivilDate::new(2000, 2, 29).is_ok());
        assert_eq!(days_in_month(1500, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
    }

    #[test]
    fn cutover_gap_rejected() {
        assert!(CivilDate::new(1582, 10, 4).is_ok());
        assert!(CivilDate::new(1582, 10, 10).is_err());
        assert!(CivilDate::new(1582, 10, 15).is_ok());
        let before = CivilDate::new(1582, 10, 4).unwrap().midnight_julian_day(0.0);
        let after = CivilDate::new(1582, 10, 15).unwrap().midnight_julian_day(0.0);
        assert!((after - before - 1.0).abs() < 1e-9);
    }

    #[test]
    fn julian_leap_day_round_trips() {
        let dt = CivilDateTime::parse("1500-02-29T06:00", 0.0).unwrap();
        let back = CivilDateTime::from_julian_day(dt.to_julian_day(), 0.0).unwrap();
        assert_eq!(back.date, dt.date);
    }

    #[test]
    fn parse_date() {
        let d: CivilDate = "2024-03-15".parse().unwrap();
        assert_eq!(d, CivilDate::new(2024, 3, 15).unwrap());
        assert_eq!(d.to_string(), "2024-03-15");
    }

    #[test]
    fn reject_bad_dates() {
        assert!("2024-13-01".parse::<CivilDate>().is_err());
        assert!("2023-02-29".parse::<CivilDate>().is_err());
        assert!("2024-02-30".parse::<CivilDate>().is_err());
        assert!("2024/01/01".parse::<CivilDate>().is_err());
        assert!("2024-1-".parse::<CivilDate>().is_err());
        assert!("".parse::<CivilDate>().is_err());
        assert!("2024-02-29".parse::<CivilDate>().is_ok());
    }

    #[test]
    fn parse_time_forms() {
        let t: TimeOfDay = "09:05".parse().unwrap();
        assert_eq!((t.hour, t.minute), (9, 5));
        assert_eq!(t.second, 0.0);
        let t: TimeOfDay = "23:59:59".parse().unwrap();
        assert_eq!(t.to_string(), "23:59:59");
        let t: TimeOfDay = "12:00:30.5".parse().unwrap();
        assert!((t.second - 30.5).abs() < 1e-12);
    }

    #[test]
    fn reject_bad_times() {
        for s in ["24:00", "12:60", "12:00:60", "12", "aa:bb", "12:00:00:00", "-1:00"] {
            assert!(s.parse::<TimeOfDay>().is_err(), "accepted {s}");
        }
    }

    #[test]
    fn time_from_seconds() {
        let t = TimeOfDay::from_seconds(45_296).unwrap();
        assert_eq!(t.to_string(), "12:34:56");
        assert_eq!(t.seconds_of_day(), 45_296.0);
        assert!(TimeOfDay::from_seconds(86_400).is_err());
    }

    #[test]
    fn datetime_parse_and_display() {
        let dt = CivilDateTime::parse("2024-01-15T10:30:00", 5.5).unwrap();
        assert_eq!(dt.to_string(), "2024-01-15T10:30:00+05:30");
        let dt = CivilDateTime::parse("2024-01-15 10:30", -3.0).unwrap();
        assert_eq!(dt.to_string(), "2024-01-15T10:30:00-03:00");
        assert!(CivilDateTime::parse("2024-01-15", 0.0).is_err());
    }

    #[test]
    fn offset_range() {
        assert!(validate_utc_offset(14.0).is_ok());
        assert!(validate_utc_offset(-14.0).is_ok());
        assert!(validate_utc_offset(14.5).is_err());
        assert!(validate_utc_offset(f64::NAN).is_err());
    }

    #[test]
    fn julian_day_round_trip_at_offset() {
        let dt = CivilDateTime::parse("2024-01-15T10:30:15", 5.5).unwrap();
        let jd = dt.to_julian_day();
        let back = CivilDateTime::from_julian_day(jd, 5.5).unwrap();
        assert_eq!(back.date, dt.date);
        assert_eq!((back.time.hour, back.time.minute), (10, 30));
        assert!((back.time.second - 15.0).abs() < 1e-3);
    }

    #[test]
    fn from_julian_day_carries_rounding_into_next_day() {
        // A hair before midnight rounds to 00:00:00.000 of the next day.
        let midnight = CivilDate::new(2024, 3, 1).unwrap().midnight_julian_day(0.0);
        let dt = CivilDateTime::from_julian_day(midnight - 1e-10, 0.0).unwrap();
        assert_eq!(dt.date, CivilDate::new(2024, 3, 1).unwrap());
        assert_eq!(dt.time.to_string(), "00:00:00");
    }

    #[test]
    fn midnight_at_offset() {
        let jd = CivilDate::new(2000, 1, 1).unwrap().midnight_julian_day(5.5);
        assert!((jd - (2_451_544.5 - 5.5 / 24.0)).abs() < 1e-9);
    }

    #[test]
    fn now_is_valid() {
        let now = CivilDateTime::now(5.5).unwrap();
        assert!(now.date.year >= 2024);
        assert!(now.time.hour < 24);
    }
}
