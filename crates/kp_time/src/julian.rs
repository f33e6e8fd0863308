//! Julian Day ↔ civil calendar conversion.
//!
//! Standard Meeus algorithm (Astronomical Algorithms, ch. 7) with the
//! Jan/Feb year carry and the 1582-10-15 Gregorian cutover applied in both
//! directions, so dates before the cutover are read as Julian calendar dates.

/// Julian Day of J2000.0 (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in a Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// First integral Julian Day number on the Gregorian calendar.
pub const GREGORIAN_CUTOVER_JDN: f64 = 2_299_161.0;

/// Julian centuries elapsed since J2000.0.
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Gregorian leap-year rule.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Julian-calendar leap-year rule (astronomical year numbering).
pub const fn is_julian_leap_year(year: i32) -> bool {
    year.rem_euclid(4) == 0
}

/// Whether a calendar date falls on or after the 1582-10-15 cutover and is
/// therefore read as Gregorian.
pub const fn is_gregorian_date(year: i32, month: u32, day: u32) -> bool {
    year > 1582 || (year == 1582 && (month > 10 || (month == 10 && day >= 15)))
}

/// Convert a local civil instant to a Julian Day (UT).
///
/// The UTC offset (hours east of Greenwich) is removed from the decimal hour
/// before the calendar part is evaluated, so the hour may fall outside 0..24
/// and carry into the neighbouring day. Fields are not validated.
pub fn instant_to_julian_day(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
    utc_offset_hours: f64,
) -> f64 {
    let decimal_hour =
        hour as f64 + minute as f64 / 60.0 + second / 3600.0 - utc_offset_hours;

    let gregorian = is_gregorian_date(year, month, day);

    let (mut y, mut m) = (year as f64, month as f64);
    if month <= 2 {
        y -= 1.0;
        m += 12.0;
    }

    let b = if gregorian {
        let a = (y / 100.0).trunc();
        2.0 - a + (a / 4.0).trunc()
    } else {
        0.0
    };

    (365.25 * (y + 4716.0)).trunc() + (30.6001 * (m + 1.0)).trunc() + day as f64 + b - 1524.5
        + decimal_hour / 24.0
}

/// Convert a Julian Day back to `(year, month, day, fractional_hour)`.
///
/// The hour is measured from the start of the civil day in the same time
/// scale the Julian Day was expressed in.
pub fn julian_day_to_instant(jd: f64) -> (i32, u32, u32, f64) {
    let jd = jd + 0.5;
    let z = jd.trunc();
    let f = jd - z;

    let a = if z < GREGORIAN_CUTOVER_JDN {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).trunc();
        z + 1.0 + alpha - (alpha / 4.0).trunc()
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).trunc();
    let d = (365.25 * c).trunc();
    let e = ((b - d) / 30.6001).trunc();

    let day = b - d - (30.6001 * e).trunc();
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day as u32, f * 24.0)
}

/// Calendar year with the elapsed fraction of that year.
///
/// The denominator is 366 days in Gregorian leap years and 365 otherwise,
/// measured from January 1 00:00 UT of the same year.
pub fn year_fraction(jd: f64) -> f64 {
    let (year, _, _, _) = julian_day_to_instant(jd);
    let jan1 = instant_to_julian_day(year, 1, 1, 0, 0, 0.0, 0.0);
    let days_in_year = if is_leap_year(year) { 366.0 } else { 365.0 };
    year as f64 + (jd - jan1) / days_in_year
}
