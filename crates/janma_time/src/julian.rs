//! Julian Date ↔ proleptic-Gregorian calendar conversions.
//!
//! The Gregorian leap rule is applied to all years, including dates before
//! the 1582 calendar reform (proleptic Gregorian). Birth data is always
//! recorded against the civil calendar, so no Julian-calendar branch exists.
//!
//! Algorithm: Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 7, with
//! the Julian-calendar case removed.

/// Julian Date of the J2000.0 epoch (2000-Jan-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Date from a proleptic-Gregorian calendar date.
///
/// `day_fraction` is the day of month plus the fraction of the day
/// (e.g. `4.81` for the 4th at 19:26:24). The fraction may be negative or
/// exceed the month length; the result stays continuous, which lets callers
/// fold a UTC-offset correction directly into the hour term.
///
/// The result is in the same time scale as the input (UT in, UT out).
pub fn calendar_to_jd(year: i32, month: u32, day_fraction: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let y = y as f64;
    let m = m as f64;

    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day_fraction + b - 1524.5
}

/// Proleptic-Gregorian calendar date from a Julian Date.
///
/// Returns `(year, month, day_fraction)`. Inverse of [`calendar_to_jd`] for
/// day fractions within the month.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;

    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_fraction = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day_fraction)
}

/// Decimal year for a Julian Date, good to well under a day.
///
/// Used to feed the ΔT polynomials, which vary on decade scales.
pub fn jd_to_decimal_year(jd: f64) -> f64 {
    2000.0 + (jd - 2_451_544.5) / 365.2425
}
