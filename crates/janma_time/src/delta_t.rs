//! ΔT (TT − UT) estimation from polynomial expressions.
//!
//! Planetary and lunar series run on Terrestrial Time, while civil birth
//! data is recorded in UT. ΔT bridges the two without leap-second or EOP
//! tables, keeping the engine free of external data files.
//!
//! Polynomials: Espenak & Meeus 2006 (NASA eclipse publications), one
//! segment per historical era, with the Morrison & Stephenson 2004
//! long-term parabola outside the fitted range.

use crate::julian::jd_to_decimal_year;

/// ΔT = TT − UT in seconds at the given decimal year.
pub fn delta_t_seconds(year: f64) -> f64 {
    if (2005.0..2050.0).contains(&year) {
        let t = year - 2000.0;
        return 62.92 + 0.32217 * t + 0.005589 * t * t;
    }
    if (1986.0..2005.0).contains(&year) {
        let t = year - 2000.0;
        let t2 = t * t;
        let t3 = t2 * t;
        let t4 = t3 * t;
        let t5 = t4 * t;
        return 63.86 + 0.3345 * t - 0.060374 * t2
            + 0.0017275 * t3
            + 0.000651814 * t4
            + 0.00002373599 * t5;
    }
    if (1961.0..1986.0).contains(&year) {
        let t = year - 1975.0;
        return 45.45 + 1.067 * t - t * t / 260.0 - t * t * t / 718.0;
    }
    if (1941.0..1961.0).contains(&year) {
        let t = year - 1950.0;
        return 29.07 + 0.407 * t - t * t / 233.0 + t * t * t / 2547.0;
    }
    if (1920.0..1941.0).contains(&year) {
        let t = year - 1920.0;
        return 21.20 + 0.84493 * t - 0.076100 * t * t + 0.0020936 * t * t * t;
    }
    if (1900.0..1920.0).contains(&year) {
        let t = year - 1900.0;
        let t2 = t * t;
        return -2.79 + 1.494119 * t - 0.0598939 * t2 + 0.0061966 * t2 * t
            - 0.000197 * t2 * t2;
    }
    if (2050.0..2150.0).contains(&year) {
        let u = (year - 1820.0) / 100.0;
        return -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - year);
    }
    // Long-term parabola (Morrison & Stephenson 2004)
    let u = (year - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

/// Convert a UT Julian Date to a TT Julian Date via the ΔT estimate.
pub fn jd_ut_to_jd_tt(jd_ut: f64) -> f64 {
    jd_ut + delta_t_seconds(jd_to_decimal_year(jd_ut)) / crate::julian::SECONDS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_2000_about_64_seconds() {
        let dt = delta_t_seconds(2000.0);
        assert!((dt - 63.86).abs() < 0.5, "ΔT(2000) = {dt}");
    }

    #[test]
    fn year_1990_about_57_seconds() {
        let dt = delta_t_seconds(1990.0);
        assert!((dt - 56.9).abs() < 1.5, "ΔT(1990) = {dt}");
    }

    #[test]
    fn year_2020_about_70_seconds() {
        let dt = delta_t_seconds(2020.0);
        assert!((dt - 70.0).abs() < 3.0, "ΔT(2020) = {dt}");
    }

    #[test]
    fn positive_over_twentieth_and_twentyfirst_century() {
        let mut year = 1905.0;
        while year < 2100.0 {
            assert!(delta_t_seconds(year) > 0.0, "ΔT({year}) not positive");
            year += 1.0;
        }
    }

    #[test]
    fn no_large_jumps_at_segment_boundaries() {
        for &boundary in &[1920.0, 1941.0, 1961.0, 1986.0, 2005.0, 2050.0] {
            let below = delta_t_seconds(boundary - 0.01);
            let above = delta_t_seconds(boundary + 0.01);
            assert!(
                (below - above).abs() < 2.0,
                "ΔT jump at {boundary}: {below} vs {above}"
            );
        }
    }

    #[test]
    fn jd_tt_slightly_ahead_of_ut() {
        let jd_ut = 2_451_544.770_833_333_5;
        let jd_tt = jd_ut_to_jd_tt(jd_ut);
        let dt_days = jd_tt - jd_ut;
        assert!(dt_days > 0.0);
        assert!((dt_days * 86_400.0 - 63.86).abs() < 0.5);
    }

    #[test]
    fn distant_past_uses_parabola() {
        // ΔT grows quadratically away from the telescopic era
        assert!(delta_t_seconds(1000.0) > 1000.0);
        assert!(delta_t_seconds(0.0) > 9000.0);
    }
}
