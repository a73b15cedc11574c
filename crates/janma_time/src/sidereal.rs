//! Earth Rotation Angle and Greenwich Mean Sidereal Time.
//!
//! GMST anchors the meridian to the equinox, which is what turns a birth
//! moment into a horizon orientation. Callers pass UT Julian Dates; the
//! sub-second UT1 − UTC offset is ignored, which costs well under an
//! arcsecond of sidereal rotation.
//!
//! Sources: IERS Conventions 2010 Eq. 5.15 (ERA); Capitaine et al. 2003,
//! Table 2 (GMST polynomial).

use std::f64::consts::{PI, TAU};

use crate::julian::J2000_JD;

const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Earth Rotation Angle in radians, range [0, 2π).
///
/// θ(Du) = 2π (0.7790572732640 + 1.00273781191135448 Du),
/// Du = JD_UT − 2451545.0.
pub fn earth_rotation_angle_rad(jd_ut: f64) -> f64 {
    let du = jd_ut - J2000_JD;
    (TAU * (0.779_057_273_264_0 + 1.002_737_811_911_354_6 * du)).rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time in radians, range [0, 2π).
///
/// GMST = ERA + the Capitaine et al. 2003 accumulated-precession
/// polynomial in UT centuries since J2000.0.
pub fn gmst_rad(jd_ut: f64) -> f64 {
    let era = earth_rotation_angle_rad(jd_ut);
    let t = (jd_ut - J2000_JD) / 36_525.0;
    let t2 = t * t;

    let poly_arcsec = 0.014506
        + 4612.156534 * t
        + 1.3915817 * t2
        - 0.00000044 * t2 * t
        - 0.000029956 * t2 * t2
        - 0.0000000368 * t2 * t2 * t;

    (era + poly_arcsec * ARCSEC_TO_RAD).rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time in hours, range [0, 24).
///
/// The horizon solver works in `gmst × 15 + longitude` degrees, so hours
/// is the convenient unit at the seam.
pub fn gmst_hours(jd_ut: f64) -> f64 {
    gmst_rad(jd_ut) * 24.0 / TAU
}

/// Local Sidereal Time from GMST and east longitude, radians in [0, 2π).
pub fn local_sidereal_time_rad(gmst: f64, longitude_east_rad: f64) -> f64 {
    (gmst + longitude_east_rad).rem_euclid(TAU)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gmst_at_2000_jan_1_midnight() {
        // 2000-Jan-01 0h UT: GMST = 6h 39m 52.3s
        let h = gmst_hours(2_451_544.5);
        assert!((h - 6.664_52).abs() < 1e-4, "GMST = {h} h");
    }

    #[test]
    fn gmst_scenario_golden() {
        // 2000-Jan-01 06:30 UT
        let h = gmst_hours(2_451_544.770_833_333_5);
        assert!((h - 13.182_316_33).abs() < 1e-6, "GMST = {h} h");
    }

    #[test]
    fn era_at_j2000() {
        let deg = earth_rotation_angle_rad(J2000_JD).to_degrees();
        assert!((deg - 280.46).abs() < 0.1, "ERA = {deg}°");
    }

    #[test]
    fn sidereal_day_shorter_than_solar() {
        // GMST gains ~3m56.6s per solar day
        let h0 = gmst_hours(2_451_544.5);
        let h1 = gmst_hours(2_451_545.5);
        let gain_seconds = ((h1 - h0).rem_euclid(24.0)) * 3600.0;
        assert!(
            (gain_seconds - 236.6).abs() < 1.0,
            "daily gain = {gain_seconds} s"
        );
    }

    #[test]
    fn outputs_stay_in_range() {
        for &jd in &[2_415_020.5, 2_451_544.5, 2_460_000.25, 2_488_069.5] {
            let era = earth_rotation_angle_rad(jd);
            let g = gmst_rad(jd);
            assert!((0.0..TAU).contains(&era));
            assert!((0.0..TAU).contains(&g));
            assert!((0.0..24.0).contains(&gmst_hours(jd)));
        }
    }

    #[test]
    fn lst_wraps_longitude() {
        let lst = local_sidereal_time_rad(6.0, PI);
        assert!((lst - (6.0 + PI).rem_euclid(TAU)).abs() < 1e-15);
    }
}
