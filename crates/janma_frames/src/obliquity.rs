//! Mean and true obliquity of the ecliptic.
//!
//! The obliquity projects the horizon onto the ecliptic in the ascendant
//! formula. It is a property of the Earth's axis relative to its orbit and
//! carries no sidereal/tropical distinction — ayanamsha must never be
//! applied to it.
//!
//! Source: IAU 2006 polynomial (Capitaine et al. 2003).

use crate::nutation::nutation_arcsec;

/// Mean obliquity of date in degrees.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let t2 = t * t;
    let arcsec = 84_381.406 - 46.836769 * t - 0.0001831 * t2 + 0.00200340 * t2 * t
        - 0.000000576 * t2 * t2
        - 0.0000000434 * t2 * t2 * t;
    arcsec / 3600.0
}

/// True obliquity of date in degrees: mean obliquity plus nutation Δε.
pub fn true_obliquity_deg(t: f64) -> f64 {
    let (_, deps) = nutation_arcsec(t);
    mean_obliquity_deg(t) + deps / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_reference_value() {
        // ε₀ = 23°26′21.406″ = 23.439279°
        let e = mean_obliquity_deg(0.0);
        assert!((e - 23.439_279_444).abs() < 1e-8, "ε₀ = {e}");
    }

    #[test]
    fn decreasing_over_centuries() {
        assert!(mean_obliquity_deg(1.0) < mean_obliquity_deg(0.0));
        assert!(mean_obliquity_deg(0.0) < mean_obliquity_deg(-1.0));
    }

    #[test]
    fn true_within_nutation_band_of_mean() {
        for &t in &[-1.0, -0.3, 0.0, 0.24, 1.0] {
            let diff_arcsec = (true_obliquity_deg(t) - mean_obliquity_deg(t)).abs() * 3600.0;
            assert!(diff_arcsec < 12.0, "Δε({t}) = {diff_arcsec}″");
        }
    }

    #[test]
    fn scenario_golden() {
        // 2000-Jan-01 06:30 UT (+ΔT): ε_true = 23.437677°
        let t = (2_451_544.771_572_4 - 2_451_545.0) / 36_525.0;
        let e = true_obliquity_deg(t);
        assert!((e - 23.437_676_6).abs() < 1e-5, "ε_true = {e}");
    }
}
