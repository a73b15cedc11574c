//! The lagna (ascendant): ecliptic longitude of the eastern horizon.
//!
//! Computed from first principles rather than through any packaged house
//! routine: true obliquity of date, GMST, RAMC, then the standard
//! spherical-astronomy arctangent, with the ayanamsha applied last.
//!
//! The obliquity is a tropical quantity — applying a sidereal correction
//! to it would double-correct the final longitude.
//!
//! Every intermediate is checked for finiteness. There is no fallback
//! value: a defaulted ascendant would relabel all twelve houses while
//! looking perfectly valid.

use janma_ephem::{AyanamshaSystem, Ephemeris};

use janma_frames::normalize_deg;

use crate::error::ChartError;
use crate::input::{BirthMoment, GeoPosition};
use crate::rashi::Rashi;

/// Ascendant longitudes: tropical, the applied ayanamsha, and sidereal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LagnaResult {
    pub tropical_deg: f64,
    pub ayanamsha_deg: f64,
    /// `(tropical − ayanamsha)` normalized to [0, 360).
    pub sidereal_deg: f64,
}

impl LagnaResult {
    pub fn rashi(&self) -> Rashi {
        Rashi::of_longitude(self.sidereal_deg)
    }
}

/// Sidereal ascendant at the birth moment and place.
pub fn compute_lagna<E: Ephemeris>(
    ephem: &E,
    moment: BirthMoment,
    geo: &GeoPosition,
    system: AyanamshaSystem,
) -> Result<LagnaResult, ChartError> {
    let eps_deg = ephem.true_obliquity_deg(moment.jd_ut);
    if !eps_deg.is_finite() {
        return Err(ChartError::AscendantComputation("true obliquity not finite"));
    }

    let gmst_hours = ephem.sidereal_time_hours(moment.jd_ut);
    if !gmst_hours.is_finite() {
        return Err(ChartError::AscendantComputation("sidereal time not finite"));
    }

    // Right ascension of the meridian: sidereal rotation plus east longitude.
    let ramc_deg = normalize_deg(gmst_hours * 15.0 + geo.longitude_deg());

    let ramc = ramc_deg.to_radians();
    let eps = eps_deg.to_radians();
    let lat = geo.latitude_deg().to_radians();

    let y = ramc.cos();
    let x = -ramc.sin() * eps.cos() - lat.tan() * eps.sin();
    let tropical_deg = normalize_deg(y.atan2(x).to_degrees());
    if !tropical_deg.is_finite() {
        return Err(ChartError::AscendantComputation(
            "horizon arctangent not finite",
        ));
    }

    let ayanamsha_deg = ephem.ayanamsha_deg(moment.jd_ut, system);
    if !ayanamsha_deg.is_finite() {
        return Err(ChartError::AscendantComputation("ayanamsha not finite"));
    }

    let sidereal_deg = normalize_deg(tropical_deg - ayanamsha_deg);
    if !sidereal_deg.is_finite() {
        return Err(ChartError::AscendantComputation(
            "sidereal ascendant not finite",
        ));
    }

    Ok(LagnaResult {
        tropical_deg,
        ayanamsha_deg,
        sidereal_deg,
    })
}
