//! The analytic ephemeris engine.

use janma_time::{J2000_JD, jd_ut_to_jd_tt};

use janma_frames::{normalize_deg, signed_delta_deg, true_obliquity_deg};

use crate::ayanamsha::{AyanamshaSystem, ayanamsha_mean_deg};
use crate::error::{EphemError, InitError};
use crate::moon::geocentric_moon;
use crate::node::{NodeMode, ascending_node_deg};
use crate::planets::{VsopBody, planet_geocentric, sun_geocentric};
use crate::{BodyState, Ephemeris, QueryTarget, Zodiac};

/// Kilometers per astronomical unit.
const AU_KM: f64 = 149_597_870.7;

/// Mean Earth–Moon distance in AU, reported as the node's distance.
const LUNAR_DISTANCE_AU: f64 = 385_000.56 / AU_KM;

/// Fitted epoch range of the series stack: 1700-Jan-01 .. 2300-Jan-01 UT.
pub const JD_MIN_SUPPORTED: f64 = 2_341_972.5;
pub const JD_MAX_SUPPORTED: f64 = 2_561_117.5;

/// Engine configuration, validated once at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EphemConfig {
    /// Mean or true ascending node for Rahu queries.
    pub node_mode: NodeMode,
    /// Half-window in days for finite-difference speeds.
    pub speed_step_days: f64,
}

impl Default for EphemConfig {
    fn default() -> Self {
        Self {
            node_mode: NodeMode::True,
            speed_step_days: 0.05,
        }
    }
}

impl EphemConfig {
    fn validate(&self) -> Result<(), InitError> {
        if !self.speed_step_days.is_finite() {
            return Err(InitError::InvalidConfig("speed_step_days must be finite"));
        }
        if self.speed_step_days <= 0.0 || self.speed_step_days > 1.0 {
            return Err(InitError::InvalidConfig(
                "speed_step_days must be in (0, 1] days",
            ));
        }
        Ok(())
    }
}

/// Analytic ephemeris: VSOP87C planets, truncated lunisolar Moon and node.
///
/// Construction performs no I/O and queries take `&self`, so one engine
/// can be shared freely across threads (`Send + Sync`); the zodiac frame
/// is a per-query parameter rather than engine state.
#[derive(Debug, Clone)]
pub struct AnalyticEphemeris {
    config: EphemConfig,
}

impl AnalyticEphemeris {
    pub fn new(config: EphemConfig) -> Result<Self, InitError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EphemConfig {
        &self.config
    }

    /// Tropical position of one body: `(longitude_deg, latitude_deg,
    /// distance_au)` at `jd_ut`.
    fn tropical_position(&self, jd_ut: f64, target: QueryTarget) -> (f64, f64, f64) {
        let jd_tt = jd_ut_to_jd_tt(jd_ut);
        let t = (jd_tt - J2000_JD) / 36_525.0;
        match target {
            QueryTarget::Sun => sun_geocentric(jd_tt),
            QueryTarget::Moon => {
                let (lon, lat, dist_km) = geocentric_moon(t);
                (lon, lat, dist_km / AU_KM)
            }
            QueryTarget::Node => (
                ascending_node_deg(t, self.config.node_mode),
                0.0,
                LUNAR_DISTANCE_AU,
            ),
            QueryTarget::Mercury => planet_geocentric(VsopBody::Mercury, jd_tt),
            QueryTarget::Venus => planet_geocentric(VsopBody::Venus, jd_tt),
            QueryTarget::Mars => planet_geocentric(VsopBody::Mars, jd_tt),
            QueryTarget::Jupiter => planet_geocentric(VsopBody::Jupiter, jd_tt),
            QueryTarget::Saturn => planet_geocentric(VsopBody::Saturn, jd_tt),
        }
    }

    /// Longitude in the requested zodiac at `jd_ut`.
    fn longitude_in_zodiac(&self, jd_ut: f64, target: QueryTarget, zodiac: Zodiac) -> f64 {
        let (lon, _, _) = self.tropical_position(jd_ut, target);
        match zodiac {
            Zodiac::Tropical => lon,
            Zodiac::Sidereal(system) => {
                normalize_deg(lon - self.ayanamsha_deg(jd_ut, system))
            }
        }
    }
}

impl Ephemeris for AnalyticEphemeris {
    fn body_state(
        &self,
        jd_ut: f64,
        target: QueryTarget,
        zodiac: Zodiac,
    ) -> Result<BodyState, EphemError> {
        if !jd_ut.is_finite() {
            return Err(EphemError::InvalidEpoch);
        }
        let step = self.config.speed_step_days;
        if jd_ut - step < JD_MIN_SUPPORTED || jd_ut + step > JD_MAX_SUPPORTED {
            return Err(EphemError::EpochOutOfRange { jd_ut });
        }

        let (tropical_lon, latitude_deg, distance_au) = self.tropical_position(jd_ut, target);
        let longitude_deg = match zodiac {
            Zodiac::Tropical => tropical_lon,
            Zodiac::Sidereal(system) => {
                normalize_deg(tropical_lon - self.ayanamsha_deg(jd_ut, system))
            }
        };

        let before = self.longitude_in_zodiac(jd_ut - step, target, zodiac);
        let after = self.longitude_in_zodiac(jd_ut + step, target, zodiac);
        let speed_deg_per_day = signed_delta_deg(after, before) / (2.0 * step);

        let state = BodyState {
            longitude_deg,
            latitude_deg,
            distance_au,
            speed_deg_per_day,
        };
        if !(state.longitude_deg.is_finite()
            && state.latitude_deg.is_finite()
            && state.distance_au.is_finite()
            && state.speed_deg_per_day.is_finite())
        {
            return Err(EphemError::NonFinite(target.name()));
        }
        Ok(state)
    }

    fn sidereal_time_hours(&self, jd_ut: f64) -> f64 {
        janma_time::gmst_hours(jd_ut)
    }

    fn ayanamsha_deg(&self, jd_ut: f64, system: AyanamshaSystem) -> f64 {
        let t = (jd_ut_to_jd_tt(jd_ut) - J2000_JD) / 36_525.0;
        ayanamsha_mean_deg(system, t)
    }

    fn true_obliquity_deg(&self, jd_ut: f64) -> f64 {
        let t = (jd_ut_to_jd_tt(jd_ut) - J2000_JD) / 36_525.0;
        true_obliquity_deg(t)
    }
}
