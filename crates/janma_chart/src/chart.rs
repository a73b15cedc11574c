//! Full-chart orchestration.
//!
//! Normalizes the civil input, queries the catalog, solves the horizon,
//! and maps the houses. Any stage failing aborts the whole computation;
//! a `Chart` is always complete.

use janma_ephem::{AyanamshaSystem, Ephemeris};

use crate::bhava::{Bhava, house_cusps_deg, whole_sign_bhavas};
use crate::error::ChartError;
use crate::input::{BirthDetails, BirthMoment, GeoPosition};
use crate::lagna::{LagnaResult, compute_lagna};
use crate::positions::{GrahaPosition, graha_positions};

/// Chart-level options.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChartOptions {
    /// Sidereal reference system for all longitudes (default Lahiri).
    pub ayanamsha: AyanamshaSystem,
}

/// A complete sidereal birth chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub moment: BirthMoment,
    pub lagna: LagnaResult,
    /// All nine grahas in catalog order.
    pub grahas: Vec<GrahaPosition>,
    /// The twelve whole-sign houses, house 1 first.
    pub bhavas: [Bhava; 12],
    /// Starting longitude of each house.
    pub house_cusps: [f64; 12],
}

/// Compute a chart against a caller-supplied capability.
pub fn compute_chart<E: Ephemeris>(
    ephem: &E,
    details: &BirthDetails,
    geo: &GeoPosition,
    options: &ChartOptions,
) -> Result<Chart, ChartError> {
    let moment = details.birth_moment()?;
    let grahas = graha_positions(ephem, moment, options.ayanamsha)?;
    let lagna = compute_lagna(ephem, moment, geo, options.ayanamsha)?;
    let bhavas = whole_sign_bhavas(lagna.sidereal_deg, &grahas);
    let house_cusps = house_cusps_deg(lagna.sidereal_deg);
    Ok(Chart {
        moment,
        lagna,
        grahas,
        bhavas,
        house_cusps,
    })
}

/// Compute a chart through the process-wide memoized engine.
///
/// Initialization failure surfaces as [`ChartError::EngineInit`] before
/// any query is attempted.
pub fn compute_chart_global(
    details: &BirthDetails,
    geo: &GeoPosition,
    options: &ChartOptions,
) -> Result<Chart, ChartError> {
    let engine = janma_ephem::engine()?;
    compute_chart(engine, details, geo, options)
}
