//! Sidereal birth-chart core.
//!
//! Turns civil birth data (date, wall-clock time, UTC offset, place) into
//! a whole-sign kundali: nine graha positions, the lagna, and the twelve
//! houses. The ephemeris capability behind it is abstract — anything
//! implementing [`janma_ephem::Ephemeris`] — with the analytic engine as
//! the production implementation.
//!
//! ```rust,ignore
//! use janma_chart::*;
//!
//! janma_ephem::init(janma_ephem::EphemConfig::default())?;
//! let details = BirthDetails::new(2000, 1, 1, 12, 0, 5.5);
//! let geo = GeoPosition::new(28.6, 77.2)?;
//! let chart = compute_chart_global(&details, &geo, &ChartOptions::default())?;
//! println!("lagna: {:.2}° ({})", chart.lagna.sidereal_deg, chart.lagna.rashi().name());
//! ```

pub mod bhava;
pub mod chart;
pub mod error;
pub mod graha;
pub mod input;
pub mod lagna;
pub mod positions;
pub mod rashi;

pub use bhava::{Bhava, house_cusps_deg, whole_sign_bhavas};
pub use chart::{Chart, ChartOptions, compute_chart, compute_chart_global};
pub use error::ChartError;
pub use graha::{ALL_GRAHAS, Graha, GrahaSource};
pub use input::{BirthDetails, BirthMoment, GeoPosition};
pub use lagna::{LagnaResult, compute_lagna};
pub use positions::{GrahaPosition, graha_positions};
pub use rashi::{ALL_RASHIS, Dms, Rashi, deg_to_dms, in_sign, sign_index};

// Re-export the capability types callers need alongside the chart API.
pub use janma_ephem::{AyanamshaSystem, Ephemeris, NodeMode};
