//! Error taxonomy for chart computation.
//!
//! Every failure aborts the whole chart: a wrong-but-plausible chart (an
//! ascendant silently defaulting to 0° relabels every house) is strictly
//! worse than a visible error, so nothing here is ever swallowed or
//! replaced by a default.

use std::error::Error;
use std::fmt::{Display, Formatter};

use janma_ephem::{EphemError, InitError};

use crate::graha::Graha;

/// Errors from chart computation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// A user-supplied value is missing, non-finite or out of range.
    InvalidInput(&'static str),
    /// The Julian Day conversion produced a non-finite value.
    TimeConversion { jd: f64 },
    /// The ephemeris capability failed to initialize.
    EngineInit(InitError),
    /// A single body query failed; the chart names the body and aborts.
    EphemerisQuery { graha: Graha, source: EphemError },
    /// Horizon trigonometry produced a non-finite intermediate.
    AscendantComputation(&'static str),
    /// Invariant violation inside the chart pipeline.
    Internal(&'static str),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::TimeConversion { jd } => {
                write!(f, "Julian Day conversion produced {jd}")
            }
            Self::EngineInit(e) => write!(f, "engine init failed: {e}"),
            Self::EphemerisQuery { graha, source } => {
                write!(f, "ephemeris query failed for {}: {source}", graha.name())
            }
            Self::AscendantComputation(stage) => {
                write!(f, "ascendant computation failed: {stage}")
            }
            Self::Internal(msg) => write!(f, "internal error: {msg}"),
        }
    }
}

impl Error for ChartError {}

impl From<InitError> for ChartError {
    fn from(e: InitError) -> Self {
        Self::EngineInit(e)
    }
}
