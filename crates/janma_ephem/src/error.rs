//! Error types for the ephemeris capability.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from engine construction or global initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InitError {
    /// Configuration rejected before any computation.
    InvalidConfig(&'static str),
    /// The global engine cell has not been initialized.
    NotInitialized,
}

impl Display for InitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid engine config: {msg}"),
            Self::NotInitialized => write!(f, "ephemeris engine not initialized"),
        }
    }
}

impl Error for InitError {}

/// Errors from a single body query.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemError {
    /// Epoch is NaN or infinite.
    InvalidEpoch,
    /// Epoch outside the fitted range of the analytic series.
    EpochOutOfRange { jd_ut: f64 },
    /// A series evaluated to a non-finite value for the named body.
    NonFinite(&'static str),
}

impl Display for EphemError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEpoch => write!(f, "epoch must be finite"),
            Self::EpochOutOfRange { jd_ut } => {
                write!(f, "epoch JD {jd_ut} outside supported range")
            }
            Self::NonFinite(body) => write!(f, "non-finite result for {body}"),
        }
    }
}

impl Error for EphemError {}
