//! Time conversions for birth-chart computation.
//!
//! This crate provides:
//! - Julian Date ↔ proleptic-Gregorian calendar conversions
//! - ΔT (TT − UT) estimation without external tables
//! - Earth Rotation Angle, Greenwich Mean Sidereal Time, Local Sidereal Time
//!
//! All inputs and outputs are plain `f64` Julian Dates; there are no kernel
//! files to load and no fallible paths in this crate.

pub mod delta_t;
pub mod julian;
pub mod sidereal;

pub use delta_t::{delta_t_seconds, jd_ut_to_jd_tt};
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar, jd_to_decimal_year,
};
pub use sidereal::{earth_rotation_angle_rad, gmst_hours, gmst_rad, local_sidereal_time_rad};
