//! Civil birth data → continuous time and validated coordinates.

use janma_time::calendar_to_jd;

use crate::error::ChartError;

/// Civil birth data as recorded: local wall clock plus a UTC offset in
/// hours (fractional offsets like +5.5 are common).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthDetails {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub utc_offset_hours: f64,
}

impl BirthDetails {
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        utc_offset_hours: f64,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            utc_offset_hours,
        }
    }

    fn validate(&self) -> Result<(), ChartError> {
        if !(1..=12).contains(&self.month) {
            return Err(ChartError::InvalidInput("month must be 1..=12"));
        }
        if !(1..=31).contains(&self.day) {
            return Err(ChartError::InvalidInput("day must be 1..=31"));
        }
        if self.hour > 23 {
            return Err(ChartError::InvalidInput("hour must be 0..=23"));
        }
        if self.minute > 59 {
            return Err(ChartError::InvalidInput("minute must be 0..=59"));
        }
        if !self.utc_offset_hours.is_finite() {
            return Err(ChartError::InvalidInput("UTC offset must be finite"));
        }
        if self.utc_offset_hours.abs() > 24.0 {
            return Err(ChartError::InvalidInput(
                "UTC offset must be within ±24 hours",
            ));
        }
        Ok(())
    }

    /// Normalize to a continuous UT Julian Day. The UTC offset folds into
    /// the hour term, so the result may land on the neighbouring calendar
    /// day — that is the point of working in JD.
    pub fn birth_moment(&self) -> Result<BirthMoment, ChartError> {
        self.validate()?;
        let decimal_hour_ut =
            self.hour as f64 + self.minute as f64 / 60.0 - self.utc_offset_hours;
        let day_fraction = self.day as f64 + decimal_hour_ut / 24.0;
        let jd_ut = calendar_to_jd(self.year, self.month, day_fraction);
        if !jd_ut.is_finite() {
            return Err(ChartError::TimeConversion { jd: jd_ut });
        }
        Ok(BirthMoment { jd_ut })
    }
}

/// The birth moment as a UT Julian Day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthMoment {
    pub jd_ut: f64,
}

/// Validated geographic location. Immutable once constructed; longitude
/// is folded into [−180, 180), so `lon` and `lon + 360` name the same
/// place and the same chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPosition {
    latitude_deg: f64,
    longitude_deg: f64,
}

impl GeoPosition {
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, ChartError> {
        if !latitude_deg.is_finite() {
            return Err(ChartError::InvalidInput("latitude must be finite"));
        }
        if !longitude_deg.is_finite() {
            return Err(ChartError::InvalidInput("longitude must be finite"));
        }
        if !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(ChartError::InvalidInput("latitude must be in [−90, 90]"));
        }
        let longitude_deg = (longitude_deg + 180.0).rem_euclid(360.0) - 180.0;
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }

    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    /// East-positive longitude in [−180, 180).
    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }
}
