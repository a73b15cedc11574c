//! The ephemeris query orchestrator.
//!
//! Walks the fixed catalog, querying each tagged-Queried graha in the
//! sidereal frame with speed output, then resolves derived grahas from
//! the results already in hand. A failing body aborts the request — a
//! partial chart is worse than no chart.

use janma_ephem::{AyanamshaSystem, Ephemeris, Zodiac};

use janma_frames::normalize_deg;

use crate::error::ChartError;
use crate::graha::{ALL_GRAHAS, Graha, GrahaSource};
use crate::input::BirthMoment;
use crate::rashi::Rashi;

/// Sidereal position of one graha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrahaPosition {
    pub graha: Graha,
    /// Sidereal ecliptic longitude in degrees, [0, 360).
    pub longitude_deg: f64,
    /// Degrees per day; negative while apparently retrograde.
    pub speed_deg_per_day: f64,
}

impl GrahaPosition {
    pub fn rashi(&self) -> Rashi {
        Rashi::of_longitude(self.longitude_deg)
    }

    pub fn is_retrograde(&self) -> bool {
        self.speed_deg_per_day < 0.0
    }
}

/// Sidereal positions of the full catalog at the birth moment.
///
/// Results come back in catalog order, all nine grahas or none.
pub fn graha_positions<E: Ephemeris>(
    ephem: &E,
    moment: BirthMoment,
    system: AyanamshaSystem,
) -> Result<Vec<GrahaPosition>, ChartError> {
    let zodiac = Zodiac::Sidereal(system);
    let mut positions: Vec<GrahaPosition> = Vec::with_capacity(ALL_GRAHAS.len());

    for graha in ALL_GRAHAS {
        match graha.source() {
            GrahaSource::Queried(target) => {
                let state = ephem
                    .body_state(moment.jd_ut, target, zodiac)
                    .map_err(|source| ChartError::EphemerisQuery { graha, source })?;
                positions.push(GrahaPosition {
                    graha,
                    longitude_deg: state.longitude_deg,
                    speed_deg_per_day: state.speed_deg_per_day,
                });
            }
            GrahaSource::Derived { from, offset_deg } => {
                // Catalog order guarantees the source was queried first.
                let Some(src) = positions.iter().find(|p| p.graha == from) else {
                    return Err(ChartError::Internal(
                        "derived graha listed before its source",
                    ));
                };
                positions.push(GrahaPosition {
                    graha,
                    longitude_deg: normalize_deg(src.longitude_deg + offset_deg),
                    speed_deg_per_day: src.speed_deg_per_day,
                });
            }
        }
    }

    Ok(positions)
}
