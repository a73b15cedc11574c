//! Whole-sign bhavas (houses).
//!
//! House 1 spans the whole sign holding the ascendant; house k spans the
//! k-th sign counting from there. A graha sits in house k exactly when
//! its longitude falls in that sign, so the twelve houses partition the
//! catalog with no edge cases — the mapping is a pure, total function.

use janma_frames::normalize_deg;

use crate::graha::Graha;
use crate::positions::GrahaPosition;
use crate::rashi::{Rashi, sign_index};

/// One house: its 1-based number, its sign, and the grahas placed in it.
#[derive(Debug, Clone, PartialEq)]
pub struct Bhava {
    pub house: u8,
    pub rashi: Rashi,
    pub grahas: Vec<Graha>,
}

/// Assign all grahas to the 12 whole-sign houses.
pub fn whole_sign_bhavas(
    sidereal_asc_deg: f64,
    positions: &[GrahaPosition],
) -> [Bhava; 12] {
    let asc_sign = sign_index(sidereal_asc_deg);
    std::array::from_fn(|i| {
        let rashi_index = (asc_sign + i) % 12;
        let grahas = positions
            .iter()
            .filter(|p| sign_index(p.longitude_deg) == rashi_index)
            .map(|p| p.graha)
            .collect();
        Bhava {
            house: (i + 1) as u8,
            rashi: Rashi::from_index(rashi_index as u8),
            grahas,
        }
    })
}

/// Starting longitudes of the 12 houses: 30° multiples beginning at the
/// ascendant's sign boundary.
pub fn house_cusps_deg(sidereal_asc_deg: f64) -> [f64; 12] {
    let start = sign_index(sidereal_asc_deg) as f64 * 30.0;
    std::array::from_fn(|i| normalize_deg(start + i as f64 * 30.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(graha: Graha, longitude_deg: f64) -> GrahaPosition {
        GrahaPosition {
            graha,
            longitude_deg,
            speed_deg_per_day: 1.0,
        }
    }

    #[test]
    fn house_one_holds_the_ascendant_sign() {
        let bhavas = whole_sign_bhavas(343.18, &[]);
        assert_eq!(bhavas[0].house, 1);
        assert_eq!(bhavas[0].rashi, Rashi::Pisces);
    }

    #[test]
    fn signs_are_a_cyclic_permutation() {
        let bhavas = whole_sign_bhavas(95.0, &[]); // Cancer ascendant
        for (i, b) in bhavas.iter().enumerate() {
            assert_eq!(b.house as usize, i + 1);
            assert_eq!(b.rashi.index() as usize, (3 + i) % 12);
        }
        // 7th house opposes the 1st
        assert_eq!(bhavas[6].rashi.index(), (bhavas[0].rashi.index() + 6) % 12);
    }

    #[test]
    fn every_graha_in_exactly_one_house() {
        let positions = [
            position(Graha::Sun, 256.5),
            position(Graha::Moon, 196.7),
            position(Graha::Mars, 304.0),
            position(Graha::Rahu, 339.9),
            position(Graha::Ketu, 159.9),
        ];
        let bhavas = whole_sign_bhavas(343.18, &positions);
        let total: usize = bhavas.iter().map(|b| b.grahas.len()).sum();
        assert_eq!(total, positions.len());
        for p in &positions {
            let hits = bhavas
                .iter()
                .filter(|b| b.grahas.contains(&p.graha))
                .count();
            assert_eq!(hits, 1, "{:?} in {hits} houses", p.graha);
        }
    }

    #[test]
    fn graha_in_the_ascendant_sign_is_in_house_one() {
        let positions = [position(Graha::Venus, 350.0)];
        let bhavas = whole_sign_bhavas(343.18, &positions); // Pisces rising
        assert_eq!(bhavas[0].grahas, vec![Graha::Venus]);
    }

    #[test]
    fn sign_boundary_belongs_to_the_opening_house() {
        // Exactly 0° Aries with Aries rising: house 1, not house 12
        let positions = [position(Graha::Sun, 0.0)];
        let bhavas = whole_sign_bhavas(12.0, &positions);
        assert_eq!(bhavas[0].grahas, vec![Graha::Sun]);
    }

    #[test]
    fn cusps_start_at_the_sign_boundary() {
        let cusps = house_cusps_deg(343.18);
        assert_eq!(cusps[0], 330.0);
        for (i, c) in cusps.iter().enumerate() {
            assert_eq!(*c, (330.0 + 30.0 * i as f64) % 360.0);
        }
    }

    #[test]
    fn cusps_for_aries_ascendant() {
        let cusps = house_cusps_deg(12.0);
        assert_eq!(cusps[0], 0.0);
        assert_eq!(cusps[11], 330.0);
    }
}
