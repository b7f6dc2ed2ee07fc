//! Fireball and airblast radii from nuclear-yield scaling.
//!
//! Blast radii follow cube-root yield scaling with a coefficient chosen
//! by overpressure band. The bands are a lookup table evaluated by first
//! match, strongest overpressure first.

use crate::types::METERS_PER_KM;

/// Fireball radius coefficient (meters per MT^0.4).
const FIREBALL_COEFFICIENT_M: f64 = 440.0;

/// Fireball yield exponent.
const FIREBALL_EXPONENT: f64 = 0.4;

/// Overpressure for total destruction of reinforced structures (psi).
pub const TOTAL_DESTRUCTION_PSI: f64 = 20.0;

/// Overpressure at which most buildings collapse (psi).
pub const SEVERE_DAMAGE_PSI: f64 = 5.0;

/// Overpressure at which windows break (psi).
pub const MODERATE_DAMAGE_PSI: f64 = 1.0;

/// One row of the overpressure scaling table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverpressureBand {
    /// Lowest overpressure (psi) this band applies to.
    pub min_psi: f64,
    /// Radius coefficient (km per MT^(1/3)).
    pub coefficient: f64,
}

/// Overpressure bands, strongest first. The last band catches everything
/// below 1 psi.
pub const BLAST_BANDS: [OverpressureBand; 4] = [
    OverpressureBand { min_psi: 20.0, coefficient: 0.28 },
    OverpressureBand { min_psi: 5.0, coefficient: 0.62 },
    OverpressureBand { min_psi: 1.0, coefficient: 2.2 },
    OverpressureBand { min_psi: f64::NEG_INFINITY, coefficient: 5.0 },
];

/// Fireball radius.
///
/// R = 440 · MT^0.4
///
/// # Returns
/// Radius in meters
#[inline]
pub fn fireball_radius(megatons: f64) -> f64 {
    FIREBALL_COEFFICIENT_M * megatons.powf(FIREBALL_EXPONENT)
}

/// Select the scaling band for an overpressure threshold.
pub fn overpressure_band(overpressure_psi: f64) -> OverpressureBand {
    BLAST_BANDS
        .iter()
        .copied()
        .find(|band| overpressure_psi >= band.min_psi)
        // NaN compares false against every band; treat it as the weakest.
        .unwrap_or(BLAST_BANDS[BLAST_BANDS.len() - 1])
}

/// Radius at which the blast wave falls to the given overpressure.
///
/// R = c(psi) · MT^(1/3) · 1000
///
/// # Arguments
/// * `megatons` - TNT-equivalent yield
/// * `overpressure_psi` - Overpressure threshold (psi)
///
/// # Returns
/// Radius in meters
pub fn blast_radius(megatons: f64, overpressure_psi: f64) -> f64 {
    overpressure_band(overpressure_psi).coefficient * megatons.cbrt() * METERS_PER_KM
}

/// Blast radii at the three standard damage thresholds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlastRadii {
    /// 20 psi radius (meters)
    pub total_destruction_m: f64,
    /// 5 psi radius (meters)
    pub severe_damage_m: f64,
    /// 1 psi radius (meters)
    pub moderate_damage_m: f64,
}

impl BlastRadii {
    /// Evaluate all three damage thresholds for a yield.
    pub fn from_megatons(megatons: f64) -> Self {
        Self {
            total_destruction_m: blast_radius(megatons, TOTAL_DESTRUCTION_PSI),
            severe_damage_m: blast_radius(megatons, SEVERE_DAMAGE_PSI),
            moderate_damage_m: blast_radius(megatons, MODERATE_DAMAGE_PSI),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fireball_one_megaton() {
        assert_relative_eq!(fireball_radius(1.0), 440.0, max_relative = 1e-12);
    }

    #[test]
    fn test_band_selection() {
        assert_eq!(overpressure_band(50.0).coefficient, 0.28);
        assert_eq!(overpressure_band(20.0).coefficient, 0.28);
        assert_eq!(overpressure_band(19.9).coefficient, 0.62);
        assert_eq!(overpressure_band(5.0).coefficient, 0.62);
        assert_eq!(overpressure_band(1.0).coefficient, 2.2);
    }

    #[test]
    fn test_sub_psi_band_reachable() {
        // Not used by the standard thresholds, but part of the scaling law
        assert_eq!(overpressure_band(0.5).coefficient, 5.0);
        assert_eq!(overpressure_band(0.0).coefficient, 5.0);
        assert_eq!(overpressure_band(f64::NAN).coefficient, 5.0);
        assert_relative_eq!(blast_radius(1.0, 0.5), 5000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_blast_radius_cube_root_scaling() {
        // 1000 MT -> cube root 10
        assert_relative_eq!(blast_radius(1000.0, 20.0), 2800.0, max_relative = 1e-12);
        assert_relative_eq!(blast_radius(1000.0, 5.0), 6200.0, max_relative = 1e-12);
        assert_relative_eq!(blast_radius(1000.0, 1.0), 22000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_radii_ordering() {
        let radii = BlastRadii::from_megatons(75.0);
        assert!(radii.total_destruction_m < radii.severe_damage_m);
        assert!(radii.severe_damage_m < radii.moderate_damage_m);
    }

    #[test]
    fn test_bands_ordered_strongest_first() {
        for pair in BLAST_BANDS.windows(2) {
            assert!(pair[0].min_psi > pair[1].min_psi);
            assert!(pair[0].coefficient < pair[1].coefficient);
        }
    }
}
