//! Test utilities for impact effect tests.
//!
//! Provides fixtures for building impact parameters and assertions for
//! verifying invariants of the derived quantities.

use crate::outcome::ImpactResult;
use crate::params::ImpactParameters;
use crate::types::TargetType;

/// Fixtures for creating test impact parameters.
pub mod fixtures {
    use super::*;

    /// Stony (3000 kg/m³) impactor striking land.
    pub fn stony_land(diameter_m: f64, velocity_km_s: f64, angle_deg: f64) -> ImpactParameters {
        ImpactParameters {
            diameter_m,
            density_kg_m3: 3000.0,
            velocity_km_s,
            angle_deg,
            target_type: TargetType::Land,
            ..Default::default()
        }
    }

    /// Stony (3000 kg/m³) impactor striking the ocean.
    pub fn stony_ocean(diameter_m: f64, velocity_km_s: f64, angle_deg: f64) -> ImpactParameters {
        ImpactParameters {
            target_type: TargetType::Ocean,
            ..stony_land(diameter_m, velocity_km_s, angle_deg)
        }
    }
}

/// Assertions for verifying invariants of impact results.
pub mod assertions {
    use super::*;

    /// Assert that every size and energy quantity is non-negative.
    ///
    /// # Panics
    /// Panics naming the first negative quantity.
    pub fn assert_non_negative(result: &ImpactResult) {
        for (name, value) in result.quantities() {
            assert!(value >= 0.0, "{name} should be non-negative, got {value:.6e}");
        }
    }

    /// Assert that tsunami heights decrease with distance.
    ///
    /// # Panics
    /// Panics if the result has no tsunami block or heights are out of order.
    pub fn assert_tsunami_decays(result: &ImpactResult) {
        let tsunami = result
            .tsunami
            .as_ref()
            .expect("ocean impact should carry tsunami heights");
        let heights = [
            tsunami.height_10km,
            tsunami.height_100km,
            tsunami.height_500km,
            tsunami.height_1000km,
        ];
        for pair in heights.windows(2) {
            assert!(
                pair[0] >= pair[1],
                "Tsunami heights should decrease with distance: {heights:?}"
            );
        }
    }
}
