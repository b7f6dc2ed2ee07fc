//! Property-based tests for the impact pipeline using proptest.
//!
//! These tests verify physical invariants across the full valid input range.

use proptest::prelude::*;

use crate::outcome::simulate;
use crate::params::ImpactParameters;
use crate::physics::{angle_factor, crater_diameter};
use crate::test_utils::{assertions, fixtures};
use crate::types::{GLOBAL_CATASTROPHE_MEGATONS, TargetType};

fn target_strategy() -> impl Strategy<Value = TargetType> {
    prop_oneof![Just(TargetType::Land), Just(TargetType::Ocean)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every derived quantity is non-negative for valid input.
    #[test]
    fn prop_quantities_non_negative(
        diameter_m in 1.0f64..20_000.0,
        density in 500.0f64..8000.0,
        velocity in 11.0f64..72.0,
        angle in 0.0f64..=90.0,
        target in target_strategy(),
    ) {
        let params = ImpactParameters {
            diameter_m,
            density_kg_m3: density,
            velocity_km_s: velocity,
            angle_deg: angle,
            target_type: target,
            ..Default::default()
        };
        prop_assert!(params.validate().is_ok());

        let result = simulate(&params).expect("valid input gives finite output");
        assertions::assert_non_negative(&result);
    }

    /// A vertical impact produces the largest crater for a given energy.
    #[test]
    fn prop_vertical_impact_maximizes_crater(
        energy_j in 1e12f64..1e25,
        angle in 0.0f64..=90.0,
        target in target_strategy(),
    ) {
        prop_assert!(angle_factor(angle) <= angle_factor(90.0));

        let vertical = crater_diameter(energy_j, 90.0, target);
        let tilted = crater_diameter(energy_j, angle, target);
        prop_assert!(
            tilted <= vertical,
            "Crater at {}° ({}) exceeds vertical crater ({})",
            angle, tilted, vertical
        );
    }

    /// Ocean targets always leave a smaller crater than land targets.
    #[test]
    fn prop_ocean_crater_smaller(
        diameter_m in 1.0f64..20_000.0,
        velocity in 11.0f64..72.0,
        angle in 1.0f64..=90.0,
    ) {
        let land = simulate(&fixtures::stony_land(diameter_m, velocity, angle)).expect("finite");
        let ocean = simulate(&fixtures::stony_ocean(diameter_m, velocity, angle)).expect("finite");
        prop_assert!(ocean.crater.diameter_m < land.crater.diameter_m);
    }

    /// Tsunami heights are reported if and only if the target is ocean.
    #[test]
    fn prop_tsunami_iff_ocean(
        diameter_m in 1.0f64..20_000.0,
        velocity in 11.0f64..72.0,
        target in target_strategy(),
    ) {
        let params = ImpactParameters {
            target_type: target,
            ..fixtures::stony_land(diameter_m, velocity, 45.0)
        };
        let result = simulate(&params).expect("finite");
        prop_assert_eq!(result.has_tsunami(), target == TargetType::Ocean);
        if result.has_tsunami() {
            assertions::assert_tsunami_decays(&result);
        }
    }

    /// The global catastrophe flag tracks the yield threshold exactly.
    #[test]
    fn prop_global_catastrophe_threshold(
        diameter_m in 1.0f64..20_000.0,
        velocity in 11.0f64..72.0,
    ) {
        let result = simulate(&fixtures::stony_land(diameter_m, velocity, 45.0)).expect("finite");
        prop_assert_eq!(
            result.global_catastrophe,
            result.energy.megatons_tnt > GLOBAL_CATASTROPHE_MEGATONS
        );
    }

    /// Repeated simulation yields bit-identical output.
    #[test]
    fn prop_simulation_is_deterministic(
        diameter_m in 1.0f64..20_000.0,
        velocity in 11.0f64..72.0,
        angle in 0.0f64..=90.0,
        target in target_strategy(),
    ) {
        let params = ImpactParameters {
            target_type: target,
            ..fixtures::stony_land(diameter_m, velocity, angle)
        };
        let first = simulate(&params).expect("finite");
        let second = simulate(&params).expect("finite");
        for ((name, a), (_, b)) in first.quantities().into_iter().zip(second.quantities()) {
            prop_assert_eq!(a.to_bits(), b.to_bits(), "{} differs between runs", name);
        }
        prop_assert_eq!(first, second);
    }

    /// A horizontal impact leaves no crater regardless of energy.
    #[test]
    fn prop_grazing_impact_no_crater(
        diameter_m in 1.0f64..20_000.0,
        velocity in 11.0f64..72.0,
        target in target_strategy(),
    ) {
        let params = ImpactParameters {
            target_type: target,
            ..fixtures::stony_land(diameter_m, velocity, 0.0)
        };
        let result = simulate(&params).expect("finite");
        prop_assert_eq!(result.crater.diameter_m, 0.0);
        prop_assert_eq!(result.crater.depth_m, 0.0);
        prop_assert_eq!(result.crater.volume_m3, 0.0);
    }
}

#[cfg(test)]
mod deterministic_tests {
    use super::*;

    #[test]
    fn test_fixtures_are_valid() {
        assert!(fixtures::stony_land(50.0, 15.0, 45.0).validate().is_ok());
        assert!(fixtures::stony_ocean(500.0, 25.0, 45.0).validate().is_ok());
    }
}
