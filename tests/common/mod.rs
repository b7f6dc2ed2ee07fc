//! Common test utilities for integration tests.

#![allow(dead_code)]

use impact_effects::params::ImpactParameters;
use impact_effects::types::TargetType;

/// Stony impactor (3000 kg/m³) with the given size, speed and angle.
pub fn stony_impact(
    diameter_m: f64,
    velocity_km_s: f64,
    angle_deg: f64,
    target_type: TargetType,
) -> ImpactParameters {
    ImpactParameters {
        diameter_m,
        density_kg_m3: 3000.0,
        velocity_km_s,
        angle_deg,
        composition: "stone".to_string(),
        target_type,
        ..Default::default()
    }
}

/// Tunguska-like airburst: 50 m at 15 km/s, 45°, land.
pub fn scenario_a() -> ImpactParameters {
    stony_impact(50.0, 15.0, 45.0, TargetType::Land)
}

/// Chicxulub-like extinction event: 10 km at 20 km/s, 60°, land.
pub fn scenario_b() -> ImpactParameters {
    stony_impact(10_000.0, 20.0, 60.0, TargetType::Land)
}

/// Deep-ocean impact: 500 m at 25 km/s, 45°.
pub fn scenario_c() -> ImpactParameters {
    stony_impact(500.0, 25.0, 45.0, TargetType::Ocean)
}
