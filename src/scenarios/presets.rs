//! Preset scenario definitions.
//!
//! Six scenarios from a harmless airburst to a mass extinction.
//! Parameters are rounded figures from published estimates.

use crate::composition::Composition;
use crate::types::TargetType;

use super::Scenario;

/// All available preset scenarios.
pub static SCENARIOS: &[Scenario] = &[
    NEW_YORK,
    CHELYABINSK,
    TUNGUSKA,
    BARRINGER,
    PACIFIC_OCEAN,
    CHICXULUB,
];

/// Scenario 1: Default request (100 m stony body over New York).
pub static NEW_YORK: Scenario = Scenario {
    id: "new_york",
    name: "New York",
    description: "100 m stony asteroid at 20 km/s. The default impact.",
    diameter_m: 100.0,
    density_kg_m3: 3000.0,
    velocity_km_s: 20.0,
    angle_deg: 45.0,
    composition: Composition::Stone,
    target_type: TargetType::Land,
    latitude: 40.7128,
    longitude: -74.0060,
};

/// Scenario 2: Chelyabinsk (2013)
///
/// A ~20 m body entering at a shallow angle.
pub static CHELYABINSK: Scenario = Scenario {
    id: "chelyabinsk",
    name: "Chelyabinsk",
    description: "20 m stony body at a shallow 18° entry, 2013.",
    diameter_m: 20.0,
    density_kg_m3: 3000.0,
    velocity_km_s: 19.0,
    angle_deg: 18.0,
    composition: Composition::Stone,
    target_type: TargetType::Land,
    latitude: 55.15,
    longitude: 61.41,
};

/// Scenario 3: Tunguska (1908)
///
/// Megaton-class event over Siberian forest.
pub static TUNGUSKA: Scenario = Scenario {
    id: "tunguska",
    name: "Tunguska",
    description: "50 m stony body at 15 km/s over Siberia, 1908.",
    diameter_m: 50.0,
    density_kg_m3: 3000.0,
    velocity_km_s: 15.0,
    angle_deg: 45.0,
    composition: Composition::Stone,
    target_type: TargetType::Land,
    latitude: 60.0,
    longitude: 101.0,
};

/// Scenario 4: Barringer (Meteor Crater, ~50,000 years ago)
pub static BARRINGER: Scenario = Scenario {
    id: "barringer",
    name: "Barringer",
    description: "50 m iron meteorite at 12.8 km/s. Formed Meteor Crater, Arizona.",
    diameter_m: 50.0,
    density_kg_m3: 7800.0,
    velocity_km_s: 12.8,
    angle_deg: 45.0,
    composition: Composition::Iron,
    target_type: TargetType::Land,
    latitude: 35.0275,
    longitude: -111.0225,
};

/// Scenario 5: Mid-Pacific ocean impact
///
/// Demonstrates tsunami generation and decay.
pub static PACIFIC_OCEAN: Scenario = Scenario {
    id: "pacific_ocean",
    name: "Pacific Ocean",
    description: "500 m stony asteroid at 25 km/s into the open Pacific.",
    diameter_m: 500.0,
    density_kg_m3: 3000.0,
    velocity_km_s: 25.0,
    angle_deg: 45.0,
    composition: Composition::Stone,
    target_type: TargetType::Ocean,
    latitude: 0.0,
    longitude: -140.0,
};

/// Scenario 6: Chicxulub (66 million years ago)
pub static CHICXULUB: Scenario = Scenario {
    id: "chicxulub",
    name: "Chicxulub",
    description: "10 km body at 20 km/s. The dinosaur-killer.",
    diameter_m: 10_000.0,
    density_kg_m3: 3000.0,
    velocity_km_s: 20.0,
    angle_deg: 60.0,
    composition: Composition::Stone,
    target_type: TargetType::Land,
    latitude: 21.0,
    longitude: -89.0,
};
