//! Scenario system for predefined impact cases.
//!
//! Provides a collection of preset scenarios spanning the full range of
//! outcomes:
//! - Airbursts and small craters (Chelyabinsk, Tunguska, Barringer)
//! - City-scale impacts (the default New York case)
//! - Ocean impacts with tsunamis
//! - Extinction-level impacts (Chicxulub)

pub mod presets;

use bevy::prelude::*;

use crate::composition::Composition;
use crate::params::ImpactParameters;
use crate::types::TargetType;

pub use presets::SCENARIOS;

/// A predefined impact configuration.
#[derive(Clone, Copy, Debug)]
pub struct Scenario {
    /// Unique identifier for the scenario.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Brief description of the scenario.
    pub description: &'static str,
    /// Impactor diameter (meters).
    pub diameter_m: f64,
    /// Bulk density (kg/m³).
    pub density_kg_m3: f64,
    /// Velocity at impact (km/s).
    pub velocity_km_s: f64,
    /// Impact angle from horizontal (degrees).
    pub angle_deg: f64,
    /// Composition class.
    pub composition: Composition,
    /// Surface struck.
    pub target_type: TargetType,
    /// Ground zero latitude (degrees).
    pub latitude: f64,
    /// Ground zero longitude (degrees).
    pub longitude: f64,
}

impl Scenario {
    /// Impact parameters for this scenario.
    pub fn parameters(&self) -> ImpactParameters {
        ImpactParameters {
            diameter_m: self.diameter_m,
            density_kg_m3: self.density_kg_m3,
            velocity_km_s: self.velocity_km_s,
            angle_deg: self.angle_deg,
            composition: self.composition.label().to_string(),
            target_type: self.target_type,
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// Look up a preset scenario by id.
pub fn get_scenario(id: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.id == id)
}

/// Resource tracking the scenario the current inputs came from.
///
/// Cleared as soon as the user edits any parameter.
#[derive(Resource, Default)]
pub struct CurrentScenario {
    /// ID of the current scenario, if the inputs are untouched.
    pub id: Option<&'static str>,
}

impl CurrentScenario {
    /// Display name of the current scenario.
    pub fn name(&self) -> &'static str {
        self.id
            .and_then(get_scenario)
            .map_or("Custom impact", |s| s.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_scenario() {
        let scenario = get_scenario("chicxulub").expect("preset exists");
        assert_eq!(scenario.name, "Chicxulub");
        assert!(get_scenario("no_such_scenario").is_none());
    }

    #[test]
    fn test_parameters_carry_composition_label() {
        let scenario = get_scenario("barringer").expect("preset exists");
        let params = scenario.parameters();
        assert_eq!(params.composition, "iron");
        assert_eq!(params.density_kg_m3, 7800.0);
    }

    #[test]
    fn test_current_scenario_name() {
        let mut current = CurrentScenario::default();
        assert_eq!(current.name(), "Custom impact");
        current.id = Some("tunguska");
        assert_eq!(current.name(), "Tunguska");
    }
}
