//! Impact outcome assembly.
//!
//! Runs every physics stage in order and collects their outputs, together
//! with an echo of the input, into one immutable [`ImpactResult`]:
//! - Energy release (mass, kinetic energy, TNT yield)
//! - Crater, fireball and blast geometry
//! - Seismic magnitude and thermal fluence
//! - Tsunami heights (ocean impacts only)
//! - Historical comparisons and the global catastrophe flag

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::classification::{hiroshima_ratio, is_global_catastrophe, nagasaki_ratio};
use crate::config::SimulationConfig;
use crate::error::ImpactError;
use crate::params::{ImpactParameters, ImpactRequest};
use crate::physics::{
    BlastRadii, CraterDimensions, TSUNAMI_DISTANCES_KM, fireball_radius, joules_to_megatons, kinetic_energy, mass,
    seismic_magnitude, thermal_flux, wave_height,
};
use crate::types::{METERS_PER_KM, meters_to_km};

/// Distances (km) at which thermal fluence is reported.
pub const THERMAL_DISTANCES_KM: [f64; 3] = [1.0, 10.0, 100.0];

/// Energy released by the impact.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnergyRelease {
    pub mass_kg: f64,
    pub kinetic_energy_j: f64,
    pub megatons_tnt: f64,
}

/// Final crater geometry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CraterEffects {
    pub diameter_m: f64,
    pub diameter_km: f64,
    pub depth_m: f64,
    /// Ejected volume (m³)
    pub volume_m3: f64,
}

impl From<CraterDimensions> for CraterEffects {
    fn from(crater: CraterDimensions) -> Self {
        Self {
            diameter_m: crater.diameter_m,
            diameter_km: meters_to_km(crater.diameter_m),
            depth_m: crater.depth_m,
            volume_m3: crater.volume_m3,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FireballEffects {
    pub radius_m: f64,
    pub radius_km: f64,
}

/// Airblast radii at 20, 5 and 1 psi.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlastEffects {
    pub total_destruction_m: f64,
    pub total_destruction_km: f64,
    pub severe_damage_m: f64,
    pub severe_damage_km: f64,
    pub moderate_damage_m: f64,
    pub moderate_damage_km: f64,
}

impl From<BlastRadii> for BlastEffects {
    fn from(radii: BlastRadii) -> Self {
        Self {
            total_destruction_m: radii.total_destruction_m,
            total_destruction_km: meters_to_km(radii.total_destruction_m),
            severe_damage_m: radii.severe_damage_m,
            severe_damage_km: meters_to_km(radii.severe_damage_m),
            moderate_damage_m: radii.moderate_damage_m,
            moderate_damage_km: meters_to_km(radii.moderate_damage_m),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeismicEffects {
    pub magnitude: f64,
}

/// Thermal fluence (J/m²) at 1, 10 and 100 km.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThermalEffects {
    pub flux_1km_j_m2: f64,
    pub flux_10km_j_m2: f64,
    pub flux_100km_j_m2: f64,
}

impl ThermalEffects {
    fn from_energy(energy_j: f64) -> Self {
        let [near, mid, far] = THERMAL_DISTANCES_KM.map(|km| thermal_flux(energy_j, km * METERS_PER_KM));
        Self {
            flux_1km_j_m2: near,
            flux_10km_j_m2: mid,
            flux_100km_j_m2: far,
        }
    }
}

/// Tsunami wave heights (meters) at 10, 100, 500 and 1000 km.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TsunamiEffects {
    pub height_10km: f64,
    pub height_100km: f64,
    pub height_500km: f64,
    pub height_1000km: f64,
}

impl TsunamiEffects {
    fn from_megatons(megatons: f64, water_depth_m: f64) -> Self {
        let [near, mid, far, farthest] =
            TSUNAMI_DISTANCES_KM.map(|km| wave_height(megatons, km, water_depth_m));
        Self {
            height_10km: near,
            height_100km: mid,
            height_500km: far,
            height_1000km: farthest,
        }
    }
}

/// Yield as multiples of historical nuclear detonations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comparisons {
    pub hiroshima_equivalent: f64,
    pub nagasaki_equivalent: f64,
}

/// Complete set of derived impact effects.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImpactResult {
    /// Parameters the result was computed from.
    pub input: ImpactParameters,
    pub energy: EnergyRelease,
    pub crater: CraterEffects,
    pub fireball: FireballEffects,
    pub blast: BlastEffects,
    pub seismic: SeismicEffects,
    pub thermal: ThermalEffects,
    /// Present only for ocean impacts.
    pub tsunami: Option<TsunamiEffects>,
    pub comparisons: Comparisons,
    pub global_catastrophe: bool,
}

impl ImpactResult {
    /// Every derived numeric quantity, labelled by its path in the result.
    pub fn quantities(&self) -> Vec<(&'static str, f64)> {
        let mut quantities = vec![
            ("energy.mass_kg", self.energy.mass_kg),
            ("energy.kinetic_energy_j", self.energy.kinetic_energy_j),
            ("energy.megatons_tnt", self.energy.megatons_tnt),
            ("crater.diameter_m", self.crater.diameter_m),
            ("crater.diameter_km", self.crater.diameter_km),
            ("crater.depth_m", self.crater.depth_m),
            ("crater.volume_m3", self.crater.volume_m3),
            ("fireball.radius_m", self.fireball.radius_m),
            ("fireball.radius_km", self.fireball.radius_km),
            ("blast.total_destruction_m", self.blast.total_destruction_m),
            ("blast.total_destruction_km", self.blast.total_destruction_km),
            ("blast.severe_damage_m", self.blast.severe_damage_m),
            ("blast.severe_damage_km", self.blast.severe_damage_km),
            ("blast.moderate_damage_m", self.blast.moderate_damage_m),
            ("blast.moderate_damage_km", self.blast.moderate_damage_km),
            ("seismic.magnitude", self.seismic.magnitude),
            ("thermal.flux_1km_j_m2", self.thermal.flux_1km_j_m2),
            ("thermal.flux_10km_j_m2", self.thermal.flux_10km_j_m2),
            ("thermal.flux_100km_j_m2", self.thermal.flux_100km_j_m2),
            ("comparisons.hiroshima_equivalent", self.comparisons.hiroshima_equivalent),
            ("comparisons.nagasaki_equivalent", self.comparisons.nagasaki_equivalent),
        ];

        if let Some(tsunami) = &self.tsunami {
            quantities.extend([
                ("tsunami.height_10km", tsunami.height_10km),
                ("tsunami.height_100km", tsunami.height_100km),
                ("tsunami.height_500km", tsunami.height_500km),
                ("tsunami.height_1000km", tsunami.height_1000km),
            ]);
        }

        quantities
    }

    /// Returns true if the result carries tsunami heights.
    pub fn has_tsunami(&self) -> bool {
        self.tsunami.is_some()
    }

    /// Reject results containing NaN or infinite quantities.
    fn ensure_finite(self) -> Result<Self, ImpactError> {
        if let Some((quantity, value)) = self
            .quantities()
            .into_iter()
            .find(|(_, value)| !value.is_finite())
        {
            warn!(
                "Impact computation produced non-finite {} ({}) for {:.3e} m body",
                quantity, value, self.input.diameter_m
            );
            return Err(ImpactError::ComputationFailure { quantity, value });
        }
        Ok(self)
    }
}

/// Compute impact effects with default settings.
///
/// Assumes `params` has already been validated; see [`assess`].
pub fn simulate(params: &ImpactParameters) -> Result<ImpactResult, ImpactError> {
    simulate_with(params, &SimulationConfig::default())
}

/// Compute impact effects.
///
/// Runs every stage top-down from kinetic energy. The only failure mode is
/// a non-finite derived quantity, reported as
/// [`ImpactError::ComputationFailure`].
pub fn simulate_with(
    params: &ImpactParameters,
    config: &SimulationConfig,
) -> Result<ImpactResult, ImpactError> {
    let mass_kg = mass(params.diameter_m, params.density_kg_m3);
    let kinetic_energy_j = kinetic_energy(mass_kg, params.velocity_km_s);
    let megatons_tnt = joules_to_megatons(kinetic_energy_j);

    let crater = CraterDimensions::from_energy(kinetic_energy_j, params.angle_deg, params.target_type);

    let fireball_radius_m = fireball_radius(megatons_tnt);

    let tsunami = params
        .target_type
        .is_ocean()
        .then(|| TsunamiEffects::from_megatons(megatons_tnt, config.water_depth_m));

    let result = ImpactResult {
        input: params.clone(),
        energy: EnergyRelease {
            mass_kg,
            kinetic_energy_j,
            megatons_tnt,
        },
        crater: crater.into(),
        fireball: FireballEffects {
            radius_m: fireball_radius_m,
            radius_km: meters_to_km(fireball_radius_m),
        },
        blast: BlastRadii::from_megatons(megatons_tnt).into(),
        seismic: SeismicEffects {
            magnitude: seismic_magnitude(kinetic_energy_j),
        },
        thermal: ThermalEffects::from_energy(kinetic_energy_j),
        tsunami,
        comparisons: Comparisons {
            hiroshima_equivalent: hiroshima_ratio(kinetic_energy_j),
            nagasaki_equivalent: nagasaki_ratio(kinetic_energy_j),
        },
        global_catastrophe: is_global_catastrophe(megatons_tnt),
    };

    debug!(
        "Simulated {:.1} m {} impact: {:.3e} J ({:.3e} MT)",
        params.diameter_m,
        params.target_type.label(),
        kinetic_energy_j,
        megatons_tnt,
    );

    result.ensure_finite()
}

/// Validate parameters, then compute impact effects.
pub fn assess(
    params: &ImpactParameters,
    config: &SimulationConfig,
) -> Result<ImpactResult, ImpactError> {
    params.validate()?;
    simulate_with(params, config)
}

/// Resolve a request against the configured defaults, then compute.
pub fn assess_request(
    request: ImpactRequest,
    config: &SimulationConfig,
) -> Result<ImpactResult, ImpactError> {
    let params = request.resolve(&config.defaults)?;
    simulate_with(&params, config)
}

/// JSON request body in, JSON result out.
pub fn assess_json(body: &str, config: &SimulationConfig) -> Result<String, ImpactError> {
    let request = ImpactRequest::from_json(body)?;
    let result = assess_request(request, config)?;
    Ok(serde_json::to_string(&result)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assertions, fixtures};
    use crate::types::TargetType;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_impact() {
        let result = simulate(&ImpactParameters::default()).expect("finite result");

        assert_relative_eq!(result.energy.mass_kg, 1.5707963e9, max_relative = 1e-6);
        assert_relative_eq!(result.energy.kinetic_energy_j, 3.1415927e17, max_relative = 1e-6);
        assert!(!result.global_catastrophe);
        assert!(result.tsunami.is_none());
        assertions::assert_non_negative(&result);
    }

    #[test]
    fn test_unit_conversions_consistent() {
        let result = simulate(&fixtures::stony_land(300.0, 18.0, 60.0)).expect("finite result");

        assert_relative_eq!(result.crater.diameter_km * 1000.0, result.crater.diameter_m, max_relative = 1e-12);
        assert_relative_eq!(result.fireball.radius_km * 1000.0, result.fireball.radius_m, max_relative = 1e-12);
        assert_relative_eq!(
            result.blast.severe_damage_km * 1000.0,
            result.blast.severe_damage_m,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_input_is_echoed() {
        let params = ImpactParameters {
            composition: "comet-ish".to_string(),
            latitude: -33.8688,
            longitude: 151.2093,
            ..Default::default()
        };
        let result = simulate(&params).expect("finite result");
        assert_eq!(result.input, params);
    }

    #[test]
    fn test_composition_does_not_affect_physics() {
        let stone = fixtures::stony_land(120.0, 17.0, 45.0);
        let labelled = ImpactParameters {
            composition: "iron".to_string(),
            ..stone.clone()
        };
        let a = simulate(&stone).expect("finite");
        let b = simulate(&labelled).expect("finite");
        assert_eq!(a.quantities(), b.quantities());
    }

    #[test]
    fn test_tsunami_only_for_ocean() {
        let land = simulate(&fixtures::stony_land(500.0, 25.0, 45.0)).expect("finite");
        let ocean = simulate(&fixtures::stony_ocean(500.0, 25.0, 45.0)).expect("finite");
        assert!(!land.has_tsunami());
        assert!(ocean.has_tsunami());
        assert_eq!(ocean.quantities().len(), land.quantities().len() + 4);
    }

    #[test]
    fn test_tsunami_heights_at_reported_distances() {
        let result = simulate(&fixtures::stony_ocean(500.0, 25.0, 45.0)).expect("finite");
        let tsunami = result.tsunami.expect("ocean impact");
        let megatons = result.energy.megatons_tnt;
        let depth = SimulationConfig::default().water_depth_m;

        let reported = [
            tsunami.height_10km,
            tsunami.height_100km,
            tsunami.height_500km,
            tsunami.height_1000km,
        ];
        for (height, km) in reported.into_iter().zip(TSUNAMI_DISTANCES_KM) {
            assert_relative_eq!(height, wave_height(megatons, km, depth), max_relative = 1e-12);
        }
    }

    #[test]
    fn test_water_depth_setting() {
        let params = fixtures::stony_ocean(500.0, 25.0, 45.0);
        let deep = simulate(&params).expect("finite");
        let shallow_config = SimulationConfig {
            water_depth_m: 1000.0,
            ..Default::default()
        };
        let shallow = simulate_with(&params, &shallow_config).expect("finite");

        let deep_far = deep.tsunami.as_ref().map(|t| t.height_1000km);
        let shallow_far = shallow.tsunami.as_ref().map(|t| t.height_1000km);
        assert!(shallow_far < deep_far);
    }

    #[test]
    fn test_overflow_is_computation_failure() {
        // Finite and positive, but the cube overflows
        let params = ImpactParameters {
            diameter_m: 1e120,
            ..Default::default()
        };
        assert!(params.validate().is_ok());

        match simulate(&params) {
            Err(ImpactError::ComputationFailure { quantity, value }) => {
                assert_eq!(quantity, "energy.mass_kg");
                assert!(value.is_infinite());
            }
            other => panic!("Expected computation failure, got {other:?}"),
        }
    }

    #[test]
    fn test_assess_rejects_before_computing() {
        let params = ImpactParameters {
            angle_deg: 91.0,
            ..Default::default()
        };
        let err = assess(&params, &SimulationConfig::default()).unwrap_err();
        assert!(err.is_invalid_parameter());
        assert!(!err.is_computation_failure());
    }

    #[test]
    fn test_assess_request_uses_config_defaults() {
        let mut config = SimulationConfig::default();
        config.defaults.target_type = TargetType::Ocean;

        let result = assess_request(ImpactRequest::default(), &config).expect("valid");
        assert_eq!(result.input.target_type, TargetType::Ocean);
        assert!(result.has_tsunami());
    }

    #[test]
    fn test_assess_json_land_has_null_tsunami() {
        let json = assess_json(r#"{"diameter": 50}"#, &SimulationConfig::default()).expect("ok");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert!(value["tsunami"].is_null());
        assert_eq!(value["input"]["diameter_m"], 50.0);
        assert_eq!(value["input"]["target_type"], "land");
        assert!(value["blast"]["severe_damage_km"].is_number());
    }
}
