//! Simulation settings.
//!
//! Settings are plain structs with `Default` values matching the documented
//! request defaults. They can be partially overridden from a JSON document;
//! any field left out keeps its default.

use std::fs;
use std::path::Path;

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{DEFAULT_WATER_DEPTH_M, TargetType};

/// Environment variable naming an optional settings file for the desktop app.
pub const CONFIG_ENV_VAR: &str = "IMPACT_CONFIG";

/// Values used for any field a request leaves out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestDefaults {
    /// Impactor diameter (meters)
    pub diameter_m: f64,
    /// Bulk density (kg/m³)
    pub density_kg_m3: f64,
    /// Velocity at impact (km/s)
    pub velocity_km_s: f64,
    /// Impact angle from horizontal (degrees)
    pub angle_deg: f64,
    /// Composition label
    pub composition: String,
    /// Surface struck
    pub target_type: TargetType,
    /// Latitude of ground zero (degrees)
    pub latitude: f64,
    /// Longitude of ground zero (degrees)
    pub longitude: f64,
}

impl Default for RequestDefaults {
    fn default() -> Self {
        Self {
            diameter_m: 100.0,
            density_kg_m3: 3000.0,
            velocity_km_s: 20.0,
            angle_deg: 45.0,
            composition: "stone".to_string(),
            target_type: TargetType::Land,
            // New York City
            latitude: 40.7128,
            longitude: -74.0060,
        }
    }
}

/// Settings for the impact pipeline.
#[derive(Resource, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Defaults applied to incomplete requests.
    pub defaults: RequestDefaults,
    /// Mean ocean depth used for tsunami attenuation (meters).
    pub water_depth_m: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            defaults: RequestDefaults::default(),
            water_depth_m: DEFAULT_WATER_DEPTH_M,
        }
    }
}

impl SimulationConfig {
    /// Parse a (possibly partial) JSON settings document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Reject settings that would make the tsunami decay meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.water_depth_m.is_finite() || self.water_depth_m <= 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "water_depth_m",
                value: self.water_depth_m,
                reason: "must be a positive, finite depth",
            });
        }
        Ok(())
    }
}
