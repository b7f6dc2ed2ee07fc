//! Impact parameters and the request boundary.
//!
//! Incoming requests may omit any field; omitted or `null` fields take the
//! configured defaults. Validation happens exactly once, here, before any
//! physics stage runs.

use serde::{Deserialize, Serialize};

use crate::composition::Composition;
use crate::config::RequestDefaults;
use crate::error::ImpactError;
use crate::types::TargetType;

/// Validated input to the impact pipeline. Echoed back in the result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImpactParameters {
    /// Impactor diameter (meters), > 0
    pub diameter_m: f64,
    /// Bulk density (kg/m³), > 0
    pub density_kg_m3: f64,
    /// Velocity at impact (km/s), > 0
    pub velocity_km_s: f64,
    /// Impact angle from horizontal (degrees), in [0, 90]
    pub angle_deg: f64,
    /// Composition label. Informational only.
    pub composition: String,
    /// Surface struck
    pub target_type: TargetType,
    /// Latitude of ground zero (degrees). Not used by the physics.
    pub latitude: f64,
    /// Longitude of ground zero (degrees). Not used by the physics.
    pub longitude: f64,
}

impl Default for ImpactParameters {
    fn default() -> Self {
        Self::from(&RequestDefaults::default())
    }
}

impl From<&RequestDefaults> for ImpactParameters {
    fn from(defaults: &RequestDefaults) -> Self {
        Self {
            diameter_m: defaults.diameter_m,
            density_kg_m3: defaults.density_kg_m3,
            velocity_km_s: defaults.velocity_km_s,
            angle_deg: defaults.angle_deg,
            composition: defaults.composition.clone(),
            target_type: defaults.target_type,
            latitude: defaults.latitude,
            longitude: defaults.longitude,
        }
    }
}

impl ImpactParameters {
    /// Check every numeric field against its allowed range.
    ///
    /// Out-of-range values are reported, never clamped.
    pub fn validate(&self) -> Result<(), ImpactError> {
        require_positive("diameter_m", self.diameter_m)?;
        require_positive("density_kg_m3", self.density_kg_m3)?;
        require_positive("velocity_km_s", self.velocity_km_s)?;

        require_finite("angle_deg", self.angle_deg)?;
        if !(0.0..=90.0).contains(&self.angle_deg) {
            return Err(ImpactError::InvalidParameter {
                field: "angle_deg",
                value: self.angle_deg,
                reason: "must be between 0 and 90 degrees",
            });
        }

        require_finite("latitude", self.latitude)?;
        require_finite("longitude", self.longitude)?;
        Ok(())
    }

    /// Set the density and relabel the composition to match it.
    ///
    /// Catalogue densities keep their class; any other density is labelled
    /// iron.
    pub fn set_density(&mut self, density_kg_m3: f64) {
        self.density_kg_m3 = density_kg_m3;
        self.composition = Composition::infer_from_density(density_kg_m3)
            .label()
            .to_string();
    }
}

fn require_finite(field: &'static str, value: f64) -> Result<(), ImpactError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ImpactError::InvalidParameter {
            field,
            value,
            reason: "must be finite",
        })
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<(), ImpactError> {
    require_finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ImpactError::InvalidParameter {
            field,
            value,
            reason: "must be greater than zero",
        })
    }
}

/// Raw impact request as received over the wire.
///
/// Field names follow the public API (`targetType` in camelCase).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactRequest {
    pub diameter: Option<f64>,
    pub density: Option<f64>,
    pub velocity: Option<f64>,
    pub angle: Option<f64>,
    pub composition: Option<String>,
    pub target_type: Option<TargetType>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl ImpactRequest {
    /// Decode a JSON request body.
    pub fn from_json(body: &str) -> Result<Self, ImpactError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Fill in defaults for missing fields, then validate.
    pub fn resolve(self, defaults: &RequestDefaults) -> Result<ImpactParameters, ImpactError> {
        let params = ImpactParameters {
            diameter_m: self.diameter.unwrap_or(defaults.diameter_m),
            density_kg_m3: self.density.unwrap_or(defaults.density_kg_m3),
            velocity_km_s: self.velocity.unwrap_or(defaults.velocity_km_s),
            angle_deg: self.angle.unwrap_or(defaults.angle_deg),
            composition: self
                .composition
                .unwrap_or_else(|| defaults.composition.clone()),
            target_type: self.target_type.unwrap_or(defaults.target_type),
            latitude: self.latitude.unwrap_or(defaults.latitude),
            longitude: self.longitude.unwrap_or(defaults.longitude),
        };
        params.validate()?;
        Ok(params)
    }
}
