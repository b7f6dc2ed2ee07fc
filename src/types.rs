//! Core physical constants and shared types for impact effect calculations.

use serde::{Deserialize, Serialize};

/// Physical constants (SI units)

/// Joules released by one megaton of TNT
pub const JOULES_PER_MEGATON: f64 = 4.184e15;

/// Meters per kilometer
pub const METERS_PER_KM: f64 = 1000.0;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Hiroshima yield (~15 kilotons) in megatons
pub const HIROSHIMA_MEGATONS: f64 = 0.015;

/// Nagasaki yield (~21 kilotons) in megatons
pub const NAGASAKI_MEGATONS: f64 = 0.021;

/// Yield above which an impact is treated as a global catastrophe.
/// Roughly a 1 km stony body arriving at 20 km/s.
pub const GLOBAL_CATASTROPHE_MEGATONS: f64 = 1e6;

/// Ocean depth used for tsunami attenuation when none is configured (meters)
pub const DEFAULT_WATER_DEPTH_M: f64 = 4000.0;

/// Surface struck by the impactor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetType {
    /// Continental crust
    #[default]
    Land,
    /// Open water; shrinks the crater and enables tsunami output
    Ocean,
}

impl TargetType {
    /// Lowercase label used on the wire.
    pub fn label(&self) -> &'static str {
        match self {
            TargetType::Land => "land",
            TargetType::Ocean => "ocean",
        }
    }

    /// Returns true for water impacts.
    pub fn is_ocean(&self) -> bool {
        matches!(self, TargetType::Ocean)
    }
}

/// Convert meters to kilometers.
pub fn meters_to_km(meters: f64) -> f64 {
    meters / METERS_PER_KM
}
