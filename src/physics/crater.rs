//! Crater geometry from quarter-power energy scaling.
//!
//! Grazing impacts produce disproportionately small craters: the crater
//! diameter scales with sin(angle), so a horizontal impact leaves no crater.
//! Water targets absorb part of the energy and shrink the crater by 30%.

use std::f64::consts::PI;

use crate::types::{DEG_TO_RAD, TargetType};

/// Empirical crater scaling constant (meters per J^0.25).
const CRATER_SCALING_K: f64 = 0.0013;

/// Crater energy exponent.
const CRATER_ENERGY_EXPONENT: f64 = 0.25;

/// Depth/diameter ratio for a grazing impact.
const MIN_DEPTH_RATIO: f64 = 0.15;

/// Extra depth/diameter ratio gained by a vertical impact.
const DEPTH_RATIO_ANGLE_GAIN: f64 = 0.05;

/// Impact angle factor, sin(angle).
///
/// 1.0 for a vertical impact, 0.0 for a horizontal one.
#[inline]
pub fn angle_factor(angle_deg: f64) -> f64 {
    (angle_deg * DEG_TO_RAD).sin()
}

/// Crater size multiplier for the target surface.
#[inline]
pub fn target_factor(target: TargetType) -> f64 {
    match target {
        TargetType::Land => 1.0,
        TargetType::Ocean => 0.7,
    }
}

/// Final crater diameter.
///
/// D = k · E^0.25 · sin(angle) · target_factor
///
/// # Arguments
/// * `energy_j` - Kinetic energy at impact (joules)
/// * `angle_deg` - Impact angle from horizontal (degrees)
/// * `target` - Surface struck
///
/// # Returns
/// Diameter in meters
pub fn crater_diameter(energy_j: f64, angle_deg: f64, target: TargetType) -> f64 {
    CRATER_SCALING_K
        * energy_j.powf(CRATER_ENERGY_EXPONENT)
        * angle_factor(angle_deg)
        * target_factor(target)
}

/// Depth-to-diameter ratio, between 0.15 (grazing) and 0.20 (vertical).
#[inline]
pub fn depth_ratio(angle_deg: f64) -> f64 {
    MIN_DEPTH_RATIO + DEPTH_RATIO_ANGLE_GAIN * angle_factor(angle_deg)
}

/// Crater depth in meters.
#[inline]
pub fn crater_depth(diameter_m: f64, angle_deg: f64) -> f64 {
    diameter_m * depth_ratio(angle_deg)
}

/// Volume of excavated material, modelling the crater as a paraboloid.
///
/// V = (π/2) · r² · depth
#[inline]
pub fn ejecta_volume(diameter_m: f64, depth_m: f64) -> f64 {
    let radius = diameter_m / 2.0;
    (PI / 2.0) * radius * radius * depth_m
}

/// Crater geometry for a single impact.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CraterDimensions {
    /// Rim-to-rim diameter (meters)
    pub diameter_m: f64,
    /// Floor depth (meters)
    pub depth_m: f64,
    /// Ejected volume (m³)
    pub volume_m3: f64,
}

impl CraterDimensions {
    /// Compute the full crater geometry from impact energy.
    pub fn from_energy(energy_j: f64, angle_deg: f64, target: TargetType) -> Self {
        let diameter_m = crater_diameter(energy_j, angle_deg, target);
        let depth_m = crater_depth(diameter_m, angle_deg);
        Self {
            diameter_m,
            depth_m,
            volume_m3: ejecta_volume(diameter_m, depth_m),
        }
    }
}
