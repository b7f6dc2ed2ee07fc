//! Mass and kinetic energy of the impactor.
//!
//! The body is treated as a uniform-density sphere.

use std::f64::consts::PI;

use crate::types::{JOULES_PER_MEGATON, METERS_PER_KM};

/// Mass of a uniform sphere.
///
/// m = (4/3)·π·(d/2)³·ρ
///
/// # Arguments
/// * `diameter_m` - Impactor diameter (meters)
/// * `density_kg_m3` - Bulk density (kg/m³)
///
/// # Returns
/// Mass in kilograms
#[inline]
pub fn mass(diameter_m: f64, density_kg_m3: f64) -> f64 {
    let radius = diameter_m / 2.0;
    (4.0 / 3.0) * PI * radius.powi(3) * density_kg_m3
}

/// Kinetic energy at impact.
///
/// E = ½·m·v², with v converted from km/s to m/s before squaring.
///
/// # Returns
/// Energy in joules
#[inline]
pub fn kinetic_energy(mass_kg: f64, velocity_km_s: f64) -> f64 {
    let velocity_m_s = velocity_km_s * METERS_PER_KM;
    0.5 * mass_kg * velocity_m_s * velocity_m_s
}

/// TNT-equivalent yield in megatons.
#[inline]
pub fn joules_to_megatons(joules: f64) -> f64 {
    joules / JOULES_PER_MEGATON
}
