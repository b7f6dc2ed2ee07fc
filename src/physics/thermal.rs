//! Thermal radiation from the impact plume.

use std::f64::consts::PI;

/// Fraction of impact energy radiated thermally.
const THERMAL_FRACTION: f64 = 0.35;

/// Thermal fluence at a distance from ground zero.
///
/// The radiated energy is spread isotropically over a sphere:
/// Φ = 0.35·E / (4π·d²)
///
/// # Arguments
/// * `energy_j` - Impact energy (joules)
/// * `distance_m` - Distance from ground zero (meters)
///
/// # Returns
/// Fluence in J/m². Ground zero yields positive infinity.
pub fn thermal_flux(energy_j: f64, distance_m: f64) -> f64 {
    if distance_m == 0.0 {
        return f64::INFINITY;
    }
    let radiated = energy_j * THERMAL_FRACTION;
    radiated / (4.0 * PI * distance_m * distance_m)
}
