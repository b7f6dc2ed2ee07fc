//! Tsunami wave heights for ocean impacts.
//!
//! The initial wave height scales with the square root of yield and decays
//! exponentially with distance over a length set by the ocean depth.

use crate::types::METERS_PER_KM;

/// Initial wave height coefficient (meters per MT^0.5).
const INITIAL_HEIGHT_COEFFICIENT_M: f64 = 10.0;

/// Decay length per meter of water depth.
const DECAY_LENGTH_PER_DEPTH: f64 = 100.0;

/// Distances (km) at which wave heights are reported.
pub const TSUNAMI_DISTANCES_KM: [f64; 4] = [10.0, 100.0, 500.0, 1000.0];

/// Wave height at the impact site (meters).
#[inline]
pub fn initial_wave_height(megatons: f64) -> f64 {
    INITIAL_HEIGHT_COEFFICIENT_M * megatons.sqrt()
}

/// Wave height at a distance from the impact.
///
/// h = h0 · exp(−d / (depth·100)), floored at zero.
///
/// # Arguments
/// * `megatons` - TNT-equivalent yield
/// * `distance_km` - Distance from the impact (km)
/// * `water_depth_m` - Mean ocean depth along the path (meters)
///
/// # Returns
/// Wave height in meters
pub fn wave_height(megatons: f64, distance_km: f64, water_depth_m: f64) -> f64 {
    let initial = initial_wave_height(megatons);
    let distance_m = distance_km * METERS_PER_KM;
    if distance_m == 0.0 {
        return initial;
    }

    let decay = (-distance_m / (water_depth_m * DECAY_LENGTH_PER_DEPTH)).exp();
    let height = initial * decay;
    if height < 0.0 { 0.0 } else { height }
}
