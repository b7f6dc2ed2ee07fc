//! Seismic magnitude from a Gutenberg-Richter style energy relation.

/// Offset of the energy-magnitude relation.
const MAGNITUDE_OFFSET: f64 = 10.7;

/// Richter-like magnitude of the ground shaking.
///
/// M = (2/3)·log10(E) − 10.7, clamped at zero.
///
/// A NaN result (negative energy from malformed upstream data) is passed
/// through unclamped so the aggregator can reject it.
pub fn seismic_magnitude(energy_j: f64) -> f64 {
    let magnitude = (2.0 / 3.0) * energy_j.log10() - MAGNITUDE_OFFSET;
    if magnitude < 0.0 { 0.0 } else { magnitude }
}
