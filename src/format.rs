//! Human-readable formatting of impact quantities.

use crate::types::JOULES_PER_MEGATON;

/// Fixed-point for everyday magnitudes, scientific notation otherwise.
pub fn format_scientific(value: f64, decimals: usize) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value < 0.01 || value > 1e6 {
        format!("{value:.decimals$e}")
    } else {
        format!("{value:.decimals$}")
    }
}

/// Spell out large counts ("2.50 million").
pub fn format_large_number(value: f64) -> String {
    if value >= 1e12 {
        format!("{:.2} trillion", value / 1e12)
    } else if value >= 1e9 {
        format!("{:.2} billion", value / 1e9)
    } else if value >= 1e6 {
        format!("{:.2} million", value / 1e6)
    } else if value >= 1e3 {
        format!("{:.2} thousand", value / 1e3)
    } else {
        format!("{value:.2}")
    }
}

/// Meters below one kilometer, kilometers above.
pub fn format_distance(meters: f64) -> String {
    if meters >= 1000.0 {
        format!("{:.2} km", meters / 1000.0)
    } else {
        format!("{meters:.2} m")
    }
}

/// Impact energy as a TNT yield in the most readable unit.
pub fn format_energy(joules: f64) -> String {
    let megatons = joules / JOULES_PER_MEGATON;
    if megatons >= 1e6 {
        format!("{:.2} million MT", megatons / 1e6)
    } else if megatons >= 1e3 {
        format!("{:.2} thousand MT", megatons / 1e3)
    } else if megatons >= 1.0 {
        format!("{megatons:.2} MT")
    } else {
        format!("{:.2} KT", megatons * 1000.0)
    }
}
