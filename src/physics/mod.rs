//! Impact physics stages.
//!
//! Each stage is a set of pure functions over `f64` that consumes the
//! outputs of earlier stages (chiefly kinetic energy). Stages hold no state
//! and never validate their inputs; validation happens once at the request
//! boundary in [`crate::params`].

pub mod blast;
pub mod crater;
pub mod energy;
pub mod seismic;
pub mod thermal;
pub mod tsunami;

#[cfg(test)]
mod proptest_physics;

pub use blast::{
    BLAST_BANDS, BlastRadii, MODERATE_DAMAGE_PSI, OverpressureBand, SEVERE_DAMAGE_PSI,
    TOTAL_DESTRUCTION_PSI, blast_radius, fireball_radius, overpressure_band,
};
pub use crater::{
    CraterDimensions, angle_factor, crater_depth, crater_diameter, depth_ratio, ejecta_volume,
    target_factor,
};
pub use energy::{joules_to_megatons, kinetic_energy, mass};
pub use seismic::seismic_magnitude;
pub use thermal::thermal_flux;
pub use tsunami::{TSUNAMI_DISTANCES_KM, initial_wave_height, wave_height};
