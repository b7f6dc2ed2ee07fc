//! Impact classification and historical comparisons.
//!
//! Provides:
//! - Global catastrophe threshold check
//! - Yield ratios against the Hiroshima and Nagasaki bombs
//! - Severity levels by yield
//! - Descriptive comparison of crater size with known craters

use serde::{Deserialize, Serialize};

use crate::types::{
    GLOBAL_CATASTROPHE_MEGATONS, HIROSHIMA_MEGATONS, JOULES_PER_MEGATON, NAGASAKI_MEGATONS,
};

/// Returns true if the yield exceeds the global catastrophe threshold.
///
/// The comparison is strict: exactly 1e6 MT is not global.
#[inline]
pub fn is_global_catastrophe(megatons: f64) -> bool {
    megatons > GLOBAL_CATASTROPHE_MEGATONS
}

/// Impact energy as a multiple of the Hiroshima bomb.
#[inline]
pub fn hiroshima_ratio(energy_j: f64) -> f64 {
    energy_j / (HIROSHIMA_MEGATONS * JOULES_PER_MEGATON)
}

/// Impact energy as a multiple of the Nagasaki bomb.
#[inline]
pub fn nagasaki_ratio(energy_j: f64) -> f64 {
    energy_j / (NAGASAKI_MEGATONS * JOULES_PER_MEGATON)
}

/// Qualitative severity of an impact, by yield.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactSeverity {
    /// Below 1 MT
    Minor,
    /// 1 MT and above
    Significant,
    /// 1,000 MT and above
    Major,
    /// 10,000 MT and above
    Regional,
    /// 100,000 MT and above
    Continental,
    /// 1,000,000 MT and above
    Extinction,
}

impl ImpactSeverity {
    /// All levels, mildest first.
    pub const ALL: [ImpactSeverity; 6] = [
        ImpactSeverity::Minor,
        ImpactSeverity::Significant,
        ImpactSeverity::Major,
        ImpactSeverity::Regional,
        ImpactSeverity::Continental,
        ImpactSeverity::Extinction,
    ];

    /// Classify a yield in megatons.
    pub fn from_megatons(megatons: f64) -> Self {
        if megatons >= 1e6 {
            ImpactSeverity::Extinction
        } else if megatons >= 1e5 {
            ImpactSeverity::Continental
        } else if megatons >= 1e4 {
            ImpactSeverity::Regional
        } else if megatons >= 1e3 {
            ImpactSeverity::Major
        } else if megatons >= 1.0 {
            ImpactSeverity::Significant
        } else {
            ImpactSeverity::Minor
        }
    }

    /// Short display label.
    pub fn label(&self) -> &'static str {
        match self {
            ImpactSeverity::Minor => "Minor Impact",
            ImpactSeverity::Significant => "Significant Impact",
            ImpactSeverity::Major => "Major Impact",
            ImpactSeverity::Regional => "Regional Catastrophe",
            ImpactSeverity::Continental => "Continental Devastation",
            ImpactSeverity::Extinction => "Extinction Event",
        }
    }

    /// One-line description of the expected consequences.
    pub fn description(&self) -> &'static str {
        match self {
            ImpactSeverity::Minor => "Limited damage, mostly atmospheric",
            ImpactSeverity::Significant => "Local destruction, casualties likely",
            ImpactSeverity::Major => "City-scale destruction",
            ImpactSeverity::Regional => "Regional destruction, significant casualties",
            ImpactSeverity::Continental => "Continent-wide destruction, climate effects",
            ImpactSeverity::Extinction => "Global catastrophe, mass extinction",
        }
    }
}

/// Compare a crater with well-known terrestrial craters.
pub fn crater_comparison(diameter_km: f64) -> &'static str {
    if diameter_km >= 300.0 {
        "Larger than Chicxulub crater (dinosaur extinction)"
    } else if diameter_km >= 100.0 {
        "Similar to Vredefort crater (South Africa)"
    } else if diameter_km >= 50.0 {
        "Similar to Manicouagan crater (Canada)"
    } else if diameter_km >= 10.0 {
        "Similar to Barringer crater (Arizona)"
    } else if diameter_km >= 1.0 {
        "Larger than most recent impact craters"
    } else {
        "Small crater, similar to meteor impacts"
    }
}
