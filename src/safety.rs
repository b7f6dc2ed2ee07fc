//! Protective action zones derived from blast radius.

use serde::{Deserialize, Serialize};

use crate::types::TargetType;

/// Urgency of a recommended action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Medium,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Critical => "critical",
            Priority::High => "high",
            Priority::Medium => "medium",
        }
    }
}

/// Recommended action within a distance of ground zero.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SafetyRecommendation {
    /// Outer edge of the zone (km)
    pub distance_km: f64,
    pub action: &'static str,
    pub timeframe: &'static str,
    pub priority: Priority,
}

/// Zone multipliers of the reference blast radius, with their guidance.
const ZONES: [(f64, &str, &str, Priority); 4] = [
    (
        0.3,
        "Immediate evacuation required - unsurvivable zone",
        "Evacuate weeks in advance if possible",
        Priority::Critical,
    ),
    (
        0.6,
        "Seek underground shelter, evacuate if time permits",
        "Evacuate days in advance",
        Priority::Critical,
    ),
    (
        1.0,
        "Take shelter in reinforced buildings, away from windows",
        "Shelter in place hours before impact",
        Priority::High,
    ),
    (
        2.0,
        "Stay indoors, protect from flying debris and glass",
        "Shelter 30 minutes before impact",
        Priority::Medium,
    ),
];

/// Recommendations for four concentric zones, innermost first.
///
/// # Arguments
/// * `blast_radius_km` - Reference blast radius; the moderate damage radius
///   gives sensible zones.
pub fn safety_recommendations(blast_radius_km: f64) -> Vec<SafetyRecommendation> {
    ZONES
        .iter()
        .map(|&(scale, action, timeframe, priority)| SafetyRecommendation {
            distance_km: blast_radius_km * scale,
            action,
            timeframe,
            priority,
        })
        .collect()
}

/// A place to shelter or relocate to ahead of an impact.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShelterOption {
    pub name: &'static str,
    pub reason: &'static str,
    /// Typical distance from ground zero (km); 0 means shelter in place
    pub distance_km: f64,
    /// Only relevant when the impact is at sea
    pub ocean_only: bool,
}

static SHELTER_OPTIONS: &[ShelterOption] = &[
    ShelterOption {
        name: "Underground bunkers (if available)",
        reason: "Best protection from blast, heat, and radiation",
        distance_km: 0.0,
        ocean_only: false,
    },
    ShelterOption {
        name: "Opposite hemisphere",
        reason: "Maximum distance from impact site",
        distance_km: 12_000.0,
        ocean_only: false,
    },
    ShelterOption {
        name: "Mountain ranges (far from impact)",
        reason: "Natural barriers against blast waves",
        distance_km: 5000.0,
        ocean_only: false,
    },
    ShelterOption {
        name: "Inland areas",
        reason: "Protection from tsunamis",
        distance_km: 1000.0,
        ocean_only: true,
    },
];

/// Shelter and migration options for an impact on `target_type`.
///
/// Inland relocation is only listed for ocean impacts.
pub fn shelter_options(target_type: TargetType) -> impl Iterator<Item = &'static ShelterOption> {
    SHELTER_OPTIONS
        .iter()
        .filter(move |option| !option.ocean_only || target_type.is_ocean())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_four_zones_scaled() {
        let zones = safety_recommendations(10.0);
        assert_eq!(zones.len(), 4);
        assert_relative_eq!(zones[0].distance_km, 3.0, max_relative = 1e-12);
        assert_relative_eq!(zones[1].distance_km, 6.0, max_relative = 1e-12);
        assert_relative_eq!(zones[2].distance_km, 10.0, max_relative = 1e-12);
        assert_relative_eq!(zones[3].distance_km, 20.0, max_relative = 1e-12);
    }

    #[test]
    fn test_zones_ordered_by_urgency() {
        let zones = safety_recommendations(5.0);
        for pair in zones.windows(2) {
            assert!(pair[0].distance_km < pair[1].distance_km);
            assert!(pair[0].priority <= pair[1].priority);
        }
        assert_eq!(zones[0].priority, Priority::Critical);
        assert_eq!(zones[3].priority.label(), "medium");
    }

    #[test]
    fn test_shelter_options_by_target() {
        let land: Vec<_> = shelter_options(TargetType::Land).collect();
        let ocean: Vec<_> = shelter_options(TargetType::Ocean).collect();

        assert_eq!(land.len(), 3);
        assert_eq!(ocean.len(), 4);
        assert!(land.iter().all(|option| !option.ocean_only));
        assert!(ocean.iter().any(|option| option.reason.contains("tsunami")));
        assert_eq!(ocean[0].distance_km, 0.0);
    }
}
