//! Approximate place names for impact coordinates.
//!
//! A coarse offline lookup against a handful of reference cities and ocean
//! regions. Distances are planar in degrees, converted to kilometers with
//! 111 km per degree, which is good enough for a label.

use serde::{Deserialize, Serialize};

use crate::types::TargetType;

/// Kilometers per degree of arc.
const KM_PER_DEGREE: f64 = 111.0;

/// Beyond this many degrees from every city the point is treated as ocean.
const OCEAN_THRESHOLD_DEG: f64 = 20.0;

/// Within this distance the point is labelled with the city itself.
const CITY_RADIUS_KM: f64 = 50.0;

struct ReferenceCity {
    name: &'static str,
    country: &'static str,
    lat: f64,
    lon: f64,
}

struct OceanRegion {
    name: &'static str,
    lat: f64,
    lon: f64,
    radius_deg: f64,
}

static CITIES: &[ReferenceCity] = &[
    ReferenceCity { name: "New York", country: "USA", lat: 40.7128, lon: -74.006 },
    ReferenceCity { name: "London", country: "UK", lat: 51.5074, lon: -0.1278 },
    ReferenceCity { name: "Tokyo", country: "Japan", lat: 35.6762, lon: 139.6503 },
    ReferenceCity { name: "Paris", country: "France", lat: 48.8566, lon: 2.3522 },
    ReferenceCity { name: "Sydney", country: "Australia", lat: -33.8688, lon: 151.2093 },
    ReferenceCity { name: "Mumbai", country: "India", lat: 19.076, lon: 72.8777 },
    ReferenceCity { name: "São Paulo", country: "Brazil", lat: -23.5505, lon: -46.6333 },
    ReferenceCity { name: "Cairo", country: "Egypt", lat: 30.0444, lon: 31.2357 },
    ReferenceCity { name: "Moscow", country: "Russia", lat: 55.7558, lon: 37.6173 },
    ReferenceCity { name: "Beijing", country: "China", lat: 39.9042, lon: 116.4074 },
    ReferenceCity { name: "Los Angeles", country: "USA", lat: 34.0522, lon: -118.2437 },
    ReferenceCity { name: "Mexico City", country: "Mexico", lat: 19.4326, lon: -99.1332 },
    ReferenceCity { name: "Lagos", country: "Nigeria", lat: 6.5244, lon: 3.3792 },
    ReferenceCity { name: "Istanbul", country: "Turkey", lat: 41.0082, lon: 28.9784 },
    ReferenceCity { name: "Buenos Aires", country: "Argentina", lat: -34.6037, lon: -58.3816 },
];

static OCEANS: &[OceanRegion] = &[
    OceanRegion { name: "Pacific Ocean", lat: 0.0, lon: -140.0, radius_deg: 80.0 },
    OceanRegion { name: "Atlantic Ocean", lat: 0.0, lon: -30.0, radius_deg: 50.0 },
    OceanRegion { name: "Indian Ocean", lat: -20.0, lon: 80.0, radius_deg: 40.0 },
    OceanRegion { name: "Arctic Ocean", lat: 80.0, lon: 0.0, radius_deg: 30.0 },
    OceanRegion { name: "Southern Ocean", lat: -60.0, lon: 0.0, radius_deg: 30.0 },
];

/// Result of a place-name lookup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImpactLocation {
    pub latitude: f64,
    pub longitude: f64,
    /// City, relative description ("120 km north of Paris"), or ocean name
    pub location_name: String,
    /// Empty for ocean locations
    pub country: String,
    pub ocean: bool,
}

impl ImpactLocation {
    /// Target type suggested by the lookup.
    pub fn suggested_target(&self) -> TargetType {
        if self.ocean { TargetType::Ocean } else { TargetType::Land }
    }
}

fn degree_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    ((lat1 - lat2).powi(2) + (lon1 - lon2).powi(2)).sqrt()
}

/// Eight-point compass direction from the first point toward the second.
pub fn compass_direction(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> &'static str {
    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;
    let angle = d_lon.atan2(d_lat).to_degrees();

    if (-22.5..22.5).contains(&angle) {
        "north"
    } else if (22.5..67.5).contains(&angle) {
        "northeast"
    } else if (67.5..112.5).contains(&angle) {
        "east"
    } else if (112.5..157.5).contains(&angle) {
        "southeast"
    } else if !(-157.5..157.5).contains(&angle) {
        "south"
    } else if (-157.5..-112.5).contains(&angle) {
        "southwest"
    } else if (-112.5..-67.5).contains(&angle) {
        "west"
    } else {
        "northwest"
    }
}

/// Look up an approximate place name for a coordinate.
pub fn locate(latitude: f64, longitude: f64) -> ImpactLocation {
    let (nearest, min_distance) = CITIES
        .iter()
        .map(|city| (city, degree_distance(latitude, longitude, city.lat, city.lon)))
        .fold((&CITIES[0], f64::MAX), |best, candidate| {
            if candidate.1 < best.1 { candidate } else { best }
        });

    if min_distance > OCEAN_THRESHOLD_DEG {
        let ocean_name = OCEANS
            .iter()
            .find(|ocean| degree_distance(latitude, longitude, ocean.lat, ocean.lon) < ocean.radius_deg)
            .map_or("Open Ocean", |ocean| ocean.name);

        return ImpactLocation {
            latitude,
            longitude,
            location_name: ocean_name.to_string(),
            country: String::new(),
            ocean: true,
        };
    }

    let distance_km = min_distance * KM_PER_DEGREE;
    let location_name = if distance_km < CITY_RADIUS_KM {
        nearest.name.to_string()
    } else {
        // Bearing from the impact point toward the city.
        let direction = compass_direction(latitude, longitude, nearest.lat, nearest.lon);
        format!("{} km {} of {}", distance_km.round(), direction, nearest.name)
    };

    ImpactLocation {
        latitude,
        longitude,
        location_name,
        country: nearest.country.to_string(),
        ocean: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_coordinates_are_new_york() {
        let location = locate(40.7128, -74.0060);
        assert_eq!(location.location_name, "New York");
        assert_eq!(location.country, "USA");
        assert!(!location.ocean);
        assert_eq!(location.suggested_target(), TargetType::Land);
    }

    #[test]
    fn test_pacific_impact() {
        let location = locate(0.0, -140.0);
        assert!(location.ocean);
        assert_eq!(location.location_name, "Pacific Ocean");
        assert!(location.country.is_empty());
        assert_eq!(location.suggested_target(), TargetType::Ocean);
    }

    #[test]
    fn test_open_ocean_fallback() {
        // Far from every city and outside every region
        let location = locate(-50.0, 110.0);
        assert!(location.ocean);
        assert_eq!(location.location_name, "Open Ocean");
    }

    #[test]
    fn test_relative_description_near_city() {
        // ~2 degrees south of Paris
        let location = locate(46.8566, 2.3522);
        assert!(!location.ocean);
        assert_eq!(location.country, "France");
        assert!(
            location.location_name.ends_with("of Paris"),
            "got {}",
            location.location_name
        );
        assert!(location.location_name.contains("north"), "got {}", location.location_name);
    }

    #[test]
    fn test_compass_directions() {
        assert_eq!(compass_direction(0.0, 0.0, 1.0, 0.0), "north");
        assert_eq!(compass_direction(0.0, 0.0, 0.0, 1.0), "east");
        assert_eq!(compass_direction(0.0, 0.0, -1.0, 0.0), "south");
        assert_eq!(compass_direction(0.0, 0.0, 0.0, -1.0), "west");
        assert_eq!(compass_direction(0.0, 0.0, 1.0, 1.0), "northeast");
        assert_eq!(compass_direction(0.0, 0.0, -1.0, -1.0), "southwest");
    }
}
