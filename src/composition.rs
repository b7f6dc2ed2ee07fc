//! Impactor composition catalogue.
//!
//! Compositions map to typical bulk densities. The physics only sees the
//! density; the composition label travels through the pipeline untouched.

use serde::{Deserialize, Serialize};

/// Broad asteroid or comet composition classes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Composition {
    /// Cometary ice
    Ice,
    /// Carbon-rich primitive material
    Carbonaceous,
    /// Rocky, the most common class
    #[default]
    Stone,
    /// Mixed rock and metal
    StonyIron,
    /// Metallic
    Iron,
}

impl Composition {
    /// All compositions, least dense first.
    pub const ALL: [Composition; 5] = [
        Composition::Ice,
        Composition::Carbonaceous,
        Composition::Stone,
        Composition::StonyIron,
        Composition::Iron,
    ];

    /// Wire label, e.g. `"stony_iron"`.
    pub fn label(&self) -> &'static str {
        match self {
            Composition::Ice => "ice",
            Composition::Carbonaceous => "carbonaceous",
            Composition::Stone => "stone",
            Composition::StonyIron => "stony_iron",
            Composition::Iron => "iron",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Composition::Ice => "Ice",
            Composition::Carbonaceous => "Carbonaceous",
            Composition::Stone => "Stone",
            Composition::StonyIron => "Stony-iron",
            Composition::Iron => "Iron",
        }
    }

    /// Typical bulk density (kg/m³).
    pub fn density_kg_m3(&self) -> f64 {
        match self {
            Composition::Ice => 917.0,
            Composition::Carbonaceous => 2000.0,
            Composition::Stone => 3000.0,
            Composition::StonyIron => 5000.0,
            Composition::Iron => 7800.0,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Composition::Ice => "Icy composition (comets, volatile-rich)",
            Composition::Carbonaceous => "Carbon-rich composition (primitive material)",
            Composition::Stone => "Rocky composition (most common asteroids)",
            Composition::StonyIron => "Mixed rock and metal composition",
            Composition::Iron => "Metallic composition (dense, penetrates deeper)",
        }
    }

    /// Parse a wire label. Unknown labels return `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    /// Guess the composition from a density.
    ///
    /// Only the catalogue densities map to a specific class; anything else
    /// is reported as iron.
    pub fn infer_from_density(density_kg_m3: f64) -> Self {
        Self::ALL
            .into_iter()
            .find(|c| c.density_kg_m3() == density_kg_m3)
            .unwrap_or(Composition::Iron)
    }
}
