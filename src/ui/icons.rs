//! Phosphor icon definitions for the UI.
//!
//! Provides icon constants using the Phosphor icon font.
//! Icons are initialized via `setup_fonts` when the app starts.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::classification::ImpactSeverity;
use crate::safety::Priority;

/// Resource to track if fonts have been initialized.
#[derive(Resource, Default)]
pub struct FontsInitialized(pub bool);

/// System to initialize Phosphor icon fonts.
/// Runs in EguiPrimaryContextPass where the egui context is guaranteed to be ready.
pub fn setup_fonts(mut contexts: EguiContexts, mut initialized: ResMut<FontsInitialized>) {
    if initialized.0 {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    ctx.set_fonts(fonts);
    initialized.0 = true;

    info!("Phosphor icon fonts initialized");
}

// Browse all icons at https://phosphoricons.com/

/// Reset to defaults (circular arrow)
pub const RESET: &str = egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE;
/// Scenario list
pub const SCENARIOS: &str = egui_phosphor::regular::LIST;
/// Impactor
pub const ASTEROID: &str = egui_phosphor::regular::SHOOTING_STAR;
/// Ground zero
pub const TARGET: &str = egui_phosphor::regular::CROSSHAIR;
/// Land target
pub const LAND: &str = egui_phosphor::regular::MOUNTAINS;
/// Ocean target
pub const OCEAN: &str = egui_phosphor::regular::WAVES;

// Effect sections
/// Kinetic energy
pub const ENERGY: &str = egui_phosphor::regular::LIGHTNING;
/// Crater
pub const CRATER: &str = egui_phosphor::regular::CIRCLE_DASHED;
/// Fireball and thermal radiation
pub const FIREBALL: &str = egui_phosphor::regular::FIRE;
/// Air blast
pub const BLAST: &str = egui_phosphor::regular::WIND;
/// Ground shaking
pub const SEISMIC: &str = egui_phosphor::regular::WAVEFORM;
/// Historical comparisons
pub const NUCLEAR: &str = egui_phosphor::regular::RADIOACTIVE;
/// Safety zones
pub const SHIELD: &str = egui_phosphor::regular::SHIELD_WARNING;

// Status icons
/// Warning/alert icon
pub const WARNING: &str = egui_phosphor::regular::WARNING;
/// Global catastrophe
pub const GLOBE: &str = egui_phosphor::regular::GLOBE_HEMISPHERE_WEST;
/// Info icon
pub const INFO: &str = egui_phosphor::regular::INFO;

/// Icon for a severity level.
pub fn severity_icon(severity: ImpactSeverity) -> &'static str {
    match severity {
        ImpactSeverity::Minor => INFO,
        ImpactSeverity::Significant | ImpactSeverity::Major => WARNING,
        ImpactSeverity::Regional | ImpactSeverity::Continental => egui_phosphor::regular::SKULL,
        ImpactSeverity::Extinction => GLOBE,
    }
}

/// Color for a severity level.
pub fn severity_color(severity: ImpactSeverity) -> egui::Color32 {
    match severity {
        ImpactSeverity::Minor => egui::Color32::from_rgb(85, 221, 136),
        ImpactSeverity::Significant => egui::Color32::from_rgb(221, 200, 85),
        ImpactSeverity::Major => egui::Color32::from_rgb(221, 150, 70),
        ImpactSeverity::Regional => egui::Color32::from_rgb(230, 100, 60),
        ImpactSeverity::Continental => egui::Color32::from_rgb(230, 60, 60),
        ImpactSeverity::Extinction => egui::Color32::from_rgb(200, 60, 200),
    }
}

/// Color for a safety priority.
pub fn priority_color(priority: Priority) -> egui::Color32 {
    match priority {
        Priority::Critical => egui::Color32::from_rgb(230, 60, 60),
        Priority::High => egui::Color32::from_rgb(221, 150, 70),
        Priority::Medium => egui::Color32::from_rgb(221, 200, 85),
    }
}
