//! UI module providing the egui-based interface.
//!
//! A parameter panel on the left edits [`ImpactInputs`](crate::simulation::ImpactInputs);
//! the results panel fills the rest of the window with the latest assessment.

pub mod icons;
mod parameter_panel;
mod results_panel;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<icons::FontsInitialized>()
            // Font initialization MUST run before any UI systems that use icons
            .add_systems(EguiPrimaryContextPass, icons::setup_fonts)
            .add_systems(
                EguiPrimaryContextPass,
                (
                    // Side panel first so the central panel gets the remaining space
                    parameter_panel::parameter_panel_system,
                    results_panel::results_panel_system,
                )
                    .chain()
                    .after(icons::setup_fonts)
                    .run_if(|init: Res<icons::FontsInitialized>| init.0),
            );
    }
}

/// Colors shared by the panels.
mod colors {
    use bevy_egui::egui::Color32;

    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(26, 26, 36, 240);
    pub const SECTION_HEADER: Color32 = Color32::from_rgb(220, 220, 230);
    pub const MUTED: Color32 = Color32::from_rgb(140, 140, 155);
    pub const ERROR: Color32 = Color32::from_rgb(230, 90, 90);
    pub const ACCENT: Color32 = Color32::from_rgb(85, 170, 221);
}
