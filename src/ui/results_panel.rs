//! Central panel listing every computed effect of the current impact.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::classification::{ImpactSeverity, crater_comparison};
use crate::format::{format_distance, format_energy, format_large_number, format_scientific};
use crate::outcome::ImpactResult;
use crate::safety::{safety_recommendations, shelter_options};
use crate::scenarios::CurrentScenario;
use crate::simulation::ImpactAssessment;

use super::{colors, icons};

/// System that renders the results panel.
pub fn results_panel_system(
    mut contexts: EguiContexts,
    assessment: Res<ImpactAssessment>,
    current_scenario: Res<CurrentScenario>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::CentralPanel::default()
        .frame(
            egui::Frame::new()
                .fill(colors::PANEL_BG)
                .inner_margin(egui::Margin::same(16)),
        )
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(current_scenario.name())
                    .size(13.0)
                    .color(colors::MUTED),
            );

            if let Some(err) = assessment.error() {
                ui.label(
                    egui::RichText::new(format!("{} {err}", icons::WARNING))
                        .size(16.0)
                        .color(colors::ERROR),
                );
                return;
            }

            let Some(result) = assessment.result() else {
                ui.label("Computing...");
                return;
            };

            egui::ScrollArea::vertical().show(ui, |ui| {
                render_severity_header(ui, result);
                ui.add_space(12.0);

                egui::Grid::new("effects_grid")
                    .num_columns(2)
                    .spacing([24.0, 6.0])
                    .striped(true)
                    .show(ui, |ui| render_effects(ui, result));

                ui.add_space(16.0);
                render_safety_zones(ui, result);
            });
        });
}

fn render_severity_header(ui: &mut egui::Ui, result: &ImpactResult) {
    let severity = ImpactSeverity::from_megatons(result.energy.megatons_tnt);
    let color = icons::severity_color(severity);

    ui.label(
        egui::RichText::new(format!(
            "{} {}",
            icons::severity_icon(severity),
            severity.label()
        ))
        .size(24.0)
        .strong()
        .color(color),
    );
    ui.label(severity.description());

    if result.global_catastrophe {
        ui.label(
            egui::RichText::new(format!(
                "{} Global catastrophe: worldwide climate effects expected",
                icons::GLOBE
            ))
            .strong()
            .color(colors::ERROR),
        );
    }
}

fn section(ui: &mut egui::Ui, icon: &str, title: &str) {
    ui.label(
        egui::RichText::new(format!("{icon} {title}"))
            .strong()
            .color(colors::ACCENT),
    );
    ui.end_row();
}

fn row(ui: &mut egui::Ui, label: &str, value: String) {
    ui.label(label);
    ui.label(egui::RichText::new(value).color(colors::SECTION_HEADER));
    ui.end_row();
}

fn render_effects(ui: &mut egui::Ui, result: &ImpactResult) {
    section(ui, icons::ENERGY, "Energy");
    row(ui, "Mass", format!("{} kg", format_scientific(result.energy.mass_kg, 2)));
    row(
        ui,
        "Kinetic energy",
        format!("{} J", format_scientific(result.energy.kinetic_energy_j, 2)),
    );
    row(ui, "TNT equivalent", format_energy(result.energy.kinetic_energy_j));

    section(ui, icons::CRATER, "Crater");
    row(ui, "Diameter", format_distance(result.crater.diameter_m));
    row(ui, "Depth", format_distance(result.crater.depth_m));
    row(
        ui,
        "Ejecta volume",
        format!("{} m³", format_scientific(result.crater.volume_m3, 2)),
    );
    row(ui, "Comparable to", crater_comparison(result.crater.diameter_km).to_string());

    section(ui, icons::FIREBALL, "Fireball and thermal radiation");
    row(ui, "Fireball radius", format_distance(result.fireball.radius_m));
    row(
        ui,
        "Fluence at 1 km",
        format!("{} J/m²", format_scientific(result.thermal.flux_1km_j_m2, 2)),
    );
    row(
        ui,
        "Fluence at 10 km",
        format!("{} J/m²", format_scientific(result.thermal.flux_10km_j_m2, 2)),
    );
    row(
        ui,
        "Fluence at 100 km",
        format!("{} J/m²", format_scientific(result.thermal.flux_100km_j_m2, 2)),
    );

    section(ui, icons::BLAST, "Air blast");
    row(ui, "Total destruction (20 psi)", format_distance(result.blast.total_destruction_m));
    row(ui, "Severe damage (5 psi)", format_distance(result.blast.severe_damage_m));
    row(ui, "Moderate damage (1 psi)", format_distance(result.blast.moderate_damage_m));

    section(ui, icons::SEISMIC, "Seismic");
    row(ui, "Magnitude", format!("{:.1}", result.seismic.magnitude));

    if let Some(tsunami) = &result.tsunami {
        section(ui, icons::OCEAN, "Tsunami wave height");
        row(ui, "At 10 km", format_distance(tsunami.height_10km));
        row(ui, "At 100 km", format_distance(tsunami.height_100km));
        row(ui, "At 500 km", format_distance(tsunami.height_500km));
        row(ui, "At 1000 km", format_distance(tsunami.height_1000km));
    }

    section(ui, icons::NUCLEAR, "Compared with");
    row(
        ui,
        "Hiroshima bombs",
        format_large_number(result.comparisons.hiroshima_equivalent),
    );
    row(
        ui,
        "Nagasaki bombs",
        format_large_number(result.comparisons.nagasaki_equivalent),
    );
}

fn render_safety_zones(ui: &mut egui::Ui, result: &ImpactResult) {
    ui.label(
        egui::RichText::new(format!("{} Protective actions", icons::SHIELD))
            .strong()
            .color(colors::ACCENT),
    );

    for zone in safety_recommendations(result.blast.moderate_damage_km) {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(zone.priority.label().to_uppercase())
                    .small()
                    .color(icons::priority_color(zone.priority)),
            );
            ui.label(format!("Within {:.1} km:", zone.distance_km));
            ui.label(zone.action);
        });
        ui.label(egui::RichText::new(zone.timeframe).small().color(colors::MUTED));
    }

    ui.add_space(8.0);
    ui.label(egui::RichText::new("Where to go").strong().color(colors::SECTION_HEADER));
    for option in shelter_options(result.input.target_type) {
        let distance = if option.distance_km > 0.0 {
            format!("~{:.0} km away", option.distance_km)
        } else {
            "Nearby".to_string()
        };
        ui.horizontal(|ui| {
            ui.label(option.name);
            ui.label(egui::RichText::new(distance).small().color(colors::MUTED));
        });
        ui.label(egui::RichText::new(option.reason).small().color(colors::MUTED));
    }
}
