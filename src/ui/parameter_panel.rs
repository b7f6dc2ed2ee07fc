//! Left-hand panel for editing impact parameters.
//!
//! Edits a local copy of the parameters and writes it back only when
//! something actually changed, so the assessment recomputes once per edit.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::composition::Composition;
use crate::config::SimulationConfig;
use crate::params::ImpactParameters;
use crate::scenarios::{CurrentScenario, SCENARIOS};
use crate::simulation::{ImpactAssessment, ImpactInputs};
use crate::types::TargetType;

use super::{colors, icons};

/// System that renders the parameter panel.
pub fn parameter_panel_system(
    mut contexts: EguiContexts,
    mut inputs: ResMut<ImpactInputs>,
    mut current_scenario: ResMut<CurrentScenario>,
    assessment: Res<ImpactAssessment>,
    config: Res<SimulationConfig>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut params = inputs.params.clone();
    let mut loaded_scenario = None;

    egui::SidePanel::left("parameter_panel")
        .resizable(false)
        .default_width(280.0)
        .frame(
            egui::Frame::new()
                .fill(colors::PANEL_BG)
                .inner_margin(egui::Margin::same(12)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(format!("{} Impactor", icons::ASTEROID));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button(icons::RESET)
                        .on_hover_text("Reset to defaults")
                        .clicked()
                    {
                        params = ImpactParameters::from(&config.defaults);
                    }
                });
            });

            ui.separator();

            loaded_scenario = render_scenario_picker(ui, &current_scenario, &mut params);

            ui.add_space(8.0);
            render_impactor_controls(ui, &mut params);

            ui.add_space(8.0);
            ui.separator();
            render_target_controls(ui, &mut params, &assessment);
        });

    if let Some(id) = loaded_scenario {
        info!("Loaded scenario: {id}");
        current_scenario.id = Some(id);
    } else if params != inputs.params && current_scenario.id.is_some() {
        current_scenario.id = None;
    }

    if params != inputs.params {
        inputs.params = params;
    }
}

/// Dropdown of preset scenarios. Returns the id of a newly picked one.
fn render_scenario_picker(
    ui: &mut egui::Ui,
    current_scenario: &CurrentScenario,
    params: &mut ImpactParameters,
) -> Option<&'static str> {
    let mut picked = None;

    ui.horizontal(|ui| {
        ui.label(icons::SCENARIOS);
        egui::ComboBox::from_id_salt("scenario_picker")
            .selected_text(current_scenario.name())
            .width(200.0)
            .show_ui(ui, |ui| {
                for scenario in SCENARIOS.iter() {
                    let is_current = current_scenario.id == Some(scenario.id);
                    if ui
                        .selectable_label(is_current, scenario.name)
                        .on_hover_text(scenario.description)
                        .clicked()
                    {
                        *params = scenario.parameters();
                        picked = Some(scenario.id);
                    }
                }
            });
    });

    picked
}

fn render_impactor_controls(ui: &mut egui::Ui, params: &mut ImpactParameters) {
    ui.add(
        egui::Slider::new(&mut params.diameter_m, 1.0..=20_000.0)
            .logarithmic(true)
            .suffix(" m")
            .text("Diameter"),
    );
    ui.add(
        egui::Slider::new(&mut params.velocity_km_s, 1.0..=72.0)
            .suffix(" km/s")
            .text("Velocity"),
    );
    ui.add(
        egui::Slider::new(&mut params.angle_deg, 0.0..=90.0)
            .suffix("°")
            .text("Angle"),
    );

    ui.add_space(4.0);

    let selected = Composition::from_label(&params.composition);
    let selected_text = selected.map_or(params.composition.as_str(), |c| c.display_name());
    egui::ComboBox::from_label("Composition")
        .selected_text(selected_text)
        .show_ui(ui, |ui| {
            for composition in Composition::ALL {
                if ui
                    .selectable_label(selected == Some(composition), composition.display_name())
                    .on_hover_text(composition.description())
                    .clicked()
                {
                    params.composition = composition.label().to_string();
                    params.density_kg_m3 = composition.density_kg_m3();
                }
            }
        });

    let mut density = params.density_kg_m3;
    ui.horizontal(|ui| {
        let response = ui.add(
            egui::DragValue::new(&mut density)
                .range(100.0..=20_000.0)
                .speed(10.0)
                .suffix(" kg/m³"),
        );
        ui.label("Density");
        if response.changed() {
            params.set_density(density);
        }
    });
}

fn render_target_controls(
    ui: &mut egui::Ui,
    params: &mut ImpactParameters,
    assessment: &ImpactAssessment,
) {
    ui.label(
        egui::RichText::new(format!("{} Ground zero", icons::TARGET))
            .strong()
            .color(colors::SECTION_HEADER),
    );

    ui.horizontal(|ui| {
        ui.selectable_value(
            &mut params.target_type,
            TargetType::Land,
            format!("{} Land", icons::LAND),
        );
        ui.selectable_value(
            &mut params.target_type,
            TargetType::Ocean,
            format!("{} Ocean", icons::OCEAN),
        );
    });

    egui::Grid::new("coordinates").num_columns(2).show(ui, |ui| {
        ui.label("Latitude");
        ui.add(
            egui::DragValue::new(&mut params.latitude)
                .range(-90.0..=90.0)
                .speed(0.1)
                .suffix("°"),
        );
        ui.end_row();

        ui.label("Longitude");
        ui.add(
            egui::DragValue::new(&mut params.longitude)
                .range(-180.0..=180.0)
                .speed(0.1)
                .suffix("°"),
        );
        ui.end_row();
    });

    let Some(location) = &assessment.location else {
        return;
    };

    ui.add_space(4.0);
    let place = if location.country.is_empty() {
        location.location_name.clone()
    } else {
        format!("{}, {}", location.location_name, location.country)
    };
    ui.label(egui::RichText::new(place).color(colors::MUTED));

    let suggested = location.suggested_target();
    if suggested != params.target_type
        && ui
            .small_button(format!("Use {} target", suggested.label()))
            .clicked()
    {
        params.target_type = suggested;
    }
}
