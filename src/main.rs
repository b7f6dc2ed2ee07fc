//! Impact Effects - Asteroid Impact Calculator
//!
//! A desktop application for exploring what happens when an asteroid
//! hits the ground or the ocean.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use impact_effects::config::{CONFIG_ENV_VAR, SimulationConfig};
use impact_effects::simulation::ImpactPlugin;
use impact_effects::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Impact Effects".to_string(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        // Insert configuration before the plugin that reads it
        .insert_resource(load_config())
        .add_plugins((ImpactPlugin, UiPlugin))
        .add_systems(Startup, spawn_camera)
        .run();
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Settings from the file named by `IMPACT_CONFIG`, or built-in defaults.
fn load_config() -> SimulationConfig {
    let Ok(path) = std::env::var(CONFIG_ENV_VAR) else {
        return SimulationConfig::default();
    };

    match SimulationConfig::load(&path) {
        Ok(config) => {
            info!("Loaded settings from {path}");
            config
        }
        Err(err) => {
            warn!("Ignoring settings file {path}: {err}");
            SimulationConfig::default()
        }
    }
}
