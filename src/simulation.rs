//! Bevy integration of the impact model.
//!
//! Holds the current inputs and the latest assessment as resources and
//! recomputes whenever either the inputs or the configuration change.

use bevy::prelude::*;

use crate::config::SimulationConfig;
use crate::error::ImpactError;
use crate::location::{ImpactLocation, locate};
use crate::outcome::{ImpactResult, assess};
use crate::params::ImpactParameters;
use crate::scenarios::CurrentScenario;

/// Plugin providing impact assessment.
pub struct ImpactPlugin;

impl Plugin for ImpactPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationConfig>()
            .init_resource::<ImpactInputs>()
            .init_resource::<ImpactAssessment>()
            .init_resource::<CurrentScenario>()
            .add_systems(Update, recompute_assessment);
    }
}

/// Parameters currently entered by the user.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct ImpactInputs {
    pub params: ImpactParameters,
}

impl FromWorld for ImpactInputs {
    fn from_world(world: &mut World) -> Self {
        let params = world
            .get_resource::<SimulationConfig>()
            .map(|config| ImpactParameters::from(&config.defaults))
            .unwrap_or_default();
        Self { params }
    }
}

/// Latest assessment of [`ImpactInputs`].
#[derive(Resource, Default)]
pub struct ImpactAssessment {
    /// `None` until the first recompute.
    pub outcome: Option<Result<ImpactResult, ImpactError>>,
    /// Place name for the current coordinates.
    pub location: Option<ImpactLocation>,
    /// Number of recomputes so far.
    pub revision: u64,
}

impl ImpactAssessment {
    /// Successful result, if any.
    pub fn result(&self) -> Option<&ImpactResult> {
        self.outcome.as_ref().and_then(|outcome| outcome.as_ref().ok())
    }

    /// Error from the latest recompute, if it failed.
    pub fn error(&self) -> Option<&ImpactError> {
        self.outcome.as_ref().and_then(|outcome| outcome.as_ref().err())
    }
}

/// Re-run the model when the inputs or configuration change.
fn recompute_assessment(
    inputs: Res<ImpactInputs>,
    config: Res<SimulationConfig>,
    mut assessment: ResMut<ImpactAssessment>,
) {
    if !inputs.is_changed() && !config.is_changed() {
        return;
    }

    let params = &inputs.params;
    let outcome = config
        .validate()
        .map_err(ImpactError::from)
        .and_then(|()| assess(params, &config));

    match &outcome {
        Ok(result) => info!(
            "Impact assessed: {:.3e} MT, crater {:.2} km, magnitude {:.1}",
            result.energy.megatons_tnt, result.crater.diameter_km, result.seismic.magnitude,
        ),
        Err(err) => warn!("Impact assessment failed: {err}"),
    }

    assessment.location = Some(locate(params.latitude, params.longitude));
    assessment.outcome = Some(outcome);
    assessment.revision += 1;
}
