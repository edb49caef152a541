use crate::engine::config::EvaluationConfig;
use crate::engine::context::Context;
use crate::engine::error::EngineError;
use crate::engine::force::Force;
use crate::engine::state::{DataTypes, State};
use crate::engine::system::System;
use crate::plugin;
use tracing::{info, instrument};

#[derive(Debug, Clone)]
pub struct EvaluationResult {
    pub state: State,
    pub num_particles: usize,
    pub uses_periodic_boundary_conditions: bool,
}

/// Evaluates `forces` for one execution step on the reference platform.
///
/// A system of `config.particle_count` particles, all at the origin, is built, the forces are
/// attached to it, and a context is realized with the plugin's kernels registered.
#[instrument(skip_all, name = "evaluation_workflow")]
pub fn run(
    forces: Vec<Box<dyn Force>>,
    config: &EvaluationConfig,
) -> Result<EvaluationResult, EngineError> {
    info!(
        particles = config.particle_count,
        forces = forces.len(),
        "Building system for evaluation."
    );

    let mut system = System::new();
    for _ in 0..config.particle_count {
        system.add_particle(config.particle_mass);
    }
    for force in forces {
        system.add_boxed_force(force);
    }
    let uses_periodic_boundary_conditions = system.uses_periodic_boundary_conditions();

    let platform = plugin::reference_platform();
    let mut context = Context::new(system, &platform)?;
    let state = context.get_state(DataTypes {
        positions: false,
        forces: config.include_forces,
        energy: config.include_energy,
    });

    info!("Evaluation finished.");
    Ok(EvaluationResult {
        state,
        num_particles: config.particle_count,
        uses_periodic_boundary_conditions,
    })
}
