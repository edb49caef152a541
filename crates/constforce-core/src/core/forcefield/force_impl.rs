use super::const_force::ConstForce;
use super::kernels::{CALC_CONST_FORCE_KERNEL_NAME, CalcConstForceKernel};
use crate::engine::error::EngineError;
use crate::engine::force::ForceImpl;
use crate::engine::platform::Platform;
use crate::engine::system::System;
use nalgebra::Vector3;
use std::any::Any;
use tracing::debug;

/// Per-context state of a [`ConstForce`]: the platform kernel created for it.
pub struct ConstForceImpl {
    kernel: Box<dyn CalcConstForceKernel>,
}

impl ConstForceImpl {
    pub fn initialize(
        force: &ConstForce,
        system: &System,
        platform: &Platform,
    ) -> Result<Self, EngineError> {
        let mut kernel = platform
            .create_kernel(CALC_CONST_FORCE_KERNEL_NAME)?
            .into_inner::<Box<dyn CalcConstForceKernel>>()?;
        kernel.initialize(system, force)?;
        debug!(
            platform = platform.name(),
            terms = force.num_particles(),
            "Created constant force kernel."
        );
        Ok(Self { kernel })
    }

    pub fn update_parameters_in_context(&mut self, force: &ConstForce) -> Result<(), EngineError> {
        self.kernel.copy_force_to_context(force)
    }
}

impl ForceImpl for ConstForceImpl {
    fn calc_forces_and_energy(
        &mut self,
        forces: &mut [Vector3<f64>],
        include_forces: bool,
        include_energy: bool,
    ) -> f64 {
        self.kernel.execute(forces, include_forces, include_energy)
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
