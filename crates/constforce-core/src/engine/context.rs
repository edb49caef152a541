use super::error::EngineError;
use super::force::{Force, ForceImpl};
use super::platform::Platform;
use super::state::{DataTypes, State};
use super::system::{ForceIndex, System};
use nalgebra::{Point3, Vector3};
use tracing::{debug, info};

/// A system realized on a platform: particle positions, the per-step force accumulator, and
/// the implementation created for every force.
///
/// The context takes ownership of the [`System`]. Each call to [`get_state`](Self::get_state)
/// is one execution step: the accumulator is zeroed and every force adds its contribution.
pub struct Context {
    system: System,
    platform_name: String,
    positions: Vec<Point3<f64>>,
    forces: Vec<Vector3<f64>>,
    impls: Vec<Box<dyn ForceImpl>>,
}

impl Context {
    /// Realizes `system` on `platform`, creating and initializing a kernel for every force.
    ///
    /// All particles start at the origin.
    ///
    /// # Errors
    ///
    /// Propagates any error raised while a force creates or initializes its kernels, such as
    /// [`EngineError::KernelNotFound`] when the platform has no factory for a kernel.
    pub fn new(system: System, platform: &Platform) -> Result<Self, EngineError> {
        let impls = system
            .forces()
            .map(|(_, force)| force.create_impl(&system, platform))
            .collect::<Result<Vec<_>, _>>()?;

        let num_particles = system.num_particles();
        info!(
            platform = platform.name(),
            particles = num_particles,
            forces = impls.len(),
            "Created simulation context."
        );

        Ok(Self {
            system,
            platform_name: platform.name().to_string(),
            positions: vec![Point3::origin(); num_particles],
            forces: vec![Vector3::zeros(); num_particles],
            impls,
        })
    }

    pub fn system(&self) -> &System {
        &self.system
    }

    pub fn platform_name(&self) -> &str {
        &self.platform_name
    }

    pub fn positions(&self) -> &[Point3<f64>] {
        &self.positions
    }

    pub fn set_positions(&mut self, positions: Vec<Point3<f64>>) -> Result<(), EngineError> {
        if positions.len() != self.system.num_particles() {
            return Err(EngineError::PositionCountMismatch {
                expected: self.system.num_particles(),
                found: positions.len(),
            });
        }
        self.positions = positions;
        Ok(())
    }

    /// Runs one execution step and returns the requested quantities.
    pub fn get_state(&mut self, types: DataTypes) -> State {
        self.forces.fill(Vector3::zeros());

        let mut energy = 0.0;
        for force_impl in &mut self.impls {
            energy += force_impl.calc_forces_and_energy(&mut self.forces, types.forces, types.energy);
        }
        debug!(energy, "Evaluated forces and energy.");

        State::new(
            types.positions.then(|| self.positions.clone()),
            types.forces.then(|| self.forces.clone()),
            types.energy.then_some(energy),
        )
    }

    /// Returns the implementation created for the force at `index`, if it is an `I`.
    pub fn force_impl_mut<I: ForceImpl>(&mut self, index: ForceIndex) -> Result<&mut I, EngineError> {
        self.impls
            .get_mut(index.index())
            .ok_or(EngineError::ForceNotFound(index))?
            .as_any_mut()
            .downcast_mut::<I>()
            .ok_or(EngineError::ForceTypeMismatch {
                index,
                expected: std::any::type_name::<I>(),
            })
    }

    /// Replaces the context's copy of the force at `index` with `force`, which must be of the
    /// same type. Kernels are not touched.
    pub(crate) fn replace_force<F: Force>(
        &mut self,
        index: ForceIndex,
        force: F,
    ) -> Result<(), EngineError> {
        let slot = self
            .system
            .force_slot_mut(index)
            .ok_or(EngineError::ForceNotFound(index))?;
        if !slot.as_any().is::<F>() {
            return Err(EngineError::ForceTypeMismatch {
                index,
                expected: force.type_name(),
            });
        }
        *slot = Box::new(force);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::forcefield::const_force::ConstForce;
    use crate::core::forcefield::force_impl::ConstForceImpl;
    use crate::plugin;

    fn context_with(force: ConstForce, particles: usize) -> (Context, ForceIndex) {
        let mut system = System::new();
        for _ in 0..particles {
            system.add_particle(1.0);
        }
        let index = system.add_force(force);
        let context = Context::new(system, &plugin::reference_platform()).unwrap();
        (context, index)
    }

    #[test]
    fn new_fails_when_platform_lacks_kernel() {
        let mut system = System::new();
        system.add_particle(1.0);
        system.add_force(ConstForce::new());
        let result = Context::new(system, &Platform::reference());
        assert!(matches!(result, Err(EngineError::KernelNotFound { .. })));
    }

    #[test]
    fn get_state_zeroes_accumulator_between_steps() {
        let mut force = ConstForce::new();
        force.add_particle(0, Vector3::new(1.0, 0.0, 0.0));
        let (mut context, _) = context_with(force, 1);

        context.get_state(DataTypes::FORCES);
        let state = context.get_state(DataTypes::FORCES | DataTypes::ENERGY);
        assert_eq!(state.forces().unwrap()[0], Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(state.potential_energy().unwrap(), 0.0);
    }

    #[test]
    fn set_positions_checks_particle_count() {
        let (mut context, _) = context_with(ConstForce::new(), 2);
        let result = context.set_positions(vec![Point3::origin()]);
        assert!(matches!(
            result,
            Err(EngineError::PositionCountMismatch {
                expected: 2,
                found: 1
            })
        ));

        let positions = vec![Point3::new(1.0, 2.0, 3.0), Point3::new(-1.0, 0.0, 0.0)];
        context.set_positions(positions.clone()).unwrap();
        let state = context.get_state(DataTypes::POSITIONS);
        assert_eq!(state.positions().unwrap(), positions.as_slice());
    }

    #[test]
    fn force_impl_mut_reports_missing_and_mismatched_forces() {
        struct OtherImpl;
        impl ForceImpl for OtherImpl {
            fn calc_forces_and_energy(&mut self, _: &mut [Vector3<f64>], _: bool, _: bool) -> f64 {
                0.0
            }
            fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
                self
            }
        }

        let (mut context, index) = context_with(ConstForce::new(), 1);
        assert!(context.force_impl_mut::<ConstForceImpl>(index).is_ok());
        assert!(matches!(
            context.force_impl_mut::<OtherImpl>(index),
            Err(EngineError::ForceTypeMismatch { .. })
        ));

        let mut other_system = System::new();
        other_system.add_force(ConstForce::new());
        other_system.add_force(ConstForce::new());
        let missing = other_system.forces().last().map(|(i, _)| i).unwrap();
        assert!(matches!(
            context.force_impl_mut::<ConstForceImpl>(missing),
            Err(EngineError::ForceNotFound(_))
        ));
    }

    #[test]
    fn update_force_in_context_replaces_stored_force_on_success() {
        let mut force = ConstForce::new();
        force.add_particle(0, Vector3::x());
        let (mut context, index) = context_with(force.clone(), 1);

        force.set_particle_force(0, 0, Vector3::y()).unwrap();
        force.set_energy(2.0);
        force.update_force_in_context(&mut context, index).unwrap();

        assert_eq!(context.system().force_as::<ConstForce>(index), Some(&force));
        let state = context.get_state(DataTypes::FORCES);
        assert_eq!(state.forces().unwrap()[0], Vector3::y());
    }

    #[test]
    fn failed_update_keeps_previous_force_and_kernel() {
        let mut force = ConstForce::new();
        force.add_particle(0, Vector3::x());
        let (mut context, index) = context_with(force.clone(), 2);
        let original = force.clone();

        force.set_particle_force(0, 1, Vector3::z()).unwrap();
        assert!(matches!(
            force.update_force_in_context(&mut context, index),
            Err(EngineError::ParticleIndexChanged { .. })
        ));

        assert_eq!(context.system().force_as::<ConstForce>(index), Some(&original));
        let state = context.get_state(DataTypes::FORCES);
        assert_eq!(state.forces().unwrap()[0], Vector3::x());
        assert_eq!(state.forces().unwrap()[1], Vector3::zeros());
    }
}
