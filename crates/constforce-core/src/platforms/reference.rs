use crate::core::forcefield::const_force::ConstForce;
use crate::core::forcefield::kernels::{CALC_CONST_FORCE_KERNEL_NAME, CalcConstForceKernel};
use crate::engine::error::EngineError;
use crate::engine::platform::{Kernel, KernelFactory, Platform};
use crate::engine::system::System;
use nalgebra::Vector3;
use tracing::debug;

/// Reference implementation of [`CalcConstForceKernel`].
///
/// Holds a snapshot of the force's terms as two parallel arrays, taken at initialization.
#[derive(Debug, Default)]
pub struct ReferenceCalcConstForceKernel {
    particles: Vec<usize>,
    forces: Vec<Vector3<f64>>,
    initialized: bool,
}

impl ReferenceCalcConstForceKernel {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CalcConstForceKernel for ReferenceCalcConstForceKernel {
    fn initialize(&mut self, system: &System, force: &ConstForce) -> Result<(), EngineError> {
        if self.initialized {
            return Err(EngineError::AlreadyInitialized(CALC_CONST_FORCE_KERNEL_NAME));
        }

        let num_particles = system.num_particles();
        let mut particles = Vec::with_capacity(force.num_particles());
        let mut forces = Vec::with_capacity(force.num_particles());
        for (term, particle_force) in force.particle_forces().enumerate() {
            if particle_force.particle >= num_particles {
                return Err(EngineError::ParticleIndexOutOfRange {
                    term,
                    particle: particle_force.particle,
                    num_particles,
                });
            }
            particles.push(particle_force.particle);
            forces.push(particle_force.force);
        }

        self.particles = particles;
        self.forces = forces;
        self.initialized = true;
        debug!(
            terms = self.particles.len(),
            "Initialized reference constant force kernel."
        );
        Ok(())
    }

    /// # Panics
    ///
    /// Panics if `forces` is shorter than the particle count the kernel was initialized with.
    fn execute(
        &mut self,
        forces: &mut [Vector3<f64>],
        _include_forces: bool,
        _include_energy: bool,
    ) -> f64 {
        let energy = 0.0;
        for (&particle, force) in self.particles.iter().zip(&self.forces) {
            forces[particle] += force;
        }
        energy
    }

    fn copy_force_to_context(&mut self, force: &ConstForce) -> Result<(), EngineError> {
        if !self.initialized {
            return Err(EngineError::KernelNotInitialized(
                CALC_CONST_FORCE_KERNEL_NAME,
            ));
        }
        if force.num_particles() != self.particles.len() {
            return Err(EngineError::TermCountMismatch {
                expected: self.particles.len(),
                found: force.num_particles(),
            });
        }
        for (term, (particle_force, &expected)) in
            force.particle_forces().zip(&self.particles).enumerate()
        {
            if particle_force.particle != expected {
                return Err(EngineError::ParticleIndexChanged {
                    term,
                    expected,
                    found: particle_force.particle,
                });
            }
        }

        for (slot, particle_force) in self.forces.iter_mut().zip(force.particle_forces()) {
            *slot = particle_force.force;
        }
        debug!(
            terms = self.forces.len(),
            "Copied constant force parameters into reference kernel."
        );
        Ok(())
    }
}

/// Creates reference kernels for the constant force.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReferenceConstForceKernelFactory;

impl KernelFactory for ReferenceConstForceKernelFactory {
    fn create_kernel(&self, name: &str, platform: &Platform) -> Result<Kernel, EngineError> {
        match name {
            CALC_CONST_FORCE_KERNEL_NAME => {
                let kernel: Box<dyn CalcConstForceKernel> =
                    Box::new(ReferenceCalcConstForceKernel::new());
                Ok(Kernel::new(name, kernel))
            }
            _ => Err(EngineError::KernelNotFound {
                name: name.to_string(),
                platform: platform.name().to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system_with_particles(n: usize) -> System {
        let mut system = System::new();
        for _ in 0..n {
            system.add_particle(1.0);
        }
        system
    }

    fn initialized_kernel(system: &System, force: &ConstForce) -> ReferenceCalcConstForceKernel {
        let mut kernel = ReferenceCalcConstForceKernel::new();
        kernel.initialize(system, force).unwrap();
        kernel
    }

    #[test]
    fn execute_adds_single_term_and_returns_zero_energy() {
        let system = system_with_particles(1);
        let mut force = ConstForce::new();
        force.add_particle(0, Vector3::new(-0.1, 0.0, 0.1));
        let mut kernel = initialized_kernel(&system, &force);

        let mut accumulator = vec![Vector3::zeros(); 1];
        let energy = kernel.execute(&mut accumulator, true, true);

        assert_eq!(energy, 0.0);
        assert_eq!(accumulator[0], Vector3::new(-0.1, 0.0, 0.1));
    }

    #[test]
    fn execute_accumulates_into_existing_values_and_sums_duplicate_particles() {
        let system = system_with_particles(3);
        let mut force = ConstForce::new();
        force.add_particle(2, Vector3::new(1.0, 0.0, 0.0));
        force.add_particle(2, Vector3::new(0.0, 2.0, 0.0));
        force.add_particle(0, Vector3::new(0.0, 0.0, 3.0));
        let mut kernel = initialized_kernel(&system, &force);

        let mut accumulator = vec![Vector3::new(1.0, 1.0, 1.0); 3];
        kernel.execute(&mut accumulator, true, false);

        assert_eq!(accumulator[0], Vector3::new(1.0, 1.0, 4.0));
        assert_eq!(accumulator[1], Vector3::new(1.0, 1.0, 1.0));
        assert_eq!(accumulator[2], Vector3::new(2.0, 3.0, 1.0));
    }

    #[test]
    fn energy_stored_on_force_is_not_reported() {
        let system = system_with_particles(1);
        let mut force = ConstForce::new();
        force.add_particle(0, Vector3::x());
        force.set_energy(5.0);
        let mut kernel = initialized_kernel(&system, &force);

        let mut accumulator = vec![Vector3::zeros(); 1];
        assert_eq!(kernel.execute(&mut accumulator, true, true), 0.0);
    }

    #[test]
    fn initialize_rejects_particle_outside_system() {
        let system = system_with_particles(2);
        let mut force = ConstForce::new();
        force.add_particle(1, Vector3::x());
        force.add_particle(2, Vector3::y());

        let mut kernel = ReferenceCalcConstForceKernel::new();
        let result = kernel.initialize(&system, &force);
        assert!(matches!(
            result,
            Err(EngineError::ParticleIndexOutOfRange {
                term: 1,
                particle: 2,
                num_particles: 2
            })
        ));
    }

    #[test]
    fn initialize_twice_fails() {
        let system = system_with_particles(1);
        let force = ConstForce::new();
        let mut kernel = initialized_kernel(&system, &force);
        assert!(matches!(
            kernel.initialize(&system, &force),
            Err(EngineError::AlreadyInitialized(_))
        ));
    }

    #[test]
    fn uninitialized_kernel_contributes_nothing_and_rejects_updates() {
        let mut kernel = ReferenceCalcConstForceKernel::new();
        let mut accumulator = vec![Vector3::zeros(); 2];
        assert_eq!(kernel.execute(&mut accumulator, true, true), 0.0);
        assert!(accumulator.iter().all(|f| *f == Vector3::zeros()));
        assert!(matches!(
            kernel.copy_force_to_context(&ConstForce::new()),
            Err(EngineError::KernelNotInitialized(_))
        ));
    }

    #[test]
    fn copy_force_to_context_replaces_force_vectors() {
        let system = system_with_particles(1);
        let mut force = ConstForce::new();
        force.add_particle(0, Vector3::new(-0.1, 0.0, 0.1));
        let mut kernel = initialized_kernel(&system, &force);

        force
            .set_particle_force(0, 0, Vector3::new(0.2, -0.1, 0.3))
            .unwrap();
        kernel.copy_force_to_context(&force).unwrap();

        let mut accumulator = vec![Vector3::zeros(); 1];
        kernel.execute(&mut accumulator, true, true);
        assert_eq!(accumulator[0], Vector3::new(0.2, -0.1, 0.3));
    }

    #[test]
    fn copy_force_to_context_fails_when_term_count_changes() {
        let system = system_with_particles(1);
        let mut force = ConstForce::new();
        force.add_particle(0, Vector3::x());
        let mut kernel = initialized_kernel(&system, &force);

        force.add_particle(0, Vector3::y());
        assert!(matches!(
            kernel.copy_force_to_context(&force),
            Err(EngineError::TermCountMismatch {
                expected: 1,
                found: 2
            })
        ));
    }

    #[test]
    fn copy_force_to_context_fails_on_changed_particle_and_keeps_snapshot() {
        let system = system_with_particles(2);
        let mut force = ConstForce::new();
        force.add_particle(0, Vector3::x());
        force.add_particle(1, Vector3::y());
        let mut kernel = initialized_kernel(&system, &force);

        force.set_particle_force(0, 0, Vector3::z() * 9.0).unwrap();
        force.set_particle_force(1, 0, Vector3::z()).unwrap();
        assert!(matches!(
            kernel.copy_force_to_context(&force),
            Err(EngineError::ParticleIndexChanged {
                term: 1,
                expected: 1,
                found: 0
            })
        ));

        let mut accumulator = vec![Vector3::zeros(); 2];
        kernel.execute(&mut accumulator, true, true);
        assert_eq!(accumulator[0], Vector3::x());
        assert_eq!(accumulator[1], Vector3::y());
    }

    #[test]
    fn factory_creates_const_force_kernel_only() {
        let platform = Platform::reference();
        let factory = ReferenceConstForceKernelFactory;

        let kernel = factory
            .create_kernel(CALC_CONST_FORCE_KERNEL_NAME, &platform)
            .unwrap();
        assert!(kernel.into_inner::<Box<dyn CalcConstForceKernel>>().is_ok());

        assert!(matches!(
            factory.create_kernel("CalcOtherForce", &platform),
            Err(EngineError::KernelNotFound { .. })
        ));
    }
}
