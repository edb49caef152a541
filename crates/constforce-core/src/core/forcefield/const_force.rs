use super::force_impl::ConstForceImpl;
use super::term::ParticleForce;
use crate::engine::context::Context;
use crate::engine::error::EngineError;
use crate::engine::force::{Force, ForceImpl};
use crate::engine::platform::Platform;
use crate::engine::system::{ForceIndex, System};
use nalgebra::Vector3;
use std::any::Any;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ForceError {
    #[error("Term index {index} is out of range (the force has {len} terms)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// A force that applies a constant vector to each of a list of particles.
///
/// Each call to [`add_particle`](Self::add_particle) appends a term. The force also carries a
/// scalar energy value; it is stored and persisted alongside the terms but is not reported by
/// the reference kernel, which always contributes zero potential energy.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConstForce {
    particles: Vec<ParticleForce>,
    energy: f64,
}

impl ConstForce {
    /// The name under which this force type is known to serialization proxies.
    pub const TYPE_NAME: &'static str = "ConstForce";

    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of particle terms in this force.
    pub fn num_particles(&self) -> usize {
        self.particles.len()
    }

    /// Adds a particle term.
    ///
    /// # Arguments
    ///
    /// * `particle` - The index of the particle the term is applied to.
    /// * `force` - The constant force applied to that particle.
    ///
    /// # Return
    ///
    /// The index of the newly added term.
    pub fn add_particle(&mut self, particle: usize, force: Vector3<f64>) -> usize {
        self.particles.push(ParticleForce::new(particle, force));
        self.particles.len() - 1
    }

    /// Returns the particle index and force vector of the term at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ForceError::IndexOutOfRange`] if `index` is not a valid term index.
    pub fn particle_force(&self, index: usize) -> Result<(usize, Vector3<f64>), ForceError> {
        self.particles
            .get(index)
            .map(|term| (term.particle, term.force))
            .ok_or(ForceError::IndexOutOfRange {
                index,
                len: self.particles.len(),
            })
    }

    /// Overwrites the term at `index` in place.
    ///
    /// # Errors
    ///
    /// Returns [`ForceError::IndexOutOfRange`] if `index` is not a valid term index.
    pub fn set_particle_force(
        &mut self,
        index: usize,
        particle: usize,
        force: Vector3<f64>,
    ) -> Result<(), ForceError> {
        let len = self.particles.len();
        let term = self
            .particles
            .get_mut(index)
            .ok_or(ForceError::IndexOutOfRange { index, len })?;
        *term = ParticleForce::new(particle, force);
        Ok(())
    }

    pub fn particle_forces(&self) -> impl Iterator<Item = &ParticleForce> {
        self.particles.iter()
    }

    pub fn energy(&self) -> f64 {
        self.energy
    }

    pub fn set_energy(&mut self, energy: f64) {
        self.energy = energy;
    }

    /// Pushes the current terms of this force into the kernel that `context` created for the
    /// force at `index`.
    ///
    /// Only force vectors may change after a context has been created: the number of terms and
    /// the particle index of every term are fixed at that point. On success the context's copy
    /// of the force is replaced by this one.
    ///
    /// # Errors
    ///
    /// * [`EngineError::TermCountMismatch`] if terms were added since the context was created.
    /// * [`EngineError::ParticleIndexChanged`] if any term now targets a different particle.
    /// * [`EngineError::ForceNotFound`] / [`EngineError::ForceTypeMismatch`] if `index` does
    ///   not name a `ConstForce` in the context.
    ///
    /// On error the kernel keeps its previous parameters.
    pub fn update_force_in_context(
        &self,
        context: &mut Context,
        index: ForceIndex,
    ) -> Result<(), EngineError> {
        context
            .force_impl_mut::<ConstForceImpl>(index)?
            .update_parameters_in_context(self)?;
        context.replace_force(index, self.clone())?;
        debug!(
            force = index.index(),
            terms = self.num_particles(),
            "Updated constant force parameters in context."
        );
        Ok(())
    }
}

impl Force for ConstForce {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn uses_periodic_boundary_conditions(&self) -> bool {
        false
    }

    fn create_impl(
        &self,
        system: &System,
        platform: &Platform,
    ) -> Result<Box<dyn ForceImpl>, EngineError> {
        Ok(Box::new(ConstForceImpl::initialize(self, system, platform)?))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}
