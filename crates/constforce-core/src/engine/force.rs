use super::error::EngineError;
use super::platform::Platform;
use super::system::System;
use nalgebra::Vector3;
use std::any::Any;
use std::fmt;

/// A force term that can be attached to a [`System`].
///
/// Implementors describe their parameters; when a context is realized on a platform, each
/// force is asked to create its [`ForceImpl`], which owns whatever platform kernels are needed
/// to evaluate it.
pub trait Force: Any + fmt::Debug {
    /// The name identifying this force type, also used as its serialization tag.
    fn type_name(&self) -> &'static str;

    /// Whether this force applies periodic wrapping to particle coordinates.
    fn uses_periodic_boundary_conditions(&self) -> bool;

    /// Creates and initializes the per-context implementation of this force.
    fn create_impl(
        &self,
        system: &System,
        platform: &Platform,
    ) -> Result<Box<dyn ForceImpl>, EngineError>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

/// Per-context counterpart of a [`Force`], invoked once per execution step.
pub trait ForceImpl: Any {
    /// Adds this force's contribution into the shared per-particle accumulator and returns
    /// its potential energy.
    fn calc_forces_and_energy(
        &mut self,
        forces: &mut [Vector3<f64>],
        include_forces: bool,
        include_energy: bool,
    ) -> f64;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}
