use super::const_force::ConstForce;
use crate::engine::error::EngineError;
use crate::engine::system::System;
use nalgebra::Vector3;

/// Name under which platforms register implementations of [`CalcConstForceKernel`].
pub const CALC_CONST_FORCE_KERNEL_NAME: &str = "CalcConstForce";

/// Platform-independent contract for the kernel that applies a [`ConstForce`].
///
/// A kernel is created by a platform's kernel factory when a context is realized, initialized
/// once from the force, and then executed every step. Its term snapshot only changes through
/// [`copy_force_to_context`](Self::copy_force_to_context).
pub trait CalcConstForceKernel {
    /// Snapshots the particle indices and force vectors of every term in `force`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::AlreadyInitialized`] on a second call, and
    /// [`EngineError::ParticleIndexOutOfRange`] if a term targets a particle that does not
    /// exist in `system`.
    fn initialize(&mut self, system: &System, force: &ConstForce) -> Result<(), EngineError>;

    /// Adds every snapshotted force vector into `forces[particle]` and returns the energy
    /// contribution of this force.
    fn execute(
        &mut self,
        forces: &mut [Vector3<f64>],
        include_forces: bool,
        include_energy: bool,
    ) -> f64;

    /// Re-synchronizes the snapshot with an edited force. Only the force vectors may differ
    /// from the snapshot; a failed call leaves the snapshot unchanged.
    fn copy_force_to_context(&mut self, force: &ConstForce) -> Result<(), EngineError>;
}
