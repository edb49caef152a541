use super::system::ForceIndex;
use crate::core::forcefield::const_force::ForceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(
        "updateForceInContext: the number of particle terms has changed (expected {expected}, found {found})"
    )]
    TermCountMismatch { expected: usize, found: usize },

    #[error(
        "updateForceInContext: the particle index of term {term} has changed (expected {expected}, found {found})"
    )]
    ParticleIndexChanged {
        term: usize,
        expected: usize,
        found: usize,
    },

    #[error("Term {term} targets particle {particle}, but the system has {num_particles} particles")]
    ParticleIndexOutOfRange {
        term: usize,
        particle: usize,
        num_particles: usize,
    },

    #[error("No kernel named '{name}' is registered on platform '{platform}'")]
    KernelNotFound { name: String, platform: String },

    #[error("Kernel '{name}' was created with an unexpected implementation type")]
    KernelTypeMismatch { name: String },

    #[error("Kernel '{0}' has not been initialized")]
    KernelNotInitialized(&'static str),

    #[error("Kernel '{0}' has already been initialized")]
    AlreadyInitialized(&'static str),

    #[error("No force at index {} in the system", .0.index())]
    ForceNotFound(ForceIndex),

    #[error("Force at index {} is not of type {expected}", .index.index())]
    ForceTypeMismatch {
        index: ForceIndex,
        expected: &'static str,
    },

    #[error("Expected {expected} particle positions, got {found}")]
    PositionCountMismatch { expected: usize, found: usize },

    #[error("State does not contain {0}; request it when calling get_state")]
    StateDataMissing(&'static str),

    #[error(transparent)]
    Force(#[from] ForceError),
}
