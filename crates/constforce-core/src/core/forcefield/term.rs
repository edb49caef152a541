use nalgebra::Vector3;

/// A single constant-force term: the particle it acts on and the force applied to it.
///
/// Terms are stored in insertion order by [`ConstForce`](super::const_force::ConstForce);
/// the position of a term in that sequence is its public identifier. Several terms may
/// target the same particle, in which case their contributions add up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleForce {
    /// Index of the particle in the host system. Not validated against the particle count
    /// until a kernel is initialized.
    pub particle: usize,
    /// The constant force vector applied to the particle every step.
    pub force: Vector3<f64>,
}

impl ParticleForce {
    pub fn new(particle: usize, force: Vector3<f64>) -> Self {
        Self { particle, force }
    }
}

impl Default for ParticleForce {
    fn default() -> Self {
        Self {
            particle: 0,
            force: Vector3::zeros(),
        }
    }
}
