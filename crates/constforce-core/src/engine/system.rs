use super::force::Force;

/// Identifies a force within a [`System`] (and within any context created from it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ForceIndex(usize);

impl ForceIndex {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// The particles of a simulation and the forces acting on them.
///
/// Forces added to a system are owned by it; once the system is handed to a
/// [`Context`](super::context::Context), the context owns both.
#[derive(Debug, Default)]
pub struct System {
    /// Mass of every particle, indexed by particle.
    masses: Vec<f64>,
    forces: Vec<Box<dyn Force>>,
}

impl System {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a particle and returns its index.
    pub fn add_particle(&mut self, mass: f64) -> usize {
        self.masses.push(mass);
        self.masses.len() - 1
    }

    pub fn num_particles(&self) -> usize {
        self.masses.len()
    }

    pub fn particle_mass(&self, particle: usize) -> Option<f64> {
        self.masses.get(particle).copied()
    }

    /// Attaches a force to the system, transferring ownership of it.
    pub fn add_force<F: Force>(&mut self, force: F) -> ForceIndex {
        self.add_boxed_force(Box::new(force))
    }

    pub fn add_boxed_force(&mut self, force: Box<dyn Force>) -> ForceIndex {
        self.forces.push(force);
        ForceIndex(self.forces.len() - 1)
    }

    pub fn num_forces(&self) -> usize {
        self.forces.len()
    }

    pub fn force(&self, index: ForceIndex) -> Option<&dyn Force> {
        self.forces.get(index.0).map(|force| &**force)
    }

    /// Returns the force at `index` if it is of type `F`.
    pub fn force_as<F: Force>(&self, index: ForceIndex) -> Option<&F> {
        self.force(index)
            .and_then(|force| force.as_any().downcast_ref::<F>())
    }

    pub fn forces(&self) -> impl Iterator<Item = (ForceIndex, &dyn Force)> {
        self.forces
            .iter()
            .enumerate()
            .map(|(i, force)| (ForceIndex(i), &**force))
    }

    /// Returns `true` if any attached force uses periodic boundary conditions.
    pub fn uses_periodic_boundary_conditions(&self) -> bool {
        self.forces
            .iter()
            .any(|force| force.uses_periodic_boundary_conditions())
    }

    pub(crate) fn force_slot_mut(&mut self, index: ForceIndex) -> Option<&mut Box<dyn Force>> {
        self.forces.get_mut(index.0)
    }
}
