use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Settings for evaluating a set of forces on a freshly built system.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationConfig {
    pub particle_count: usize,
    pub particle_mass: f64,
    pub include_forces: bool,
    pub include_energy: bool,
}

/// Largest system an evaluation will build. Each particle costs a mass, a position and a
/// force slot, so this bounds the allocation made when a document names a huge index.
pub const MAX_PARTICLE_COUNT: usize = 10_000_000;

#[derive(Default)]
pub struct EvaluationConfigBuilder {
    particle_count: Option<usize>,
    particle_mass: Option<f64>,
    include_forces: Option<bool>,
    include_energy: Option<bool>,
}

impl EvaluationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn particle_count(mut self, count: usize) -> Self {
        self.particle_count = Some(count);
        self
    }
    pub fn particle_mass(mut self, mass: f64) -> Self {
        self.particle_mass = Some(mass);
        self
    }
    pub fn include_forces(mut self, include: bool) -> Self {
        self.include_forces = Some(include);
        self
    }
    pub fn include_energy(mut self, include: bool) -> Self {
        self.include_energy = Some(include);
        self
    }

    pub fn build(self) -> Result<EvaluationConfig, ConfigError> {
        let particle_mass = self.particle_mass.unwrap_or(1.0);
        if !(particle_mass.is_finite() && particle_mass > 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "particle_mass",
                reason: format!("must be a positive finite number, got {}", particle_mass),
            });
        }
        let particle_count = self
            .particle_count
            .ok_or(ConfigError::MissingParameter("particle_count"))?;
        if particle_count > MAX_PARTICLE_COUNT {
            return Err(ConfigError::InvalidParameter {
                name: "particle_count",
                reason: format!(
                    "{} exceeds the maximum of {} particles",
                    particle_count, MAX_PARTICLE_COUNT
                ),
            });
        }
        Ok(EvaluationConfig {
            particle_count,
            particle_mass,
            include_forces: self.include_forces.unwrap_or(true),
            include_energy: self.include_energy.unwrap_or(true),
        })
    }
}
