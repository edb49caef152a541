pub struct DefaultsConfig {
    pub particle_mass: f64,
    pub include_forces: bool,
    pub include_energy: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            particle_mass: 1.0,
            include_forces: true,
            include_energy: true,
        }
    }
}
