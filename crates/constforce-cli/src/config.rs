pub mod defaults;

use crate::cli::EvaluateArgs;
use crate::error::{CliError, Result};
use constforce::engine::config as core_config;
use defaults::DefaultsConfig;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialSystemConfig {
    #[serde(rename = "particle-count")]
    particle_count: Option<usize>,
    #[serde(rename = "particle-mass")]
    particle_mass: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialOutputConfig {
    #[serde(rename = "include-forces")]
    include_forces: Option<bool>,
    #[serde(rename = "include-energy")]
    include_energy: Option<bool>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialEvaluationConfig {
    system: Option<PartialSystemConfig>,
    output: Option<PartialOutputConfig>,
}

impl PartialEvaluationConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Resolves the final evaluation settings. Precedence, highest first: `--set` values,
    /// dedicated CLI flags, the config file, then `inferred_particle_count` and
    /// [`DefaultsConfig`].
    pub fn merge_with_cli(
        mut self,
        args: &EvaluateArgs,
        inferred_particle_count: usize,
    ) -> Result<core_config::EvaluationConfig> {
        let defaults = DefaultsConfig::default();
        let system = self.system.take().unwrap_or_default();
        let output = self.output.take().unwrap_or_default();

        let mut particle_count = args
            .particles
            .or(system.particle_count)
            .unwrap_or(inferred_particle_count);
        let mut particle_mass = args
            .particle_mass
            .or(system.particle_mass)
            .unwrap_or(defaults.particle_mass);
        let mut include_forces = output.include_forces.unwrap_or(defaults.include_forces);
        let mut include_energy = output.include_energy.unwrap_or(defaults.include_energy);

        for (key, value) in parse_set_values(&args.set_values)? {
            match key {
                "system.particle-count" => particle_count = parse_value(key, value)?,
                "system.particle-mass" => particle_mass = parse_value(key, value)?,
                "output.include-forces" => include_forces = parse_value(key, value)?,
                "output.include-energy" => include_energy = parse_value(key, value)?,
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }

        core_config::EvaluationConfigBuilder::new()
            .particle_count(particle_count)
            .particle_mass(particle_mass)
            .include_forces(include_forces)
            .include_energy(include_energy)
            .build()
            .map_err(|e| CliError::Config(e.to_string()))
    }
}

fn parse_set_values(set_values: &[String]) -> Result<Vec<(&str, &str)>> {
    set_values
        .iter()
        .map(|kv_pair| {
            kv_pair.split_once('=').ok_or_else(|| {
                CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                ))
            })
        })
        .collect()
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        CliError::Config(format!("Invalid value for {}: {}", key, value))
    })
}
