use crate::cli::EvaluateArgs;
use crate::commands::load_force;
use crate::config::PartialEvaluationConfig;
use crate::error::Result;
use constforce::core::forcefield::const_force::ConstForce;
use constforce::engine::force::Force;
use constforce::workflows;
use tracing::info;

pub fn run(args: EvaluateArgs) -> Result<()> {
    let force = load_force(&args.input)?;

    let partial_config = match &args.config {
        Some(path) => PartialEvaluationConfig::from_file(path)?,
        None => PartialEvaluationConfig::default(),
    };
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_with_cli(&args, inferred_particle_count(&force))?;

    let forces: Vec<Box<dyn Force>> = vec![Box::new(force)];
    let result = workflows::evaluate::run(forces, &config)?;

    println!(
        "Evaluated {} particle(s) on the reference platform.",
        result.num_particles
    );
    if config.include_energy {
        println!(
            "Potential energy: {:.6}",
            result.state.potential_energy()?
        );
    }
    if config.include_forces {
        println!(
            "{:>10}  {:>14}  {:>14}  {:>14}",
            "particle", "fx", "fy", "fz"
        );
        for (i, f) in result.state.forces()?.iter().enumerate() {
            println!("{:>10}  {:>14.6}  {:>14.6}  {:>14.6}", i, f.x, f.y, f.z);
        }
    }
    Ok(())
}

/// The smallest particle count that covers every term of `force`.
fn inferred_particle_count(force: &ConstForce) -> usize {
    force
        .particle_forces()
        .map(|term| term.particle.saturating_add(1))
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use constforce::engine::error::EngineError;
    use nalgebra::Vector3;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn inferred_particle_count_covers_largest_index() {
        let mut force = ConstForce::new();
        assert_eq!(inferred_particle_count(&force), 0);
        force.add_particle(2, Vector3::x());
        force.add_particle(0, Vector3::y());
        assert_eq!(inferred_particle_count(&force), 3);
    }

    #[test]
    fn run_evaluates_document_from_disk() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("force.toml");
        crate::commands::create::run(crate::cli::CreateArgs {
            output: input.clone(),
            terms: vec!["1:0.5,0.5,0.5".to_string()],
        })
        .unwrap();

        let args = EvaluateArgs {
            input,
            config: None,
            particles: None,
            particle_mass: None,
            set_values: vec![],
        };
        assert!(run(args).is_ok());
    }

    #[test]
    fn run_fails_when_particle_count_is_too_small() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("force.toml");
        crate::commands::create::run(crate::cli::CreateArgs {
            output: input.clone(),
            terms: vec!["4:1,0,0".to_string()],
        })
        .unwrap();

        let args = EvaluateArgs {
            input,
            config: None,
            particles: Some(2),
            particle_mass: None,
            set_values: vec![],
        };
        assert!(matches!(
            run(args),
            Err(CliError::Engine(EngineError::ParticleIndexOutOfRange { .. }))
        ));
    }

    #[test]
    fn run_rejects_document_implying_an_enormous_system() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("force.toml");
        crate::commands::create::run(crate::cli::CreateArgs {
            output: input.clone(),
            terms: vec!["9000000000000000000:1,0,0".to_string()],
        })
        .unwrap();

        let args = EvaluateArgs {
            input,
            config: None,
            particles: None,
            particle_mass: None,
            set_values: vec![],
        };
        assert!(matches!(
            run(args),
            Err(CliError::Config(msg)) if msg.contains("particle_count")
        ));
    }

    #[test]
    fn run_reports_malformed_document_as_parse_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("broken.toml");
        fs::write(&input, "name = ").unwrap();

        let args = EvaluateArgs {
            input,
            config: None,
            particles: None,
            particle_mass: None,
            set_values: vec![],
        };
        assert!(matches!(run(args), Err(CliError::FileParsing { .. })));
    }
}
