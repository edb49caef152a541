use crate::cli::CreateArgs;
use crate::error::{CliError, Result};
use crate::utils::parser;
use constforce::core::forcefield::const_force::ConstForce;
use constforce::core::io::toml_document::TomlDocument;
use constforce::core::io::traits::DocumentFormat;
use constforce::plugin;
use tracing::{info, warn};

pub fn run(args: CreateArgs) -> Result<()> {
    let force = build_force(&args.terms)?;
    if force.num_particles() == 0 {
        warn!("No terms given; writing a document with an empty term list.");
    }

    let node = plugin::proxy_registry().serialize(&force)?;
    TomlDocument::write_to_path(&node, &args.output)?;
    info!(
        "Wrote {} term(s) to {:?}",
        force.num_particles(),
        &args.output
    );
    println!(
        "✓ Constant force with {} term(s) written to: {}",
        force.num_particles(),
        args.output.display()
    );
    Ok(())
}

fn build_force(terms: &[String]) -> Result<ConstForce> {
    let mut force = ConstForce::new();
    for term in terms {
        let (particle, pforce) =
            parser::parse_term(term).map_err(|e| CliError::Argument(e.to_string()))?;
        force.add_particle(particle, pforce);
    }
    Ok(force)
}
