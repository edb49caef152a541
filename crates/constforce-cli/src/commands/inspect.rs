use crate::cli::InspectArgs;
use crate::commands::load_force;
use crate::error::Result;
use constforce::core::forcefield::const_force::ConstForce;
use constforce::engine::force::Force;

pub fn run(args: InspectArgs) -> Result<()> {
    let force = load_force(&args.input)?;
    print!("{}", render(&force));
    Ok(())
}

fn render(force: &ConstForce) -> String {
    let mut out = format!(
        "{} with {} term(s) (periodic: {})\n",
        force.type_name(),
        force.num_particles(),
        force.uses_periodic_boundary_conditions()
    );
    out.push_str(&format!(
        "{:>6}  {:>10}  {:>14}  {:>14}  {:>14}\n",
        "term", "particle", "fx", "fy", "fz"
    ));
    for (i, term) in force.particle_forces().enumerate() {
        out.push_str(&format!(
            "{:>6}  {:>10}  {:>14.6}  {:>14.6}  {:>14.6}\n",
            i, term.particle, term.force.x, term.force.y, term.force.z
        ));
    }
    out
}
