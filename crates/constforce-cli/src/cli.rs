use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "ConstForce CLI - Create, inspect and evaluate constant per-particle force documents.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a constant force from term specifications and write its parameter document.
    Create(CreateArgs),
    /// Read a parameter document and print its terms.
    Inspect(InspectArgs),
    /// Apply the force in a document for one execution step and print the result.
    Evaluate(EvaluateArgs),
}

/// Arguments for the `create` subcommand.
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Path for the output parameter document (TOML).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// A term in the form PARTICLE:FX,FY,FZ (e.g. 0:-0.1,0.0,0.1). Can be used multiple times.
    #[arg(short, long = "term", value_name = "TERM")]
    pub terms: Vec<String>,
}

/// Arguments for the `inspect` subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Path to the parameter document to read.
    #[arg(required = true, value_name = "PATH")]
    pub input: PathBuf,
}

/// Arguments for the `evaluate` subcommand.
#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Path to the parameter document to evaluate.
    #[arg(required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path to an evaluation configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of particles in the evaluated system.
    /// Defaults to one more than the largest particle index in the document.
    #[arg(short = 'n', long, value_name = "INT")]
    pub particles: Option<usize>,

    /// Mass assigned to every particle.
    #[arg(long, value_name = "FLOAT")]
    pub particle_mass: Option<f64>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S system.particle-count=8
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}
