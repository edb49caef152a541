pub mod create;
pub mod evaluate;
pub mod inspect;

use crate::error::{CliError, Result};
use constforce::core::forcefield::const_force::ConstForce;
use constforce::core::io::toml_document::TomlDocument;
use constforce::core::io::traits::DocumentFormat;
use constforce::plugin;
use std::path::Path;
use tracing::info;

/// Reads a parameter document and rebuilds the constant force it describes.
pub(crate) fn load_force(path: &Path) -> Result<ConstForce> {
    info!("Loading parameter document from {:?}", path);
    let node = TomlDocument::read_from_path(path).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    Ok(plugin::proxy_registry().deserialize_as::<ConstForce>(&node)?)
}
