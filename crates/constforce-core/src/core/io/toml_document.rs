use super::error::SerializationError;
use super::node::SerializationNode;
use super::traits::DocumentFormat;
use std::io::{BufRead, Write};

/// Persists parameter documents as TOML.
///
/// Integer properties are written as TOML integers and floating-point properties as TOML
/// floats, so the distinction survives a round trip.
pub struct TomlDocument;

impl TomlDocument {
    pub fn to_string(node: &SerializationNode) -> Result<String, SerializationError> {
        Ok(toml::to_string(node)?)
    }

    pub fn from_str(content: &str) -> Result<SerializationNode, SerializationError> {
        Ok(toml::from_str(content)?)
    }
}

impl DocumentFormat for TomlDocument {
    type Error = SerializationError;

    fn read_from(reader: &mut impl BufRead) -> Result<SerializationNode, Self::Error> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Self::from_str(&content)
    }

    fn write_to(node: &SerializationNode, writer: &mut impl Write) -> Result<(), Self::Error> {
        writer.write_all(Self::to_string(node)?.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::forcefield::const_force::ConstForce;
    use crate::core::io::const_force_proxy::ConstForceProxy;
    use nalgebra::Vector3;
    use std::fs;
    use tempfile::tempdir;

    fn sample_document() -> SerializationNode {
        let mut force = ConstForce::new();
        force.add_particle(0, Vector3::new(-0.1, 0.0, 0.1));
        force.add_particle(1, Vector3::new(0.2, -0.1, 0.3));
        let mut node = SerializationNode::new(ConstForce::TYPE_NAME);
        ConstForceProxy.serialize_force(&force, &mut node).unwrap();
        node
    }

    #[test]
    fn string_round_trip_preserves_document_exactly() {
        let node = sample_document();
        let text = TomlDocument::to_string(&node).unwrap();
        assert_eq!(TomlDocument::from_str(&text).unwrap(), node);
    }

    #[test]
    fn zero_force_components_stay_floating_point() {
        let node = sample_document();
        let text = TomlDocument::to_string(&node).unwrap();
        let restored = TomlDocument::from_str(&text).unwrap();
        let record = &restored.child_node("ConstForces").unwrap().children()[0];
        assert!(record.int_property("fy").is_err());
        assert_eq!(record.double_property("fy").unwrap(), 0.0);
    }

    #[test]
    fn parses_hand_written_document() {
        let text = r#"
            name = "ConstForce"

            [properties]
            version = 1

            [[children]]
            name = "ConstForces"

            [[children.children]]
            name = "Force"
            properties = { p = 2, fx = 1.5, fy = -2.0, fz = 0.0 }
        "#;
        let node = TomlDocument::from_str(text).unwrap();
        let force = ConstForceProxy.deserialize_force(&node).unwrap();
        assert_eq!(
            force.particle_force(0).unwrap(),
            (2, Vector3::new(1.5, -2.0, 0.0))
        );
    }

    #[test]
    fn path_round_trip_succeeds() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("force.toml");
        let node = sample_document();

        TomlDocument::write_to_path(&node, &path).unwrap();
        assert_eq!(TomlDocument::read_from_path(&path).unwrap(), node);
    }

    #[test]
    fn read_from_path_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let result = TomlDocument::read_from_path(dir.path().join("missing.toml"));
        assert!(matches!(result, Err(SerializationError::Io(_))));
    }

    #[test]
    fn read_from_path_fails_for_malformed_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("malformed.toml");
        fs::write(&path, "this is not toml").unwrap();
        let result = TomlDocument::read_from_path(&path);
        assert!(matches!(result, Err(SerializationError::TomlDeserialize(_))));
    }
}
