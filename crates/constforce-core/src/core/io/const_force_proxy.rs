use super::error::SerializationError;
use super::node::SerializationNode;
use super::proxy::SerializationProxy;
use crate::core::forcefield::const_force::ConstForce;
use crate::engine::force::Force;
use nalgebra::Vector3;
use std::any::TypeId;
use tracing::debug;

const TERMS_NODE: &str = "ConstForces";
const TERM_NODE: &str = "Force";

/// Serialization proxy for [`ConstForce`].
///
/// Document layout (version 1):
///
/// ```text
/// ConstForce            version = 1
/// └── ConstForces
///     ├── Force         p = <particle>, fx, fy, fz = <force components>
///     └── ...
/// ```
///
/// The stored energy is not part of the document.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConstForceProxy;

impl ConstForceProxy {
    pub const VERSION: i64 = 1;

    /// Writes `force` into `node`.
    ///
    /// Every particle index is checked before anything is written, so on error `node` is left
    /// as it was.
    ///
    /// # Errors
    ///
    /// Returns [`SerializationError::InvalidProperty`] if a particle index does not fit the
    /// document's signed integer property.
    pub fn serialize_force(
        &self,
        force: &ConstForce,
        node: &mut SerializationNode,
    ) -> Result<(), SerializationError> {
        let particles = force
            .particle_forces()
            .map(|term| {
                i64::try_from(term.particle).map_err(|_| SerializationError::InvalidProperty {
                    node: TERM_NODE.to_string(),
                    property: "p".to_string(),
                    reason: format!(
                        "particle index {} exceeds the largest storable index {}",
                        term.particle,
                        i64::MAX
                    ),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        node.set_int_property("version", Self::VERSION);
        let terms = node.create_child_node(TERMS_NODE);
        for (term, particle) in force.particle_forces().zip(particles) {
            terms
                .create_child_node(TERM_NODE)
                .set_int_property("p", particle)
                .set_double_property("fx", term.force.x)
                .set_double_property("fy", term.force.y)
                .set_double_property("fz", term.force.z);
        }
        debug!(terms = force.num_particles(), "Serialized constant force.");
        Ok(())
    }

    pub fn deserialize_force(
        &self,
        node: &SerializationNode,
    ) -> Result<ConstForce, SerializationError> {
        let version = node.int_property("version")?;
        if version != Self::VERSION {
            return Err(SerializationError::UnsupportedVersion {
                type_name: ConstForce::TYPE_NAME,
                found: version,
                expected: Self::VERSION,
            });
        }

        let mut force = ConstForce::new();
        for term in node.child_node(TERMS_NODE)?.children() {
            let raw_particle = term.int_property("p")?;
            let particle =
                usize::try_from(raw_particle).map_err(|_| SerializationError::InvalidProperty {
                    node: term.name().to_string(),
                    property: "p".to_string(),
                    reason: format!("particle index must be non-negative, got {}", raw_particle),
                })?;
            let pforce = Vector3::new(
                term.double_property("fx")?,
                term.double_property("fy")?,
                term.double_property("fz")?,
            );
            force.add_particle(particle, pforce);
        }
        debug!(terms = force.num_particles(), "Deserialized constant force.");
        Ok(force)
    }
}

impl SerializationProxy for ConstForceProxy {
    fn type_name(&self) -> &'static str {
        ConstForce::TYPE_NAME
    }

    fn object_type(&self) -> TypeId {
        TypeId::of::<ConstForce>()
    }

    fn serialize(
        &self,
        force: &dyn Force,
        node: &mut SerializationNode,
    ) -> Result<(), SerializationError> {
        let force = force
            .as_any()
            .downcast_ref::<ConstForce>()
            .ok_or(SerializationError::TypeMismatch {
                proxy: ConstForce::TYPE_NAME,
                found: force.type_name(),
            })?;
        self.serialize_force(force, node)
    }

    fn deserialize(&self, node: &SerializationNode) -> Result<Box<dyn Force>, SerializationError> {
        Ok(Box::new(self.deserialize_force(node)?))
    }
}
