use super::error::SerializationError;
use super::node::SerializationNode;
use crate::engine::force::Force;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Converts one force type to and from a [`SerializationNode`].
pub trait SerializationProxy: Send + Sync {
    /// The tag written as the name of the root node for objects of this type.
    fn type_name(&self) -> &'static str;

    /// The [`TypeId`] of the concrete force type this proxy handles.
    fn object_type(&self) -> TypeId;

    /// Writes the parameters of `force` into `node`.
    fn serialize(&self, force: &dyn Force, node: &mut SerializationNode)
    -> Result<(), SerializationError>;

    /// Builds a new force from `node`. On error no object is returned.
    fn deserialize(&self, node: &SerializationNode) -> Result<Box<dyn Force>, SerializationError>;
}

/// The set of serialization proxies known to the host, looked up by tag or by force type.
#[derive(Default, Clone)]
pub struct ProxyRegistry {
    by_name: HashMap<&'static str, Arc<dyn SerializationProxy>>,
    by_type: HashMap<TypeId, Arc<dyn SerializationProxy>>,
}

impl ProxyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, proxy: Arc<dyn SerializationProxy>) {
        debug!(type_name = proxy.type_name(), "Registered serialization proxy.");
        self.by_name.insert(proxy.type_name(), Arc::clone(&proxy));
        self.by_type.insert(proxy.object_type(), proxy);
    }

    pub fn proxy(&self, type_name: &str) -> Option<&dyn SerializationProxy> {
        self.by_name.get(type_name).map(|proxy| proxy.as_ref())
    }

    /// Serializes `force` into a root node named after its proxy's tag.
    ///
    /// # Errors
    ///
    /// [`SerializationError::UnknownType`] if no proxy is registered for the force's type.
    pub fn serialize(&self, force: &dyn Force) -> Result<SerializationNode, SerializationError> {
        let proxy = self
            .by_type
            .get(&force.as_any().type_id())
            .ok_or_else(|| SerializationError::UnknownType(force.type_name().to_string()))?;
        let mut node = SerializationNode::new(proxy.type_name());
        proxy.serialize(force, &mut node)?;
        Ok(node)
    }

    /// Rebuilds a force from a root node, choosing the proxy by the node's name.
    pub fn deserialize(
        &self,
        node: &SerializationNode,
    ) -> Result<Box<dyn Force>, SerializationError> {
        let proxy = self
            .proxy(node.name())
            .ok_or_else(|| SerializationError::UnknownType(node.name().to_string()))?;
        proxy.deserialize(node)
    }

    /// Like [`deserialize`](Self::deserialize), but also checks the concrete type.
    pub fn deserialize_as<F: Force>(&self, node: &SerializationNode) -> Result<F, SerializationError> {
        let force = self.deserialize(node)?;
        let found = force.type_name();
        force
            .into_any()
            .downcast::<F>()
            .map(|force| *force)
            .map_err(|_: Box<dyn Any>| SerializationError::TypeMismatch {
                proxy: std::any::type_name::<F>(),
                found,
            })
    }
}

impl fmt::Debug for ProxyRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.by_name.keys().collect();
        names.sort();
        f.debug_struct("ProxyRegistry")
            .field("types", &names)
            .finish()
    }
}
