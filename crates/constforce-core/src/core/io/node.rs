use super::error::SerializationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A scalar value stored on a [`SerializationNode`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Int(i64),
    Double(f64),
}

/// A node of a hierarchical parameter document.
///
/// Each node has a name, a set of named integer or floating-point properties, and an ordered
/// list of child nodes. Serialization proxies write an object's parameters into a node and
/// rebuild the object from one; the node itself can be persisted with any
/// [`DocumentFormat`](super::traits::DocumentFormat).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SerializationNode {
    name: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    properties: BTreeMap<String, PropertyValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<SerializationNode>,
}

impl SerializationNode {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    pub fn property(&self, name: &str) -> Option<PropertyValue> {
        self.properties.get(name).copied()
    }

    pub fn set_int_property(&mut self, name: &str, value: i64) -> &mut Self {
        self.properties
            .insert(name.to_string(), PropertyValue::Int(value));
        self
    }

    pub fn set_double_property(&mut self, name: &str, value: f64) -> &mut Self {
        self.properties
            .insert(name.to_string(), PropertyValue::Double(value));
        self
    }

    /// Reads an integer property.
    ///
    /// # Errors
    ///
    /// [`SerializationError::MissingProperty`] if absent, [`SerializationError::PropertyType`]
    /// if it holds a floating-point value.
    pub fn int_property(&self, name: &str) -> Result<i64, SerializationError> {
        match self.require(name)? {
            PropertyValue::Int(value) => Ok(value),
            PropertyValue::Double(_) => Err(SerializationError::PropertyType {
                node: self.name.clone(),
                property: name.to_string(),
                expected: "integer",
            }),
        }
    }

    /// Reads a floating-point property. Integer values are widened.
    pub fn double_property(&self, name: &str) -> Result<f64, SerializationError> {
        match self.require(name)? {
            PropertyValue::Int(value) => Ok(value as f64),
            PropertyValue::Double(value) => Ok(value),
        }
    }

    /// Appends a new child node and returns it for population.
    pub fn create_child_node(&mut self, name: &str) -> &mut SerializationNode {
        self.children.push(SerializationNode::new(name));
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Returns the first child named `name`.
    pub fn child_node(&self, name: &str) -> Result<&SerializationNode, SerializationError> {
        self.children
            .iter()
            .find(|child| child.name == name)
            .ok_or_else(|| SerializationError::MissingChild {
                node: self.name.clone(),
                child: name.to_string(),
            })
    }

    pub fn children(&self) -> &[SerializationNode] {
        &self.children
    }

    fn require(&self, name: &str) -> Result<PropertyValue, SerializationError> {
        self.property(name)
            .ok_or_else(|| SerializationError::MissingProperty {
                node: self.name.clone(),
                property: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn properties_can_be_chained_and_read_back() {
        let mut node = SerializationNode::new("Force");
        node.set_int_property("p", 3).set_double_property("fx", -0.25);

        assert_eq!(node.name(), "Force");
        assert_eq!(node.int_property("p").unwrap(), 3);
        assert_eq!(node.double_property("fx").unwrap(), -0.25);
        assert!(node.has_property("p"));
        assert!(!node.has_property("fy"));
    }

    #[test]
    fn double_property_widens_integers() {
        let mut node = SerializationNode::new("Force");
        node.set_int_property("fx", 2);
        assert_eq!(node.double_property("fx").unwrap(), 2.0);
    }

    #[test]
    fn int_property_rejects_floating_point_values() {
        let mut node = SerializationNode::new("Force");
        node.set_double_property("p", 1.5);
        assert!(matches!(
            node.int_property("p"),
            Err(SerializationError::PropertyType { .. })
        ));
    }

    #[test]
    fn missing_property_is_reported_with_node_name() {
        let node = SerializationNode::new("Force");
        match node.int_property("p") {
            Err(SerializationError::MissingProperty { node, property }) => {
                assert_eq!(node, "Force");
                assert_eq!(property, "p");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn children_keep_creation_order_and_can_be_found_by_name() {
        let mut root = SerializationNode::new("Root");
        root.create_child_node("A").set_int_property("i", 0);
        root.create_child_node("B").set_int_property("i", 1);
        root.create_child_node("A").set_int_property("i", 2);

        let names: Vec<_> = root.children().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["A", "B", "A"]);
        assert_eq!(root.child_node("A").unwrap().int_property("i").unwrap(), 0);
        assert!(matches!(
            root.child_node("C"),
            Err(SerializationError::MissingChild { .. })
        ));
    }
}
