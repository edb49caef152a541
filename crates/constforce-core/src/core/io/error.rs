use thiserror::Error;

#[derive(Debug, Error)]
pub enum SerializationError {
    #[error("Unsupported version number {found} for '{type_name}' (expected {expected})")]
    UnsupportedVersion {
        type_name: &'static str,
        found: i64,
        expected: i64,
    },

    #[error("Node '{node}' has no property named '{property}'")]
    MissingProperty { node: String, property: String },

    #[error("Property '{property}' of node '{node}' is not of type {expected}")]
    PropertyType {
        node: String,
        property: String,
        expected: &'static str,
    },

    #[error("Property '{property}' of node '{node}' has an invalid value: {reason}")]
    InvalidProperty {
        node: String,
        property: String,
        reason: String,
    },

    #[error("Node '{node}' has no child named '{child}'")]
    MissingChild { node: String, child: String },

    #[error("No serialization proxy is registered for type '{0}'")]
    UnknownType(String),

    #[error("Serialization proxy '{proxy}' cannot handle an object of type '{found}'")]
    TypeMismatch {
        proxy: &'static str,
        found: &'static str,
    },

    #[error("TOML encoding error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML parsing error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
