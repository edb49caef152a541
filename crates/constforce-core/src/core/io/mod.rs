//! Provides persistence for force parameters.
//!
//! Forces are converted to and from a hierarchical [`SerializationNode`](node::SerializationNode)
//! document by serialization proxies registered in a [`ProxyRegistry`](proxy::ProxyRegistry).
//! Documents are written to disk through a [`DocumentFormat`](traits::DocumentFormat); TOML is
//! the provided encoding.

pub mod const_force_proxy;
pub mod error;
pub mod node;
pub mod proxy;
pub mod toml_document;
pub mod traits;
