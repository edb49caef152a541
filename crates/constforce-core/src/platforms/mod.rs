//! Platform-specific implementations of the constant force kernel.
//!
//! Only the reference (single-threaded CPU) platform is provided.

pub mod reference;
