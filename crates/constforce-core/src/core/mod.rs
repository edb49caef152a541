//! # Core Module
//!
//! The plugin's own building blocks: the constant force definition and its kernel contract
//! ([`forcefield`]), and the serialization proxy that persists it ([`io`]).

pub mod forcefield;
pub mod io;
