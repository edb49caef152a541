//! # Engine Module
//!
//! The simulation host that forces plug into. It owns the invocation lifecycle:
//! a [`System`](system::System) is populated with particles and forces, realized on a
//! [`Platform`](platform::Platform) as a [`Context`](context::Context), which creates one
//! kernel per force and then runs one execution step per [`get_state`](context::Context::get_state)
//! call.
//!
//! ## Architecture
//!
//! - **Contracts** ([`force`]) - The `Force` and `ForceImpl` traits every force implements
//! - **Systems** ([`system`]) - Particles and the forces attached to them
//! - **Platforms** ([`platform`]) - Named backends and their kernel factories
//! - **Contexts** ([`context`]) - Realized systems and the per-step force accumulator
//! - **States** ([`state`]) - Results of an execution step
//! - **Configuration** ([`config`]) - Settings for the evaluation workflow
//! - **Error Handling** ([`error`]) - Engine error types
//!
//! The engine never integrates equations of motion; it only accumulates forces and energies.

pub mod config;
pub mod context;
pub mod error;
pub mod force;
pub mod platform;
pub mod state;
pub mod system;
