//! # ConstForce
//!
//! A plugin that adds a constant, per-particle force to a molecular-dynamics host.
//!
//! ## Architecture
//!
//! - **[`core`]: The Plugin.** The [`ConstForce`](core::forcefield::const_force::ConstForce)
//!   definition, the platform-independent kernel contract, and the serialization proxy that
//!   persists the force's parameters to a versioned document.
//!
//! - **[`engine`]: The Host.** The contracts a force plugs into (`Force`, `ForceImpl`,
//!   `KernelFactory`) and the objects that drive the lifecycle: `System`, `Platform`, `Context`.
//!
//! - **[`platforms`]: The Kernels.** The reference implementation of the constant force kernel.
//!
//! - **[`plugin`]: The Glue.** Registration of kernel factories and serialization proxies.
//!
//! - **[`workflows`]: The Public API.** One-call evaluation of a set of forces.

pub mod core;
pub mod engine;
pub mod platforms;
pub mod plugin;
pub mod workflows;
