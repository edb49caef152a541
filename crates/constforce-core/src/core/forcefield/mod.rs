//! # Force Field Module
//!
//! This module defines the constant force term: a force that pushes each of a list of
//! particles with a fixed vector, independent of their positions.
//!
//! ## Key Components
//!
//! - [`const_force`] - The [`ConstForce`](const_force::ConstForce) definition and its accessors
//! - [`term`] - A single (particle, force vector) term
//! - [`kernels`] - The platform-independent kernel contract used to apply the force
//! - [`force_impl`] - The per-context object that owns a platform kernel
//!
//! ## Usage
//!
//! ```ignore
//! use constforce::core::forcefield::const_force::ConstForce;
//! use nalgebra::Vector3;
//!
//! let mut force = ConstForce::new();
//! let term = force.add_particle(0, Vector3::new(-0.1, 0.0, 0.1));
//! let index = system.add_force(force.clone());
//! let mut context = Context::new(system, &platform)?;
//!
//! force.set_particle_force(term, 0, Vector3::new(0.2, -0.1, 0.3))?;
//! force.update_force_in_context(&mut context, index)?;
//! ```

pub mod const_force;
pub mod force_impl;
pub mod kernels;
pub mod term;
