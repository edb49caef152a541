//! # Workflows Module
//!
//! High-level entry points that drive the full host lifecycle for a caller who only has a set
//! of forces: build a system, realize it on the reference platform, run one execution step.
//!
//! - **Evaluation Workflow** ([`evaluate`]) - Per-particle forces and potential energy for one step

pub mod evaluate;
