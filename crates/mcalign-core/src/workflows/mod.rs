//! # Workflows Module
//!
//! High-level entry points that tie the [`crate::core`] data models and the
//! [`crate::engine`] optimizer together.
//!
//! - **Alignment Workflow** ([`align`]) - Translational Monte Carlo superposition of a
//!   mobile structure onto a target, returning the moved structure and its RMSD trajectory.

pub mod align;
