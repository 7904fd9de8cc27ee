//! # Core Module
//!
//! This module provides the stateless building blocks of structure superposition:
//! data models, structure file I/O and geometry.
//!
//! ## Architecture
//!
//! - **Structure Representation** ([`models`]) - Atoms and structures with backbone and all-atom views
//! - **File I/O** ([`io`]) - Reading and re-emitting fixed-column coordinate files, trajectory reports
//! - **Geometry** ([`utils`]) - RMSD metric, centroids and rigid translations
//!
//! Nothing in this module holds optimization state; that lives in [`crate::engine`].

pub mod io;
pub mod models;
pub mod utils;
