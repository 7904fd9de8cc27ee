//! # Core Models Module
//!
//! This module contains the data structures used to represent the structures being
//! superimposed.
//!
//! ## Key Components
//!
//! - [`atom`] - Individual atom with its name, coordinates and source record
//! - [`structure`] - Ordered atom list with derived backbone and all-atom views
//!
//! ## Usage
//!
//! ```ignore
//! use mcalign::core::models::{atom::Atom, structure::Structure};
//!
//! let mut structure = Structure::new();
//! structure.push_atom(Atom::new("CA", Point3::new(0.0, 0.0, 0.0), line));
//! let scoring_coords = structure.backbone_coords();
//! ```

pub mod atom;
pub mod structure;
