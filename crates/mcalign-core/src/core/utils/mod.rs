//! Geometric helpers shared by the I/O layer and the optimization engine.

pub mod geometry;
