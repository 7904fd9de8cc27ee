//! Utility functions for the engine module.
//!
//! Currently this holds the random move generator used by the Monte Carlo task.

pub mod sampling;
