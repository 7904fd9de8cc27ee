//! # Engine Module
//!
//! This module implements the stateful side of structure superposition: the Monte Carlo
//! search that moves the mobile structure onto the target.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Iteration budget, initial step size, tolerance and seed
//! - **State Tracking** ([`state`]) - The chain state and the outcome of a finished run
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//! - **Error Handling** ([`error`]) - Engine-specific error types
//! - **Tasks** ([`tasks`]) - The Monte Carlo optimizer itself
//!
//! The search is strictly sequential: every accept/reject decision depends on the
//! previous one, so a run is a single loop on the calling thread with no I/O inside it.

pub mod config;
pub mod error;
pub mod progress;
pub mod state;
pub mod tasks;
pub(crate) mod utils;
