//! Tasks for structure superposition.
//!
//! Tasks are the computational units that the workflows chain together. The only
//! search implemented is the greedy translational Monte Carlo chain in [`monte_carlo`].

pub mod monte_carlo;
