use crate::core::utils::geometry::translate_all;
use nalgebra::{Point3, Vector3};

/// Working state of a single Monte Carlo chain.
///
/// The backbone and all-atom coordinates only ever change together, through
/// [`MonteCarloState::accept`], so both views stay rigidly consistent.
#[derive(Debug, Clone)]
pub struct MonteCarloState {
    pub backbone: Vec<Point3<f64>>,
    pub all_atoms: Vec<Point3<f64>>,
    pub step_size: f64,
    pub best_rmsd: f64,
    pub trajectory: Vec<f64>,
    pub step_sizes: Vec<f64>,
    pub net_translation: Vector3<f64>,
    pub accepted: usize,
    pub rejected: usize,
}

impl MonteCarloState {
    pub fn new(
        backbone: Vec<Point3<f64>>,
        all_atoms: Vec<Point3<f64>>,
        step_size: f64,
        initial_rmsd: f64,
        capacity: usize,
    ) -> Self {
        Self {
            backbone,
            all_atoms,
            step_size,
            best_rmsd: initial_rmsd,
            trajectory: Vec::with_capacity(capacity),
            step_sizes: Vec::with_capacity(capacity),
            net_translation: Vector3::zeros(),
            accepted: 0,
            rejected: 0,
        }
    }

    /// Replaces the backbone with an already translated candidate and applies
    /// the same translation to the all-atom coordinates.
    pub fn accept(&mut self, candidate: Vec<Point3<f64>>, translation: &Vector3<f64>, rmsd: f64) {
        self.backbone = candidate;
        translate_all(&mut self.all_atoms, translation);
        self.net_translation += translation;
        self.best_rmsd = rmsd;
        self.accepted += 1;
    }

    /// Records the rejection and shrinks the step size by `factor` when the
    /// best RMSD is already below `threshold`.
    pub fn reject(&mut self, threshold: f64, factor: f64) {
        self.rejected += 1;
        if self.best_rmsd < threshold {
            self.step_size *= factor;
        }
    }

    pub fn record(&mut self) {
        self.trajectory.push(self.best_rmsd);
        self.step_sizes.push(self.step_size);
    }

    pub fn into_outcome(self, initial_rmsd: f64, converged: bool) -> MonteCarloOutcome {
        MonteCarloOutcome {
            iterations: self.accepted + self.rejected,
            final_rmsd: self.best_rmsd,
            final_step_size: self.step_size,
            aligned_backbone: self.backbone,
            aligned_all_atoms: self.all_atoms,
            trajectory: self.trajectory,
            step_sizes: self.step_sizes,
            net_translation: self.net_translation,
            accepted: self.accepted,
            rejected: self.rejected,
            initial_rmsd,
            converged,
        }
    }
}

/// Result of a finished Monte Carlo run.
#[derive(Debug, Clone)]
pub struct MonteCarloOutcome {
    pub aligned_backbone: Vec<Point3<f64>>,
    pub aligned_all_atoms: Vec<Point3<f64>>,
    /// Best RMSD after every iteration; a converged run ends with the value below tolerance.
    pub trajectory: Vec<f64>,
    /// Step size in effect at the end of every iteration.
    pub step_sizes: Vec<f64>,
    pub initial_rmsd: f64,
    pub final_rmsd: f64,
    pub final_step_size: f64,
    /// Sum of all accepted translations.
    pub net_translation: Vector3<f64>,
    pub accepted: usize,
    pub rejected: usize,
    pub iterations: usize,
    pub converged: bool,
}

impl MonteCarloOutcome {
    pub fn acceptance_ratio(&self) -> f64 {
        if self.iterations == 0 {
            0.0
        } else {
            self.accepted as f64 / self.iterations as f64
        }
    }
}
