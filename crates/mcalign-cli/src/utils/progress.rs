use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use mcalign::engine::progress::{Progress, ProgressCallback};
use std::sync::{Arc, Mutex};
use tracing::warn;

const CHAIN_TEMPLATE: &str = "{prefix:.bold} [{bar:40.cyan/blue}] {pos}/{len} {msg} ({elapsed})";

/// Shows the Monte Carlo chain as one stderr bar carrying the best RMSD so
/// far and the current step size.
#[derive(Clone)]
pub struct CliProgressHandler {
    pb: Arc<Mutex<ProgressBar>>,
}

fn chain_status(best_rmsd: f64, step_size: f64) -> String {
    format!("RMSD {:.4} | step {:.3e}", best_rmsd, step_size)
}

fn finish_status(iterations: usize, best_rmsd: f64, converged: bool) -> String {
    if converged {
        format!("✓ RMSD {:.4} after {} iterations", best_rmsd, iterations)
    } else {
        format!(
            "✗ tolerance not reached in {} iterations, best RMSD {:.4}",
            iterations, best_rmsd
        )
    }
}

impl CliProgressHandler {
    pub fn new() -> Self {
        let pb = ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::stderr())
            .with_style(Self::chain_style());
        Self {
            pb: Arc::new(Mutex::new(pb)),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb_clone = self.pb.clone();

        Box::new(move |progress: Progress| {
            let Ok(pb) = pb_clone.lock() else {
                warn!("Progress bar mutex was poisoned. Cannot update progress.");
                return;
            };

            match progress {
                Progress::PhaseStart { name } => pb.set_prefix(name),
                Progress::PhaseFinish => {}
                Progress::ChainStart {
                    total_steps,
                    initial_rmsd,
                } => {
                    pb.reset();
                    pb.set_length(total_steps);
                    pb.set_message(format!("RMSD {:.4}", initial_rmsd));
                }
                Progress::Iteration {
                    iteration,
                    best_rmsd,
                    step_size,
                    ..
                } => {
                    pb.set_position(iteration as u64);
                    pb.set_message(chain_status(best_rmsd, step_size));
                }
                Progress::ChainFinish {
                    iterations,
                    best_rmsd,
                    converged,
                } => {
                    // An early stop leaves the bar short of the budget.
                    pb.set_length(iterations as u64);
                    pb.finish_with_message(finish_status(iterations, best_rmsd, converged));
                }
            }
        })
    }

    fn chain_style() -> ProgressStyle {
        ProgressStyle::with_template(CHAIN_TEMPLATE)
            .expect("Failed to create chain progress template")
            .progress_chars("##-")
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}
