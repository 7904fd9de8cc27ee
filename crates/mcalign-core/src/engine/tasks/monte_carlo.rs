use crate::core::utils::geometry::calculate_rmsd;
use crate::engine::config::AlignmentConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::state::{MonteCarloOutcome, MonteCarloState};
use crate::engine::utils::sampling::propose_translation;
use nalgebra::Point3;
use rand::Rng;
use tracing::{debug, info, instrument, trace};

/// Multiplicative step-size decay applied on a rejected proposal.
pub const STEP_SHRINK_FACTOR: f64 = 0.8;
/// The step size only decays once the best RMSD is below this value (Å).
pub const STEP_SHRINK_RMSD_THRESHOLD: f64 = 1.0;

/// Runs a single greedy Monte Carlo chain over rigid translations.
///
/// Each iteration draws a Gaussian translation, scores the translated
/// backbone against `target` and keeps it only if the RMSD strictly improves.
/// There is no uphill acceptance, so the chain cannot leave a local minimum;
/// the step size decays on rejections once the fit is below
/// [`STEP_SHRINK_RMSD_THRESHOLD`] and never grows back.
///
/// The run stops early on the first accepted move whose RMSD is below
/// `config.tolerance`. Convergence is only checked after a proposal has been
/// evaluated.
///
/// # Errors
///
/// * [`EngineError::Config`] if the configuration is invalid.
/// * [`EngineError::ShapeMismatch`] if the backbone arrays differ in length.
/// * [`EngineError::EmptyBackbone`] if there is nothing to align.
/// * [`EngineError::Geometry`] if an RMSD evaluates to NaN or infinity.
///
/// All checks on the inputs happen before the first proposal.
#[instrument(skip_all, name = "monte_carlo_task", fields(steps = config.steps, backbone_atoms = target.len()))]
pub fn run(
    target: &[Point3<f64>],
    mobile_backbone: &[Point3<f64>],
    mobile_all_atoms: &[Point3<f64>],
    config: &AlignmentConfig,
    rng: &mut impl Rng,
    reporter: &ProgressReporter,
) -> Result<MonteCarloOutcome, EngineError> {
    config.validate()?;
    if target.len() != mobile_backbone.len() {
        return Err(EngineError::ShapeMismatch {
            target: target.len(),
            mobile: mobile_backbone.len(),
        });
    }
    if target.is_empty() {
        return Err(EngineError::EmptyBackbone);
    }

    let initial_rmsd = calculate_rmsd(target, mobile_backbone)?;
    let mut state = MonteCarloState::new(
        mobile_backbone.to_vec(),
        mobile_all_atoms.to_vec(),
        config.step_size,
        initial_rmsd,
        config.steps,
    );
    debug!(
        "Starting chain: initial RMSD {:.4}, step size {}, tolerance {}.",
        initial_rmsd, config.step_size, config.tolerance
    );

    reporter.report(Progress::ChainStart {
        total_steps: config.steps as u64,
        initial_rmsd,
    });

    let mut converged = false;
    for iteration in 1..=config.steps {
        let translation = propose_translation(state.step_size, rng);
        let candidate: Vec<Point3<f64>> = state.backbone.iter().map(|p| p + translation).collect();
        let rmsd = calculate_rmsd(target, &candidate)?;

        let accepted = rmsd < state.best_rmsd;
        if accepted {
            state.accept(candidate, &translation, rmsd);
            trace!(iteration, rmsd, "accepted");
        } else {
            state.reject(STEP_SHRINK_RMSD_THRESHOLD, STEP_SHRINK_FACTOR);
            trace!(iteration, rmsd, step_size = state.step_size, "rejected");
        }

        state.record();
        reporter.report(Progress::Iteration {
            iteration,
            best_rmsd: state.best_rmsd,
            step_size: state.step_size,
            accepted,
        });

        if accepted && rmsd < config.tolerance {
            converged = true;
            info!(
                "Converged at iteration {} with RMSD {:.4} (tolerance {}).",
                iteration, rmsd, config.tolerance
            );
            break;
        }
    }

    if !converged {
        debug!(
            "Iteration budget of {} exhausted with best RMSD {:.4}.",
            config.steps, state.best_rmsd
        );
    }
    reporter.report(Progress::ChainFinish {
        iterations: state.accepted + state.rejected,
        best_rmsd: state.best_rmsd,
        converged,
    });

    Ok(state.into_outcome(initial_rmsd, converged))
}
