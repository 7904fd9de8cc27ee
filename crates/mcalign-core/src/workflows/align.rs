use crate::core::models::structure::Structure;
use crate::core::utils::geometry::centroid;
use crate::engine::config::AlignmentConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::state::MonteCarloOutcome;
use crate::engine::tasks;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone)]
pub struct AlignmentResult {
    /// The mobile structure moved onto the target; records are unchanged.
    pub aligned: Structure,
    pub outcome: MonteCarloOutcome,
}

impl AlignmentResult {
    pub fn trajectory(&self) -> &[f64] {
        &self.outcome.trajectory
    }
}

/// Superimposes `mobile` onto `target` by translational Monte Carlo search
/// over their backbone marker atoms.
///
/// Backbone atoms are matched by position in the input, not by residue
/// identity. Neither input is modified.
///
/// # Errors
///
/// Returns [`EngineError::ShapeMismatch`] if the two structures have a
/// different number of backbone atoms, [`EngineError::EmptyBackbone`] if
/// they have none, and propagates configuration or geometry failures from the
/// optimizer.
#[instrument(skip_all, name = "alignment_workflow")]
pub fn run(
    target: &Structure,
    mobile: &Structure,
    config: &AlignmentConfig,
    reporter: &ProgressReporter,
) -> Result<AlignmentResult, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Preparation",
    });
    let target_backbone = target.backbone_coords();
    let mobile_backbone = mobile.backbone_coords();
    info!(
        "Aligning {} mobile atoms ({} backbone) onto {} target backbone atoms.",
        mobile.len(),
        mobile_backbone.len(),
        target_backbone.len()
    );
    debug!("Alignment parameters: {:?}", config);

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    reporter.report(Progress::PhaseFinish);

    reporter.report(Progress::PhaseStart {
        name: "Monte Carlo Alignment",
    });
    let outcome = tasks::monte_carlo::run(
        &target_backbone,
        &mobile_backbone,
        &mobile.all_coords(),
        config,
        &mut rng,
        reporter,
    )?;
    reporter.report(Progress::PhaseFinish);

    let aligned = mobile.with_coords(&outcome.aligned_all_atoms)?;

    info!(
        "RMSD {:.4} -> {:.4} after {} iterations ({} accepted, {:.1}% acceptance, converged: {}).",
        outcome.initial_rmsd,
        outcome.final_rmsd,
        outcome.iterations,
        outcome.accepted,
        outcome.acceptance_ratio() * 100.0,
        outcome.converged
    );
    let t = &outcome.net_translation;
    info!(
        "Net translation ({:.3}, {:.3}, {:.3}), final step size {:.3e}.",
        t.x, t.y, t.z, outcome.final_step_size
    );
    if let (Some(before), Some(after), Some(reference)) = (
        centroid(&mobile_backbone),
        centroid(&outcome.aligned_backbone),
        centroid(&target_backbone),
    ) {
        debug!(
            "Backbone centroid offset from target: {:.3} -> {:.3}",
            (before - reference).norm(),
            (after - reference).norm()
        );
    }

    Ok(AlignmentResult { aligned, outcome })
}
