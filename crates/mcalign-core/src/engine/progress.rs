/// Events emitted while an alignment runs.
#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    PhaseStart { name: &'static str },
    PhaseFinish,

    /// The chain is about to evaluate up to `total_steps` proposals.
    ChainStart { total_steps: u64, initial_rmsd: f64 },
    /// One proposal has been evaluated and the state recorded.
    Iteration {
        iteration: usize,
        best_rmsd: f64,
        step_size: f64,
        accepted: bool,
    },
    /// The chain stopped, either below tolerance or out of budget.
    ChainFinish {
        iterations: usize,
        best_rmsd: f64,
        converged: bool,
    },
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}
