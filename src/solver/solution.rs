use crate::Energy;
use crate::solver::model::Model;
use crate::solver::policy::PolicyTable;
use crate::solver::table::ValueTable;

/// Artifacts of a finished run: the model that was solved, the tables it
/// reached, and the residual trail that got it there.
pub struct Solution<M: Model> {
    /// The solved model, handed back for rendering and reuse.
    pub model: M,
    /// Final state values.
    pub values: ValueTable,
    /// Final greedy policy; empty under the uniform backup.
    pub policy: PolicyTable<M::Action>,
    /// Sum of absolute value changes per sweep, in sweep order.
    pub residuals: Vec<Energy>,
    /// Whether the last residual fell within tolerance before the sweep
    /// budget ran out.
    pub converged: bool,
}

impl<M: Model> Solution<M> {
    /// Number of sweeps executed.
    pub fn sweeps(&self) -> usize {
        self.residuals.len()
    }

    /// Residual of the last executed sweep.
    pub fn residual(&self) -> Energy {
        self.residuals.last().copied().unwrap_or(Energy::INFINITY)
    }
}
