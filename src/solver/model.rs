use crate::Utility;
use crate::solver::error::Error;
use crate::solver::table::ValueTable;

/// The contract between a tabular environment and the sweep engine.
///
/// A model owns three things: a finite, enumerable state space laid out
/// on a dense grid; the admissible actions at each state; and an exact
/// one-step lookahead. The engine owns everything else (tables, sweep
/// order of information, termination).
///
/// # Implementation
///
/// To plug a new environment into [`Solver`](crate::solver::solver::Solver):
/// 1. Pick cheap `Copy` types for states and actions.
/// 2. Map states onto dense table coordinates via `shape`/`locate`.
/// 3. Enumerate non-terminal states in a fixed order via `states`; the
///    in-place discipline sweeps in exactly this order.
/// 4. List admissible actions via `actions`; the first-encountered
///    action wins greedy ties.
/// 5. Compute the exact expected backup in `transition`.
pub trait Model: Send + Sync {
    /// Domain state, cheap to copy across worker threads.
    type State: Copy + Send + Sync;
    /// Domain action; equality supports policy assertions downstream.
    type Action: Copy + PartialEq + Send;

    /// Dense (rows, cols) of the value and policy tables, terminals
    /// included.
    fn shape(&self) -> (usize, usize);

    /// Every non-terminal state, in the fixed deterministic sweep order.
    fn states(&self) -> impl Iterator<Item = Self::State> + '_;

    /// Dense table coordinates of a state.
    fn locate(&self, state: Self::State) -> (usize, usize);

    /// Admissible actions at a state, in tie-break order. Never empty for
    /// a state that `states` yields.
    fn actions(&self, state: Self::State) -> Vec<Self::Action>;

    /// Exact one-step lookahead: expected immediate reward plus the
    /// discounted expectation of the given table over successor states.
    /// No sampling, no table mutation. Re-validates its inputs and fails
    /// with [`Error::InvalidAction`] on a domain violation even though
    /// the engine pre-filters through `actions`.
    fn transition(
        &self,
        state: Self::State,
        action: Self::Action,
        values: &ValueTable,
    ) -> Result<Utility, Error>;
}
