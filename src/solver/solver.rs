use crate::Energy;
use crate::Utility;
use crate::solver::backup::Backup;
use crate::solver::discipline::Discipline;
use crate::solver::error::Error;
use crate::solver::model::Model;
use crate::solver::policy::PolicyTable;
use crate::solver::solution::Solution;
use crate::solver::table::ValueTable;

/// Bounded-sweep dynamic programming over any [`Model`].
///
/// Configuration chains off [`Solver::new`]; `solve` consumes the solver
/// and returns a [`Solution`] whether or not the run converged within its
/// budget. A run converges when one full sweep moves the table by no more
/// than the tolerance, summed over all swept states.
pub struct Solver<M: Model> {
    model: M,
    discipline: Discipline,
    backup: Backup,
    tolerance: Energy,
    budget: usize,
    values: ValueTable,
    policy: PolicyTable<M::Action>,
}

impl<M: Model> Solver<M> {
    /// Defaults: in-place sweeps, greedy backups, tolerance 1e-3, budget
    /// of 100 sweeps.
    pub fn new(model: M) -> Self {
        let shape = model.shape();
        Self {
            values: ValueTable::new(shape),
            policy: PolicyTable::new(shape),
            model,
            discipline: Discipline::GaussSeidel,
            backup: Backup::Greedy,
            tolerance: 1e-3,
            budget: 100,
        }
    }

    pub fn discipline(mut self, discipline: Discipline) -> Self {
        self.discipline = discipline;
        self
    }

    pub fn backup(mut self, backup: Backup) -> Self {
        self.backup = backup;
        self
    }

    pub fn tolerance(mut self, tolerance: Energy) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn budget(mut self, budget: usize) -> Self {
        self.budget = budget;
        self
    }

    /// Sweep until the residual falls within tolerance or the budget runs
    /// out. Exhausting the budget is reported on the solution, not raised.
    pub fn solve(mut self) -> Result<Solution<M>, Error> {
        if self.budget == 0 {
            return Err(Error::InvalidConfiguration(
                "sweep budget must be positive".to_string(),
            ));
        }
        if !(self.tolerance > 0.) {
            return Err(Error::InvalidConfiguration(
                "tolerance must be positive".to_string(),
            ));
        }
        let mut residuals = Vec::new();
        let mut converged = false;
        while residuals.len() < self.budget {
            let residual = match self.discipline {
                Discipline::Jacobi => self.jacobi()?,
                Discipline::GaussSeidel => self.seidel()?,
            };
            residuals.push(residual);
            log::debug!("sweep {:>4} residual {:.6}", residuals.len(), residual);
            if residual <= self.tolerance {
                converged = true;
                break;
            }
        }
        match converged {
            true => log::info!("converged after {} sweeps", residuals.len()),
            false => log::warn!("stopped above tolerance after {} sweeps", residuals.len()),
        }
        Ok(Solution {
            model: self.model,
            values: self.values,
            policy: self.policy,
            residuals,
            converged,
        })
    }

    /// One synchronous sweep: appraise every state against the frozen
    /// table in parallel, then merge the batch in enumeration order.
    fn jacobi(&mut self) -> Result<Energy, Error> {
        use rayon::iter::IntoParallelIterator;
        use rayon::iter::ParallelIterator;
        let model = &self.model;
        let backup = self.backup;
        let frozen = &self.values;
        let updates = model
            .states()
            .collect::<Vec<_>>()
            .into_par_iter()
            .map(|state| appraise(model, backup, state, frozen).map(|update| (state, update)))
            .collect::<Result<Vec<_>, Error>>()?;
        let mut next = self.values.clone();
        let mut residual = 0.;
        for (state, (value, action)) in updates {
            let cell = self.model.locate(state);
            residual += (value - self.values.at(cell)).abs();
            next.set(cell, value);
            self.policy.set(cell, action);
        }
        self.values = next;
        Ok(residual)
    }

    /// One in-place sweep: later states observe earlier updates.
    fn seidel(&mut self) -> Result<Energy, Error> {
        let mut residual = 0.;
        let states = self.model.states().collect::<Vec<_>>();
        for state in states {
            let (value, action) = appraise(&self.model, self.backup, state, &self.values)?;
            let cell = self.model.locate(state);
            residual += (value - self.values.at(cell)).abs();
            self.values.set(cell, value);
            self.policy.set(cell, action);
        }
        Ok(residual)
    }
}

/// Back up one state against the given table: the greedy maximum with its
/// first-encountered maximizer, or the uniform mean with no maximizer.
fn appraise<M: Model>(
    model: &M,
    backup: Backup,
    state: M::State,
    values: &ValueTable,
) -> Result<(Utility, Option<M::Action>), Error> {
    let actions = model.actions(state);
    let count = actions.len();
    let mut actions = actions.into_iter();
    let first = actions.next().ok_or_else(|| {
        Error::InvalidConfiguration("swept state admits no actions".to_string())
    })?;
    match backup {
        Backup::Greedy => {
            let mut best = model.transition(state, first, values)?;
            let mut choice = first;
            for action in actions {
                let q = model.transition(state, action, values)?;
                // strict comparison keeps the earliest maximizer on ties
                if q > best {
                    best = q;
                    choice = action;
                }
            }
            Ok((best, Some(choice)))
        }
        Backup::Uniform => {
            let mut sum = model.transition(state, first, values)?;
            for action in actions {
                sum += model.transition(state, action, values)?;
            }
            Ok((sum / count as Utility, None))
        }
    }
}
