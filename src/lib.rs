//! Tabular dynamic programming for finite Markov decision processes.
//!
//! A [`solver::Model`] owns a finite state space, per-state admissible
//! actions, and an exact one-step lookahead; a [`solver::Solver`] sweeps
//! it to a fixed point under a configurable update discipline. Three
//! classic environments ship as reference models: a wormhole gridworld,
//! a two-lot rental exchange under Poisson demand, and the gambler's
//! ruin.

pub mod chance;
pub mod gambler;
pub mod gridworld;
pub mod rental;
pub mod solver;

/// Expected values, rewards, and payoffs.
pub type Utility = f64;
/// Transition and event probabilities.
pub type Probability = f64;
/// Convergence residuals and tolerances.
pub type Energy = f64;
