//! Generic sweep engine for finite MDPs.
//!
//! - `model` is the contract a domain implements to become solvable
//! - `solver` drives bounded sweeps toward a fixed point
//! - `table` and `policy` are the dense grids the sweeps write
//! - `discipline` and `backup` name the update rules
//! - `solution` carries the finished artifacts back to the caller

pub mod backup;
pub use backup::*;

pub mod discipline;
pub use discipline::*;

pub mod error;
pub use error::*;

pub mod model;
pub use model::*;

pub mod policy;
pub use policy::*;

pub mod solution;
pub use solution::*;

pub mod solver;
pub use solver::*;

pub mod table;
pub use table::*;
