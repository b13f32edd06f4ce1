use std::fmt;

/// Order-of-information rule for one sweep over the state space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Discipline {
    /// Every backup reads the previous sweep's frozen table; updates land
    /// in a fresh copy swapped in when the sweep completes.
    Jacobi,
    /// Backups read and write the live table in sweep order, so later
    /// states observe earlier in-sweep updates.
    GaussSeidel,
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Discipline::Jacobi => write!(f, "jacobi"),
            Discipline::GaussSeidel => write!(f, "gauss-seidel"),
        }
    }
}
