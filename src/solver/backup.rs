use std::fmt;

/// Per-state update rule applied at every swept state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Backup {
    /// v(s) ← max over admissible actions of q(s, a); the policy cell
    /// records the first-encountered maximizer.
    Greedy,
    /// v(s) ← mean over admissible actions of q(s, a), the equal-weight
    /// random policy; the policy cell stays empty.
    Uniform,
}

impl fmt::Display for Backup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backup::Greedy => write!(f, "greedy"),
            Backup::Uniform => write!(f, "uniform"),
        }
    }
}
