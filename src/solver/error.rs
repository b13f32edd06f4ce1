use std::fmt;

/// Failures surfaced by models and the sweep engine.
///
/// Exhausting the sweep budget above tolerance is not an error; it is
/// reported on the [`Solution`](crate::solver::solution::Solution).
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// An action violates the acting model's domain constraints.
    InvalidAction(String),
    /// A model or solver was built with unusable parameters.
    InvalidConfiguration(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidAction(reason) => write!(f, "invalid action: {}", reason),
            Error::InvalidConfiguration(reason) => write!(f, "invalid configuration: {}", reason),
        }
    }
}

impl std::error::Error for Error {}
