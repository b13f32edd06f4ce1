use serde::Serialize;

/// Poisson intensities for one lot's daily traffic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rates {
    /// Expected rental requests per day.
    pub requests: f64,
    /// Expected returns per day.
    pub returns: f64,
}
