use crate::Utility;
use serde::Serialize;

/// A teleporting cell: every move out of `source` lands on `target` and
/// pays `reward`, overriding the usual step and edge rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Wormhole {
    pub source: (usize, usize),
    pub target: (usize, usize),
    pub reward: Utility,
}
