use crate::Utility;
use serde::Serialize;
use std::fmt;

/// Dense row-major grid of state values.
///
/// Zero-initialized at construction and written only by the engine during
/// sweeps, so terminal cells keep their initial value. Indexing is by the
/// dense coordinates a model's `locate` produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueTable {
    rows: usize,
    cols: usize,
    cells: Vec<Utility>,
}

impl ValueTable {
    pub fn new(shape: (usize, usize)) -> Self {
        Self {
            rows: shape.0,
            cols: shape.1,
            cells: vec![0.; shape.0 * shape.1],
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn at(&self, cell: (usize, usize)) -> Utility {
        self.cells[cell.0 * self.cols + cell.1]
    }

    pub fn set(&mut self, cell: (usize, usize), value: Utility) {
        self.cells[cell.0 * self.cols + cell.1] = value;
    }
}

impl fmt::Display for ValueTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                write!(f, "{:>8.1}", self.at((row, col)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
