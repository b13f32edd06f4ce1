use serde::Serialize;
use std::fmt;

/// Dense row-major grid of chosen actions.
///
/// Rebuilt from scratch on every greedy sweep. Cells stay empty under
/// evaluation backups and at states the engine never visits (terminals).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicyTable<A> {
    rows: usize,
    cols: usize,
    cells: Vec<Option<A>>,
}

impl<A: Copy> PolicyTable<A> {
    pub fn new(shape: (usize, usize)) -> Self {
        Self {
            rows: shape.0,
            cols: shape.1,
            cells: vec![None; shape.0 * shape.1],
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn at(&self, cell: (usize, usize)) -> Option<A> {
        self.cells[cell.0 * self.cols + cell.1]
    }

    pub fn set(&mut self, cell: (usize, usize), action: Option<A>) {
        self.cells[cell.0 * self.cols + cell.1] = action;
    }
}

impl<A: Copy + fmt::Display> fmt::Display for PolicyTable<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                match self.at((row, col)) {
                    Some(action) => write!(f, "{:>4}", action.to_string())?,
                    None => write!(f, "{:>4}", "·")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_everywhere() {
        let policy = PolicyTable::<i32>::new((2, 2));
        assert!((0..2).all(|r| (0..2).all(|c| policy.at((r, c)).is_none())));
    }

    #[test]
    fn renders_empty_cells_as_dots() {
        let mut policy = PolicyTable::<i32>::new((1, 3));
        policy.set((0, 1), Some(-2));
        assert_eq!(format!("{}", policy), "   ·  -2   ·\n");
    }
}
