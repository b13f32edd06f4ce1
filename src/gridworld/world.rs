use crate::Probability;
use crate::Utility;
use crate::gridworld::motion::Motion;
use crate::gridworld::wormhole::Wormhole;
use crate::solver::error::Error;
use crate::solver::model::Model;
use crate::solver::table::ValueTable;

/// Square grid with teleporting wormholes and an off-edge penalty.
///
/// Steps are deterministic: walking off an edge leaves the state in place
/// at reward −1, any move out of a wormhole source teleports to its target
/// at the wormhole's reward, and every other step pays 0. Evaluate the
/// equal-weight random policy with a uniform backup, or optimize with a
/// greedy one; both run fine under the frozen-table discipline.
#[derive(Debug, Clone, PartialEq)]
pub struct GridWorld {
    size: usize,
    gamma: Probability,
    wormholes: Vec<Wormhole>,
}

impl Default for GridWorld {
    /// The classic 5×5 layout: A=(0,1)→(4,1) paying +10 and B=(0,3)→(2,3)
    /// paying +5, discounted at 0.9.
    fn default() -> Self {
        Self {
            size: 5,
            gamma: 0.9,
            wormholes: vec![
                Wormhole { source: (0, 1), target: (4, 1), reward: 10. },
                Wormhole { source: (0, 3), target: (2, 3), reward: 5. },
            ],
        }
    }
}

impl GridWorld {
    pub fn new(size: usize, gamma: Probability, wormholes: Vec<Wormhole>) -> Result<Self, Error> {
        if size == 0 {
            return Err(Error::InvalidConfiguration(
                "grid size must be positive".to_string(),
            ));
        }
        if !(0. ..=1.).contains(&gamma) {
            return Err(Error::InvalidConfiguration(format!(
                "discount {} outside [0, 1]",
                gamma
            )));
        }
        for (i, wormhole) in wormholes.iter().enumerate() {
            let (sr, sc) = wormhole.source;
            let (tr, tc) = wormhole.target;
            if sr >= size || sc >= size || tr >= size || tc >= size {
                return Err(Error::InvalidConfiguration(format!(
                    "wormhole {:?} -> {:?} leaves the {}x{} grid",
                    wormhole.source, wormhole.target, size, size
                )));
            }
            if wormholes[..i].iter().any(|w| w.source == wormhole.source) {
                return Err(Error::InvalidConfiguration(format!(
                    "duplicate wormhole source {:?}",
                    wormhole.source
                )));
            }
        }
        Ok(Self { size, gamma, wormholes })
    }

    fn wormhole(&self, cell: (usize, usize)) -> Option<&Wormhole> {
        self.wormholes.iter().find(|w| w.source == cell)
    }

    /// One undiscounted step: (reward, landing cell).
    fn step(&self, cell: (usize, usize), motion: Motion) -> (Utility, (usize, usize)) {
        if let Some(wormhole) = self.wormhole(cell) {
            return (wormhole.reward, wormhole.target);
        }
        let (dr, dc) = motion.offset();
        let row = cell.0 as isize + dr;
        let col = cell.1 as isize + dc;
        match row < 0 || col < 0 || row >= self.size as isize || col >= self.size as isize {
            true => (-1., cell),
            false => (0., (row as usize, col as usize)),
        }
    }
}

impl Model for GridWorld {
    type State = (usize, usize);
    type Action = Motion;

    fn shape(&self) -> (usize, usize) {
        (self.size, self.size)
    }

    fn states(&self) -> impl Iterator<Item = Self::State> + '_ {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| (row, col)))
    }

    fn locate(&self, state: Self::State) -> (usize, usize) {
        state
    }

    fn actions(&self, _: Self::State) -> Vec<Self::Action> {
        Motion::all().to_vec()
    }

    fn transition(
        &self,
        state: Self::State,
        motion: Motion,
        values: &ValueTable,
    ) -> Result<Utility, Error> {
        if state.0 >= self.size || state.1 >= self.size {
            return Err(Error::InvalidAction(format!(
                "no cell at {:?} in a {}x{} grid",
                state, self.size, self.size
            )));
        }
        let (reward, next) = self.step(state, motion);
        Ok(reward + self.gamma * values.at(next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::backup::Backup;
    use crate::solver::discipline::Discipline;
    use crate::solver::solver::Solver;

    /// Fixed point of the equal-weight random policy, to one decimal.
    const UNIFORM: [[Utility; 5]; 5] = [
        [3.3, 8.8, 4.4, 5.3, 1.5],
        [1.5, 3.0, 2.3, 1.9, 0.5],
        [0.1, 0.7, 0.7, 0.4, -0.4],
        [-1.0, -0.4, -0.4, -0.6, -1.2],
        [-1.9, -1.3, -1.2, -1.4, -2.0],
    ];

    /// Optimal state values, to one decimal.
    const OPTIMAL: [[Utility; 5]; 5] = [
        [22.0, 24.4, 22.0, 19.4, 17.5],
        [19.8, 22.0, 19.8, 17.8, 16.0],
        [17.8, 19.8, 17.8, 16.0, 14.4],
        [16.0, 17.8, 16.0, 14.4, 13.0],
        [14.4, 16.0, 14.4, 13.0, 11.7],
    ];

    fn assert_grid(values: &ValueTable, expected: &[[Utility; 5]; 5]) {
        for (row, line) in expected.iter().enumerate() {
            for (col, want) in line.iter().enumerate() {
                let got = values.at((row, col));
                assert!(
                    (got - want).abs() < 0.06,
                    "cell ({}, {}): got {} want {}",
                    row,
                    col,
                    got,
                    want
                );
            }
        }
    }

    #[test]
    fn uniform_evaluation_reaches_the_classic_grid() {
        let solution = Solver::new(GridWorld::default())
            .discipline(Discipline::Jacobi)
            .backup(Backup::Uniform)
            .budget(200)
            .solve()
            .expect("solve");
        assert!(solution.converged);
        assert_grid(&solution.values, &UNIFORM);
        assert!(solution.policy.at((0, 1)).is_none());
        // the residual trace decays: its second half sits under its first
        let half = solution.sweeps() / 2;
        let head = solution.residuals[..half].iter().cloned().fold(0., f64::max);
        let tail = solution.residuals[half..].iter().cloned().fold(0., f64::max);
        assert!(tail < head);
    }

    #[test]
    fn value_iteration_reaches_the_classic_grid() {
        let solution = Solver::new(GridWorld::default())
            .discipline(Discipline::Jacobi)
            .budget(200)
            .solve()
            .expect("solve");
        assert!(solution.converged);
        assert_grid(&solution.values, &OPTIMAL);
        assert_eq!(solution.policy.at((0, 0)), Some(Motion::Right));
        assert_eq!(solution.policy.at((4, 1)), Some(Motion::Up));
    }

    #[test]
    fn wormhole_moves_all_tie_and_the_first_wins() {
        let solution = Solver::new(GridWorld::default())
            .discipline(Discipline::Jacobi)
            .budget(200)
            .solve()
            .expect("solve");
        let world = &solution.model;
        let q = Motion::all()
            .iter()
            .map(|&m| world.transition((0, 1), m, &solution.values).expect("q"))
            .collect::<Vec<_>>();
        assert!(q.iter().all(|&v| v == q[0]));
        assert_eq!(solution.policy.at((0, 1)), Some(Motion::Left));
        assert_eq!(solution.policy.at((0, 3)), Some(Motion::Left));
    }

    #[test]
    fn wormhole_overrides_the_edge_rule() {
        let world = GridWorld::default();
        let zeros = ValueTable::new(world.shape());
        assert_eq!(world.transition((0, 1), Motion::Up, &zeros), Ok(10.));
        assert_eq!(world.transition((0, 3), Motion::Up, &zeros), Ok(5.));
    }

    #[test]
    fn off_edge_steps_stay_put_and_cost_one() {
        let world = GridWorld::default();
        let mut values = ValueTable::new(world.shape());
        values.set((4, 4), 2.);
        assert_eq!(world.transition((4, 4), Motion::Down, &ValueTable::new((5, 5))), Ok(-1.));
        let stayed = world.transition((4, 4), Motion::Down, &values).expect("q");
        assert!((stayed - (-1. + 0.9 * 2.)).abs() < 1e-12);
    }

    #[test]
    fn interior_steps_are_free_and_deterministic() {
        let world = GridWorld::default();
        let mut values = ValueTable::new(world.shape());
        values.set((2, 2), 4.);
        let q = world.transition((2, 1), Motion::Right, &values).expect("q");
        assert!((q - 0.9 * 4.).abs() < 1e-12);
    }

    #[test]
    fn transition_is_idempotent() {
        let world = GridWorld::default();
        let mut values = ValueTable::new(world.shape());
        values.set((4, 1), 16.);
        let once = world.transition((0, 1), Motion::Down, &values);
        let twice = world.transition((0, 1), Motion::Down, &values);
        assert_eq!(once, twice);
    }

    #[test]
    fn out_of_grid_cell_is_an_invalid_action() {
        let world = GridWorld::default();
        let zeros = ValueTable::new(world.shape());
        assert!(matches!(
            world.transition((9, 9), Motion::Up, &zeros),
            Err(Error::InvalidAction(_))
        ));
    }

    #[test]
    fn misconfigured_grids_are_rejected() {
        assert!(matches!(
            GridWorld::new(0, 0.9, vec![]),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(matches!(
            GridWorld::new(5, 1.5, vec![]),
            Err(Error::InvalidConfiguration(_))
        ));
        let out_of_bounds = Wormhole { source: (0, 5), target: (4, 1), reward: 10. };
        assert!(matches!(
            GridWorld::new(5, 0.9, vec![out_of_bounds]),
            Err(Error::InvalidConfiguration(_))
        ));
        let first = Wormhole { source: (0, 1), target: (4, 1), reward: 10. };
        let second = Wormhole { source: (0, 1), target: (2, 3), reward: 5. };
        assert!(matches!(
            GridWorld::new(5, 0.9, vec![first, second]),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn states_cover_the_grid_in_row_major_order() {
        let world = GridWorld::default();
        let states = world.states().collect::<Vec<_>>();
        assert_eq!(states.len(), 25);
        assert_eq!(states[0], (0, 0));
        assert_eq!(states[1], (0, 1));
        assert_eq!(states[24], (4, 4));
    }
}
