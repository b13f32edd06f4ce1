use crate::Probability;
use crate::Utility;
use crate::solver::error::Error;
use crate::solver::model::Model;
use crate::solver::policy::PolicyTable;
use crate::solver::table::ValueTable;
use rand::Rng;

/// Stake sizes, in the same units as capital.
pub type Stake = usize;

/// A gambler staking toward a goal on a biased coin.
///
/// Capital 0 and the goal are absorbing and never swept. The chain is
/// undiscounted and the only rewards sit on the absorbing flips: +1 for
/// the one that reaches the goal, −1 for the one that goes bust. Values
/// are therefore shifted win-minus-loss odds under the acting policy.
#[derive(Debug, Clone, PartialEq)]
pub struct GamblersRuin {
    goal: usize,
    p_win: Probability,
}

impl Default for GamblersRuin {
    /// The classic table: goal 100 on a 40% coin.
    fn default() -> Self {
        Self { goal: 100, p_win: 0.4 }
    }
}

impl GamblersRuin {
    const REWARD_WIN: Utility = 1.;
    const REWARD_LOSS: Utility = -1.;

    pub fn new(goal: usize, p_win: Probability) -> Result<Self, Error> {
        if goal < 2 {
            return Err(Error::InvalidConfiguration(format!(
                "goal {} leaves no room to play",
                goal
            )));
        }
        if !(0. ..=1.).contains(&p_win) {
            return Err(Error::InvalidConfiguration(format!(
                "win probability {} outside [0, 1]",
                p_win
            )));
        }
        Ok(Self { goal, p_win })
    }

    /// Largest stake the table accepts at this capital.
    fn ceiling(&self, capital: usize) -> usize {
        capital.min(self.goal - capital)
    }

    /// Play a policy from `capital` until absorption and return the final
    /// bankroll, either 0 or the goal. Empty policy cells fall back to the
    /// minimum stake, so a partially converged table still terminates.
    pub fn rollout<R: Rng>(
        &self,
        policy: &PolicyTable<Stake>,
        mut capital: usize,
        rng: &mut R,
    ) -> usize {
        while capital != 0 && capital != self.goal {
            let stake = policy
                .at((0, capital))
                .unwrap_or(1)
                .clamp(1, self.ceiling(capital));
            capital = match rng.random_bool(self.p_win) {
                true => capital + stake,
                false => capital - stake,
            };
        }
        capital
    }
}

impl Model for GamblersRuin {
    type State = usize;
    type Action = Stake;

    fn shape(&self) -> (usize, usize) {
        (1, self.goal + 1)
    }

    fn states(&self) -> impl Iterator<Item = Self::State> + '_ {
        1..self.goal
    }

    fn locate(&self, state: Self::State) -> (usize, usize) {
        (0, state)
    }

    fn actions(&self, state: Self::State) -> Vec<Self::Action> {
        (1..=self.ceiling(state)).collect()
    }

    fn transition(
        &self,
        state: Self::State,
        stake: Stake,
        values: &ValueTable,
    ) -> Result<Utility, Error> {
        if state == 0 || state >= self.goal {
            return Err(Error::InvalidAction(format!(
                "no play from absorbing capital {}",
                state
            )));
        }
        if stake == 0 || stake > self.ceiling(state) {
            return Err(Error::InvalidAction(format!(
                "stake {} outside [1, {}] at capital {}",
                stake,
                self.ceiling(state),
                state
            )));
        }
        let up = state + stake;
        let down = state - stake;
        let reward_up = if up == self.goal { Self::REWARD_WIN } else { 0. };
        let reward_down = if down == 0 { Self::REWARD_LOSS } else { 0. };
        Ok(self.p_win * (reward_up + values.at((0, up)))
            + (1. - self.p_win) * (reward_down + values.at((0, down))))
    }
}
