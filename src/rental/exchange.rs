use crate::Probability;
use crate::Utility;
use crate::chance::poisson::Poisson;
use crate::rental::rates::Rates;
use crate::solver::error::Error;
use crate::solver::model::Model;
use crate::solver::table::ValueTable;

/// Net overnight transfer between lots, positive from A to B.
pub type Transfer = i32;

/// Two rental lots balancing stock against compound Poisson demand.
///
/// Each evening up to `max_move` cars shuttle between the lots at a flat
/// fee per car; each day both lots independently rent out and take back
/// cars at their own Poisson rates. Demand beyond stock is lost and
/// returns beyond capacity bounce, so the lookahead enumerates capped
/// outcome counts per lot, folding each distribution's upper tail onto
/// its cap. The enumerated joint mass then sums to exactly one and the
/// backup is the exact expectation of the clamped dynamics.
///
/// States couple through the shared value table only; the per-(count,
/// rate) masses recur across every state and action, which is what the
/// [`Poisson`] cache is for.
#[derive(Debug)]
pub struct RentalExchange {
    capacity: usize,
    max_move: usize,
    rental_fee: Utility,
    move_fee: Utility,
    rates_a: Rates,
    rates_b: Rates,
    gamma: Probability,
    poisson: Poisson,
}

impl Default for RentalExchange {
    /// The classic configuration: 20-car lots, 5-car moves, 10 per rental,
    /// 2 per moved car, demand λ of 3 and 4, returns λ of 3 and 2,
    /// discounted at 0.9.
    fn default() -> Self {
        Self {
            capacity: 20,
            max_move: 5,
            rental_fee: 10.,
            move_fee: 2.,
            rates_a: Rates { requests: 3., returns: 3. },
            rates_b: Rates { requests: 4., returns: 2. },
            gamma: 0.9,
            poisson: Poisson::new(),
        }
    }
}

impl RentalExchange {
    /// Fees are (per rental, per moved car); rates are (lot A, lot B).
    pub fn new(
        capacity: usize,
        max_move: usize,
        fees: (Utility, Utility),
        rates: (Rates, Rates),
        gamma: Probability,
    ) -> Result<Self, Error> {
        if capacity == 0 {
            return Err(Error::InvalidConfiguration(
                "lot capacity must be positive".to_string(),
            ));
        }
        if !(0. ..=1.).contains(&gamma) {
            return Err(Error::InvalidConfiguration(format!(
                "discount {} outside [0, 1]",
                gamma
            )));
        }
        if !(fees.0 >= 0. && fees.1 >= 0. && fees.0.is_finite() && fees.1.is_finite()) {
            return Err(Error::InvalidConfiguration(format!(
                "fees ({}, {}) must be non-negative",
                fees.0, fees.1
            )));
        }
        for rate in [rates.0.requests, rates.0.returns, rates.1.requests, rates.1.returns] {
            if !(rate >= 0. && rate.is_finite()) {
                return Err(Error::InvalidConfiguration(format!(
                    "poisson rate {} must be non-negative",
                    rate
                )));
            }
        }
        Ok(Self {
            capacity,
            max_move,
            rental_fee: fees.0,
            move_fee: fees.1,
            rates_a: rates.0,
            rates_b: rates.1,
            gamma,
            poisson: Poisson::new(),
        })
    }

    /// Apply the overnight move, rejecting transfers the lots cannot honor.
    fn depart(&self, (a, b): (usize, usize), transfer: Transfer) -> Result<(usize, usize), Error> {
        if a > self.capacity || b > self.capacity {
            return Err(Error::InvalidAction(format!(
                "no state at ({}, {}) with capacity {}",
                a, b, self.capacity
            )));
        }
        if transfer.unsigned_abs() as usize > self.max_move {
            return Err(Error::InvalidAction(format!(
                "transfer {} exceeds the {}-car cap",
                transfer, self.max_move
            )));
        }
        let to_a = a as i64 - transfer as i64;
        let to_b = b as i64 + transfer as i64;
        if to_a < 0 || to_b < 0 || to_a > self.capacity as i64 || to_b > self.capacity as i64 {
            return Err(Error::InvalidAction(format!(
                "transfer {} strands ({}, {}) outside [0, {}]",
                transfer, a, b, self.capacity
            )));
        }
        Ok((to_a as usize, to_b as usize))
    }

    /// Capped count distribution: full mass below the cap, the upper tail
    /// folded onto it.
    fn capped(&self, cap: usize, rate: f64) -> Vec<(usize, Probability)> {
        (0..cap)
            .map(|k| (k, self.poisson.mass(k as u32, rate)))
            .chain(std::iter::once((cap, self.poisson.upper(cap as u32, rate))))
            .collect()
    }
}

impl Model for RentalExchange {
    type State = (usize, usize);
    type Action = Transfer;

    fn shape(&self) -> (usize, usize) {
        (self.capacity + 1, self.capacity + 1)
    }

    fn states(&self) -> impl Iterator<Item = Self::State> + '_ {
        let stocked = self.capacity + 1;
        (0..stocked).flat_map(move |a| (0..stocked).map(move |b| (a, b)))
    }

    fn locate(&self, state: Self::State) -> (usize, usize) {
        state
    }

    fn actions(&self, (a, b): Self::State) -> Vec<Self::Action> {
        let bound = self.max_move as i64;
        let held = 0..=self.capacity as i64;
        (-bound..=bound)
            .filter(|t| held.contains(&(a as i64 - t)) && held.contains(&(b as i64 + t)))
            .map(|t| t as Transfer)
            .collect()
    }

    fn transition(
        &self,
        state: Self::State,
        transfer: Transfer,
        values: &ValueTable,
    ) -> Result<Utility, Error> {
        let (stock_a, stock_b) = self.depart(state, transfer)?;
        let hire_a = self.capped(stock_a, self.rates_a.requests);
        let hire_b = self.capped(stock_b, self.rates_b.requests);
        let back_a = hire_a
            .iter()
            .map(|&(hired, _)| self.capped(self.capacity - (stock_a - hired), self.rates_a.returns))
            .collect::<Vec<_>>();
        let back_b = hire_b
            .iter()
            .map(|&(hired, _)| self.capped(self.capacity - (stock_b - hired), self.rates_b.returns))
            .collect::<Vec<_>>();
        let mut q = -self.move_fee * transfer.unsigned_abs() as Utility;
        for (&(hired_a, p_hire_a), backs_a) in hire_a.iter().zip(back_a.iter()) {
            for &(returned_a, p_back_a) in backs_a {
                let next_a = stock_a - hired_a + returned_a;
                let p_lot_a = p_hire_a * p_back_a;
                for (&(hired_b, p_hire_b), backs_b) in hire_b.iter().zip(back_b.iter()) {
                    let revenue = self.rental_fee * (hired_a + hired_b) as Utility;
                    for &(returned_b, p_back_b) in backs_b {
                        let next_b = stock_b - hired_b + returned_b;
                        let p = p_lot_a * p_hire_b * p_back_b;
                        q += p * (revenue + self.gamma * values.at((next_a, next_b)));
                    }
                }
            }
        }
        Ok(q)
    }
}
