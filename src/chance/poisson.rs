use crate::Probability;
use std::collections::HashMap;
use std::sync::RwLock;

/// Memoized Poisson oracle.
///
/// Masses are evaluated by iterated multiplication rather than an explicit
/// factorial, then cached per (count, rate). The key carries the rate's
/// full bit pattern, which keeps distinct rates distinct and is exact for
/// the fixed per-model rates used here. The cache only ever grows, and a
/// racing duplicate insert writes the identical value, so shared readers
/// need no coordination beyond the lock.
#[derive(Debug, Default)]
pub struct Poisson {
    cache: RwLock<HashMap<(u32, u64), Probability>>,
}

impl Poisson {
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// P(X = count) under the given rate.
    pub fn mass(&self, count: u32, rate: f64) -> Probability {
        let key = (count, rate.to_bits());
        if let Some(mass) = self.cache.read().expect("poisson cache poisoned").get(&key) {
            return *mass;
        }
        let mass = Self::evaluate(count, rate);
        self.cache
            .write()
            .expect("poisson cache poisoned")
            .insert(key, mass);
        mass
    }

    /// P(X ≥ count) under the given rate: the mass a hard cap absorbs
    /// when outcomes at the cap and beyond collapse onto it.
    pub fn upper(&self, count: u32, rate: f64) -> Probability {
        let below = (0..count).map(|k| self.mass(k, rate)).sum::<Probability>();
        (1. - below).max(0.)
    }

    /// exp(-rate) · rateᶜᵒᵘⁿᵗ / count!
    fn evaluate(count: u32, rate: f64) -> Probability {
        let mut mass = (-rate).exp();
        for k in 1..=count {
            mass *= rate / k as f64;
        }
        mass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_count_mass_is_exp_negative_rate() {
        let poisson = Poisson::new();
        assert!((poisson.mass(0, 3.) - (-3f64).exp()).abs() < 1e-15);
    }

    #[test]
    fn masses_sum_to_one_over_a_wide_support() {
        let poisson = Poisson::new();
        for rate in [2., 3., 4.] {
            let total = (0..60).map(|k| poisson.mass(k, rate)).sum::<f64>();
            assert!((total - 1.).abs() < 1e-12, "rate {} sums to {}", rate, total);
        }
    }

    #[test]
    fn upper_tail_complements_the_partial_sum() {
        let poisson = Poisson::new();
        let below = (0..5).map(|k| poisson.mass(k, 3.)).sum::<f64>();
        assert!((poisson.upper(5, 3.) - (1. - below)).abs() < 1e-15);
        assert_eq!(poisson.upper(0, 3.), 1.);
    }

    #[test]
    fn cached_and_fresh_evaluations_agree() {
        let poisson = Poisson::new();
        let cold = poisson.mass(7, 4.);
        let warm = poisson.mass(7, 4.);
        assert_eq!(cold, warm);
        assert_eq!(warm, Poisson::evaluate(7, 4.));
    }

    #[test]
    fn nearby_count_rate_pairs_stay_distinct() {
        // under a count*10 + rate key these two would collide
        let poisson = Poisson::new();
        assert_ne!(poisson.mass(2, 3.), poisson.mass(1, 13.));
    }
}
