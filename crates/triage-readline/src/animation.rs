use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use triage_core::AnimationDriver;

/// Toggles a random catalog symptom on most ticks.
pub struct RandomToggleDriver {
    rng: StdRng,
    /// Chance that a tick toggles anything at all
    rate: f64,
}

impl RandomToggleDriver {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            rate: 0.7,
        }
    }

    #[cfg(test)]
    fn with_seed(seed: u64, rate: f64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            rate,
        }
    }
}

impl Default for RandomToggleDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationDriver for RandomToggleDriver {
    fn next_toggle(&mut self, pool: &[&str]) -> Option<String> {
        if !self.rng.gen_bool(self.rate) {
            return None;
        }
        pool.choose(&mut self.rng).map(|symptom| symptom.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picks_from_pool() {
        let pool = ["Fever", "Rash", "Cough"];
        let mut driver = RandomToggleDriver::with_seed(7, 1.0);
        for _ in 0..20 {
            let picked = driver.next_toggle(&pool).unwrap();
            assert!(pool.contains(&picked.as_str()));
        }
    }

    #[test]
    fn test_empty_pool_or_zero_rate() {
        let mut driver = RandomToggleDriver::with_seed(1, 1.0);
        assert!(driver.next_toggle(&[]).is_none());

        let mut idle = RandomToggleDriver::with_seed(1, 0.0);
        assert!(idle.next_toggle(&["Fever"]).is_none());
    }
}
