use std::fmt::Debug;

use brawl_prng::{
    PseudoRandomNumberGenerator,
    RealPseudoRandomNumberGenerator,
};

fn default_rng_factory() -> fn(seed: Option<u64>) -> Box<dyn PseudoRandomNumberGenerator> {
    |seed: Option<u64>| Box::new(RealPseudoRandomNumberGenerator::new(seed))
}

/// Options that change how the battle engine itself behaves, rather than the rules of a battle.
#[derive(Clone)]
pub struct BattleEngineOptions {
    /// Seed for all battle randomness.
    ///
    /// A battle replayed with the same seed and the same player choices produces the same events.
    pub seed: Option<u64>,

    /// Function for creating the battle's random number generator.
    ///
    /// Primarily useful for tests where we wish to have fine-grained control over battle RNG.
    pub rng_factory: fn(seed: Option<u64>) -> Box<dyn PseudoRandomNumberGenerator>,
}

impl BattleEngineOptions {
    /// Creates the random number generator for a session.
    pub fn make_rng(&self) -> Box<dyn PseudoRandomNumberGenerator> {
        (self.rng_factory)(self.seed)
    }
}

impl Default for BattleEngineOptions {
    fn default() -> Self {
        Self {
            seed: None,
            rng_factory: default_rng_factory(),
        }
    }
}

impl Debug for BattleEngineOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BattleEngineOptions")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}
