use anyhow::Result;
use brawl_choice::Choice;
use brawl_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};
use log::debug;

use crate::{
    ai::{
        OpponentContext,
        OpponentPolicy,
    },
    config::BattleSettings,
    error::{
        WrapOptionError,
        general_error,
    },
};

/// An opponent that attacks or swaps at random, weighted by difficulty.
///
/// Each turn, the opponent attacks with probability `0.5 + 0.1 * difficulty`, choosing uniformly
/// among the active creature's attacks. Otherwise it swaps to a uniformly random living squad
/// member. If no other member is alive, it always attacks. Nothing is remembered between turns.
#[derive(Debug, Clone)]
pub struct RandomOpponent {
    attack_chance: (u64, u64),
}

impl RandomOpponent {
    pub fn new(settings: &BattleSettings) -> Self {
        Self {
            attack_chance: settings.attack_chance(),
        }
    }
}

impl OpponentPolicy for RandomOpponent {
    fn make_choice(
        &mut self,
        context: OpponentContext<'_>,
        prng: &mut dyn PseudoRandomNumberGenerator,
    ) -> Result<Choice> {
        let swap_options = context.squad.swap_options();
        let (numerator, denominator) = self.attack_chance;
        if rand_util::chance(prng, numerator, denominator) || swap_options.is_empty() {
            let attacks = context.squad.active().attacks().len();
            if attacks == 0 {
                return Err(general_error(format!(
                    "{} has no attacks",
                    context.squad.active().name
                )));
            }
            let slot = rand_util::range(prng, 0, attacks as u64) as usize;
            debug!("Opponent chose attack slot {slot} of {attacks}");
            Ok(Choice::attack(slot))
        } else {
            let member = *rand_util::sample_slice(prng, &swap_options)
                .wrap_expectation("opponent has no swap options")?;
            debug!("Opponent chose to swap to member {member}");
            Ok(Choice::swap(member))
        }
    }
}
