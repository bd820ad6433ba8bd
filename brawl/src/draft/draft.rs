use anyhow::Result;
use brawl_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};
use indexmap::IndexMap;
use log::info;

use crate::{
    battle::{
        Side,
        Squad,
    },
    creatures::Creature,
    error::{
        ValidationError,
        WrapError,
        WrapOptionError,
        empty_pool_underflow_error,
        general_error,
        invalid_selection_error,
    },
    log::{
        BattleEvent,
        EventLog,
    },
};

/// Checks if a player's draft selection token names a creature in the pool.
///
/// Tokens are the 1-based positions the pool is presented at.
pub fn is_valid_pick(token: &str, pool_size: usize) -> bool {
    token
        .trim()
        .parse::<usize>()
        .is_ok_and(|position| (1..=pool_size).contains(&position))
}

/// Alternating selection of creatures from a shared pool, player first.
///
/// Every creature is in exactly one of the pool, the player's picks, or the computer's picks at
/// all times.
#[derive(Debug)]
pub struct DraftPhase {
    pool: IndexMap<String, Creature>,
    player_picks: Vec<Creature>,
    computer_picks: Vec<Creature>,
    pick_limit: usize,
    log: EventLog,
}

impl DraftPhase {
    /// Opens a draft over the given creatures.
    ///
    /// The pool must hold enough creatures for both sides to reach `pick_limit`. Creature names
    /// must be unique and every creature must have at least one attack.
    pub fn new(creatures: Vec<Creature>, pick_limit: usize) -> Result<Self> {
        if pick_limit == 0 {
            return Err(general_error("pick limit must be positive"));
        }
        let required = pick_limit * 2;
        if creatures.len() < required {
            return Err(empty_pool_underflow_error(creatures.len(), required));
        }

        let mut problems = ValidationError::default();
        let mut pool = IndexMap::with_capacity(creatures.len());
        for mut creature in creatures {
            if creature.attacks().is_empty() {
                problems.add_problem(format!("{} has no attacks", creature.name));
            }
            creature.reset();
            let name = creature.name.clone();
            if pool.insert(name.clone(), creature).is_some() {
                problems.add_problem(format!("{name} appears more than once"));
            }
        }
        problems.into_result().map_err(|err| err.wrap_error())?;

        Ok(Self {
            pool,
            player_picks: Vec::with_capacity(pick_limit),
            computer_picks: Vec::with_capacity(pick_limit),
            pick_limit,
            log: EventLog::new(),
        })
    }

    pub fn pick_limit(&self) -> usize {
        self.pick_limit
    }

    /// Names remaining in the pool, in presentation order.
    pub fn pool_names(&self) -> Vec<&str> {
        self.pool.keys().map(|name| name.as_str()).collect()
    }

    /// Creatures remaining in the pool, in presentation order.
    pub fn pool(&self) -> impl Iterator<Item = &Creature> {
        self.pool.values()
    }

    pub fn pool_size(&self) -> usize {
        self.pool.len()
    }

    pub fn player_picks(&self) -> &[Creature] {
        &self.player_picks
    }

    pub fn computer_picks(&self) -> &[Creature] {
        &self.computer_picks
    }

    /// The draft ends once the player has reached the pick limit.
    pub fn is_complete(&self) -> bool {
        self.player_picks.len() >= self.pick_limit
    }

    pub fn log_mut(&mut self) -> &mut EventLog {
        &mut self.log
    }

    /// Moves the creature at `index` in the pool to the player's picks.
    ///
    /// An out-of-range index is rejected without consuming the player's turn.
    pub fn player_pick(&mut self, index: usize) -> Result<&Creature> {
        if self.is_complete() {
            return Err(general_error("the draft is complete"));
        }
        let (name, creature) = self.pool.shift_remove_index(index).ok_or_else(|| {
            invalid_selection_error(format!("no creature at pool position {index}"))
        })?;
        info!("Player drafted {name}");
        self.log.push(BattleEvent::DraftPick {
            side: Side::Player,
            creature: name,
        });
        self.player_picks.push(creature);
        self.player_picks
            .last()
            .wrap_expectation("player pick was not recorded")
    }

    /// Moves a uniformly random creature from the pool to the computer's picks.
    ///
    /// Skipped if the pool is empty or the computer already reached the pick limit.
    pub fn computer_pick(
        &mut self,
        prng: &mut dyn PseudoRandomNumberGenerator,
    ) -> Result<Option<&Creature>> {
        if self.pool.is_empty() || self.computer_picks.len() >= self.pick_limit {
            return Ok(None);
        }
        let index = rand_util::range(prng, 0, self.pool.len() as u64) as usize;
        let (name, creature) = self
            .pool
            .shift_remove_index(index)
            .wrap_expectation_with_format(format_args!("pool has no creature at {index}"))?;
        info!("Computer drafted {name}");
        self.log.push(BattleEvent::DraftPick {
            side: Side::Computer,
            creature: name,
        });
        self.computer_picks.push(creature);
        Ok(self.computer_picks.last())
    }

    /// Plays one full round of the draft: the player's pick followed by the computer's.
    pub fn pick_round(
        &mut self,
        index: usize,
        prng: &mut dyn PseudoRandomNumberGenerator,
    ) -> Result<()> {
        self.player_pick(index)?;
        self.computer_pick(prng)?;
        Ok(())
    }

    /// Assembles both squads from a completed draft.
    pub fn into_squads(self) -> Result<(Squad, Squad)> {
        if !self.is_complete() {
            return Err(general_error(format!(
                "the draft is not complete: {} of {} picks made",
                self.player_picks.len(),
                self.pick_limit
            )));
        }
        Ok((
            Squad::new(Side::Player, self.player_picks)?,
            Squad::new(Side::Computer, self.computer_picks)?,
        ))
    }
}
