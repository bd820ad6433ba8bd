use anyhow::Result;
use brawl::{
    BattleEngine,
    BattleEngineOptions,
    BattleSettings,
    Creature,
    OpponentPolicy,
    RandomOpponent,
    Side,
    Squad,
};

use crate::ControlledRandomNumberGenerator;

/// Battle builder object for integration tests.
///
/// Skips the draft: squads are given directly.
pub struct TestBattleBuilder {
    settings: BattleSettings,
    engine_options: BattleEngineOptions,
    player: Vec<Creature>,
    computer: Vec<Creature>,
    policy: Option<Box<dyn OpponentPolicy>>,
    controlled_rng: bool,
}

impl TestBattleBuilder {
    /// Creates a new [`TestBattleBuilder`].
    pub fn new() -> Self {
        Self {
            settings: BattleSettings::default(),
            engine_options: BattleEngineOptions::default(),
            player: Vec::new(),
            computer: Vec::new(),
            policy: None,
            controlled_rng: false,
        }
    }

    /// Builds and starts a new [`BattleEngine`].
    pub fn build(mut self) -> Result<BattleEngine> {
        if self.controlled_rng {
            self.engine_options.rng_factory =
                |seed: Option<u64>| Box::new(ControlledRandomNumberGenerator::new(seed));
        }
        let policy = self
            .policy
            .unwrap_or_else(|| Box::new(RandomOpponent::new(&self.settings)));
        let mut battle = BattleEngine::new(
            Squad::new(Side::Player, self.player)?,
            Squad::new(Side::Computer, self.computer)?,
            policy,
            self.engine_options.make_rng(),
        )?;
        battle.start()?;
        Ok(battle)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.engine_options.seed = Some(seed);
        self
    }

    pub fn with_difficulty(mut self, difficulty: u8) -> Self {
        self.settings = match BattleSettings::new(self.settings.pick_limit(), difficulty) {
            Ok(settings) => settings,
            Err(err) => panic!("invalid test difficulty: {err:#}"),
        };
        self
    }

    pub fn with_controlled_rng(mut self, controlled_rng: bool) -> Self {
        self.controlled_rng = controlled_rng;
        self
    }

    pub fn with_policy(mut self, policy: Box<dyn OpponentPolicy>) -> Self {
        self.policy = Some(policy);
        self
    }

    pub fn with_player_squad(mut self, squad: Vec<Creature>) -> Self {
        self.player = squad;
        self
    }

    pub fn with_computer_squad(mut self, squad: Vec<Creature>) -> Self {
        self.computer = squad;
        self
    }
}

impl Default for TestBattleBuilder {
    fn default() -> Self {
        Self::new()
    }
}
