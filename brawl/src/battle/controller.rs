use anyhow::Result;
use brawl_choice::Choice;
use brawl_prng::PseudoRandomNumberGenerator;
use itertools::Itertools;
use log::{
    info,
    warn,
};

use crate::{
    ai::RandomOpponent,
    battle::{
        ActionRequest,
        BattleEngine,
        BattleOutcome,
        Display,
        InputSource,
        Prompt,
        ReplacementRequest,
        Request,
        Squad,
    },
    config::{
        BattleEngineOptions,
        BattleSettings,
    },
    creatures::Creature,
    draft::{
        DraftPhase,
        is_valid_pick,
    },
    error::{
        WrapOptionError,
        WrapResultError,
        general_error,
        is_recoverable,
    },
    log::EventLog,
    roster::RosterStore,
};

const BACK_TOKEN: &str = "0";

/// Converts a 1-based menu token into an index.
fn token_index(token: &str) -> Result<usize> {
    token
        .trim()
        .parse::<usize>()
        .wrap_error_with_format(format_args!("{token} is not a number"))?
        .checked_sub(1)
        .wrap_expectation_with_format(format_args!("{token} is not a menu position"))
}

fn describe_attacks(creature: &Creature) -> String {
    creature
        .attacks()
        .iter()
        .map(|attack| format!("{} {}", attack.name, attack.damage))
        .join(", ")
}

fn describe_member(creature: &Creature) -> String {
    let status = if creature.is_alive() {
        "Alive"
    } else {
        "Fainted"
    };
    format!(
        "{} ({}/{} HP, {status})",
        creature.name,
        creature.hp(),
        creature.max_hp()
    )
}

/// Runs a complete session: the draft, then the battle, until one side wins.
///
/// All player decisions come from the [`InputSource`] and every event is forwarded to the
/// [`Display`] as soon as it happens.
pub struct BattleController<'a> {
    settings: BattleSettings,
    options: BattleEngineOptions,
    input: &'a mut dyn InputSource,
    display: &'a mut dyn Display,
}

impl<'a> BattleController<'a> {
    pub fn new(
        settings: BattleSettings,
        options: BattleEngineOptions,
        input: &'a mut dyn InputSource,
        display: &'a mut dyn Display,
    ) -> Self {
        Self {
            settings,
            options,
            input,
            display,
        }
    }

    /// Drafts squads from the roster and plays the battle to the end.
    pub fn run(&mut self, roster: &dyn RosterStore) -> Result<BattleOutcome> {
        let creatures = roster
            .list_creatures()
            .wrap_error_with_message("failed to read roster")?;
        let mut prng = self.options.make_rng();
        info!(
            "Starting session with seed {}, {} picks, difficulty {}",
            prng.initial_seed(),
            self.settings.pick_limit(),
            self.settings.difficulty()
        );

        let mut draft = DraftPhase::new(creatures, self.settings.pick_limit())?;
        self.run_draft(&mut draft, prng.as_mut())?;
        let (player, computer) = draft.into_squads()?;

        let mut engine = BattleEngine::new(
            player,
            computer,
            Box::new(RandomOpponent::new(&self.settings)),
            prng,
        )?;
        engine.start()?;
        self.run_battle(&mut engine)
    }

    fn flush(&mut self, log: &mut EventLog) {
        for event in log.read_out() {
            self.display.show(event);
        }
    }

    /// Runs the draft until the player's squad is full.
    pub fn run_draft(
        &mut self,
        draft: &mut DraftPhase,
        prng: &mut dyn PseudoRandomNumberGenerator,
    ) -> Result<()> {
        while !draft.is_complete() {
            let prompt = draft
                .pool()
                .enumerate()
                .fold(
                    Prompt::new(format!(
                        "Choose a creature for your squad ({} of {})",
                        draft.player_picks().len() + 1,
                        draft.pick_limit()
                    )),
                    |prompt, (i, creature)| {
                        prompt.with_option(
                            (i + 1).to_string(),
                            format!(
                                "{} ({} HP; {})",
                                creature.name,
                                creature.max_hp(),
                                describe_attacks(creature)
                            ),
                        )
                    },
                );
            let token = self.input.request_choice(&prompt)?;
            if !is_valid_pick(&token, draft.pool_size()) {
                warn!("Rejected draft pick {token:?}");
                continue;
            }
            draft.pick_round(token_index(&token)?, prng)?;
            self.flush(draft.log_mut());
        }
        Ok(())
    }

    /// Plays the battle until it ends, returning the outcome.
    pub fn run_battle(&mut self, engine: &mut BattleEngine) -> Result<BattleOutcome> {
        loop {
            self.flush(engine.log_mut());
            if let Some(outcome) = engine.outcome() {
                return Ok(outcome);
            }
            let request = engine
                .request()
                .wrap_expectation("battle is not waiting on the player")?;
            let choice = match request {
                Request::Action(request) => {
                    match self.action_choice(engine.player_squad(), &request)? {
                        Some(choice) => choice,
                        None => continue,
                    }
                }
                Request::Replacement(request) => {
                    self.replacement_choice(engine.player_squad(), &request)?
                }
            };
            if let Err(error) = engine.make_choice(choice) {
                if is_recoverable(&error) {
                    warn!("Rejected choice {choice}: {error:#}");
                    continue;
                }
                return Err(error);
            }
        }
    }

    /// Asks for the player's action. Returns [`None`] if the player backed out of a submenu.
    fn action_choice(
        &mut self,
        squad: &Squad,
        request: &ActionRequest,
    ) -> Result<Option<Choice>> {
        let prompt = Prompt::new(format!(
            "{}'s turn! Active creature: {}",
            squad.name(),
            squad.active().name
        ))
        .with_option("1", "Attack")
        .with_option("2", "Swap creature")
        .with_option("3", "Forfeit");
        match self.input.request_choice(&prompt)?.trim() {
            "1" => self.attack_choice(request),
            "2" => self.swap_choice(squad, request),
            "3" => Ok(Some(Choice::Forfeit)),
            token => Err(general_error(format!("unexpected action {token:?}"))),
        }
    }

    fn attack_choice(&mut self, request: &ActionRequest) -> Result<Option<Choice>> {
        let prompt = request
            .attacks
            .iter()
            .enumerate()
            .fold(Prompt::new("Choose an attack"), |prompt, (i, attack)| {
                prompt.with_option(
                    (i + 1).to_string(),
                    format!("{} ({} dmg)", attack.name, attack.damage),
                )
            })
            .with_option(BACK_TOKEN, "Back");
        let token = self.input.request_choice(&prompt)?;
        if token.trim() == BACK_TOKEN {
            return Ok(None);
        }
        Ok(Some(Choice::attack(token_index(&token)?)))
    }

    fn swap_choice(&mut self, squad: &Squad, request: &ActionRequest) -> Result<Option<Choice>> {
        let message = if request.swap_options.is_empty() {
            "No other creature can fight"
        } else {
            "Choose a creature to swap to"
        };
        let prompt = self
            .member_prompt(message, squad, &request.swap_options)
            .with_option(BACK_TOKEN, "Back");
        let token = self.input.request_choice(&prompt)?;
        if token.trim() == BACK_TOKEN {
            return Ok(None);
        }
        Ok(Some(Choice::swap(token_index(&token)?)))
    }

    fn replacement_choice(
        &mut self,
        squad: &Squad,
        request: &ReplacementRequest,
    ) -> Result<Choice> {
        let prompt = self.member_prompt(
            format!("{} fainted! Choose a replacement", squad.active().name),
            squad,
            &request.options,
        );
        let token = self.input.request_choice(&prompt)?;
        Ok(Choice::swap(token_index(&token)?))
    }

    fn member_prompt<S>(&self, message: S, squad: &Squad, options: &[usize]) -> Prompt
    where
        S: Into<String>,
    {
        options
            .iter()
            .filter_map(|i| squad.member(*i).map(|member| (*i, member)))
            .fold(Prompt::new(message), |prompt, (i, member)| {
                prompt.with_option((i + 1).to_string(), describe_member(member))
            })
    }
}
