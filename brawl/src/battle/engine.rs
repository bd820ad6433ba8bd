use anyhow::Result;
use brawl_choice::Choice;
use brawl_prng::PseudoRandomNumberGenerator;
use log::{
    debug,
    info,
};

use crate::{
    ai::{
        OpponentContext,
        OpponentPolicy,
    },
    battle::{
        ActionRequest,
        BattleOutcome,
        BattlePhase,
        ReplacementRequest,
        Request,
        Side,
        Squad,
    },
    error::{
        WrapResultError,
        general_error,
        illegal_swap_target_error,
        invalid_selection_error,
        no_active_request_error,
    },
    log::{
        BattleEvent,
        CreatureStatus,
        EventLog,
    },
};

/// The turn state machine of a single battle.
///
/// Each round, in order:
/// 1. The player attacks, swaps, or forfeits.
/// 1. If the computer's active creature fainted, the computer automatically sends out its first
///    living member. With none left, the player wins.
/// 1. If the computer has no living members, the player wins.
/// 1. The computer attacks or swaps, as decided by its [`OpponentPolicy`].
/// 1. If the player's active creature fainted, the player must choose a replacement. With none
///    left, the computer wins.
///
/// A valid player choice resolves the rest of the round before returning, so the engine is only
/// ever observed waiting on the player or finished.
pub struct BattleEngine {
    player: Squad,
    computer: Squad,
    policy: Box<dyn OpponentPolicy>,
    prng: Box<dyn PseudoRandomNumberGenerator>,
    phase: BattlePhase,
    turn: u32,
    log: EventLog,
}

// Construction and observation.
impl BattleEngine {
    /// Creates a new battle between two assembled squads.
    pub fn new(
        player: Squad,
        computer: Squad,
        policy: Box<dyn OpponentPolicy>,
        prng: Box<dyn PseudoRandomNumberGenerator>,
    ) -> Result<Self> {
        if player.side() != Side::Player || computer.side() != Side::Computer {
            return Err(general_error(format!(
                "squads are on the wrong sides: {} vs. {}",
                player.side(),
                computer.side()
            )));
        }
        Ok(Self {
            player,
            computer,
            policy,
            prng,
            phase: BattlePhase::Created,
            turn: 0,
            log: EventLog::new(),
        })
    }

    /// Starts the first round.
    pub fn start(&mut self) -> Result<()> {
        if self.phase != BattlePhase::Created {
            return Err(general_error("battle already started"));
        }
        self.begin_round();
        Ok(())
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    /// The current round, starting at 1.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// The result of the battle, if it is over.
    pub fn outcome(&self) -> Option<BattleOutcome> {
        match self.phase {
            BattlePhase::Terminal(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn ended(&self) -> bool {
        self.outcome().is_some()
    }

    pub fn player_squad(&self) -> &Squad {
        &self.player
    }

    pub fn computer_squad(&self) -> &Squad {
        &self.computer
    }

    pub fn log_mut(&mut self) -> &mut EventLog {
        &mut self.log
    }

    /// The battle's random number generator.
    pub fn prng_mut(&mut self) -> &mut dyn PseudoRandomNumberGenerator {
        self.prng.as_mut()
    }

    /// The choice the battle is waiting on, if any.
    pub fn request(&self) -> Option<Request> {
        match self.phase {
            BattlePhase::AwaitingPlayerAction => Some(Request::Action(ActionRequest {
                attacks: self.player.active().attacks().to_vec(),
                swap_options: self.player.swap_options(),
            })),
            BattlePhase::AwaitingPlayerReplacement => {
                Some(Request::Replacement(ReplacementRequest {
                    options: self.player.alive_indices().collect(),
                }))
            }
            _ => None,
        }
    }
}

// Choices.
impl BattleEngine {
    /// Makes the player's choice and resolves the battle until the player is needed again.
    ///
    /// A rejected choice leaves the battle exactly as it was, with the same request open.
    pub fn make_choice(&mut self, choice: Choice) -> Result<()> {
        match self.phase {
            BattlePhase::AwaitingPlayerAction => match choice {
                Choice::Attack(attack) => {
                    self.attack(Side::Player, attack.slot)
                        .wrap_error_with_message("cannot attack")?;
                    self.phase = BattlePhase::CheckFaintComputer;
                }
                Choice::Swap(swap) => {
                    self.swap(Side::Player, swap.member, false)
                        .wrap_error_with_message("cannot swap")?;
                    self.phase = BattlePhase::CheckFaintComputer;
                }
                Choice::Forfeit => {
                    self.end(BattleOutcome::Forfeit {
                        forfeiter: Side::Player,
                    });
                    return Ok(());
                }
            },
            BattlePhase::AwaitingPlayerReplacement => match choice {
                Choice::Swap(swap) => {
                    self.swap(Side::Player, swap.member, true)
                        .wrap_error_with_message("cannot replace fainted creature")?;
                    self.phase = BattlePhase::RoundComplete;
                }
                _ => {
                    return Err(invalid_selection_error(format!(
                        "{} fainted and must be replaced",
                        self.player.active().name
                    )));
                }
            },
            BattlePhase::Created => {
                return Err(no_active_request_error("the battle has not started"));
            }
            BattlePhase::Terminal(_) => {
                return Err(no_active_request_error("the battle is over"));
            }
            phase => {
                return Err(general_error(format!(
                    "battle cannot accept choices while in {phase:?}"
                )));
            }
        }
        self.resolve()
    }

    fn squads_mut(&mut self, side: Side) -> (&mut Squad, &mut Squad) {
        match side {
            Side::Player => (&mut self.player, &mut self.computer),
            Side::Computer => (&mut self.computer, &mut self.player),
        }
    }

    fn attack(&mut self, side: Side, slot: usize) -> Result<()> {
        let (squad, foe) = self.squads_mut(side);
        let attacker = squad.active();
        let attack = attacker.attack(slot).cloned().ok_or_else(|| {
            invalid_selection_error(format!(
                "{} does not have an attack in slot {slot}",
                attacker.name
            ))
        })?;
        let attacker = attacker.name.clone();
        let damage = foe.active_mut().take_damage(attack.damage);
        self.log.push(BattleEvent::AttackResolved {
            side,
            attacker,
            attack: attack.name,
            damage,
        });
        Ok(())
    }

    fn swap(&mut self, side: Side, member: usize, forced: bool) -> Result<()> {
        let (squad, _) = self.squads_mut(side);
        let target = squad.member(member).ok_or_else(|| {
            invalid_selection_error(format!("there is no creature in slot {member}"))
        })?;
        if !target.is_alive() {
            return Err(illegal_swap_target_error(format!(
                "{} has fainted",
                target.name
            )));
        }
        if member == squad.active_index() {
            return Err(illegal_swap_target_error(format!(
                "{} is already active",
                target.name
            )));
        }
        let creature = target.name.clone();
        if !squad.swap(member) {
            return Err(general_error(format!("failed to swap to {creature}")));
        }
        self.log.push(BattleEvent::SwapOccurred {
            side,
            creature,
            forced,
        });
        Ok(())
    }
}

// Round resolution.
impl BattleEngine {
    fn resolve(&mut self) -> Result<()> {
        loop {
            debug!("Turn {}: {:?}", self.turn, self.phase);
            match self.phase {
                BattlePhase::CheckFaintComputer => self.check_faint_computer(),
                BattlePhase::CheckVictory => self.check_victory(),
                BattlePhase::AwaitingComputerAction => self.computer_action()?,
                BattlePhase::CheckFaintPlayer => self.check_faint_player(),
                BattlePhase::RoundComplete => self.begin_round(),
                BattlePhase::Created
                | BattlePhase::AwaitingPlayerAction
                | BattlePhase::AwaitingPlayerReplacement
                | BattlePhase::Terminal(_) => return Ok(()),
            }
        }
    }

    fn begin_round(&mut self) {
        self.turn += 1;
        self.log.push(BattleEvent::RoundStarted {
            turn: self.turn,
            player: CreatureStatus::from(self.player.active()),
            computer: CreatureStatus::from(self.computer.active()),
        });
        self.phase = BattlePhase::AwaitingPlayerAction;
    }

    fn end(&mut self, outcome: BattleOutcome) {
        info!("Battle ended on turn {}: {} wins", self.turn, outcome.winner().name());
        self.phase = BattlePhase::Terminal(outcome);
        self.log.push(BattleEvent::BattleEnded(outcome));
    }

    fn check_faint_computer(&mut self) {
        if !self.computer.active().is_alive() {
            self.log.push(BattleEvent::Fainted {
                side: Side::Computer,
                creature: self.computer.active().name.clone(),
            });
            match self.computer.first_alive_index() {
                Some(index) => {
                    self.computer.swap(index);
                    self.log.push(BattleEvent::SwapOccurred {
                        side: Side::Computer,
                        creature: self.computer.active().name.clone(),
                        forced: true,
                    });
                }
                None => {
                    self.end(BattleOutcome::Victory {
                        winner: Side::Player,
                    });
                    return;
                }
            }
        }
        self.phase = BattlePhase::CheckVictory;
    }

    fn check_victory(&mut self) {
        if !self.computer.has_alive_creature() {
            self.end(BattleOutcome::Victory {
                winner: Side::Player,
            });
            return;
        }
        self.phase = BattlePhase::AwaitingComputerAction;
    }

    fn computer_action(&mut self) -> Result<()> {
        let choice = self.policy.make_choice(
            OpponentContext {
                squad: &self.computer,
                foe: &self.player,
            },
            self.prng.as_mut(),
        )?;
        debug!("Computer chose {choice}");
        let result = match choice {
            Choice::Attack(attack) => self.attack(Side::Computer, attack.slot),
            Choice::Swap(swap) => self.swap(Side::Computer, swap.member, false),
            Choice::Forfeit => {
                self.end(BattleOutcome::Forfeit {
                    forfeiter: Side::Computer,
                });
                return Ok(());
            }
        };
        result.wrap_error_with_format(format_args!("opponent made an illegal choice: {choice}"))?;
        self.phase = BattlePhase::CheckFaintPlayer;
        Ok(())
    }

    fn check_faint_player(&mut self) {
        if !self.player.active().is_alive() {
            self.log.push(BattleEvent::Fainted {
                side: Side::Player,
                creature: self.player.active().name.clone(),
            });
            if self.player.has_alive_creature() {
                self.phase = BattlePhase::AwaitingPlayerReplacement;
            } else {
                self.end(BattleOutcome::Victory {
                    winner: Side::Computer,
                });
            }
            return;
        }
        self.phase = BattlePhase::RoundComplete;
    }
}
