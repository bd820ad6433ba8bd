use std::fmt::Display;

use serde::{
    Deserialize,
    Serialize,
};

use crate::battle::Side;

/// How a battle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleOutcome {
    /// One side has no creatures left able to fight.
    Victory { winner: Side },
    /// One side gave up.
    Forfeit { forfeiter: Side },
}

impl BattleOutcome {
    /// The side that won the battle.
    pub fn winner(&self) -> Side {
        match self {
            Self::Victory { winner } => *winner,
            Self::Forfeit { forfeiter } => forfeiter.foe(),
        }
    }
}

impl Display for BattleOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Victory { winner } => write!(f, "win|side:{winner}"),
            Self::Forfeit { forfeiter } => {
                write!(f, "win|side:{}|forfeit:{forfeiter}", forfeiter.foe())
            }
        }
    }
}

/// The state of a [`BattleEngine`][`crate::battle::BattleEngine`].
///
/// Only [`BattlePhase::AwaitingPlayerAction`], [`BattlePhase::AwaitingPlayerReplacement`] and
/// [`BattlePhase::Terminal`] are observable after a successful call. The others are passed through
/// while a round resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattlePhase {
    /// The battle has not started.
    Created,
    AwaitingPlayerAction,
    CheckFaintComputer,
    CheckVictory,
    AwaitingComputerAction,
    CheckFaintPlayer,
    /// The player's active creature fainted and must be replaced.
    AwaitingPlayerReplacement,
    RoundComplete,
    Terminal(BattleOutcome),
}
