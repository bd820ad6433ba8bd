use std::fmt::Display;

use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    battle::{
        BattleOutcome,
        Side,
    },
    creatures::Creature,
};

/// Snapshot of an active creature, for status lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureStatus {
    pub name: String,
    pub hp: u32,
    pub max_hp: u32,
}

impl From<&Creature> for CreatureStatus {
    fn from(creature: &Creature) -> Self {
        Self {
            name: creature.name.clone(),
            hp: creature.hp(),
            max_hp: creature.max_hp(),
        }
    }
}

impl Display for CreatureStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}/{}", self.name, self.hp, self.max_hp)
    }
}

/// Something that happened during a draft or battle, in the order it happened.
///
/// Rendering is left entirely to the [`Display`][`crate::battle::Display`] collaborator. The
/// [`std::fmt::Display`] implementation produces a canonical, pipe-delimited line for logs and
/// tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleEvent {
    /// A side claimed a creature from the draft pool.
    DraftPick { side: Side, creature: String },
    /// A new round started.
    RoundStarted {
        turn: u32,
        player: CreatureStatus,
        computer: CreatureStatus,
    },
    /// An active creature attacked the opposing active creature.
    AttackResolved {
        side: Side,
        attacker: String,
        attack: String,
        damage: u32,
    },
    /// A side changed its active creature.
    ///
    /// Forced swaps replace a fainted creature.
    SwapOccurred {
        side: Side,
        creature: String,
        forced: bool,
    },
    /// An active creature ran out of HP.
    Fainted { side: Side, creature: String },
    /// The battle is over.
    BattleEnded(BattleOutcome),
}

impl Display for BattleEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DraftPick { side, creature } => {
                write!(f, "draftpick|side:{side}|creature:{creature}")
            }
            Self::RoundStarted {
                turn,
                player,
                computer,
            } => write!(f, "turn|turn:{turn}|player:{player}|computer:{computer}"),
            Self::AttackResolved {
                side,
                attacker,
                attack,
                damage,
            } => write!(
                f,
                "attack|side:{side}|creature:{attacker}|attack:{attack}|damage:{damage}"
            ),
            Self::SwapOccurred {
                side,
                creature,
                forced,
            } => {
                write!(f, "swap|side:{side}|creature:{creature}")?;
                if *forced {
                    write!(f, "|forced")?;
                }
                Ok(())
            }
            Self::Fainted { side, creature } => write!(f, "faint|side:{side}|creature:{creature}"),
            Self::BattleEnded(outcome) => write!(f, "{outcome}"),
        }
    }
}
