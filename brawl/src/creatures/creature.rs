use anyhow::Error;
use indexmap::IndexMap;
use serde::{
    Deserialize,
    Serialize,
};

use crate::error::{
    ValidationError,
    WrapError,
};

/// A single named attack of a [`Creature`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attack {
    /// Name of the attack, unique per creature.
    pub name: String,
    /// Damage dealt to the target's HP.
    pub damage: u32,
}

impl Attack {
    pub fn new<S>(name: S, damage: u32) -> Self
    where
        S: Into<String>,
    {
        Self {
            name: name.into(),
            damage,
        }
    }
}

/// Serialized form of a [`Creature`], as stored in a roster file.
///
/// Attacks are stored as an object keyed by attack name, in attack order.
#[derive(Serialize, Deserialize)]
struct CreatureData {
    name: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(rename = "HP")]
    max_hp: u32,
    #[serde(default)]
    stage: u32,
    #[serde(default)]
    attacks: IndexMap<String, u32>,
    #[serde(default)]
    weakness: String,
    #[serde(default)]
    resistance: Option<String>,
}

/// A creature that can take part in a battle.
///
/// Carries both the operator-authored definition and the HP tracked during a battle. Current HP
/// is never serialized: a loaded creature always starts at full health.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CreatureData", into = "CreatureData")]
pub struct Creature {
    pub name: String,
    /// Classification of the creature.
    pub kind: String,
    pub stage: u32,
    pub weakness: String,
    pub resistance: Option<String>,
    max_hp: u32,
    hp: u32,
    attacks: Vec<Attack>,
}

impl Creature {
    /// Creates a new creature at full health.
    ///
    /// Fails if `max_hp` is zero or if two attacks share a name.
    pub fn new<S>(
        name: S,
        kind: S,
        max_hp: u32,
        attacks: Vec<Attack>,
        weakness: S,
        resistance: Option<S>,
    ) -> Result<Self, Error>
    where
        S: Into<String>,
    {
        let creature = Self {
            name: name.into(),
            kind: kind.into(),
            stage: 0,
            weakness: weakness.into(),
            resistance: resistance.map(|resistance| resistance.into()),
            max_hp,
            hp: max_hp,
            attacks,
        };
        creature.validate_definition().map_err(|err| err.wrap_error())?;
        Ok(creature)
    }

    fn validate_definition(&self) -> Result<(), ValidationError> {
        let mut problems = ValidationError::default();
        if self.max_hp == 0 {
            problems.add_problem(format!("{} must have positive HP", self.name));
        }
        for (i, attack) in self.attacks.iter().enumerate() {
            if self.attacks[..i]
                .iter()
                .any(|other| other.name == attack.name)
            {
                problems.add_problem(format!(
                    "{} has duplicate attack {}",
                    self.name, attack.name
                ));
            }
        }
        problems.into_result()
    }

    /// Maximum HP.
    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    /// Current HP, always in `[0, max_hp]`.
    pub fn hp(&self) -> u32 {
        self.hp
    }

    /// Attacks, in listed order.
    pub fn attacks(&self) -> &[Attack] {
        &self.attacks
    }

    /// Looks up an attack by its listed index.
    pub fn attack(&self, slot: usize) -> Option<&Attack> {
        self.attacks.get(slot)
    }

    /// Checks if the creature can still fight.
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Applies damage, never taking HP below zero.
    ///
    /// Returns the amount requested, even if the creature had less HP remaining.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.hp = self.hp.saturating_sub(amount);
        amount
    }

    /// Restores the creature to full health for a new battle.
    pub fn reset(&mut self) {
        self.hp = self.max_hp;
    }

    /// Replaces the maximum HP, restoring the creature to full health.
    pub fn set_max_hp(&mut self, max_hp: u32) -> Result<(), Error> {
        if max_hp == 0 {
            return Err(ValidationError::from_iter([format!(
                "{} must have positive HP",
                self.name
            )])
            .wrap_error());
        }
        self.max_hp = max_hp;
        self.hp = max_hp;
        Ok(())
    }

    /// Replaces the attack list.
    pub fn set_attacks(&mut self, attacks: Vec<Attack>) -> Result<(), Error> {
        let previous = std::mem::replace(&mut self.attacks, attacks);
        if let Err(err) = self.validate_definition() {
            self.attacks = previous;
            return Err(err.wrap_error());
        }
        Ok(())
    }
}

impl TryFrom<CreatureData> for Creature {
    type Error = ValidationError;

    fn try_from(data: CreatureData) -> Result<Self, Self::Error> {
        let creature = Self {
            name: data.name,
            kind: data.kind,
            stage: data.stage,
            weakness: data.weakness,
            resistance: data.resistance.filter(|resistance| !resistance.is_empty()),
            max_hp: data.max_hp,
            hp: data.max_hp,
            attacks: data
                .attacks
                .into_iter()
                .map(|(name, damage)| Attack { name, damage })
                .collect(),
        };
        creature.validate_definition()?;
        Ok(creature)
    }
}

impl From<Creature> for CreatureData {
    fn from(creature: Creature) -> Self {
        Self {
            name: creature.name,
            kind: creature.kind,
            max_hp: creature.max_hp,
            stage: creature.stage,
            attacks: creature
                .attacks
                .into_iter()
                .map(|attack| (attack.name, attack.damage))
                .collect(),
            weakness: creature.weakness,
            resistance: creature.resistance,
        }
    }
}
