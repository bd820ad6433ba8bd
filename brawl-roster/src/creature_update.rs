use anyhow::Result;
use brawl::{
    Attack,
    Creature,
};

/// A partial edit of a roster [`Creature`].
///
/// Fields left as [`None`] keep their current value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CreatureUpdate {
    pub name: Option<String>,
    pub kind: Option<String>,
    pub max_hp: Option<u32>,
    pub stage: Option<u32>,
    /// Replaces the whole attack list.
    pub attacks: Option<Vec<Attack>>,
    pub weakness: Option<String>,
    /// `Some("")` clears the resistance.
    pub resistance: Option<String>,
}

impl CreatureUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Applies the update to a copy of the creature.
    ///
    /// The original is untouched if any field is invalid.
    pub fn apply(&self, creature: &Creature) -> Result<Creature> {
        let mut updated = creature.clone();
        if let Some(name) = &self.name {
            updated.name = name.clone();
        }
        if let Some(kind) = &self.kind {
            updated.kind = kind.clone();
        }
        if let Some(max_hp) = self.max_hp {
            updated.set_max_hp(max_hp)?;
        }
        if let Some(stage) = self.stage {
            updated.stage = stage;
        }
        if let Some(attacks) = &self.attacks {
            updated.set_attacks(attacks.clone())?;
        }
        if let Some(weakness) = &self.weakness {
            updated.weakness = weakness.clone();
        }
        if let Some(resistance) = &self.resistance {
            updated.resistance = (!resistance.is_empty()).then(|| resistance.clone());
        }
        Ok(updated)
    }
}
