use anyhow::Result;

use crate::creatures::Creature;

/// Source of creature definitions for a battle session.
///
/// Battles only read from the roster. Editing is left to implementations.
pub trait RosterStore {
    /// Lists all creatures, in roster order.
    fn list_creatures(&self) -> Result<Vec<Creature>>;
}

impl RosterStore for Vec<Creature> {
    fn list_creatures(&self) -> Result<Vec<Creature>> {
        Ok(self.clone())
    }
}

impl RosterStore for [Creature] {
    fn list_creatures(&self) -> Result<Vec<Creature>> {
        Ok(self.to_vec())
    }
}
