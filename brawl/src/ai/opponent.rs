use anyhow::Result;
use brawl_choice::Choice;
use brawl_prng::PseudoRandomNumberGenerator;

use crate::battle::Squad;

/// The context of an opponent making a choice in a battle.
pub struct OpponentContext<'a> {
    /// The squad the opponent controls.
    pub squad: &'a Squad,
    /// The squad being fought.
    pub foe: &'a Squad,
}

/// A decision maker for the scripted side of a battle.
///
/// The returned choice is validated like the player's, except that an illegal choice ends the
/// battle with an error. A forfeit ends the battle in the player's favor.
pub trait OpponentPolicy: Send {
    /// Makes a choice given the current context of the battle.
    fn make_choice(
        &mut self,
        context: OpponentContext<'_>,
        prng: &mut dyn PseudoRandomNumberGenerator,
    ) -> Result<Choice>;
}
