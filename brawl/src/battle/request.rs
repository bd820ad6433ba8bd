use crate::creatures::Attack;

/// A request for the player to act at the beginning of a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRequest {
    /// Attacks of the active creature, in slot order.
    pub attacks: Vec<Attack>,
    /// Squad members eligible to be swapped in.
    pub swap_options: Vec<usize>,
}

/// A request for the player to replace a fainted active creature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementRequest {
    /// Squad members eligible to be swapped in.
    pub options: Vec<usize>,
}

/// A request for a choice that the player must make before the battle can continue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Attack, swap, or forfeit.
    Action(ActionRequest),
    /// Choose a replacement after a faint.
    Replacement(ReplacementRequest),
}
