#![no_std]

extern crate alloc;

use core::fmt::Display;

/// A choice to use an attack of the active creature.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AttackChoice {
    /// The attack slot to use.
    pub slot: usize,
}

impl Display for AttackChoice {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.slot)
    }
}

/// A choice to swap the active creature for another squad member.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SwapChoice {
    /// The squad member to make active.
    pub member: usize,
}

impl Display for SwapChoice {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.member)
    }
}

/// A choice, which controls how a side responds to a request in a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Use an attack.
    Attack(AttackChoice),
    /// Swap the active creature.
    Swap(SwapChoice),
    /// Forfeit the battle.
    Forfeit,
}

impl Choice {
    /// Shorthand for an attack choice.
    pub fn attack(slot: usize) -> Self {
        Self::Attack(AttackChoice { slot })
    }

    /// Shorthand for a swap choice.
    pub fn swap(member: usize) -> Self {
        Self::Swap(SwapChoice { member })
    }
}

impl Display for Choice {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Attack(choice) => write!(f, "attack {choice}"),
            Self::Swap(choice) => write!(f, "swap {choice}"),
            Self::Forfeit => write!(f, "forfeit"),
        }
    }
}
