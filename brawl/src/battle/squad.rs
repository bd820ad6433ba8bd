use anyhow::Result;

use crate::{
    battle::Side,
    creatures::Creature,
    error::{
        ValidationError,
        WrapError,
    },
};

/// The creatures one side brings into a battle.
///
/// Members are fixed once the squad is assembled. Exactly one member is active at a time, and the
/// active member only changes through [`Squad::swap`].
#[derive(Debug, Clone)]
pub struct Squad {
    side: Side,
    members: Vec<Creature>,
    active: usize,
}

impl Squad {
    /// Assembles a squad for a new battle.
    ///
    /// Every member is restored to full health. Fails if the squad is empty or if any member has
    /// no attacks, since the battle could not legally proceed.
    pub fn new(side: Side, mut members: Vec<Creature>) -> Result<Self> {
        let mut problems = ValidationError::default();
        if members.is_empty() {
            problems.add_problem(format!("{} squad has no members", side.name()));
        }
        for member in &members {
            if member.attacks().is_empty() {
                problems.add_problem(format!("{} has no attacks", member.name));
            }
        }
        problems.into_result().map_err(|err| err.wrap_error())?;

        members.iter_mut().for_each(Creature::reset);
        Ok(Self {
            side,
            members,
            active: 0,
        })
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Display name of the squad's side.
    pub fn name(&self) -> &'static str {
        self.side.name()
    }

    pub fn members(&self) -> &[Creature] {
        &self.members
    }

    pub fn member(&self, index: usize) -> Option<&Creature> {
        self.members.get(index)
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> &Creature {
        &self.members[self.active]
    }

    pub(crate) fn active_mut(&mut self) -> &mut Creature {
        &mut self.members[self.active]
    }

    /// Checks if any member can still fight.
    pub fn has_alive_creature(&self) -> bool {
        self.members.iter().any(|member| member.is_alive())
    }

    /// Indices of all living members, in squad order.
    pub fn alive_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.members
            .iter()
            .enumerate()
            .filter(|(_, member)| member.is_alive())
            .map(|(i, _)| i)
    }

    /// The first living member, in squad order.
    pub fn first_alive_index(&self) -> Option<usize> {
        self.alive_indices().next()
    }

    /// Living members that could replace the active one.
    pub fn swap_options(&self) -> Vec<usize> {
        self.alive_indices().filter(|i| *i != self.active).collect()
    }

    /// Makes the member at `index` active.
    ///
    /// Fails, leaving the squad unchanged, if the index is out of range or the member has fainted.
    /// Swapping to the member that is already active succeeds without changing anything.
    pub fn swap(&mut self, index: usize) -> bool {
        match self.members.get(index) {
            Some(member) if member.is_alive() => {
                self.active = index;
                true
            }
            _ => false,
        }
    }
}
