use std::mem;

use crate::log::BattleEvent;

/// A log of battle events that can be read out incrementally.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<BattleEvent>,
    last_read: usize,
}

impl EventLog {
    /// Creates a new event log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Does the log contain new events since the last call to [`Self::read_out`].
    pub fn has_new_events(&self) -> bool {
        self.last_read < self.events.len()
    }

    /// Pushes a new event to the log.
    pub fn push(&mut self, event: BattleEvent) {
        log::debug!("{event}");
        self.events.push(event);
    }

    /// Returns an iterator over all events.
    pub fn events(&self) -> impl Iterator<Item = &BattleEvent> {
        self.events.iter()
    }

    /// Reads out any new events that have been added since the last call to [`Self::read_out`].
    pub fn read_out(&mut self) -> impl Iterator<Item = &BattleEvent> {
        let i = mem::replace(&mut self.last_read, self.events.len());
        self.events[i..].iter()
    }
}
