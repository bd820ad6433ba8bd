use std::collections::VecDeque;

use anyhow::{
    Error,
    Result,
};
use brawl::{
    BattleEvent,
    Display,
    InputSource,
    Prompt,
};

/// An [`InputSource`] that answers prompts from a fixed script.
///
/// Tokens that do not answer the current prompt are skipped and counted as rejections, the same
/// way an interactive source would re-prompt.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    tokens: VecDeque<String>,
    prompts: Vec<Prompt>,
    rejected: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(|token| token.into()).collect(),
            prompts: Vec::new(),
            rejected: Vec::new(),
        }
    }

    /// Every prompt that was asked, in order.
    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    /// Tokens that did not answer the prompt they were given to.
    pub fn rejected(&self) -> &[String] {
        &self.rejected
    }

    /// Tokens that were never consumed.
    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }
}

impl InputSource for ScriptedInput {
    fn request_choice(&mut self, prompt: &Prompt) -> Result<String> {
        self.prompts.push(prompt.clone());
        while let Some(token) = self.tokens.pop_front() {
            if prompt.is_valid(&token) {
                return Ok(token);
            }
            self.rejected.push(token);
        }
        Err(Error::msg(format!(
            "input script ran out at prompt \"{}\"",
            prompt.message
        )))
    }
}

/// A [`Display`] that records every event it is shown.
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    events: Vec<BattleEvent>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// Canonical lines of all recorded events.
    pub fn lines(&self) -> Vec<String> {
        self.events.iter().map(|event| event.to_string()).collect()
    }
}

impl Display for RecordingDisplay {
    fn show(&mut self, event: &BattleEvent) {
        self.events.push(event.clone());
    }
}
