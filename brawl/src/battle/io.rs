use anyhow::Result;

use crate::log::BattleEvent;

/// A single selectable option of a [`Prompt`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptOption {
    /// The token that selects this option.
    pub token: String,
    /// Human-readable description.
    pub label: String,
}

/// A question for the player, with the complete set of valid answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub message: String,
    pub options: Vec<PromptOption>,
}

impl Prompt {
    pub fn new<S>(message: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            options: Vec::new(),
        }
    }

    /// Adds an option to the prompt.
    pub fn with_option<T, L>(mut self, token: T, label: L) -> Self
    where
        T: Into<String>,
        L: Into<String>,
    {
        self.options.push(PromptOption {
            token: token.into(),
            label: label.into(),
        });
        self
    }

    /// All tokens that answer the prompt.
    pub fn valid_tokens(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|option| option.token.as_str())
    }

    /// Checks if the token answers the prompt. Surrounding whitespace is ignored.
    pub fn is_valid(&self, token: &str) -> bool {
        let token = token.trim();
        self.valid_tokens().any(|valid| valid == token)
    }
}

/// Source of the player's decisions.
pub trait InputSource {
    /// Blocks until the player answers the prompt.
    ///
    /// Implementations re-prompt internally until one of the prompt's valid tokens is given.
    fn request_choice(&mut self, prompt: &Prompt) -> Result<String>;
}

/// Sink for everything that happens in a session.
pub trait Display {
    fn show(&mut self, event: &BattleEvent);
}
