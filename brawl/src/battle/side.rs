use std::fmt::Display;

use serde::{
    Deserialize,
    Serialize,
};

/// One of the two sides of a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The human-controlled side.
    Player,
    /// The scripted side.
    Computer,
}

impl Side {
    /// The opposing side.
    pub fn foe(&self) -> Self {
        match self {
            Self::Player => Self::Computer,
            Self::Computer => Self::Player,
        }
    }

    /// Display name of the side.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Player => "Player",
            Self::Computer => "Computer",
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Player => write!(f, "player"),
            Self::Computer => write!(f, "computer"),
        }
    }
}
