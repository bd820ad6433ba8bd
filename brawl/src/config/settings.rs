use anyhow::Result;
use serde::{
    Deserialize,
    Serialize,
};

use crate::error::{
    ValidationError,
    WrapError,
};

fn default_pick_limit() -> usize {
    BattleSettings::DEFAULT_PICK_LIMIT
}

fn default_difficulty() -> u8 {
    BattleSettings::DEFAULT_DIFFICULTY
}

#[derive(Deserialize)]
struct SerializedBattleSettings {
    #[serde(default = "default_pick_limit")]
    pick_limit: usize,
    #[serde(default = "default_difficulty")]
    difficulty: u8,
}

/// Settings for a single battle session.
///
/// Always fully populated and validated: a value of this type is known to be in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SerializedBattleSettings")]
pub struct BattleSettings {
    pick_limit: usize,
    difficulty: u8,
}

impl BattleSettings {
    pub const MIN_PICK_LIMIT: usize = 1;
    pub const MAX_PICK_LIMIT: usize = 3;
    pub const DEFAULT_PICK_LIMIT: usize = 3;
    pub const MIN_DIFFICULTY: u8 = 1;
    pub const MAX_DIFFICULTY: u8 = 5;
    pub const DEFAULT_DIFFICULTY: u8 = 2;

    /// Creates validated settings.
    pub fn new(pick_limit: usize, difficulty: u8) -> Result<Self> {
        Self::validate(pick_limit, difficulty).map_err(|err| err.wrap_error())
    }

    fn validate(pick_limit: usize, difficulty: u8) -> Result<Self, ValidationError> {
        let mut problems = ValidationError::default();
        if !(Self::MIN_PICK_LIMIT..=Self::MAX_PICK_LIMIT).contains(&pick_limit) {
            problems.add_problem(format!(
                "pick limit must be between {} and {}, got {pick_limit}",
                Self::MIN_PICK_LIMIT,
                Self::MAX_PICK_LIMIT
            ));
        }
        if !(Self::MIN_DIFFICULTY..=Self::MAX_DIFFICULTY).contains(&difficulty) {
            problems.add_problem(format!(
                "difficulty must be between {} and {}, got {difficulty}",
                Self::MIN_DIFFICULTY,
                Self::MAX_DIFFICULTY
            ));
        }
        problems.into_result()?;
        Ok(Self {
            pick_limit,
            difficulty,
        })
    }

    /// Number of creatures each side drafts.
    pub fn pick_limit(&self) -> usize {
        self.pick_limit
    }

    pub fn difficulty(&self) -> u8 {
        self.difficulty
    }

    /// Chance of the opponent attacking rather than swapping, as `(numerator, denominator)`.
    ///
    /// Equal to `0.5 + 0.1 * difficulty`, kept in integer form so that the maximum difficulty is
    /// exactly certain.
    pub fn attack_chance(&self) -> (u64, u64) {
        (5 + self.difficulty as u64, 10)
    }
}

impl Default for BattleSettings {
    fn default() -> Self {
        Self {
            pick_limit: Self::DEFAULT_PICK_LIMIT,
            difficulty: Self::DEFAULT_DIFFICULTY,
        }
    }
}

impl TryFrom<SerializedBattleSettings> for BattleSettings {
    type Error = ValidationError;

    fn try_from(value: SerializedBattleSettings) -> Result<Self, Self::Error> {
        Self::validate(value.pick_limit, value.difficulty)
    }
}
