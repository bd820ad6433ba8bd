pub mod ai;
pub mod battle;
pub mod config;
pub mod creatures;
pub mod draft;
pub mod error;
pub mod log;
pub mod roster;

pub use brawl_choice as choice;
pub use brawl_prng as rng;

pub use ai::{
    OpponentContext,
    OpponentPolicy,
    RandomOpponent,
};
pub use battle::{
    ActionRequest,
    BattleController,
    BattleEngine,
    BattleOutcome,
    BattlePhase,
    Display,
    InputSource,
    Prompt,
    PromptOption,
    ReplacementRequest,
    Request,
    Side,
    Squad,
};
pub use config::{
    BattleEngineOptions,
    BattleSettings,
};
pub use creatures::{
    Attack,
    Creature,
};
pub use draft::{
    DraftPhase,
    is_valid_pick,
};
pub use error::{
    ChoiceError,
    EmptyPoolUnderflowError,
    GeneralError,
    NotFoundError,
    ValidationError,
    WrapError,
    WrapOptionError,
    WrapResultError,
    general_error,
    is_recoverable,
    not_found_error,
};
pub use crate::log::{
    BattleEvent,
    CreatureStatus,
    EventLog,
};
pub use roster::RosterStore;
